//! Skill icon loading and caching
//!
//! Host sprites arrive as straight-alpha RGBA. They are converted once into
//! premultiplied [`Pixmap`]s and kept for the lifetime of the overlay.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tiny_skia::{ColorU8, Pixmap};
use xpdrops_core::host::{IconBitmap, SpriteLookup};
use xpdrops_core::skills::SpriteId;

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("PNG decode error in {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: png::DecodingError,
    },
    #[error("unsupported PNG color type {color_type:?} in {path:?}")]
    UnsupportedColor {
        path: PathBuf,
        color_type: png::ColorType,
    },
    #[error("bitmap is {width}x{height} but holds {len} bytes")]
    InvalidBitmap { width: u32, height: u32, len: usize },
}

/// Convert a host bitmap into a premultiplied pixmap
pub fn bitmap_to_pixmap(bitmap: &IconBitmap) -> Result<Pixmap, IconError> {
    let invalid = || IconError::InvalidBitmap {
        width: bitmap.width,
        height: bitmap.height,
        len: bitmap.rgba.len(),
    };
    if !bitmap.is_valid() {
        return Err(invalid());
    }

    let mut pixmap = Pixmap::new(bitmap.width, bitmap.height).ok_or_else(invalid)?;
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(bitmap.rgba.chunks_exact(4))
    {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Ok(pixmap)
}

/// Decode a PNG file into an RGBA bitmap
pub fn load_png(path: &Path) -> Result<IconBitmap, IconError> {
    let file = File::open(path).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let decode_err = |e| IconError::Decode {
        path: path.to_path_buf(),
        source: e,
    };

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_err)?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        color_type => {
            return Err(IconError::UnsupportedColor {
                path: path.to_path_buf(),
                color_type,
            });
        }
    };

    Ok(IconBitmap {
        width: info.width,
        height: info.height,
        rgba,
    })
}

/// Sprite source backed by a directory of `<sprite_id>.png` files
#[derive(Debug, Clone)]
pub struct PngSpriteSource {
    dir: PathBuf,
}

impl PngSpriteSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, sprite_id: SpriteId) -> PathBuf {
        self.dir.join(format!("{sprite_id}.png"))
    }
}

impl SpriteLookup for PngSpriteSource {
    fn sprite(&self, sprite_id: SpriteId) -> Option<IconBitmap> {
        let path = self.path_for(sprite_id);
        match load_png(&path) {
            Ok(bitmap) => Some(bitmap),
            Err(e) => {
                tracing::debug!(sprite_id, error = %e, "Sprite unavailable");
                None
            }
        }
    }
}

/// Converted icons keyed by sprite id. `None` entries are sprites whose
/// bitmap could not be converted; they are not retried.
#[derive(Debug, Default)]
pub struct IconCache {
    icons: HashMap<SpriteId, Option<Pixmap>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached icon for `sprite_id`, loading it from `source` on first use.
    /// Returns `None` when the host cannot supply the sprite yet, in which
    /// case the next call asks again.
    pub fn get<S: SpriteLookup + ?Sized>(
        &mut self,
        sprite_id: SpriteId,
        source: &S,
    ) -> Option<&Pixmap> {
        if !self.icons.contains_key(&sprite_id) {
            let bitmap = source.sprite(sprite_id)?;
            let icon = match bitmap_to_pixmap(&bitmap) {
                Ok(pixmap) => Some(pixmap),
                Err(e) => {
                    tracing::debug!(sprite_id, error = %e, "Icon conversion failed, drawing text only");
                    None
                }
            };
            self.icons.insert(sprite_id, icon);
        }
        self.icons.get(&sprite_id).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn clear(&mut self) {
        self.icons.clear();
    }
}
