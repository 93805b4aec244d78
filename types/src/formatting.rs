//! Number formatting for drop text.
//!
//! All amount text shown on screen goes through this module so the overlay
//! and any settings preview agree, including European-style separators.

/// Digit group separator for the chosen number format.
#[inline]
pub fn group_separator(european: bool) -> char {
    if european { '.' } else { ',' }
}

/// Group digits in threes with `separator`.
///
/// # Examples
/// ```
/// use xpdrops_types::formatting::group_digits;
/// assert_eq!(group_digits(0, ','), "0");
/// assert_eq!(group_digits(1_500, ','), "1,500");
/// assert_eq!(group_digits(13_034_431, '.'), "13.034.431");
/// ```
pub fn group_digits(n: i64, separator: char) -> String {
    let digits = n.unsigned_abs().to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.char_indices() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Text drawn for a drop: prefix followed by the grouped amount.
///
/// # Examples
/// ```
/// use xpdrops_types::formatting::format_drop_amount;
/// assert_eq!(format_drop_amount(1_234, "+", false), "+1,234");
/// assert_eq!(format_drop_amount(1_234, "", true), "1.234");
/// ```
pub fn format_drop_amount(amount: i64, prefix: &str, european: bool) -> String {
    let mut text = String::from(prefix);
    text.push_str(&group_digits(amount, group_separator(european)));
    text
}
