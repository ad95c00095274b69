//! Digit-only filtering.

/// Strip every character that is not a decimal digit.
///
/// Keeps `0`-`9` in original order and drops everything else: letters,
/// punctuation, whitespace, currency symbols. Known limitation, kept on
/// purpose for compatibility with the datasets this tool targets: minus
/// signs and decimal separators are dropped too, so `"-12.5"` becomes
/// `"125"`. A value with no digits becomes the empty string; downstream
/// numeric parsing has to treat `""` as missing rather than zero.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
