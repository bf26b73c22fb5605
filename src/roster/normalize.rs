//! Name cleanup applied to applicant ids, program names and days.

use unicode_normalization::UnicodeNormalization;

/// Characters spreadsheets like to leave behind that should not count as
/// part of a name.
const INVISIBLE: &[char] = &['\u{feff}', '\u{200b}', '\u{200c}', '\u{200d}', '\u{2060}'];

/// Normalizes a name cell.
///
/// Drops byte-order marks and zero-width characters, composes the rest to
/// NFC so precomposed and combining spellings compare equal, then trims and
/// collapses every run of Unicode whitespace (including no-break spaces) to
/// a single ASCII space. Case is preserved.
///
/// ```
/// use u_allot::roster::normalize_name;
///
/// assert_eq!(normalize_name("\u{feff}  Mary\u{a0}\u{a0}Ann \t"), "Mary Ann");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let visible: String = raw.chars().filter(|c| !INVISIBLE.contains(c)).nfc().collect();
    visible.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical form of a header cell for column matching: alphanumerics
/// only, lowercased, after NFC composition.
pub(crate) fn header_key(raw: &str) -> String {
    raw.nfc()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
