//! Native-script to Latin transliteration and the key normalization shared
//! by the index builder and the matcher.

/// Converts native-script text to a Latin rendering.
///
/// Implementations must be deterministic and total over municipality-name
/// input; the rendering is a matching key, not display text.
pub trait Romanizer {
    fn romanize(&self, text: &str) -> String;
}

/// Production romanizer backed by the kakasi transliterator
/// (hiragana, katakana and kanji to romaji).
pub struct Kakasi;

impl Romanizer for Kakasi {
    fn romanize(&self, text: &str) -> String {
        kakasi::convert(text).romaji
    }
}

/// Upper-case and strip whitespace. Applied to every romanized registry
/// token and to region hints from the reference string.
pub fn registry_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Like [`registry_key`] but also drops hyphens, which English reference
/// names use freely (`Chuo-ku`, `Gamagori`).
pub fn place_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}
