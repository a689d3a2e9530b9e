//! Mojibake repair
//!
//! Legacy text was UTF-8 whose bytes were decoded as Windows-1252 and stored
//! again as UTF-8. Repair maps every character back to its Windows-1252 byte
//! and decodes the byte string as UTF-8.

use crate::error::{MigrationError, MigrationResult};
use std::borrow::Cow;
use tracing::warn;

/// Windows-1252 symbols occupying 0x80..=0x9F; the five undefined bytes
/// (0x81, 0x8D, 0x8F, 0x90, 0x9D) map through their C1 control code points
const CP1252_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];

/// Byte a character was decoded from, if it has one
fn cp1252_byte(c: char) -> Option<u8> {
    match u8::try_from(u32::from(c)) {
        Ok(byte) => Some(byte),
        Err(_) => CP1252_HIGH
            .iter()
            .find(|(symbol, _)| *symbol == c)
            .map(|(_, byte)| *byte),
    }
}

/// Undo Windows-1252 mojibake
///
/// ASCII text is returned borrowed. A character with no Windows-1252 byte
/// fails the repair; recovered bytes that are not UTF-8 are decoded lossily
/// with a warning.
pub fn repair_mojibake(text: &str) -> MigrationResult<Cow<'_, str>> {
    if text.is_ascii() {
        return Ok(Cow::Borrowed(text));
    }

    let mut bytes = Vec::with_capacity(text.len());
    for (position, character) in text.chars().enumerate() {
        let byte = cp1252_byte(character).ok_or_else(|| MigrationError::EncodingRepair {
            character,
            position,
            text: text.to_string(),
        })?;
        bytes.push(byte);
    }

    match String::from_utf8(bytes) {
        Ok(repaired) => Ok(Cow::Owned(repaired)),
        Err(e) => {
            warn!(text, "Recovered bytes are not valid UTF-8, decoding lossily");
            Ok(Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()))
        }
    }
}
