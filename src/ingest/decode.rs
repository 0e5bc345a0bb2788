//! Text decoding for register downloads and local files
//!
//! ESMA publishes the register as UTF-8, usually with a byte order mark, but
//! older exports were Latin-1. Downloads fall back to Latin-1 when the bytes
//! are not valid UTF-8. Local files must be UTF-8.

use std::str::Utf8Error;
use tracing::warn;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Drop a leading UTF-8 byte order mark, if present
pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Decode UTF-8 with an optional byte order mark
pub fn decode_utf8(bytes: &[u8]) -> Result<String, Utf8Error> {
    std::str::from_utf8(strip_bom(bytes)).map(str::to_string)
}

/// Decode Latin-1, where every byte is the code point of the same value
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Decode a downloaded register, trying UTF-8 first and Latin-1 second
pub fn decode_download(bytes: &[u8]) -> String {
    match decode_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("Register is not valid UTF-8 ({}), decoding as Latin-1", e);
            decode_latin1(bytes)
        }
    }
}
