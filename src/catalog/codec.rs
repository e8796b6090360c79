//! Code point codec
//!
//! Converts hex code point tokens (as written in the registry files) into the
//! decoded string, its `\xHH` UTF-8 rendering and its byte count, and back.
//!
//! # Example
//!
//! ```
//! use emoji_catalog::catalog::codec::{encode, unescape_utf8};
//!
//! let encoded = encode(&["1F600"]).unwrap();
//! assert_eq!(encoded.character, "😀");
//! assert_eq!(encoded.utf8_escaped, "\\xF0\\x9F\\x98\\x80");
//! assert_eq!(encoded.byte_size, 4);
//!
//! let bytes = unescape_utf8(&encoded.utf8_escaped).unwrap();
//! assert_eq!(bytes, "😀".as_bytes());
//! ```

use super::error::EncodingError;

/// Longest accepted hex token (U+10FFFF)
pub const MAX_HEX_DIGITS: usize = 6;

/// Width of one `\xHH` escape
const ESCAPE_WIDTH: usize = 4;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Result of encoding a code point sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The decoded string (may be a multi-scalar grapheme cluster)
    pub character: String,
    /// One `\xHH` per UTF-8 byte, uppercase, no separators
    pub utf8_escaped: String,
    /// Number of UTF-8 bytes
    pub byte_size: usize,
}

/// Parse one hex token into a Unicode scalar value
///
/// Accepts 1-6 ASCII hex digits in either case. Surrogates and values above
/// `0x10FFFF` are rejected.
pub fn parse_code_point(token: &str) -> Result<char, EncodingError> {
    let invalid = || EncodingError::InvalidCodePoint {
        token: token.to_string(),
    };

    // from_str_radix alone would accept a leading '+'
    if token.is_empty()
        || token.len() > MAX_HEX_DIGITS
        || !token.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(invalid());
    }

    let value = u32::from_str_radix(token, 16).map_err(|_| invalid())?;
    char::from_u32(value).ok_or_else(invalid)
}

/// Encode a sequence of hex code point tokens
pub fn encode<S: AsRef<str>>(code_points: &[S]) -> Result<Encoded, EncodingError> {
    if code_points.is_empty() {
        return Err(EncodingError::EmptySequence);
    }

    let character = code_points
        .iter()
        .map(|cp| parse_code_point(cp.as_ref()))
        .collect::<Result<String, _>>()?;

    let utf8_escaped = escape_utf8(&character);
    let byte_size = character.len();

    Ok(Encoded {
        character,
        utf8_escaped,
        byte_size,
    })
}

/// Render every UTF-8 byte of `text` as `\xHH`
pub fn escape_utf8(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * ESCAPE_WIDTH);
    for byte in text.bytes() {
        out.push('\\');
        out.push('x');
        out.push(hex_digit(byte >> 4));
        out.push(hex_digit(byte));
    }
    out
}

/// Decode a `\xHH` rendering back into bytes
///
/// Accepts hex digits in either case. Anything other than a run of complete
/// four-character escapes is an error.
pub fn unescape_utf8(escaped: &str) -> Result<Vec<u8>, EncodingError> {
    let input = escaped.as_bytes();
    let mut bytes = Vec::with_capacity(input.len() / ESCAPE_WIDTH);

    for (i, chunk) in input.chunks(ESCAPE_WIDTH).enumerate() {
        let offset = i * ESCAPE_WIDTH;
        match chunk {
            [b'\\', b'x', hi, lo] => match (hex_value(*hi), hex_value(*lo)) {
                (Some(hi), Some(lo)) => bytes.push((hi << 4) | lo),
                _ => return Err(EncodingError::MalformedEscape { offset }),
            },
            _ => return Err(EncodingError::MalformedEscape { offset }),
        }
    }

    Ok(bytes)
}

/// Scalar values of `text` as code point tokens
///
/// Tokens come back in the form the registry files write them: uppercase
/// hex, zero-padded to at least four digits (four to six in total). A record
/// built from tokens in that form gets them back from its `character`; a
/// shorter token such as `A9` comes back as `00A9`.
pub fn code_points_of(text: &str) -> Vec<String> {
    text.chars().map(|c| format!("{:04X}", c as u32)).collect()
}

/// Uppercase hex digit for the low nibble of `nibble`
#[inline]
fn hex_digit(nibble: u8) -> char {
    HEX_UPPER[(nibble & 0x0F) as usize] as char
}

#[inline]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
