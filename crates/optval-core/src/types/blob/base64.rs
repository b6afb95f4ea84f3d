//! Standard-alphabet, padded base64: the JSON literal for byte sequences.

use thiserror::Error as ThisError;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PAD: u8 = b'=';

///
/// Base64Error
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Base64Error {
    #[error("invalid base64 length: {len} (must be a multiple of 4)")]
    InvalidLength { len: usize },

    #[error("invalid base64 byte 0x{byte:02X} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },

    #[error("invalid base64 padding")]
    InvalidPadding,

    #[error("non-canonical base64: unused trailing bits set in quad at offset {offset}")]
    TrailingBits { offset: usize },
}

pub(super) fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    for chunk in bytes.chunks(3) {
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        let n = (u32::from(chunk[0]) << 16) | (u32::from(b1) << 8) | u32::from(b2);

        out.push(sextet(n >> 18));
        out.push(sextet(n >> 12));
        out.push(if chunk.len() > 1 {
            sextet(n >> 6)
        } else {
            char::from(PAD)
        });
        out.push(if chunk.len() > 2 {
            sextet(n)
        } else {
            char::from(PAD)
        });
    }

    out
}

pub(super) fn decode(text: &str) -> Result<Vec<u8>, Base64Error> {
    let input = text.as_bytes();
    if input.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength { len: input.len() });
    }

    let quads = input.len() / 4;
    let mut out = Vec::with_capacity(quads * 3);

    for (index, quad) in input.chunks_exact(4).enumerate() {
        let pad = quad.iter().rev().take_while(|&&b| b == PAD).count();
        if pad > 2 || (pad > 0 && index + 1 != quads) {
            return Err(Base64Error::InvalidPadding);
        }

        let mut n = 0u32;
        for (position, &byte) in quad[..4 - pad].iter().enumerate() {
            let value = sextet_value(byte).ok_or(Base64Error::InvalidByte {
                offset: index * 4 + position,
                byte,
            })?;
            n |= u32::from(value) << (18 - 6 * position);
        }

        // bits past the last encoded byte must be zero
        let unused = match pad {
            2 => 0xffff,
            1 => 0xff,
            _ => 0,
        };
        if n & unused != 0 {
            return Err(Base64Error::TrailingBits { offset: index * 4 });
        }

        let [_, first, second, third] = n.to_be_bytes();
        out.push(first);
        if pad < 2 {
            out.push(second);
        }
        if pad < 1 {
            out.push(third);
        }
    }

    Ok(out)
}

fn sextet(n: u32) -> char {
    char::from(ALPHABET[(n & 0x3f) as usize])
}

const fn sextet_value(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

///
/// TESTS
///
