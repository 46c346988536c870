//! UTF-16 input decoding
//!
//! LibraryThing exports its tab-delimited table as UTF-16 with a BOM.
//! Little-endian is assumed when the BOM is missing.

use crate::ImportError;

/// Decode raw export bytes into a string.
pub fn decode_utf16(bytes: &[u8]) -> Result<String, ImportError> {
    let (payload, big_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, true),
        [0xFF, 0xFE, rest @ ..] => (rest, false),
        _ => (bytes, false),
    };

    if payload.len() % 2 != 0 {
        return Err(ImportError::InvalidEncoding {
            reason: "odd number of bytes".to_string(),
        });
    }

    let units = payload.chunks_exact(2).map(|pair| {
        if big_endian {
            u16::from_be_bytes([pair[0], pair[1]])
        } else {
            u16::from_le_bytes([pair[0], pair[1]])
        }
    });

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|err| ImportError::InvalidEncoding {
            reason: err.to_string(),
        })
}
