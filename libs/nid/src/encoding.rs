//! Sortable base32 codec for the 16-byte base.
//!
//! The alphabet puts digits before letters so that string order matches
//! byte order. Bits are emitted most-significant first, 5 per character,
//! without padding: 128 bits become 26 characters, the last of which holds
//! the final 3 data bits followed by 2 zero bits.

use crate::error::NidError;

/// The base32 alphabet, in ascending order.
pub const ALPHABET: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Length of an encoded base in characters.
pub const ENCODED_LEN: usize = 26;

const INVALID: u8 = 0xff;

const DECODE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encodes 16 bytes into 26 alphabet characters.
pub(crate) fn encode(bytes: &[u8; 16]) -> [u8; ENCODED_LEN] {
    let value = u128::from_be_bytes(*bytes);
    let mut out = [0u8; ENCODED_LEN];

    for (i, slot) in out.iter_mut().enumerate().take(ENCODED_LEN - 1) {
        let shift = 123 - 5 * i;
        *slot = ALPHABET[((value >> shift) & 0x1f) as usize];
    }
    out[ENCODED_LEN - 1] = ALPHABET[((value & 0x07) << 2) as usize];

    out
}

/// Decodes exactly 26 alphabet characters into 16 bytes.
///
/// The two pad bits of the last character are ignored.
pub(crate) fn decode(src: &[u8]) -> Result<[u8; 16], NidError> {
    if src.len() != ENCODED_LEN {
        return Err(NidError::InvalidLength(src.len()));
    }

    let mut value: u128 = 0;
    for (offset, &byte) in src.iter().enumerate() {
        let digit = DECODE[byte as usize];
        if digit == INVALID {
            return Err(NidError::InvalidCharacter { byte, offset });
        }

        if offset == ENCODED_LEN - 1 {
            value = (value << 3) | u128::from(digit >> 2);
        } else {
            value = (value << 5) | u128::from(digit);
        }
    }

    Ok(value.to_be_bytes())
}
