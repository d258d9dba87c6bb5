//! Balance encoding
//!
//! Balances are stored as unsigned LEB128 varints: seven data bits per
//! byte, high bit set on every byte except the last. A signed balance is
//! reinterpreted as `u64` before encoding, so negative values take the
//! full ten bytes and come back unchanged.
//!
//! Decoding is lenient. An absent key and bytes that are not a valid
//! varint both read as a zero balance.

use crate::types::Balance;

/// Longest valid encoding of a `u64`
pub const MAX_VARINT_LEN: usize = 10;

/// Append `value` to `buf` as a varint.
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Decode a varint from the front of `data`, returning (value, bytes_consumed).
///
/// Bytes after the terminating byte are left unread.
pub fn decode_varint(data: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in data.iter().enumerate().take(MAX_VARINT_LEN) {
        let payload = (byte & 0x7F) as u64;
        // the tenth byte may only contribute the top bit
        if i == MAX_VARINT_LEN - 1 && payload > 1 {
            return None;
        }
        value |= payload << (7 * i);
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }
    None // truncated or overflow
}

/// Encode a balance for storage.
pub fn encode_balance(balance: Balance) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    encode_varint(balance as u64, &mut buf);
    buf
}

/// Decode stored balance bytes; absent or malformed input yields zero.
pub fn decode_balance(bytes: Option<&[u8]>) -> Balance {
    match bytes.and_then(decode_varint) {
        Some((value, _)) => value as Balance,
        None => 0,
    }
}
