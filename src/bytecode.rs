//! Init bytecode decoding.

use crate::error::InputError;

/// Decodes contract init bytecode from a hex string, with or without `0x`
/// prefix. No padding is applied: the digit count must be even so the string
/// maps to a whole number of bytes.
pub fn decode_bytecode(s: &str) -> Result<Vec<u8>, InputError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits).map_err(|e| InputError::InvalidBytecodeEncoding(format!("{s}: {e}")))
}
