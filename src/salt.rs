//! Salt normalization.
//!
//! A CREATE2 salt is a 256-bit value; its canonical wire form is 32 bytes,
//! big-endian, left-zero-padded. Accepted encodings: a native unsigned
//! integer, a "0x"-prefixed hex string, or an unprefixed decimal string —
//! the prefix alone decides the base, matching big-number parsing
//! conventions.

use primitive_types::U256;

use crate::error::InputError;

/// A salt in one of its accepted external encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Salt {
    /// A native non-negative integer.
    Integer(U256),
    /// Hex ("0x"-prefixed) or decimal (unprefixed) digits.
    Text(String),
}

impl Salt {
    /// Canonical 32-byte big-endian encoding.
    ///
    /// Values that do not fit in 256 bits are rejected, never wrapped.
    pub fn to_bytes32(&self) -> Result<[u8; 32], InputError> {
        let mut out = [0u8; 32];
        match self {
            Salt::Integer(value) => value.to_big_endian(&mut out),
            Salt::Text(s) => {
                if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                    hex_to_bytes32(s, digits, &mut out)?;
                } else {
                    dec_to_bytes32(s)?.to_big_endian(&mut out);
                }
            }
        }
        Ok(out)
    }
}

fn hex_to_bytes32(original: &str, digits: &str, out: &mut [u8; 32]) -> Result<(), InputError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InputError::InvalidSaltEncoding(original.to_string()));
    }
    if digits.trim_start_matches('0').len() > 64 {
        return Err(InputError::SaltOutOfRange(original.to_string()));
    }
    let tail = if digits.len() > 64 {
        &digits[digits.len() - 64..]
    } else {
        digits
    };
    let padded = format!("{:0>64}", tail.to_ascii_lowercase());
    hex::decode_to_slice(&padded, out).expect("validated hex");
    Ok(())
}

fn dec_to_bytes32(s: &str) -> Result<U256, InputError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidSaltEncoding(s.to_string()));
    }
    // Only overflow remains once the digits are known good.
    U256::from_dec_str(s).map_err(|_| InputError::SaltOutOfRange(s.to_string()))
}

impl From<U256> for Salt {
    fn from(value: U256) -> Self {
        Salt::Integer(value)
    }
}

impl From<u32> for Salt {
    fn from(value: u32) -> Self {
        Salt::Integer(U256::from(value))
    }
}

impl From<u64> for Salt {
    fn from(value: u64) -> Self {
        Salt::Integer(U256::from(value))
    }
}

impl From<u128> for Salt {
    fn from(value: u128) -> Self {
        Salt::Integer(U256::from(value))
    }
}

impl From<&str> for Salt {
    fn from(value: &str) -> Self {
        Salt::Text(value.to_string())
    }
}

impl From<String> for Salt {
    fn from(value: String) -> Self {
        Salt::Text(value)
    }
}

/// Returns the salt as exactly 64 lowercase hex digits, no prefix.
pub fn pad_salt(salt: impl Into<Salt>) -> Result<String, InputError> {
    Ok(hex::encode(salt.into().to_bytes32()?))
}
