//! Ethereum address representation and utilities.

use std::fmt;

use crate::error::InputError;

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parses an address from a hex string, with or without `0x` prefix.
    ///
    /// Fewer than 40 digits are left-padded with zero nibbles, so the value
    /// lands in the low-order bytes. Extra leading zeros beyond 40 digits are
    /// accepted; a value wider than 20 bytes is rejected, never truncated.
    pub fn from_hex(s: &str) -> Result<Self, InputError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InputError::InvalidAddressEncoding(s.to_string()));
        }
        if digits.trim_start_matches('0').len() > 40 {
            return Err(InputError::AddressOutOfRange(s.to_string()));
        }
        let tail = if digits.len() > 40 {
            &digits[digits.len() - 40..]
        } else {
            digits
        };
        let padded = format!("{:0>40}", tail.to_ascii_lowercase());
        let raw = hex::decode(&padded).expect("validated hex");
        let bytes: [u8; 20] = raw.try_into().expect("20 bytes");
        Ok(Self(bytes))
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// Returns the address with checksum encoding (EIP-55).
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();
        let hash = crate::crypto::keccak256(hex_addr.as_bytes());

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };

            if c.is_ascii_digit() {
                checksum.push(c);
            } else if hash_nibble >= 8 {
                checksum.push(c.to_ascii_uppercase());
            } else {
                checksum.push(c);
            }
        }

        checksum
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_address() {
        // Test vector from EIP-55
        let bytes = hex::decode("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
            .unwrap()
            .try_into()
            .unwrap();
        let addr = Address::from_bytes(bytes);
        assert_eq!(addr.to_checksum(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn test_hex_output() {
        let bytes = [0u8; 20];
        let addr = Address::from_bytes(bytes);
        assert_eq!(addr.to_hex(), "0000000000000000000000000000000000000000");
        assert_eq!(
            addr.to_hex_prefixed(),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_from_hex_full_width() {
        let addr = Address::from_hex("0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9").unwrap();
        assert_eq!(addr.to_hex(), "dc64a140aa3e981100a9beca4e685f962f0cf6c9");
    }

    #[test]
    fn test_from_hex_prefix_and_case_insensitive() {
        let plain = Address::from_hex("dc64a140aa3e981100a9beca4e685f962f0cf6c9").unwrap();
        let prefixed = Address::from_hex("0xDC64A140AA3E981100A9BECA4E685F962F0CF6C9").unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn test_from_hex_short_input_left_padded() {
        let short = Address::from_hex("0xdeadbeef").unwrap();
        let full = Address::from_hex("0x00000000000000000000000000000000deadbeef").unwrap();
        assert_eq!(short, full);
        assert_eq!(short.as_bytes()[..16], [0u8; 16]);
        assert_eq!(&short.as_bytes()[16..], &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_from_hex_odd_digit_count() {
        // 7 digits still pad cleanly to 40
        let addr = Address::from_hex("0xeadbeef").unwrap();
        assert_eq!(addr.to_hex(), "000000000000000000000000000000000eadbeef");
    }

    #[test]
    fn test_from_hex_extra_leading_zeros_accepted() {
        let long = Address::from_hex("0x0000dc64a140aa3e981100a9beca4e685f962f0cf6c9").unwrap();
        let full = Address::from_hex("0xdc64a140aa3e981100a9beca4e685f962f0cf6c9").unwrap();
        assert_eq!(long, full);
    }

    #[test]
    fn test_from_hex_oversized_rejected() {
        let err = Address::from_hex("0xff00000000000000000000000000000000000000ff").unwrap_err();
        assert!(matches!(err, InputError::AddressOutOfRange(_)));
    }

    #[test]
    fn test_from_hex_rejects_non_hex_and_empty() {
        assert!(matches!(
            Address::from_hex("0xnotanaddress").unwrap_err(),
            InputError::InvalidAddressEncoding(_)
        ));
        assert!(matches!(
            Address::from_hex("").unwrap_err(),
            InputError::InvalidAddressEncoding(_)
        ));
        assert!(matches!(
            Address::from_hex("0x").unwrap_err(),
            InputError::InvalidAddressEncoding(_)
        ));
    }
}
