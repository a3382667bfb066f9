//! Cryptographic operations for CREATE2 address derivation.
//!
//! This module provides:
//! - Keccak-256 hashing
//! - The 20-byte address type with EIP-55 checksum output
//! - The CREATE2 address formula

mod address;
pub mod create2;

pub use address::Address;

use tiny_keccak::{Hasher, Keccak};

/// Keccak-256 of arbitrary bytes (output 32 bytes).
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}
