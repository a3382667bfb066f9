//! # create2_utils
//!
//! Deterministic CREATE2 contract address derivation.
//!
//! Computes the address a contract will be deployed at via the CREATE2 opcode:
//! `keccak256(0xff || deployer || salt || keccak256(init_code))[12..32]`,
//! rendered with EIP-55 checksum casing.
//!
//! ## Architecture
//!
//! - `crypto`: Keccak-256, the address type with EIP-55 checksum, the CREATE2 formula
//! - `salt`: salt normalization to a 32-byte big-endian value
//! - `bytecode`: init bytecode decoding
//! - `error`: input validation errors
//! - `config`: CLI configuration

pub mod bytecode;
pub mod config;
pub mod crypto;
pub mod error;
pub mod salt;

pub use bytecode::decode_bytecode;
pub use config::Config;
pub use crypto::create2::{create2_address, derive_address};
pub use crypto::{keccak256, Address};
pub use error::InputError;
pub use salt::{pad_salt, Salt};

pub use primitive_types::U256;
