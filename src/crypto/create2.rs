//! CREATE2 address computation.
//!
//! Matches the EVM CREATE2 rule:
//!   address = keccak256(0xff || deployer || salt || keccak256(init_code))[12..32]

use crate::bytecode::decode_bytecode;
use crate::crypto::{keccak256, Address};
use crate::error::InputError;
use crate::salt::Salt;

/// Computes the CREATE2 address from already-normalized inputs.
/// Preimage: 0xff (1) || deployer (20) || salt (32) || code_hash (32) = 85 bytes.
pub fn create2_address(
    deployer: &[u8; 20],
    salt: &[u8; 32],
    code_hash: &[u8; 32],
) -> Address {
    let mut preimage = [0u8; 85];
    preimage[0] = 0xff;
    preimage[1..21].copy_from_slice(deployer);
    preimage[21..53].copy_from_slice(salt);
    preimage[53..85].copy_from_slice(code_hash);

    let digest = keccak256(&preimage);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&digest[12..32]);
    Address::from_bytes(addr)
}

/// Derives the CREATE2 deployment address from external representations.
///
/// `deployer` is a hex string (optional `0x` prefix, short input left-padded),
/// `salt` any accepted [`Salt`] encoding, `bytecode` the init code as hex. The
/// bytecode itself never enters the preimage, only its Keccak-256 hash does.
/// Returns the EIP-55 checksummed, `0x`-prefixed address.
pub fn derive_address(
    deployer: &str,
    salt: impl Into<Salt>,
    bytecode: &str,
) -> Result<String, InputError> {
    let deployer = Address::from_hex(deployer)?;
    let salt = salt.into().to_bytes32()?;
    let code_hash = keccak256(&decode_bytecode(bytecode)?);
    Ok(create2_address(deployer.as_bytes(), &salt, &code_hash).to_checksum())
}
