//! Runtime configuration for the CREATE2 derivation CLI.

use clap::Parser;

/// CREATE2 Contract Address Derivation
///
/// Computes the deterministic deployment address for a contract created via
/// the CREATE2 opcode, without touching the network.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Deployer (factory) address, hex with or without 0x prefix
    #[arg(short, long)]
    pub deployer: String,

    /// Salt: 0x-prefixed hex, or unprefixed decimal digits
    #[arg(short, long)]
    pub salt: String,

    /// Contract init bytecode, hex with or without 0x prefix
    #[arg(short, long)]
    pub bytecode: String,
}
