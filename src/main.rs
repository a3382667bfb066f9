//! CREATE2 address derivation CLI
//!
//! Usage:
//!   create2_utils -d 0xDc64a140Aa3E981100a9becA4E685f962f0cF6C9 -s 0xabcdef -b 0x60806040

use std::process;

use clap::Parser;

use create2_utils::{derive_address, pad_salt, Config};

fn main() {
    let config = Config::parse();

    let padded_salt = match pad_salt(config.salt.as_str()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Input error: {}", e);
            process::exit(1);
        }
    };

    let address = match derive_address(&config.deployer, config.salt.as_str(), &config.bytecode) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Input error: {}", e);
            process::exit(1);
        }
    };

    println!("CREATE2 Address Derivation");
    println!("==========================");
    println!("Deployer: {}", config.deployer);
    println!("Salt:     0x{}", padded_salt);
    println!("Address:  {}", address);
}
