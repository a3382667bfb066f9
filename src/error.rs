//! Input validation errors.
//!
//! Every variant is a contract violation on the immediate input; there is no
//! fallback value for a malformed cryptographic input, so failures surface
//! synchronously and the offending string is carried in the message.

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Invalid address encoding: {0}")]
    InvalidAddressEncoding(String),

    #[error("Address exceeds 20 bytes: {0}")]
    AddressOutOfRange(String),

    #[error("Invalid salt encoding: {0}")]
    InvalidSaltEncoding(String),

    #[error("Salt exceeds 256 bits: {0}")]
    SaltOutOfRange(String),

    #[error("Invalid bytecode encoding: {0}")]
    InvalidBytecodeEncoding(String),
}
