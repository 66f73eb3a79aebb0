//! Alphabets the ciphers and the byte codec are usually built over.

pub mod alphabets;

pub use alphabets::{BASE64, PRINTABLE_ASCII};
