#![allow(non_snake_case)]

pub mod alphabet;
pub mod cipher;
pub mod codec;
pub mod errors;
pub mod matrix;
pub mod preset;
pub mod ring;

pub use errors::RingCipherError;
