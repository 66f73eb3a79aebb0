//! # Cipher Module
//!
//! Affine and block ciphers over an [`Alphabet`]. A character is replaced by
//! its index, the indices are transformed with `E(x) = a·x + b` over
//! `Z_|alphabet|`, and mapped back to characters.

pub mod affine;
pub mod block;
pub mod keys;
pub mod matrix;
pub mod vigenere;

use crate::alphabet::Alphabet;
use crate::errors::RingCipherError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub use affine::AffineCipher;
pub use keys::{AffineKey, BlockKey};
pub use matrix::MatrixCipher;
pub use vigenere::VigenereCipher;

/// A keyed substitution over an alphabet.
///
/// `decrypt(encrypt(msg)) == msg` for every message over the alphabet, except
/// that block ciphers strip trailing padding characters: a message ending in
/// the alphabet's pad character comes back without them.
pub trait Cipher {
    fn alphabet(&self) -> &Alphabet;

    /// # Errors
    ///
    /// Returns `RingCipherError::UnknownCharacter` for characters outside the
    /// alphabet.
    fn encrypt(&self, message: &str) -> Result<String, RingCipherError>;

    fn decrypt(&self, ciphertext: &str) -> Result<String, RingCipherError>;
}

/// Parameters for generating cipher keys.
///
/// Every field has a default, so a JSON config only needs the fields it
/// changes:
///
/// ```
/// # use ring_cipher::cipher::CipherConfig;
/// let config = CipherConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(config.min_block_size, 10);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Smallest block a block cipher may pick.
    pub min_block_size: usize,
    /// Block sizes are drawn from `[min_block_size, min_block_size + block_size_range)`.
    pub block_size_range: usize,
    /// Fixed seed for reproducible keys; the OS is asked for one otherwise.
    pub seed: Option<u64>,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            min_block_size: 10,
            block_size_range: 90,
            seed: None,
        }
    }
}

impl CipherConfig {
    pub fn try_with(
        min_block_size: usize,
        block_size_range: usize,
        seed: Option<u64>,
    ) -> Result<Self, RingCipherError> {
        let config = Self {
            min_block_size,
            block_size_range,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, RingCipherError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), RingCipherError> {
        if self.min_block_size == 0 {
            return Err(RingCipherError::InvalidParameters(
                "min_block_size must be at least 1".into(),
            ));
        }
        if self.block_size_range == 0 {
            return Err(RingCipherError::InvalidParameters(
                "block_size_range must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    pub(crate) fn draw_block_size<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.min_block_size + rng.random_range(0..self.block_size_range)
    }
}
