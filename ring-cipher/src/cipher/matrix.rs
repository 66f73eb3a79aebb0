use crate::alphabet::Alphabet;
use crate::cipher::block::BlockCipher;
use crate::cipher::keys::BlockKey;
use crate::cipher::{Cipher, CipherConfig};
use crate::errors::RingCipherError;
use crate::matrix::sample_nonsingular;
use crate::ring::Zm;

use log::debug;
use rand::Rng;

use std::sync::Arc;

/// Block cipher keyed by a random invertible matrix from
/// [`sample_nonsingular`], so every output character depends on the whole
/// block.
#[derive(Debug, Clone)]
pub struct MatrixCipher {
    inner: BlockCipher,
}

impl MatrixCipher {
    pub fn new(alphabet: Alphabet, config: &CipherConfig) -> Result<Self, RingCipherError> {
        Self::with_rng(alphabet, config, &mut config.rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        alphabet: Alphabet,
        config: &CipherConfig,
        rng: &mut R,
    ) -> Result<Self, RingCipherError> {
        let ring = Arc::new(Zm::try_with(alphabet.len() as u64)?);
        let n = config.draw_block_size(rng);
        debug!("matrix key: block size {} over {} characters", n, alphabet.len());

        let a = sample_nonsingular(n, &ring, rng)?;
        let b = BlockCipher::random_shift(n, &ring, rng)?;
        Ok(Self {
            inner: BlockCipher::new(alphabet, a, b)?,
        })
    }

    /// Rebuilds a cipher from an exported key, inverting its matrix again.
    pub fn from_key(alphabet: Alphabet, key: &BlockKey) -> Result<Self, RingCipherError> {
        Ok(Self {
            inner: BlockCipher::from_key(alphabet, key)?,
        })
    }

    pub fn key(&self) -> BlockKey {
        self.inner.key()
    }

    pub fn block_size(&self) -> usize {
        self.inner.block_size()
    }
}

impl Cipher for MatrixCipher {
    fn alphabet(&self) -> &Alphabet {
        self.inner.alphabet()
    }

    fn encrypt(&self, message: &str) -> Result<String, RingCipherError> {
        self.inner.encrypt(message)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, RingCipherError> {
        self.inner.decrypt(ciphertext)
    }
}
