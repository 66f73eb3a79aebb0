use crate::alphabet::Alphabet;
use crate::cipher::block::BlockCipher;
use crate::cipher::keys::BlockKey;
use crate::cipher::{Cipher, CipherConfig};
use crate::errors::RingCipherError;
use crate::matrix::sampler::MAX_SAMPLER_ATTEMPTS;
use crate::matrix::{GLn, Matrix};
use crate::ring::{ModInt, Zm};

use log::{debug, warn};
use rand::Rng;

use std::sync::Arc;

/// Block cipher whose key matrix is diagonal: every position of a block is
/// shifted by its own affine map.
#[derive(Debug, Clone)]
pub struct VigenereCipher {
    inner: BlockCipher,
}

fn random_diagonal<R: Rng + ?Sized>(
    n: usize,
    ring: &Arc<Zm>,
    rng: &mut R,
) -> Result<GLn<ModInt>, RingCipherError> {
    let units = ring.units();
    let mut last_error = None;

    for attempt in 1..=MAX_SAMPLER_ATTEMPTS {
        let mut a = Matrix::filled(n, n, &ModInt::new(0, ring))?;
        for i in 0..n {
            let unit = units[rng.random_range(0..units.len())];
            a.set(i, i, ModInt::new(unit as i64, ring))?;
        }

        match GLn::try_from_matrix(a) {
            Ok(gln) => return Ok(gln),
            Err(RingCipherError::SingularMatrix(reason)) => {
                warn!("Diagonal key rejected on attempt {} ({})", attempt, reason);
                last_error = Some(reason);
            }
            Err(e) => return Err(e),
        }
    }

    Err(RingCipherError::InternalError(format!(
        "No diagonal key after {} attempts: {}",
        MAX_SAMPLER_ATTEMPTS,
        last_error.unwrap_or_default()
    )))
}

impl VigenereCipher {
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
        debug!("vigenere key: block size {} over {} characters", n, alphabet.len());

        let a = random_diagonal(n, &ring, rng)?;
        let b = BlockCipher::random_shift(n, &ring, rng)?;
        Ok(Self {
            inner: BlockCipher::new(alphabet, a, b)?,
        })
    }

    /// Rebuilds a cipher from an exported key.
    ///
    /// # Errors
    ///
    /// Besides the errors of matrix keys, returns
    /// `RingCipherError::InvalidParameters` if the key matrix is not diagonal.
    pub fn from_key(alphabet: Alphabet, key: &BlockKey) -> Result<Self, RingCipherError> {
        let inner = BlockCipher::from_key(alphabet, key)?;
        let a = inner.matrix().as_matrix();
        let off_diagonal = (0..a.rows())
            .flat_map(|i| (0..a.cols()).map(move |j| (i, j)))
            .filter(|&(i, j)| i != j)
            .map(|(i, j)| a.get(i, j))
            .collect::<Result<Vec<_>, _>>()?;
        if off_diagonal.iter().any(|x| x.value() != 0) {
            return Err(RingCipherError::InvalidParameters(
                "Vigenere key matrix must be diagonal".into(),
            ));
        }

        Ok(Self { inner })
    }

    pub fn key(&self) -> BlockKey {
        self.inner.key()
    }

    pub fn block_size(&self) -> usize {
        self.inner.block_size()
    }
}

impl Cipher for VigenereCipher {
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
