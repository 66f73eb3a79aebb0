use crate::alphabet::Alphabet;
use crate::cipher::keys::{AffineKey, key_ring, residue};
use crate::cipher::{Cipher, CipherConfig};
use crate::errors::RingCipherError;
use crate::ring::{ModInt, Ring, Zm};

use log::debug;
use rand::Rng;

use std::sync::Arc;

/// Character-wise affine substitution `E(x) = a·x + b` with `a` a unit.
#[derive(Debug, Clone)]
pub struct AffineCipher {
    alphabet: Alphabet,
    a: ModInt,
    a_inv: ModInt,
    b: ModInt,
}

impl AffineCipher {
    pub fn new(alphabet: Alphabet, config: &CipherConfig) -> Result<Self, RingCipherError> {
        Self::with_rng(alphabet, &mut config.rng())
    }

    /// Draws `a` uniformly from the units and `b` from `[1, size-1]`.
    pub fn with_rng<R: Rng + ?Sized>(alphabet: Alphabet, rng: &mut R) -> Result<Self, RingCipherError> {
        let ring = Arc::new(Zm::try_with(alphabet.len() as u64)?);
        let units = ring.units();
        let a = ModInt::new(units[rng.random_range(0..units.len())] as i64, &ring);
        let b = ModInt::new(rng.random_range(1..ring.modulus()) as i64, &ring);
        debug!("affine key over {} characters: a = {}, b = {}", alphabet.len(), a, b);

        Self::from_parts(alphabet, a, b)
    }

    /// Rebuilds a cipher from an exported key.
    ///
    /// # Errors
    ///
    /// Returns `RingCipherError::InvalidParameters` if the key does not fit
    /// the alphabet and `RingCipherError::NoInverse` if `a` is not a unit.
    pub fn from_key(alphabet: Alphabet, key: &AffineKey) -> Result<Self, RingCipherError> {
        let ring = key_ring(&alphabet, key.modulus)?;
        let a = residue(key.a, &ring)?;
        let b = residue(key.b, &ring)?;
        Self::from_parts(alphabet, a, b)
    }

    fn from_parts(alphabet: Alphabet, a: ModInt, b: ModInt) -> Result<Self, RingCipherError> {
        let a_inv = a.inv().ok_or_else(|| {
            RingCipherError::NoInverse(format!("{} mod {}", a, a.modulus()))
        })?;
        Ok(Self {
            alphabet,
            a,
            a_inv,
            b,
        })
    }

    pub fn key(&self) -> AffineKey {
        AffineKey {
            modulus: self.a.modulus(),
            a: self.a.value(),
            b: self.b.value(),
        }
    }

    fn map_chars(&self, text: &str, f: impl Fn(ModInt) -> ModInt) -> Result<String, RingCipherError> {
        let ring = self.a.ring();
        let indices: Vec<u64> = self
            .alphabet
            .encode(text)?
            .into_iter()
            .map(|x| f(ModInt::new(x as i64, ring)).value())
            .collect();
        self.alphabet.decode(&indices)
    }
}

impl Cipher for AffineCipher {
    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn encrypt(&self, message: &str) -> Result<String, RingCipherError> {
        self.map_chars(message, |x| self.a.mul(&x).add(&self.b))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, RingCipherError> {
        self.map_chars(ciphertext, |y| y.sub(&self.b).mul(&self.a_inv))
    }
}
