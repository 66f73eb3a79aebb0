use crate::alphabet::Alphabet;
use crate::cipher::keys::{BlockKey, key_ring, residue};
use crate::errors::RingCipherError;
use crate::matrix::{GLn, Matrix};
use crate::ring::{ModInt, Zm};

use rand::Rng;

use std::sync::Arc;

/// Shared core of the block ciphers: `E(x) = a·x + b` on columns of `n`
/// indices, with `a` invertible over `Z_|alphabet|`.
#[derive(Debug, Clone)]
pub struct BlockCipher {
    alphabet: Alphabet,
    ring: Arc<Zm>,
    a: GLn<ModInt>,
    b: Matrix<ModInt>,
}

impl BlockCipher {
    pub(crate) fn new(
        alphabet: Alphabet,
        a: GLn<ModInt>,
        b: Matrix<ModInt>,
    ) -> Result<Self, RingCipherError> {
        if b.cols() != 1 || b.rows() != a.size() {
            return Err(RingCipherError::DimensionMismatch(format!(
                "Shift must be a {}x1 column, got {}x{}",
                a.size(),
                b.rows(),
                b.cols()
            )));
        }

        let ring = Arc::clone(b.get(0, 0)?.ring());
        Ok(Self {
            alphabet,
            ring,
            a,
            b,
        })
    }

    /// Random shift column with entries in `[1, m-1]`.
    pub(crate) fn random_shift<R: Rng + ?Sized>(
        n: usize,
        ring: &Arc<Zm>,
        rng: &mut R,
    ) -> Result<Matrix<ModInt>, RingCipherError> {
        Matrix::from_column(
            (0..n)
                .map(|_| ModInt::new(rng.random_range(1..ring.modulus()) as i64, ring))
                .collect(),
        )
    }

    pub(crate) fn from_key(alphabet: Alphabet, key: &BlockKey) -> Result<Self, RingCipherError> {
        let ring = key_ring(&alphabet, key.modulus)?;
        let lift = |row: &[u64]| -> Result<Vec<ModInt>, RingCipherError> {
            row.iter().map(|&x| residue(x, &ring)).collect()
        };

        let grid = key
            .a
            .iter()
            .map(|row| lift(row.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;
        let a = GLn::try_from_rows(grid)?;
        let b = Matrix::from_column(lift(key.b.as_slice())?)?;

        Self::new(alphabet, a, b)
    }

    pub fn key(&self) -> BlockKey {
        let a: Vec<Vec<u64>> = self
            .a
            .as_matrix()
            .to_rows()
            .into_iter()
            .map(|row| row.iter().map(ModInt::value).collect())
            .collect();
        let b: Vec<u64> = self.b.iter().map(ModInt::value).collect();

        BlockKey {
            modulus: self.alphabet.len() as u64,
            a,
            b,
        }
    }

    pub fn block_size(&self) -> usize {
        self.a.size()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub(crate) fn matrix(&self) -> &GLn<ModInt> {
        &self.a
    }

    fn to_column(&self, block: &[u64]) -> Result<Matrix<ModInt>, RingCipherError> {
        Matrix::from_column(
            block
                .iter()
                .map(|&x| ModInt::new(x as i64, &self.ring))
                .collect(),
        )
    }

    /// Feeds every block of `n` indices through `f` as a column.
    fn map_blocks(
        &self,
        indices: Vec<u64>,
        f: impl Fn(Matrix<ModInt>) -> Result<Matrix<ModInt>, RingCipherError>,
    ) -> Result<Vec<u64>, RingCipherError> {
        let n = self.block_size();
        let mut out = Vec::with_capacity(indices.len());
        for block in indices.chunks(n) {
            let y = f(self.to_column(block)?)?;
            out.extend(y.iter().map(ModInt::value));
        }
        Ok(out)
    }

    pub fn encrypt(&self, message: &str) -> Result<String, RingCipherError> {
        let mut indices = self.alphabet.encode(message)?;
        let n = self.block_size();
        let pad = self.alphabet.pad();
        let pad = self
            .alphabet
            .index_of(pad)
            .ok_or(RingCipherError::UnknownCharacter(pad))? as u64;
        while indices.len() % n != 0 {
            indices.push(pad);
        }

        let out = self.map_blocks(indices, |x| self.a.apply(&x)?.add(&self.b))?;
        self.alphabet.decode(&out)
    }

    /// Decrypts and strips the trailing padding characters.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, RingCipherError> {
        let indices = self.alphabet.encode(ciphertext)?;
        if indices.len() % self.block_size() != 0 {
            return Err(RingCipherError::InvalidParameters(format!(
                "Ciphertext of {} characters is not made of blocks of {}",
                indices.len(),
                self.block_size()
            )));
        }

        let a_inv = self.a.inverse();
        let out = self.map_blocks(indices, |y| a_inv.apply(&y.sub(&self.b)?))?;
        let text = self.alphabet.decode(&out)?;
        Ok(text.trim_end_matches(self.alphabet.pad()).to_string())
    }
}
