//! Random invertible matrices over Z_m.
//!
//! The factor construction follows Dana Randall, "Efficient Generation of
//! Random Nonsingular Matrices" (1991): every step claims one row of a
//! permutation `A` and one row of a triangular `T` whose diagonal is made of
//! units, so `A × T` is invertible by construction.

use crate::errors::RingCipherError;
use crate::matrix::{GLn, Matrix};
use crate::ring::{ModInt, Ring, Zm};

use log::{trace, warn};
use rand::Rng;

use std::sync::Arc;

/// How many products `sample_nonsingular` draws before giving up.
pub const MAX_SAMPLER_ATTEMPTS: usize = 1000;

fn random_unit<R: Rng + ?Sized>(ring: &Zm, rng: &mut R) -> u64 {
    let units = ring.units();
    units[rng.random_range(0..units.len())]
}

/// Draws `k` residues until at least one of them is a unit; returns the
/// vector and the position of its first unit.
fn random_vector_with_unit<R: Rng + ?Sized>(k: usize, ring: &Zm, rng: &mut R) -> (Vec<u64>, usize) {
    loop {
        let v: Vec<u64> = (0..k).map(|_| rng.random_range(0..ring.modulus())).collect();
        if let Some(r) = v.iter().position(|&x| ring.is_unit(x)) {
            return (v, r);
        }
    }
}

/// Samples one invertible `n × n` factor `A × T` over `ring`.
///
/// # Errors
///
/// Returns `RingCipherError::DimensionMismatch` if `n` is zero.
pub fn sample_factor<R: Rng + ?Sized>(
    n: usize,
    ring: &Arc<Zm>,
    rng: &mut R,
) -> Result<Matrix<ModInt>, RingCipherError> {
    let zero = ModInt::new(0, ring);
    let mut A = Matrix::filled(n, n, &zero)?;
    let mut T = Matrix::filled(n, n, &zero)?;
    let mut free: Vec<usize> = (0..n).collect();

    for k in (1..=n).rev() {
        let row = n - k;
        let (v, r) = if k > 1 {
            random_vector_with_unit(k, ring, rng)
        } else {
            (vec![random_unit(ring, rng)], 0)
        };
        let realR = free[r];
        trace!("sampler row {}: v = {:?}, claiming column {}", row, v, realR);

        A.set(row, realR, zero.one())?;
        for (&col, &x) in free.iter().zip(&v) {
            T.set(realR, col, ModInt::new(x as i64, ring))?;
        }
        free.remove(r);
    }

    A.mul(&T)
}

/// Samples a uniformly built invertible `n × n` matrix over `ring`, with its
/// determinant and inverse already computed.
///
/// The result is `L × U` where `U` is a factor from [`sample_factor`] and `L`
/// is the transpose of another one.
///
/// # Errors
///
/// Returns `RingCipherError::DimensionMismatch` if `n` is zero, and
/// `RingCipherError::InternalError` if no draw could be inverted within
/// [`MAX_SAMPLER_ATTEMPTS`] attempts.
///
/// # Example
///
/// ```
/// # use std::sync::Arc;
/// # use rand::SeedableRng;
/// # use ring_cipher::matrix::sample_nonsingular;
/// # use ring_cipher::ring::Zm;
/// let ring = Arc::new(Zm::try_with(26).unwrap());
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let a = sample_nonsingular(3, &ring, &mut rng).unwrap();
/// assert_eq!(a.size(), 3);
/// ```
pub fn sample_nonsingular<R: Rng + ?Sized>(
    n: usize,
    ring: &Arc<Zm>,
    rng: &mut R,
) -> Result<GLn<ModInt>, RingCipherError> {
    for attempt in 1..=MAX_SAMPLER_ATTEMPTS {
        let U = sample_factor(n, ring, rng)?;
        let L = sample_factor(n, ring, rng)?.transpose();

        match GLn::try_from_matrix(L.mul(&U)?) {
            Ok(gln) => return Ok(gln),
            Err(RingCipherError::SingularMatrix(reason)) => {
                warn!(
                    "Sampled matrix rejected on attempt {} ({}), drawing again",
                    attempt, reason
                );
            }
            Err(e) => return Err(e),
        }
    }

    Err(RingCipherError::InternalError(format!(
        "No invertible {}x{} matrix mod {} after {} attempts",
        n,
        n,
        ring.modulus(),
        MAX_SAMPLER_ATTEMPTS
    )))
}
