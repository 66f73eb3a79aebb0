//! Gauss-Jordan inversion over an arbitrary commutative ring.
//!
//! Over a field any nonzero pivot can be normalized. Over Z_m with composite
//! `m` a nonzero entry such as `2 mod 6` may still have no inverse, so the
//! pivot search goes through three stages:
//!
//! 1. keep the diagonal entry if it is a unit,
//! 2. otherwise swap in the first row below with a unit in the pivot column,
//! 3. otherwise add a combination of the rows below into the pivot row,
//!    trying combinations of growing size until the new pivot is a unit.
//!
//! If stage 3 runs out of combinations, or tries more than
//! [`MAX_PIVOT_COMBINATIONS`] of them, the matrix is reported singular.

use crate::errors::RingCipherError;
use crate::matrix::Matrix;
use crate::ring::Ring;

use log::debug;

/// Upper bound on the row combinations tried for a single pivot column.
///
/// The search is exponential in the number of rows below the pivot; past
/// this bound the matrix is reported singular.
pub const MAX_PIVOT_COMBINATIONS: usize = 1 << 16;

/// Determinant and inverse produced by [`gauss_jordan`].
#[derive(Debug, Clone)]
pub struct Reduction<T: Ring> {
    pub determinant: T,
    pub inverse: Matrix<T>,
}

/// The first `k`-combination of `{1, …, n}` in lexicographic order, `{1, …, k}`.
///
/// Returns `None` when `k` is zero or exceeds `n`.
pub fn first_combination(n: usize, k: usize) -> Option<Vec<usize>> {
    if k == 0 || k > n {
        return None;
    }
    Some((1..=k).collect())
}

/// Advances `comb` to the next `k`-combination of `{1, …, n}` in lexicographic
/// order, where `k = comb.len()`.
///
/// Returns `false`, leaving `comb` untouched, once `comb` is the last
/// combination `{n-k+1, …, n}`.
///
/// # Example
///
/// ```
/// # use ring_cipher::matrix::elimination::next_combination;
/// let mut comb = vec![1, 4];
/// assert!(next_combination(&mut comb, 4));
/// assert_eq!(comb, vec![2, 3]);
/// ```
pub fn next_combination(comb: &mut [usize], n: usize) -> bool {
    let k = comb.len();
    // rightmost position that can still be bumped
    let Some(i) = (0..k).rev().find(|&i| comb[i] < n - k + i + 1) else {
        return false;
    };

    comb[i] += 1;
    for j in i + 1..k {
        comb[j] = comb[j - 1] + 1;
    }
    true
}

/// The working grid together with the identity-augmented grid; every row
/// operation is applied to both.
struct Augmented<T: Ring> {
    work: Vec<Vec<T>>,
    aug: Vec<Vec<T>>,
}

impl<T: Ring> Augmented<T> {
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.work.swap(a, b);
        self.aug.swap(a, b);
    }

    /// row `target` += row `source`
    fn add_row(&mut self, target: usize, source: usize) {
        for grid in [&mut self.work, &mut self.aug] {
            let src = grid[source].clone();
            for (x, s) in grid[target].iter_mut().zip(&src) {
                *x = x.add(s);
            }
        }
    }

    fn scale_row(&mut self, i: usize, factor: &T) {
        for grid in [&mut self.work, &mut self.aug] {
            for x in grid[i].iter_mut() {
                *x = x.mul(factor);
            }
        }
    }

    /// row `k` -= work[k][i] * row `i`, clearing column `i` in row `k`
    fn eliminate(&mut self, k: usize, i: usize) {
        let factor = self.work[k][i].clone();
        if factor.is_zero() {
            return;
        }
        for grid in [&mut self.work, &mut self.aug] {
            let pivot_row = grid[i].clone();
            for (x, p) in grid[k].iter_mut().zip(&pivot_row) {
                *x = x.sub(&p.mul(&factor));
            }
        }
    }

    /// Searches the combinations of rows below `i` whose sum with row `i`
    /// puts a unit on the diagonal. Offsets are relative to `i`.
    ///
    /// At most [`MAX_PIVOT_COMBINATIONS`] candidates are tried.
    fn find_pivot_combination(&self, i: usize) -> Result<Vec<usize>, RingCipherError> {
        let n = self.work.len();
        let p = n - i - 1;
        let diagonal = &self.work[i][i];
        let mut tried = 0usize;

        for q in 1..=p {
            let Some(mut comb) = first_combination(p, q) else {
                continue;
            };
            loop {
                if tried == MAX_PIVOT_COMBINATIONS {
                    return Err(RingCipherError::SingularMatrix(format!(
                        "Gave up on column {} after {} row combinations",
                        i, MAX_PIVOT_COMBINATIONS
                    )));
                }
                tried += 1;

                let pivot = comb
                    .iter()
                    .fold(diagonal.clone(), |acc, &c| acc.add(&self.work[i + c][i]));
                if pivot.is_unit() {
                    return Ok(comb);
                }
                if !next_combination(&mut comb, p) {
                    break;
                }
            }
        }

        Err(RingCipherError::SingularMatrix(format!(
            "No invertible pivot can be formed in column {}",
            i
        )))
    }
}

/// Inverts a square matrix over its ring by generalized Gauss-Jordan
/// elimination, computing the determinant along the way.
///
/// The determinant is `(-1)^swaps` times the product of the pivots met right
/// before each row normalization; adding rows into the pivot row does not
/// change it.
///
/// # Errors
///
/// Returns `RingCipherError::DimensionMismatch` if the matrix is not square.
/// Returns `RingCipherError::SingularMatrix` if some column admits no
/// invertible pivot.
pub fn gauss_jordan<T: Ring>(matrix: &Matrix<T>) -> Result<Reduction<T>, RingCipherError> {
    if !matrix.is_square() {
        return Err(RingCipherError::DimensionMismatch(format!(
            "Inverse requires a square matrix, got {}x{}",
            matrix.rows(),
            matrix.cols()
        )));
    }

    let n = matrix.rows();
    let sample = matrix.get(0, 0)?;
    let mut det = sample.one();
    let mut state = Augmented {
        work: matrix.to_rows(),
        aug: Matrix::identity(n, sample)?.to_rows(),
    };

    // Reduce to echelon form with unit pivots
    for i in 0..n {
        if !state.work[i][i].is_unit() {
            if let Some(k) = (i + 1..n).find(|&k| state.work[k][i].is_unit()) {
                debug!("pivot {}: not a unit, swapping with row {}", i, k);
                state.swap_rows(i, k);
                det = det.neg();
            } else {
                let comb = state.find_pivot_combination(i)?;
                debug!("pivot {}: adding row offsets {:?} into the pivot row", i, comb);
                for c in comb {
                    state.add_row(i, i + c);
                }
            }
        }

        let pivot = state.work[i][i].clone();
        let pivot_inv = pivot.inv().ok_or_else(|| {
            RingCipherError::InternalError(format!("Pivot {} lost its inverse", i))
        })?;
        det = det.mul(&pivot);
        state.scale_row(i, &pivot_inv);

        for k in i + 1..n {
            state.eliminate(k, i);
        }
    }

    // Back to reduced echelon form
    for i in 0..n {
        for k in (0..i).rev() {
            state.eliminate(k, i);
        }
    }

    Ok(Reduction {
        determinant: det,
        inverse: Matrix::try_from_rows(state.aug)?,
    })
}
