use crate::errors::RingCipherError;
use crate::matrix::Matrix;
use crate::matrix::elimination::gauss_jordan;
use crate::ring::Ring;

use std::fmt;
use std::sync::Arc;

/// One invertible matrix and its inverse, each with its determinant.
#[derive(Debug)]
struct InversePair<T: Ring> {
    forward: Matrix<T>,
    forward_det: T,
    backward: Matrix<T>,
    backward_det: T,
}

/// An invertible `n × n` matrix over a commutative ring.
///
/// The determinant and the inverse are computed once, at construction. A
/// matrix and its inverse share one record and differ only in which side they
/// read, so `a.inverse()` is O(1) and `a.inverse().inverse() == a`.
#[derive(Debug, Clone)]
pub struct GLn<T: Ring> {
    pair: Arc<InversePair<T>>,
    inverted: bool,
}

impl<T: Ring> GLn<T> {
    /// Builds an invertible matrix from a grid of rows.
    ///
    /// # Errors
    ///
    /// Returns `RingCipherError::DimensionMismatch` if the grid is ragged or
    /// not square, and `RingCipherError::SingularMatrix` if it has no inverse
    /// the elimination can find.
    pub fn try_from_rows(grid: Vec<Vec<T>>) -> Result<Self, RingCipherError> {
        Self::try_from_matrix(Matrix::try_from_rows(grid)?)
    }

    pub fn try_from_matrix(matrix: Matrix<T>) -> Result<Self, RingCipherError> {
        let reduction = gauss_jordan(&matrix)?;
        let backward_det = reduction.determinant.inv().ok_or_else(|| {
            RingCipherError::InternalError("Determinant of an inverted matrix is not a unit".into())
        })?;

        Ok(Self::from_pair(InversePair {
            forward: matrix,
            forward_det: reduction.determinant,
            backward: reduction.inverse,
            backward_det,
        }))
    }

    fn from_pair(pair: InversePair<T>) -> Self {
        Self {
            pair: Arc::new(pair),
            inverted: false,
        }
    }

    /// The `n × n` identity over the ring `sample` lives in.
    pub fn identity(n: usize, sample: &T) -> Result<Self, RingCipherError> {
        let identity = Matrix::identity(n, sample)?;
        Ok(Self::from_pair(InversePair {
            forward: identity.clone(),
            forward_det: sample.one(),
            backward: identity,
            backward_det: sample.one(),
        }))
    }

    pub fn as_matrix(&self) -> &Matrix<T> {
        if self.inverted {
            &self.pair.backward
        } else {
            &self.pair.forward
        }
    }

    pub fn into_matrix(self) -> Matrix<T> {
        self.as_matrix().clone()
    }

    pub fn size(&self) -> usize {
        self.as_matrix().rows()
    }

    pub fn determinant(&self) -> &T {
        if self.inverted {
            &self.pair.backward_det
        } else {
            &self.pair.forward_det
        }
    }

    pub fn inverse(&self) -> Self {
        Self {
            pair: Arc::clone(&self.pair),
            inverted: !self.inverted,
        }
    }

    /// Product of two invertible matrices; `(AB)⁻¹ = B⁻¹A⁻¹` is formed
    /// directly instead of running another elimination.
    pub fn mul(&self, other: &Self) -> Result<Self, RingCipherError> {
        let forward = self.as_matrix().mul(other.as_matrix())?;
        let backward = other.inverse().as_matrix().mul(self.inverse().as_matrix())?;

        Ok(Self::from_pair(InversePair {
            forward,
            forward_det: self.determinant().mul(other.determinant()),
            backward,
            backward_det: other.inverse().determinant().mul(self.inverse().determinant()),
        }))
    }

    /// The transpose stays invertible with `(Aᵀ)⁻¹ = (A⁻¹)ᵀ`.
    pub fn transpose(&self) -> Self {
        Self::from_pair(InversePair {
            forward: self.as_matrix().transpose(),
            forward_det: self.determinant().clone(),
            backward: self.inverse().as_matrix().transpose(),
            backward_det: self.inverse().determinant().clone(),
        })
    }

    /// Left-multiplies `x` (typically a column vector) by this matrix.
    pub fn apply(&self, x: &Matrix<T>) -> Result<Matrix<T>, RingCipherError> {
        self.as_matrix().mul(x)
    }
}

impl<T: Ring> PartialEq for GLn<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_matrix() == other.as_matrix()
    }
}

impl<T: Ring> AsRef<Matrix<T>> for GLn<T> {
    fn as_ref(&self) -> &Matrix<T> {
        self.as_matrix()
    }
}

impl<T: Ring> TryFrom<Matrix<T>> for GLn<T> {
    type Error = RingCipherError;

    fn try_from(matrix: Matrix<T>) -> Result<Self, Self::Error> {
        Self::try_from_matrix(matrix)
    }
}

impl<T: Ring + fmt::Display> fmt::Display for GLn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_matrix(), f)
    }
}
