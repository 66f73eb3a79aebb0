#![allow(non_snake_case)] // Allow non-snake_case identifiers (like matrix variable names)

//! # Matrix Module
//!
//! Dense matrices over any [`Ring`], the invertible [`GLn`] wrapper built on
//! generalized Gauss-Jordan elimination, and the nonsingular sampler.

pub mod elimination;
pub mod gln;
pub mod sampler;

use crate::errors::RingCipherError;
use crate::ring::Ring;

use itertools::Itertools;

use std::fmt;

pub use gln::GLn;
pub use sampler::{sample_factor, sample_nonsingular};

/// A `rows × cols` grid of ring elements stored row-major.
///
/// Every cell is populated and the shape never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Ring> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Ring> Matrix<T> {
    /// Builds a matrix from a fully populated grid of rows.
    ///
    /// # Errors
    ///
    /// Returns `RingCipherError::DimensionMismatch` if the grid is empty or
    /// if its rows have inconsistent lengths.
    pub fn try_from_rows(grid: Vec<Vec<T>>) -> Result<Self, RingCipherError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(RingCipherError::DimensionMismatch(
                "Matrix must have at least one row and one column".into(),
            ));
        }

        let mut data = Vec::with_capacity(rows * cols);
        for (i, row) in grid.into_iter().enumerate() {
            if row.len() != cols {
                return Err(RingCipherError::DimensionMismatch(format!(
                    "Row {} has length {} but expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend(row);
        }

        Ok(Self { rows, cols, data })
    }

    /// Builds an `n × 1` column vector.
    pub fn from_column(column: Vec<T>) -> Result<Self, RingCipherError> {
        Self::try_from_rows(column.into_iter().map(|x| vec![x]).collect())
    }

    /// A `rows × cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: &T) -> Result<Self, RingCipherError> {
        if rows == 0 || cols == 0 {
            return Err(RingCipherError::DimensionMismatch(
                "Matrix must have at least one row and one column".into(),
            ));
        }

        Ok(Self {
            rows,
            cols,
            data: vec![value.clone(); rows * cols],
        })
    }

    /// The `n × n` identity, using the identities of the ring `sample` lives in.
    pub fn identity(n: usize, sample: &T) -> Result<Self, RingCipherError> {
        let mut identity = Self::filled(n, n, &sample.zero())?;
        let one = sample.one();
        for i in 0..n {
            identity.data[i * n + i] = one.clone();
        }
        Ok(identity)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn check_bounds(&self, i: usize, j: usize) -> Result<usize, RingCipherError> {
        if i >= self.rows || j >= self.cols {
            return Err(RingCipherError::IndexOutOfBounds(format!(
                "({}, {}) is outside a {}x{} matrix",
                i, j, self.rows, self.cols
            )));
        }
        Ok(i * self.cols + j)
    }

    pub fn get(&self, i: usize, j: usize) -> Result<&T, RingCipherError> {
        let idx = self.check_bounds(i, j)?;
        Ok(&self.data[idx])
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), RingCipherError> {
        let idx = self.check_bounds(i, j)?;
        self.data[idx] = value;
        Ok(())
    }

    pub fn row(&self, i: usize) -> Result<Vec<T>, RingCipherError> {
        self.check_bounds(i, 0)?;
        Ok(self.data[i * self.cols..(i + 1) * self.cols].to_vec())
    }

    pub fn column(&self, j: usize) -> Result<Vec<T>, RingCipherError> {
        self.check_bounds(0, j)?;
        Ok((0..self.rows)
            .map(|i| self.data[i * self.cols + j].clone())
            .collect())
    }

    /// Copies the matrix out as a grid of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn map<U: Ring>(&self, f: impl Fn(&T) -> U) -> Matrix<U> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Computes the elementwise sum `C = A + B`.
    ///
    /// # Errors
    ///
    /// Returns `RingCipherError::DimensionMismatch` if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self, RingCipherError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(RingCipherError::DimensionMismatch(format!(
                "Shapes must match for addition ({}x{} vs {}x{})",
                self.rows, self.cols, other.rows, other.cols
            )));
        }

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a.add(b))
                .collect(),
        })
    }

    /// Computes the matrix product `C = AB`.
    ///
    /// The accumulator starts at the additive identity taken from `A`'s first
    /// cell.
    ///
    /// # Errors
    ///
    /// Returns `RingCipherError::DimensionMismatch` if the inner dimensions
    /// of the matrices do not match.
    pub fn mul(&self, other: &Self) -> Result<Self, RingCipherError> {
        if self.cols != other.rows {
            return Err(RingCipherError::DimensionMismatch(format!(
                "Inner dimensions must match for matrix multiplication ({} vs {})",
                self.cols, other.rows
            )));
        }

        let zero = self.data[0].zero();
        let (n, m_common, p) = (self.rows, self.cols, other.cols);
        let mut data = Vec::with_capacity(n * p);
        for i in 0..n {
            for j in 0..p {
                let mut sum = zero.clone();
                for k in 0..m_common {
                    let term = self.data[i * m_common + k].mul(&other.data[k * p + j]);
                    sum = sum.add(&term);
                }
                data.push(sum);
            }
        }

        Ok(Self {
            rows: n,
            cols: p,
            data,
        })
    }

    /// Multiplies every cell by `scalar`.
    pub fn scale(&self, scalar: &T) -> Self {
        self.map(|x| x.mul(scalar))
    }

    /// Elementwise additive inverse.
    pub fn neg(&self) -> Self {
        self.map(|x| x.neg())
    }

    pub fn sub(&self, other: &Self) -> Result<Self, RingCipherError> {
        self.add(&other.neg())
    }

    /// Returns the `cols × rows` matrix with `(i, j) := A(j, i)`.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j].clone());
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }
}

impl<T: Ring + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            writeln!(f, "[{}]", row.iter().join(", "))?;
        }
        Ok(())
    }
}
