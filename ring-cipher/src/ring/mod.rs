//! # Ring Module
//!
//! Provides the [`Ring`] capability trait and its concrete element types:
//! [`ModInt`] over a shared [`Zm`] context, and [`Frac`] for the rationals.

pub mod frac;
pub mod math;
pub mod mod_int;

use std::fmt::Debug;

pub use frac::Frac;
pub use math::Zm;
pub use mod_int::ModInt;

/// Element of a commutative ring with identity.
///
/// Identities are taken from an existing element (`x.zero()`, `x.one()`)
/// because a modular ring has no zero independent of its modulus.
///
/// # Laws
///
/// - `add` and `mul` are associative and commutative
/// - `mul` distributes over `add`
/// - `x.add(&x.neg()) == x.zero()` and `x.mul(&x.one()) == x`
/// - `x.inv()` is `Some(y)` iff `x.mul(&y) == x.one()`
pub trait Ring: Clone + PartialEq + Debug {
    fn add(&self, other: &Self) -> Self;

    fn mul(&self, other: &Self) -> Self;

    /// Additive inverse.
    fn neg(&self) -> Self;

    /// Additive identity of the ring `self` lives in.
    fn zero(&self) -> Self;

    /// Multiplicative inverse, `None` when `self` is not a unit.
    fn inv(&self) -> Option<Self>;

    /// Multiplicative identity of the ring `self` lives in.
    fn one(&self) -> Self;

    fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    fn is_unit(&self) -> bool {
        self.inv().is_some()
    }

    fn is_zero(&self) -> bool {
        *self == self.zero()
    }
}
