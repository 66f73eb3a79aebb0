use crate::ring::{Ring, Zm};

use std::fmt;
use std::sync::Arc;

/// An integer modulo `m`, tagged with the [`Zm`] context it lives in.
///
/// The multiplicative inverse is looked up once at construction and cached,
/// so [`Ring::inv`] and [`Ring::is_unit`] are O(1) afterwards.
#[derive(Clone, Debug)]
pub struct ModInt {
    value: u64,
    inverse: Option<u64>,
    ring: Arc<Zm>,
}

impl ModInt {
    /// Builds `value mod m`, normalized into `[0, m-1]`.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use ring_cipher::ring::{ModInt, Ring, Zm};
    /// let z11 = Arc::new(Zm::try_with(11).unwrap());
    /// let x = ModInt::new(-8, &z11);
    /// assert_eq!(x.value(), 3);
    /// assert_eq!(x.inv().map(|y| y.value()), Some(4));
    /// ```
    pub fn new(value: i64, ring: &Arc<Zm>) -> Self {
        Self::from_residue(ring.normalize(value), ring)
    }

    fn from_residue(value: u64, ring: &Arc<Zm>) -> Self {
        Self {
            value,
            inverse: ring.inv(value),
            ring: Arc::clone(ring),
        }
    }

    // Both inverses are already known, skip the scan.
    fn with_inverse(value: u64, inverse: Option<u64>, ring: &Arc<Zm>) -> Self {
        Self {
            value,
            inverse,
            ring: Arc::clone(ring),
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn modulus(&self) -> u64 {
        self.ring.modulus()
    }

    pub fn ring(&self) -> &Arc<Zm> {
        &self.ring
    }

    fn check_same_ring(&self, other: &Self) {
        debug_assert_eq!(
            self.modulus(),
            other.modulus(),
            "ModInt operands from different rings"
        );
    }
}

impl Ring for ModInt {
    fn add(&self, other: &Self) -> Self {
        self.check_same_ring(other);
        Self::from_residue(self.ring.add(self.value, other.value), &self.ring)
    }

    fn mul(&self, other: &Self) -> Self {
        self.check_same_ring(other);
        Self::from_residue(self.ring.mul(self.value, other.value), &self.ring)
    }

    fn neg(&self) -> Self {
        Self::from_residue(self.ring.neg(self.value), &self.ring)
    }

    fn zero(&self) -> Self {
        Self::with_inverse(self.ring.zero(), None, &self.ring)
    }

    fn inv(&self) -> Option<Self> {
        self.inverse
            .map(|inverse| Self::with_inverse(inverse, Some(self.value), &self.ring))
    }

    fn one(&self) -> Self {
        let one = self.ring.one();
        Self::with_inverse(one, Some(one), &self.ring)
    }

    fn is_unit(&self) -> bool {
        self.inverse.is_some()
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl PartialEq for ModInt {
    fn eq(&self, other: &Self) -> bool {
        self.modulus() == other.modulus() && self.value == other.value
    }
}

impl Eq for ModInt {}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RingCipherError;

    fn z(m: u64) -> Result<Arc<Zm>, RingCipherError> {
        Ok(Arc::new(Zm::try_with(m)?))
    }

    #[test]
    fn test_normalizes_on_construction() -> Result<(), RingCipherError> {
        let z11 = z(11)?;
        assert_eq!(ModInt::new(25, &z11).value(), 3);
        assert_eq!(ModInt::new(-1, &z11).value(), 10);
        assert_eq!(ModInt::new(0, &z11).value(), 0);
        Ok(())
    }

    #[test]
    fn test_arithmetic() -> Result<(), RingCipherError> {
        let z11 = z(11)?;
        let a = ModInt::new(7, &z11);
        let b = ModInt::new(9, &z11);
        assert_eq!(a.add(&b).value(), 5);
        assert_eq!(a.mul(&b).value(), 8);
        assert_eq!(a.sub(&b).value(), 9);
        assert_eq!(a.neg().value(), 4);
        assert_eq!(a.zero().value(), 0);
        assert_eq!(a.one().value(), 1);
        Ok(())
    }

    #[test]
    fn test_cached_inverse() -> Result<(), RingCipherError> {
        let z6 = z(6)?;
        let two = ModInt::new(2, &z6);
        let five = ModInt::new(5, &z6);
        assert!(two.inv().is_none());
        assert!(!two.is_unit());
        let inv = five.inv().ok_or(RingCipherError::NoInverse("5 mod 6".into()))?;
        assert_eq!(inv.value(), 5);
        assert_eq!(five.mul(&inv), five.one());
        // inverse of the inverse is the original value
        assert_eq!(inv.inv(), Some(five));
        Ok(())
    }

    #[test]
    fn test_equality_ignores_context_identity() -> Result<(), RingCipherError> {
        let a = ModInt::new(4, &z(9)?);
        let b = ModInt::new(13, &z(9)?);
        let c = ModInt::new(4, &z(10)?);
        assert_eq!(a, b);
        assert_ne!(a, c);
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), RingCipherError> {
        assert_eq!(ModInt::new(-2, &z(7)?).to_string(), "5");
        Ok(())
    }
}
