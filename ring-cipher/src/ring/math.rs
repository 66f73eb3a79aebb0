//! Implementation of Z_m arithmetic on raw residues.

use crate::errors::RingCipherError;

/// Represents the ring Z_m of integers modulo `m`.
///
/// The group of units (residues coprime to `m`) is computed once at
/// construction and never changes afterwards, so a `Zm` is shared by every
/// [`ModInt`](super::ModInt) built over it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Zm {
    modulus: u64,
    units: Vec<u64>,
}

impl Zm {
    /// Create a new Zm with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, RingCipherError> {
        if modulus <= 1 {
            return Err(RingCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        let units = (1..modulus)
            .filter(|&k| num_integer::gcd(k, modulus) == 1)
            .collect();

        Ok(Zm { modulus, units })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_cipher::ring::Zm;
    /// let ring = Zm::try_with(13).unwrap();
    /// assert_eq!(ring.modulus(), 13);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The multiplicative group: residues in `[1, m-1]` coprime to `m`, ascending.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_cipher::ring::Zm;
    /// let ring = Zm::try_with(12).unwrap();
    /// assert_eq!(ring.units(), &[1, 5, 7, 11]);
    /// ```
    pub fn units(&self) -> &[u64] {
        &self.units
    }

    pub fn is_unit(&self, x: u64) -> bool {
        self.units.binary_search(&x).is_ok()
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_cipher::ring::Zm;
    /// let ring = Zm::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(0), 0);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> u64 {
        let m = self.modulus as i128;
        ((value as i128 % m + m) % m) as u64
    }

    /// Computes `(x + y) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_cipher::ring::Zm;
    /// let ring = Zm::try_with(10).unwrap();
    /// assert_eq!(ring.add(7, 5), 2);
    /// assert_eq!(ring.add(12, 13), 5);
    /// ```
    pub fn add(&self, x: u64, y: u64) -> u64 {
        ((x as u128 + y as u128) % self.modulus as u128) as u64
    }

    /// Computes `(x * y) mod modulus`.
    ///
    /// Uses `u128` internally to prevent overflow before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_cipher::ring::Zm;
    /// let ring = Zm::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5); // 35 mod 10 = 5
    /// assert_eq!(ring.mul(4, 5), 0); // 20 mod 10 = 0
    /// ```
    pub fn mul(&self, x: u64, y: u64) -> u64 {
        ((x as u128 * y as u128) % self.modulus as u128) as u64
    }

    /// Computes the additive inverse `(m - x) mod m`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_cipher::ring::Zm;
    /// let ring = Zm::try_with(10).unwrap();
    /// assert_eq!(ring.neg(3), 7);
    /// assert_eq!(ring.neg(0), 0);
    /// assert_eq!(ring.add(3, ring.neg(3)), 0);
    /// ```
    pub fn neg(&self, x: u64) -> u64 {
        (self.modulus - x % self.modulus) % self.modulus
    }

    pub fn zero(&self) -> u64 {
        0
    }

    pub fn one(&self) -> u64 {
        1
    }

    /// Computes the multiplicative inverse `x^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `x` belongs to the group of units.
    /// It is found by a linear scan over the precomputed units, which is
    /// fine since every [`ModInt`](super::ModInt) asks only once.
    ///
    /// # Example
    ///
    /// ```
    /// # use ring_cipher::ring::Zm;
    /// let ring = Zm::try_with(10).unwrap();
    /// assert_eq!(ring.inv(3), Some(7)); // 3 * 7 = 21 = 1 mod 10
    /// assert_eq!(ring.inv(9), Some(9));
    /// assert_eq!(ring.inv(2), None); // gcd(2, 10) = 2
    /// assert_eq!(ring.inv(0), None);
    /// ```
    pub fn inv(&self, x: u64) -> Option<u64> {
        let x = x % self.modulus;
        if !self.is_unit(x) {
            return None;
        }

        self.units.iter().copied().find(|&y| self.mul(x, y) == 1)
    }

    /// Whether `x ≡ y (mod m)`.
    pub fn congruent(&self, x: i64, y: i64) -> bool {
        self.normalize(x) == self.normalize(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn test_ring_creation() {
        assert!(Zm::try_with(11).is_ok());
        assert!(Zm::try_with(2).is_ok());
        assert!(Zm::try_with(1).is_err());
        assert!(Zm::try_with(0).is_err());
    }

    #[test]
    fn test_units() -> Result<(), RingCipherError> {
        assert_eq!(Zm::try_with(11)?.units(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(Zm::try_with(6)?.units(), &[1, 5]);
        assert_eq!(Zm::try_with(2)?.units(), &[1]);
        Ok(())
    }

    #[test]
    fn test_element_normalization() -> Result<(), RingCipherError> {
        let ring = Zm::try_with(11)?;
        assert_eq!(ring.normalize(5), 5);
        assert_eq!(ring.normalize(16), 5);
        assert_eq!(ring.normalize(-6), 5);
        assert_eq!(ring.normalize(i64::MIN), ring.normalize(i64::MIN % 11));
        Ok(())
    }

    #[test]
    fn test_addition() -> Result<(), RingCipherError> {
        let ring = Zm::try_with(11)?;
        assert_eq!(ring.add(5, 8), 2);
        assert_eq!(ring.add(10, 1), 0);
        Ok(())
    }

    #[test]
    fn test_multiplication() -> Result<(), RingCipherError> {
        let ring = Zm::try_with(11)?;
        assert_eq!(ring.mul(5, 8), 7);
        assert_eq!(ring.mul(0, 8), 0);
        Ok(())
    }

    #[test]
    fn test_negation() -> Result<(), RingCipherError> {
        let ring = Zm::try_with(11)?;
        assert_eq!(ring.neg(5), 6);
        assert_eq!(ring.neg(0), 0);
        Ok(())
    }

    #[test]
    fn test_inversion() -> Result<(), RingCipherError> {
        let ring = Zm::try_with(11)?;
        assert_eq!(ring.inv(5), Some(9));
        assert_eq!(ring.inv(3), Some(4));
        assert_eq!(ring.inv(4), Some(3));

        let ring = Zm::try_with(6)?;
        assert_eq!(ring.inv(2), None);
        assert_eq!(ring.inv(3), None);
        assert_eq!(ring.inv(5), Some(5));
        Ok(())
    }

    #[test]
    fn test_congruent() -> Result<(), RingCipherError> {
        let ring = Zm::try_with(7)?;
        assert!(ring.congruent(3, 10));
        assert!(ring.congruent(-4, 3));
        assert!(!ring.congruent(1, 2));
        Ok(())
    }

    #[quickcheck]
    fn prop_add_matches_integer_sum(m: u16, x: u16, y: u16) -> bool {
        let m = m as u64 + 2;
        let Ok(ring) = Zm::try_with(m) else {
            return false;
        };
        let (x, y) = (x as u64 % m, y as u64 % m);
        let sum = ring.add(x, y);
        sum == (x + y) % m && sum < m
    }

    #[quickcheck]
    fn prop_units_have_inverses(m: u16) -> bool {
        let m = m as u64 % 500 + 2;
        let Ok(ring) = Zm::try_with(m) else {
            return false;
        };
        ring.units()
            .iter()
            .all(|&x| ring.inv(x).is_some_and(|y| ring.mul(x, y) == 1))
    }

    #[quickcheck]
    fn prop_non_units_have_no_inverse(m: u16, x: u16) -> bool {
        let m = m as u64 % 500 + 2;
        let Ok(ring) = Zm::try_with(m) else {
            return false;
        };
        let x = x as u64 % m;
        (num_integer::gcd(x, m) == 1) == ring.inv(x).is_some()
    }
}
