use crate::errors::RingCipherError;
use crate::ring::Ring;

use num_integer::Integer;
use num_traits::{One, Zero};

use std::cmp::Ordering;
use std::fmt;
use std::ops;

/// A rational number `p/q` kept in lowest terms with `q > 0`.
///
/// Arithmetic is exact and done in `i128` before reducing back to `i64`.
///
/// # Panics
///
/// Arithmetic panics if a reduced result does not fit into `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frac {
    p: i64,
    q: i64,
}

impl Frac {
    /// Builds `p/q` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns `RingCipherError::InvalidParameters` if `q` is zero or the
    /// reduced fraction does not fit into `i64` (e.g. `i64::MIN / -1`).
    pub fn new(p: i64, q: i64) -> Result<Self, RingCipherError> {
        if q == 0 {
            return Err(RingCipherError::InvalidParameters(format!(
                "Denominator of {}/{} must not be zero",
                p, q
            )));
        }

        Self::try_reduced(p as i128, q as i128).ok_or_else(|| {
            RingCipherError::InvalidParameters(format!("{}/{} does not fit in i64", p, q))
        })
    }

    pub fn from_integer(p: i64) -> Self {
        Self { p, q: 1 }
    }

    pub fn numer(&self) -> i64 {
        self.p
    }

    pub fn denom(&self) -> i64 {
        self.q
    }

    /// Reduces `p/q` (with `q != 0`), or `None` if the result leaves `i64`.
    fn try_reduced(p: i128, q: i128) -> Option<Self> {
        let g = p.gcd(&q);
        let (mut p, mut q) = (p / g, q / g);
        if q < 0 {
            p = -p;
            q = -q;
        }

        Some(Self {
            p: i64::try_from(p).ok()?,
            q: i64::try_from(q).ok()?,
        })
    }

    fn reduced(p: i128, q: i128) -> Self {
        Self::try_reduced(p, q)
            .unwrap_or_else(|| panic!("Frac overflow: {}/{} does not fit in i64", p, q))
    }
}

impl ops::Add for Frac {
    type Output = Frac;

    fn add(self, rhs: Frac) -> Frac {
        let (a, b) = (self.p as i128, self.q as i128);
        let (c, d) = (rhs.p as i128, rhs.q as i128);
        Frac::reduced(a * d + c * b, b * d)
    }
}

impl ops::Sub for Frac {
    type Output = Frac;

    fn sub(self, rhs: Frac) -> Frac {
        self + (-rhs)
    }
}

impl ops::Mul for Frac {
    type Output = Frac;

    fn mul(self, rhs: Frac) -> Frac {
        Frac::reduced(
            self.p as i128 * rhs.p as i128,
            self.q as i128 * rhs.q as i128,
        )
    }
}

impl ops::Neg for Frac {
    type Output = Frac;

    fn neg(self) -> Frac {
        Frac::reduced(-(self.p as i128), self.q as i128)
    }
}

impl ops::Div for Frac {
    type Output = Frac;

    /// # Panics
    ///
    /// Panics when dividing by zero.
    fn div(self, rhs: Frac) -> Frac {
        match Ring::inv(&rhs) {
            Some(inv) => self * inv,
            None => panic!("Frac division by zero"),
        }
    }
}

impl TryFrom<f64> for Frac {
    type Error = RingCipherError;

    /// Converts the shortest decimal form of `r`, so `0.1` becomes `1/10`
    /// rather than the exact binary value.
    fn try_from(r: f64) -> Result<Self, Self::Error> {
        let invalid = || {
            RingCipherError::InvalidParameters(format!("{} is not a representable fraction", r))
        };
        if !r.is_finite() {
            return Err(invalid());
        }

        let s = r.to_string();
        let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), ""));
        let digits = u32::try_from(frac_part.len()).map_err(|_| invalid())?;
        let q = 10i128.checked_pow(digits).ok_or_else(invalid)?;
        let p: i128 = format!("{}{}", int_part, frac_part)
            .parse()
            .map_err(|_| invalid())?;

        Self::try_reduced(p, q).ok_or_else(invalid)
    }
}

impl Zero for Frac {
    fn zero() -> Self {
        Frac { p: 0, q: 1 }
    }

    fn is_zero(&self) -> bool {
        self.p == 0
    }
}

impl One for Frac {
    fn one() -> Self {
        Frac { p: 1, q: 1 }
    }
}

impl Ring for Frac {
    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    fn mul(&self, other: &Self) -> Self {
        *self * *other
    }

    fn neg(&self) -> Self {
        -*self
    }

    fn zero(&self) -> Self {
        <Frac as Zero>::zero()
    }

    fn inv(&self) -> Option<Self> {
        if self.p == 0 {
            return None;
        }
        Some(Frac::reduced(self.q as i128, self.p as i128))
    }

    fn one(&self) -> Self {
        <Frac as One>::one()
    }
}

impl PartialOrd for Frac {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frac {
    // Denominators are positive, so cross-multiplying keeps the order.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.p as i128 * other.q as i128).cmp(&(other.p as i128 * self.q as i128))
    }
}

impl fmt::Display for Frac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.q == 1 {
            write!(f, "{}", self.p)
        } else {
            write!(f, "{}/{}", self.p, self.q)
        }
    }
}
