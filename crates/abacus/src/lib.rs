//! Signed positional numbers with an arbitrary integer base.
//!
//! An [`Abacus`] is a set of weighted digits `digit · base^exponent` where
//! negative exponents hold fractional digits. Digits are kept either in a
//! contiguous [`Layout::Dense`] buffer or as a [`Layout::Sparse`] list of
//! nonzero entries, and every operation yields a normalized value whose
//! layout is chosen by [`LayoutPolicy`].
#[cfg(feature = "arbitrary")]
mod arbitrary;
mod cmp;
mod convert;
mod digits;
mod error;
mod fract;
mod integer;
mod layout;
mod modular;
mod ops;
mod radix;
mod str;

pub use self::{digits::Layout, error::*, layout::LayoutPolicy, str::*};

use self::digits::Digits;

/// Single positional digit, always less than the base
pub type Digit = u32;

/// Weight of a digit as a power of the base
pub type Exponent = i32;

/// Signed number in a fixed base, normalized after every operation
#[derive(Debug, Clone)]
pub struct Abacus {
    base: u32,
    negative: bool,
    /// Number of fractional digits the value is known to, see [`Abacus::precision`]
    precision: u32,
    digits: Digits,
}

impl Abacus {
    pub const MIN_BASE: u32 = 2;

    /// Largest supported precision, bounded by the exponent range
    pub const MAX_PRECISION: u32 = Exponent::MAX.unsigned_abs();

    /// Zero in the given base
    #[inline]
    pub fn new(base: u32) -> Result<Self, Error> {
        Self::check_base(base)?;
        Ok(Self::zero(base))
    }

    #[inline]
    pub(crate) const fn check_base(base: u32) -> Result<(), Error> {
        if base < Self::MIN_BASE {
            return Err(Error::InvalidBase(base));
        }
        Ok(())
    }

    /// Zero in an already validated base
    #[inline]
    pub(crate) fn zero(base: u32) -> Self {
        Self {
            base,
            negative: false,
            precision: 0,
            digits: Digits::zero(),
        }
    }

    /// Builds a normalized value with canonical layout
    pub(crate) fn from_parts(
        base: u32,
        negative: bool,
        precision: u32,
        digits: impl Into<Digits>,
    ) -> Result<Self, Error> {
        let mut value = Self {
            base,
            negative,
            precision,
            digits: digits.into(),
        };
        value.settle()?;
        Ok(value)
    }

    #[inline]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Zero is never negative
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    /// Integral values have no nonzero digit below exponent 0
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.is_zero() || self.digits.min_exponent() >= 0
    }

    /// Exponent of the lowest nonzero digit, 0 for zero
    #[inline]
    pub fn min_exponent(&self) -> Exponent {
        self.digits.min_exponent()
    }

    /// Exponent of the highest nonzero digit, 0 for zero
    #[inline]
    pub fn max_exponent(&self) -> Exponent {
        self.digits.max_exponent()
    }

    /// Nonzero `(exponent, digit)` pairs, ascending by exponent
    #[inline]
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = (Exponent, Digit)> + '_ {
        self.digits.iter()
    }

    /// Digit at `exponent`, 0 when absent
    #[inline]
    pub fn digit(&self, exponent: Exponent) -> Digit {
        self.digits.get(exponent)
    }

    /// Drops zero digits, restores exponent order and clears the sign of zero.
    /// Idempotent.
    pub fn normalize(&mut self) {
        self.digits.normalize();
        if self.digits.is_zero() {
            self.negative = false;
        }
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    #[inline]
    pub(crate) fn with_sign(mut self, negative: bool) -> Self {
        self.negative = negative && !self.is_zero();
        self
    }

    /// Magnitude with the same digits and no precision floor
    #[inline]
    pub(crate) fn magnitude(&self) -> Self {
        Self {
            negative: false,
            precision: 0,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, Err(Error::InvalidBase(0)))]
    #[case(1, Err(Error::InvalidBase(1)))]
    #[case(2, Ok(()))]
    #[case(u32::MAX, Ok(()))]
    fn bases(#[case] base: u32, #[case] expected: Result<(), Error>) {
        let zero = Abacus::new(base);
        assert_eq!(zero.as_ref().map(|_| ()).map_err(|e| *e), expected);
        if let Ok(zero) = zero {
            assert!(zero.is_zero());
            assert!(!zero.is_negative());
            assert_eq!(zero.base(), base);
            assert_eq!(zero.precision(), 0);
            assert_eq!(zero.digits().count(), 0);
            assert_eq!((zero.min_exponent(), zero.max_exponent()), (0, 0));
            assert_eq!(zero.layout(), Layout::Dense);
        }
    }

    #[test]
    fn normalize_clears_negative_zero() {
        let mut v = Abacus::from_i64(-120, 10).unwrap();
        assert_eq!(v.min_exponent(), 1);
        assert_eq!(v.digit(1), 2);
        v.set_precision(0).unwrap();
        v.normalize();
        assert!(v.is_negative());

        let mut z = Abacus::from_digits(10, true, [(0, 0), (-1, 0)]).unwrap();
        z.normalize();
        assert!(z.is_zero());
        assert!(!z.is_negative());
        z.normalize();
        assert!(z.is_zero());
    }

    #[test]
    fn abs() {
        let v = Abacus::from_i64(-42, 7).unwrap();
        assert_eq!(v.abs(), Abacus::from_u64(42, 7).unwrap());
        assert!(v.is_integer());
        assert!(!Abacus::from_f64(0.5, 2, 1).unwrap().is_integer());
    }
}
