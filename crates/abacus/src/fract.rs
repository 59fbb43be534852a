use core::cmp::Ordering;

use crate::{Abacus, Error, Exponent};

impl Abacus {
    #[inline]
    pub(crate) fn check_precision(precision: u32) -> Result<(), Error> {
        if precision > Self::MAX_PRECISION {
            return Err(Error::PrecisionOutOfRange(precision.into()));
        }
        Ok(())
    }

    /// Lowest exponent allowed to hold a digit under `precision`
    #[inline]
    fn floor_exponent(precision: u32) -> Result<Exponent, Error> {
        Self::check_precision(precision)?;
        Ok(-Exponent::try_from(precision)?)
    }

    /// `value` in `base`, cut to `precision` fractional digits toward zero.
    ///
    /// Starts from the shortest decimal that reads back as `value`, so
    /// `0.3` keeps its digit 3 instead of the 2 of its binary expansion.
    pub fn from_f64(value: f64, base: u32, precision: u32) -> Result<Self, Error> {
        Self::check_base(base)?;
        Self::check_precision(precision)?;
        if !value.is_finite() {
            return Err(Error::NotFinite);
        }

        let mut converted = Self::shortest_decimal(value)?.convert_base_with(base, precision)?;
        converted.set_precision(precision)?;
        Ok(converted)
    }

    /// Base 10 digits of the shortest round-trip form of a finite `value`
    fn shortest_decimal(value: f64) -> Result<Self, Error> {
        // `{:e}` never prints more mantissa digits than reading back needs
        let text = format!("{:e}", value.abs());
        let (mantissa, exponent) = text.split_once('e').ok_or(Error::NotFinite)?;
        let exponent: Exponent = exponent.parse().map_err(|_| Error::NotFinite)?;
        let digits = mantissa
            .chars()
            .filter_map(|c| c.to_digit(10))
            .enumerate()
            .map(|(i, d)| Ok((exponent - Exponent::try_from(i)?, d)))
            .collect::<Result<Vec<_>, Error>>()?;
        Self::from_digits(10, value.is_sign_negative(), digits)
    }

    /// Nearest double, summing from the least significant digit
    pub fn to_f64(&self) -> f64 {
        let base = f64::from(self.base);
        let magnitude: f64 = self
            .digits()
            .map(|(e, d)| f64::from(d) * base.powi(e))
            .sum();
        if self.negative { -magnitude } else { magnitude }
    }

    /// Number of fractional digits the value is known to.
    ///
    /// Never less than `-min_exponent`, but may exceed it when trailing
    /// fractional zeros are significant, e.g. `1.50`.
    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Raises the precision with implicit zero digits, or lowers it
    /// dropping every digit past the new precision
    pub fn set_precision(&mut self, precision: u32) -> Result<(), Error> {
        let floor = Self::floor_exponent(precision)?;
        if precision < self.precision {
            self.digits.truncate_below(floor);
            self.normalize();
        }
        self.precision = precision;
        Ok(())
    }

    /// Cut to `precision` fractional digits toward zero
    pub fn truncate(&self, precision: u32) -> Result<Self, Error> {
        let mut truncated = self.clone();
        truncated.set_precision(precision)?;
        Ok(truncated)
    }

    /// Rounds to `precision` fractional digits, ties away from zero.
    ///
    /// The whole discarded tail is weighed against half a unit in the last
    /// place, which keeps ties exact in odd bases.
    pub fn round(&self, precision: u32) -> Result<Self, Error> {
        let floor = Self::floor_exponent(precision)?;
        let truncated = self.truncate(precision)?;
        if self.is_zero() || self.min_exponent() >= floor {
            return Ok(truncated);
        }

        let tail = self.magnitude().try_sub(&truncated.magnitude())?;
        let unit = Self::from_word(self.base, false, 1, 0)?.try_shr(precision)?;
        if tail.mul_small(2)?.magnitude_cmp(&unit) == Ordering::Less {
            return Ok(truncated);
        }
        truncated.try_add(&unit.with_sign(self.negative))
    }

    /// Digits at non-negative exponents, precision dropped
    #[must_use]
    pub fn integer_part(&self) -> Self {
        let mut integer = Self {
            precision: 0,
            ..self.clone()
        };
        integer.digits.truncate_below(0);
        integer.normalize();
        integer
    }

    /// `self - integer_part()`, same sign as `self`
    pub fn fraction_part(&self) -> Result<Self, Error> {
        self.try_sub(&self.integer_part())
    }
}
