use core::cmp::Ordering;

use crystal_num_utils::CheckedDivRem;
use tracing::debug;

use crate::{Abacus, Error, digits::Dense};

impl Abacus {
    /// Truncating division: `self = q·rhs + r` with `|r| < |rhs|`.
    ///
    /// The quotient `q` is an integer with the sign of `self · rhs`, the
    /// remainder `r` takes the sign of `self` and the wider precision of
    /// both operands.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), Error> {
        let base = self.same_base(rhs)?;
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let precision = self.precision.max(rhs.precision);
        let negative = self.negative != rhs.negative;

        if self.is_zero() {
            return Ok((
                Self::zero(base),
                Self::from_parts(base, false, precision, Dense::zero())?,
            ));
        }
        if let Some((q, r)) = self
            .word()
            .zip(rhs.word())
            .and_then(|(a, b)| a.checked_div_rem(b))
        {
            return Ok((
                Self::from_word(base, negative, q, 0)?,
                Self::from_word(base, self.negative, r, precision)?,
            ));
        }
        self.long_div_rem(rhs, negative, precision)
    }

    /// Scales both operands to integers and binary searches the quotient
    fn long_div_rem(
        &self,
        rhs: &Self,
        negative: bool,
        precision: u32,
    ) -> Result<(Self, Self), Error> {
        let scale = self.min_exponent().min(rhs.min_exponent()).min(0).unsigned_abs();
        let dividend = self.magnitude().try_shl(scale)?;
        let divisor = rhs.magnitude().try_shl(scale)?;

        if dividend.magnitude_cmp(&divisor) == Ordering::Less {
            return Ok((Self::zero(self.base), self.with_precision_floor(precision)?));
        }

        // |A| / base^max_exponent(B) bounds the quotient from above
        let one = Self::from_word(self.base, false, 1, 0)?;
        let mut lo = one.clone();
        let mut hi = dividend
            .try_shr(divisor.max_exponent().unsigned_abs())?
            .integer_part();
        let mut iterations = 0u32;
        while lo.magnitude_cmp(&hi) == Ordering::Less {
            iterations += 1;
            let (mid, _) = lo.try_add(&hi)?.try_add(&one)?.div_small(2)?;
            if divisor.try_mul(&mid)?.magnitude_cmp(&dividend) == Ordering::Greater {
                hi = mid.try_sub(&one)?;
            } else {
                lo = mid;
            }
        }
        debug!(iterations, "long division converged");

        let remainder = dividend
            .try_sub(&divisor.try_mul(&lo)?)?
            .try_shr(scale)?
            .with_sign(self.negative)
            .with_precision_floor(precision)?;
        Ok((lo.with_sign(negative), remainder))
    }

    /// Quotient of [`div_rem`](Self::div_rem)
    #[inline]
    pub fn div_trunc(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// Remainder of [`div_rem`](Self::div_rem)
    #[inline]
    pub fn try_rem(&self, rhs: &Self) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Quotient to `precision` fractional digits, truncated toward zero
    pub fn div_fractional(&self, rhs: &Self, precision: u32) -> Result<Self, Error> {
        self.try_shl(precision)?.div_trunc(rhs)?.try_shr(precision)
    }

    /// Integer part of `|self| / k` with sign kept, and the remainder
    pub(crate) fn div_small(&self, k: u32) -> Result<(Self, u32), Error> {
        if k == 0 {
            return Err(Error::DivisionByZero);
        }
        if self.max_exponent() < 0 || self.is_zero() {
            return Ok((Self::zero(self.base), 0));
        }
        let base = u64::from(self.base);
        let k = u64::from(k);
        let len = usize::try_from(self.max_exponent())? + 1;
        let mut slots = self.digits.aligned(0, len)?;
        let mut rest = 0u64;
        for slot in slots.iter_mut().rev() {
            let t = rest * base + u64::from(*slot);
            (*slot, rest) = (u32::try_from(t / k)?, t % k);
        }
        let quotient = Dense::from_slots(0, slots)?;
        Ok((
            Self::from_parts(self.base, self.negative, 0, quotient)?,
            u32::try_from(rest)?,
        ))
    }

    /// Same value with the precision floor raised to at least `precision`
    pub(crate) fn with_precision_floor(&self, precision: u32) -> Result<Self, Error> {
        let mut value = self.clone();
        if value.precision < precision {
            value.set_precision(precision)?;
        }
        Ok(value)
    }
}
