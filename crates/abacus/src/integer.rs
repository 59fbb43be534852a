use core::cmp::Ordering;

use crate::{Abacus, Error};

impl Abacus {
    #[inline]
    pub(crate) fn check_integer(&self) -> Result<(), Error> {
        if !self.is_integer() {
            return Err(Error::NotAnInteger);
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn one(base: u32) -> Result<Self, Error> {
        Self::from_word(base, false, 1, 0)
    }

    #[inline]
    pub(crate) fn is_one(&self) -> bool {
        !self.negative && self.digits().eq([(0, 1)])
    }

    /// Greatest common divisor of both magnitudes, `gcd(0, 0) = 0`
    pub fn gcd(&self, other: &Self) -> Result<Self, Error> {
        self.same_base(other)?;
        self.check_integer()?;
        other.check_integer()?;

        let (mut a, mut b) = (self.magnitude(), other.magnitude());
        while !b.is_zero() {
            let r = a.try_rem(&b)?;
            a = b;
            b = r;
        }
        Ok(a)
    }

    /// Least common multiple of both magnitudes, zero if either is zero
    pub fn lcm(&self, other: &Self) -> Result<Self, Error> {
        let gcd = self.gcd(other)?;
        if gcd.is_zero() || self.is_zero() || other.is_zero() {
            return Ok(Self::zero(self.base));
        }
        self.magnitude().div_trunc(&gcd)?.try_mul(&other.magnitude())
    }

    pub fn is_coprime(&self, other: &Self) -> Result<bool, Error> {
        self.gcd(other).map(|gcd| gcd.is_one())
    }

    /// `self^exp` by repeated squaring, `x^0 = 1`.
    /// Fractional operands are allowed, the precision scales with `exp`.
    pub fn pow(&self, exp: u32) -> Result<Self, Error> {
        let mut result = Self::one(self.base)?;
        let mut square = self.clone();
        let mut n = exp;
        while n > 0 {
            if n & 1 == 1 {
                result = result.try_mul(&square)?;
            }
            n >>= 1;
            if n > 0 {
                square = square.try_mul(&square)?;
            }
        }
        Ok(result)
    }

    /// Largest integer `r` with `r² ≤ self`
    pub fn isqrt(&self) -> Result<Self, Error> {
        self.check_integer()?;
        if self.negative {
            return Err(Error::NegativeOperand);
        }
        if self.is_zero() {
            return Ok(Self::zero(self.base));
        }

        // base^(⌊m/2⌋ + 1) is above the root of anything below base^(m + 1)
        let n = self.integer_part();
        let mut x = Self::one(self.base)?.try_shl(n.max_exponent().unsigned_abs() / 2 + 1)?;
        loop {
            let (y, _) = x.try_add(&n.div_trunc(&x)?)?.div_small(2)?;
            if y.magnitude_cmp(&x) != Ordering::Less {
                return Ok(x);
            }
            x = y;
        }
    }

    /// Integer `k`-th root truncated toward zero.
    /// Odd roots of negative values are negative.
    pub fn nth_root(&self, k: u32) -> Result<Self, Error> {
        if k == 0 {
            return Err(Error::ZeroRootDegree);
        }
        self.check_integer()?;
        if self.negative && k % 2 == 0 {
            return Err(Error::NegativeOperand);
        }

        let n = self.integer_part().magnitude();
        let one = Self::one(self.base)?;
        let mut lo = Self::zero(self.base);
        let mut hi = one.try_shl(n.max_exponent().unsigned_abs() / k + 1)?;
        while lo.magnitude_cmp(&hi) == Ordering::Less {
            let (mid, _) = lo.try_add(&hi)?.try_add(&one)?.div_small(2)?;
            if mid.pow(k)?.magnitude_cmp(&n) == Ordering::Greater {
                hi = mid.try_sub(&one)?;
            } else {
                lo = mid;
            }
        }
        Ok(lo.with_sign(self.negative))
    }
}
