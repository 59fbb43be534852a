//! Modular arithmetic over integral values.
//!
//! Results are always reduced into `[0, |m|)`.

use crate::{Abacus, Error};

impl Abacus {
    /// Least non-negative remainder of `self` modulo `|m|`
    pub fn rem_euclid(&self, m: &Self) -> Result<Self, Error> {
        self.check_integer()?;
        m.check_integer()?;
        let r = self.try_rem(m)?;
        if r.negative {
            return r.try_add(&m.magnitude());
        }
        Ok(r)
    }

    pub fn mod_add(&self, rhs: &Self, m: &Self) -> Result<Self, Error> {
        rhs.check_integer()?;
        self.try_add(rhs)?.rem_euclid(m)
    }

    pub fn mod_sub(&self, rhs: &Self, m: &Self) -> Result<Self, Error> {
        rhs.check_integer()?;
        self.try_sub(rhs)?.rem_euclid(m)
    }

    pub fn mod_mul(&self, rhs: &Self, m: &Self) -> Result<Self, Error> {
        rhs.check_integer()?;
        self.try_mul(rhs)?.rem_euclid(m)
    }

    /// `self^exp mod |m|`, scanning the digits of `exp` from the top.
    ///
    /// `exp` may be written in any base.
    pub fn mod_pow(&self, exp: &Self, m: &Self) -> Result<Self, Error> {
        exp.check_integer()?;
        if exp.negative {
            return Err(Error::NegativeOperand);
        }
        let x = self.rem_euclid(m)?;
        let mut result = Self::one(self.base)?.rem_euclid(m)?;
        for e in (0..=exp.max_exponent()).rev() {
            result = result.mod_pow_small(exp.base, m)?;
            result = result.mod_mul(&x.mod_pow_small(exp.digit(e), m)?, m)?;
        }
        Ok(result)
    }

    /// `self^k mod |m|` by repeated squaring
    fn mod_pow_small(&self, k: u32, m: &Self) -> Result<Self, Error> {
        let mut result = Self::one(self.base)?.rem_euclid(m)?;
        let mut square = self.rem_euclid(m)?;
        let mut k = k;
        while k > 0 {
            if k & 1 == 1 {
                result = result.mod_mul(&square, m)?;
            }
            k >>= 1;
            if k > 0 {
                square = square.mod_mul(&square, m)?;
            }
        }
        Ok(result)
    }

    /// `x` in `[0, |m|)` with `self · x ≡ 1 (mod m)`
    pub fn mod_inverse(&self, m: &Self) -> Result<Self, Error> {
        let modulus = m.magnitude();
        let (mut old_r, mut r) = (self.rem_euclid(m)?, modulus.clone());
        let (mut old_s, mut s) = (Self::one(self.base)?, Self::zero(self.base));
        while !r.is_zero() {
            let q = old_r.div_trunc(&r)?;
            let next_r = old_r.try_sub(&q.try_mul(&r)?)?;
            let next_s = old_s.try_sub(&q.try_mul(&s)?)?;
            old_r = core::mem::replace(&mut r, next_r);
            old_s = core::mem::replace(&mut s, next_s);
        }
        if !old_r.is_one() {
            return Err(Error::NotInvertible);
        }
        old_s.rem_euclid(&modulus)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn int(value: i64) -> Abacus {
        Abacus::from_i64(value, 10).unwrap()
    }

    #[rstest]
    #[case(-7, 3, 2)]
    #[case(7, -3, 1)]
    #[case(-7, -3, 2)]
    #[case(6, 3, 0)]
    #[case(0, 5, 0)]
    fn rem_euclid(#[case] a: i64, #[case] m: i64, #[case] expected: i64) {
        assert_eq!(int(a).rem_euclid(&int(m)).unwrap(), int(expected));
        assert_eq!(a.rem_euclid(m.abs()), expected);
    }

    #[test]
    fn add_sub_mul() {
        let m = int(7);
        assert_eq!(int(5).mod_add(&int(9), &m).unwrap(), int(0));
        assert_eq!(int(2).mod_sub(&int(5), &m).unwrap(), int(4));
        assert_eq!(int(4).mod_mul(&int(5), &m).unwrap(), int(6));
        assert_eq!(int(-4).mod_mul(&int(5), &m).unwrap(), int(1));
    }

    #[rstest]
    #[case(4, 13, 497, 445)]
    #[case(2, 10, 1000, 24)]
    #[case(3, 0, 7, 1)]
    #[case(0, 0, 7, 1)]
    #[case(5, 3, 1, 0)]
    #[case(-2, 3, 5, 2)]
    #[case(7, 1_000_000, 13, 9)]
    fn mod_pow(#[case] a: i64, #[case] exp: u64, #[case] m: i64, #[case] expected: i64) {
        let result = int(a).mod_pow(&Abacus::from_u64(exp, 10).unwrap(), &int(m)).unwrap();
        assert_eq!(result, int(expected));
        let binary_exp = Abacus::from_u64(exp, 2).unwrap();
        assert_eq!(int(a).mod_pow(&binary_exp, &int(m)).unwrap(), int(expected));
    }

    #[rstest]
    #[case(3, 11, 4)]
    #[case(10, 17, 12)]
    #[case(-3, 11, 7)]
    #[case(5, 1, 0)]
    fn mod_inverse(#[case] a: i64, #[case] m: i64, #[case] expected: i64) {
        let inverse = int(a).mod_inverse(&int(m)).unwrap();
        assert_eq!(inverse, int(expected));
        assert_eq!(
            int(a).mod_mul(&inverse, &int(m)).unwrap(),
            int(1).rem_euclid(&int(m)).unwrap()
        );
    }

    #[test]
    fn invalid_operands() {
        assert_eq!(int(6).mod_inverse(&int(9)).unwrap_err(), Error::NotInvertible);
        assert_eq!(int(6).rem_euclid(&int(0)).unwrap_err(), Error::DivisionByZero);
        assert_eq!(
            int(2).mod_pow(&int(-1), &int(5)).unwrap_err(),
            Error::NegativeOperand
        );
        let half: Abacus = "0.5 (base 10)".parse().unwrap();
        assert_eq!(half.rem_euclid(&int(3)).unwrap_err(), Error::NotAnInteger);
        assert_eq!(int(3).mod_add(&half, &int(3)).unwrap_err(), Error::NotAnInteger);
    }
}
