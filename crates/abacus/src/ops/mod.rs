//! Arithmetic on [`Abacus`] values.
//!
//! Every operation is available as a fallible method returning
//! [`Result`](crate::Error), as a [`num_traits`] checked operation returning
//! [`Option`], and as an operator that panics on error the way primitive
//! integer operators do.
mod add;
mod div;
mod mul;
mod shift;

use core::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub};

use crate::Abacus;

macro_rules! impl_binary_op {
    ($($op:ident::$method:ident, $checked:ident::$checked_method:ident => $try:ident),+) => {$(
        impl $checked for Abacus {
            #[inline]
            fn $checked_method(&self, v: &Self) -> Option<Self> {
                self.$try(v).ok()
            }
        }

        impl $op<&Abacus> for &Abacus {
            type Output = Abacus;

            /// # Panics
            ///
            /// On base mismatch, division by zero or exhausted exponent range.
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Abacus) -> Self::Output {
                self.$try(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl $op<&Self> for Abacus {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Self) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl $op for Abacus {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    )+};
}
impl_binary_op!(
    Add::add, CheckedAdd::checked_add => try_add,
    Sub::sub, CheckedSub::checked_sub => try_sub,
    Mul::mul, CheckedMul::checked_mul => try_mul,
    Div::div, CheckedDiv::checked_div => div_trunc,
    Rem::rem, CheckedRem::checked_rem => try_rem
);

impl Neg for Abacus {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        let negative = !self.negative;
        self.with_sign(negative)
    }
}

impl Neg for &Abacus {
    type Output = Abacus;

    #[inline]
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl CheckedNeg for Abacus {
    #[inline]
    fn checked_neg(&self) -> Option<Self> {
        Some(-self)
    }
}

macro_rules! impl_shift_op {
    ($($op:ident::$method:ident => $try:ident),+) => {$(
        impl $op<u32> for &Abacus {
            type Output = Abacus;

            /// # Panics
            ///
            /// When the shifted exponents leave the supported range.
            #[track_caller]
            #[inline]
            fn $method(self, rhs: u32) -> Self::Output {
                self.$try(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl $op<u32> for Abacus {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn $method(self, rhs: u32) -> Self::Output {
                (&self).$method(rhs)
            }
        }
    )+};
}
impl_shift_op!(Shl::shl => try_shl, Shr::shr => try_shr);

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::Error;

    fn v(s: &str) -> Abacus {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("1,2,3 (base 10)", "4,5,6 (base 10)", "5,7,9 (base 10)", "-3,3,3 (base 10)", "5,6,0,8,8 (base 10)")]
    #[case("1,0,0,0 (base 10)", "1 (base 10)", "1,0,0,1 (base 10)", "9,9,9 (base 10)", "1,0,0,0 (base 10)")]
    #[case("-7 (base 10)", "2 (base 10)", "-5 (base 10)", "-9 (base 10)", "-1,4 (base 10)")]
    #[case("1,0.1 (base 2)", "0.1 (base 2)", "1,1.0 (base 2)", "1,0.0 (base 2)", "1.0,1 (base 2)")]
    fn operators(
        #[case] a: &str,
        #[case] b: &str,
        #[case] sum: &str,
        #[case] difference: &str,
        #[case] product: &str,
    ) {
        let [a, b] = [a, b].map(v);
        assert_eq!(&a + &b, v(sum));
        assert_eq!(a.clone() - b.clone(), v(difference));
        assert_eq!(a.clone() * &b, v(product));
        assert_eq!(a.checked_add(&b), Some(v(sum)));
        assert_eq!(-(&b - &a), v(difference));
    }

    #[test]
    fn div_rem_operators() {
        let [a, b] = ["-1,0,0,0 (base 10)", "7 (base 10)"].map(v);
        assert_eq!(&a / &b, v("-1,4,2 (base 10)"));
        assert_eq!(&a % &b, v("-6 (base 10)"));
        assert_eq!(a.checked_div(&Abacus::new(10).unwrap()), None);
        assert_eq!(a.checked_rem(&Abacus::new(10).unwrap()), None);
    }

    #[test]
    fn shifts() {
        let five = Abacus::from_u64(5, 2).unwrap();
        assert_eq!(&five << 3, Abacus::from_u64(40, 2).unwrap());
        assert_eq!((five.clone() << 3) >> 3, five);
    }

    #[test]
    #[should_panic = "base mismatch: 10 vs 2"]
    fn mismatch_panics() {
        let _ = Abacus::from_u64(1, 10).unwrap() + Abacus::from_u64(1, 2).unwrap();
    }

    #[test]
    #[should_panic = "division by zero"]
    fn division_by_zero_panics() {
        let _ = Abacus::from_u64(1, 10).unwrap() / Abacus::new(10).unwrap();
    }

    #[test]
    fn checked_none_on_mismatch() {
        let a = Abacus::from_u64(1, 10).unwrap();
        let b = Abacus::from_u64(1, 3).unwrap();
        assert_eq!(a.checked_sub(&b), None);
        assert_eq!(a.checked_mul(&b), None);
        assert_eq!(a.try_mul(&b).unwrap_err(), Error::BaseMismatch(10, 3));
    }

    #[test]
    fn negation() {
        let zero = Abacus::new(10).unwrap();
        assert!(!(-zero.clone()).is_negative());
        assert_eq!(zero.checked_neg(), Some(zero));
        assert!((-Abacus::from_u64(3, 10).unwrap()).is_negative());
    }
}
