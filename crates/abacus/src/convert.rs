use crystal_num_utils::Radix;
use num_traits::ToPrimitive;

use crate::{
    Abacus, Digit, Error, Exponent,
    digits::{Dense, Sparse},
};

macro_rules! impl_from_unsigned {
    ($($from:ident($t:ty)),+) => {$(
        #[doc = concat!("Exact value of a `", stringify!($t), "` in `base`")]
        #[inline]
        pub fn $from(value: $t, base: u32) -> Result<Self, Error> {
            Self::from_magnitude(base, false, value.into())
        }
    )+};
}

macro_rules! impl_from_signed {
    ($($from:ident($t:ty)),+) => {$(
        #[doc = concat!("Exact value of an `", stringify!($t), "` in `base`")]
        #[inline]
        pub fn $from(value: $t, base: u32) -> Result<Self, Error> {
            Self::from_magnitude(base, value.is_negative(), value.unsigned_abs().into())
        }
    )+};
}

impl Abacus {
    impl_from_unsigned!(from_u64(u64), from_u128(u128));
    impl_from_signed!(from_i64(i64), from_i128(i128));

    /// Same as [`from_i64`](Self::from_i64)
    #[inline]
    pub fn from_integer(value: i64, base: u32) -> Result<Self, Error> {
        Self::from_i64(value, base)
    }

    fn from_magnitude(base: u32, negative: bool, magnitude: u128) -> Result<Self, Error> {
        Self::check_base(base)?;
        let slots = magnitude.radix_digits(base).collect();
        Self::from_parts(base, negative, 0, Dense::from_slots(0, slots)?)
    }

    /// Integral value from a machine word, for fast paths in validated bases
    pub(crate) fn from_word(
        base: u32,
        negative: bool,
        word: u64,
        precision: u32,
    ) -> Result<Self, Error> {
        let slots = word.radix_digits(base).collect();
        Self::from_parts(base, negative, precision, Dense::from_slots(0, slots)?)
    }

    /// Magnitude as a machine word, if integral and small enough
    pub(crate) fn word(&self) -> Option<u64> {
        if !self.is_integer() {
            return None;
        }
        self.integer_magnitude()
    }

    /// Magnitude of the integer part, most significant digit first
    fn integer_magnitude<T: Radix>(&self) -> Option<T> {
        let top = self.max_exponent();
        T::from_radix_digits((0..=top).rev().map(|e| self.digit(e)), self.base)
    }

    /// Builds a value from explicit `(exponent, digit)` pairs in any order.
    ///
    /// The precision is the number of fractional positions given,
    /// zero digits included.
    pub fn from_digits<I>(base: u32, negative: bool, digits: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Exponent, Digit)>,
    {
        Self::check_base(base)?;
        let mut entries: Vec<_> = digits.into_iter().collect();
        if let Some(&(_, digit)) = entries.iter().find(|(_, d)| *d >= base) {
            return Err(Error::DigitOutOfRange { digit, base });
        }
        entries.sort_unstable_by_key(|(e, _)| *e);
        if let Some(w) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(Error::DuplicateExponent(w[0].0));
        }
        let precision = entries
            .first()
            .map_or(0, |(e, _)| (*e).min(0).unsigned_abs());
        let sparse = Sparse::from_entries(entries.into_iter().map(|(e, d)| (e.into(), d)))?;
        Self::from_parts(base, negative, precision, sparse)
    }
}

macro_rules! impl_to_unsigned {
    ($($to:ident($t:ty)),+) => {$(
        #[doc = concat!("Integer part as `", stringify!($t), "`, truncated toward zero")]
        #[inline]
        pub fn $to(&self) -> Result<$t, Error> {
            let magnitude: $t = self.integer_magnitude().ok_or(Error::Overflow)?;
            if self.negative && magnitude != 0 {
                return Err(Error::Overflow);
            }
            Ok(magnitude)
        }
    )+};
}

macro_rules! impl_to_signed {
    ($($to:ident($t:ty, $u:ty)),+) => {$(
        #[doc = concat!("Integer part as `", stringify!($t), "`, truncated toward zero")]
        #[inline]
        pub fn $to(&self) -> Result<$t, Error> {
            let magnitude: $u = self.integer_magnitude().ok_or(Error::Overflow)?;
            if self.negative {
                <$t>::default()
                    .checked_sub_unsigned(magnitude)
                    .ok_or(Error::Overflow)
            } else {
                Ok(<$t>::try_from(magnitude)?)
            }
        }
    )+};
}

impl Abacus {
    impl_to_unsigned!(to_u64(u64), to_u128(u128));
    impl_to_signed!(to_i64(i64, u64), to_i128(i128, u128));
}

macro_rules! impl_try_from {
    ($($t:ty => $to:ident),+) => {$(
        impl TryFrom<&Abacus> for $t {
            type Error = Error;

            #[inline]
            fn try_from(value: &Abacus) -> Result<Self, Self::Error> {
                value.$to()
            }
        }
    )+};
}
impl_try_from!(u64 => to_u64, u128 => to_u128, i64 => to_i64, i128 => to_i128);

impl ToPrimitive for Abacus {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        Self::to_i64(self).ok()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        Self::to_u64(self).ok()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        Self::to_i128(self).ok()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        Self::to_u128(self).ok()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(Self::to_f64(self))
    }
}
