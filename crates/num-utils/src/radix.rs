use crate::CheckedMulAdd;

/// Splitting machine words into positional digits of an arbitrary radix
pub trait Radix: Sized + Copy {
    /// Digits of `self` in `base`, least significant first.
    /// Zero yields no digits at all.
    ///
    /// # Panics
    ///
    /// If `base < 2`.
    fn radix_digits(self, base: u32) -> RadixDigits<Self>;

    /// Inverse of [`radix_digits`](Radix::radix_digits), but most significant digit first.
    /// Returns `None` on overflow.
    fn from_radix_digits<I>(digits: I, base: u32) -> Option<Self>
    where
        I: IntoIterator<Item = u32>;
}

pub struct RadixDigits<T> {
    rest: T,
    base: T,
}

macro_rules! impl_radix {
    ($($t:ty),+) => {$(
        impl Radix for $t {
            #[inline]
            fn radix_digits(self, base: u32) -> RadixDigits<Self> {
                assert!(base >= 2, "radix must be at least 2");
                RadixDigits {
                    rest: self,
                    base: base.into(),
                }
            }

            fn from_radix_digits<I>(digits: I, base: u32) -> Option<Self>
            where
                I: IntoIterator<Item = u32>,
            {
                digits
                    .into_iter()
                    .try_fold(0, |acc: Self, d| acc.checked_mul_add(base.into(), d.into()))
            }
        }

        impl Iterator for RadixDigits<$t> {
            type Item = u32;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                if self.rest == 0 {
                    return None;
                }
                let digit = self.rest % self.base;
                self.rest /= self.base;
                // digit < base <= u32::MAX
                Some(digit.try_into().unwrap_or_else(|_| unreachable!()))
            }
        }
    )+};
}
impl_radix!(u64, u128);
