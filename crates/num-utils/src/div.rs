pub trait CheckedDivRem<RHS = Self>: Sized {
    /// Truncating quotient and remainder, or `None` when `rhs` is zero
    fn checked_div_rem(self, rhs: RHS) -> Option<(Self, Self)>;
}

macro_rules! impl_checked_div_rem {
    ($($t:ty),+) => {$(
        impl CheckedDivRem for $t {
            #[inline]
            fn checked_div_rem(self, rhs: Self) -> Option<(Self, Self)> {
                Some((self.checked_div(rhs)?, self.checked_rem(rhs)?))
            }
        }
    )+};
}
impl_checked_div_rem!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1000, 7, Some((142, 6)))]
    #[case(6, 7, Some((0, 6)))]
    #[case(0, 3, Some((0, 0)))]
    #[case(5, 0, None)]
    fn div_rem(#[case] a: u64, #[case] b: u64, #[case] expected: Option<(u64, u64)>) {
        assert_eq!(a.checked_div_rem(b), expected);
    }
}
