pub trait CheckedMulAdd<RHS = Self>: Sized {
    /// `self * mul + add`, or `None` on overflow
    fn checked_mul_add(self, mul: RHS, add: RHS) -> Option<Self>;
}

macro_rules! impl_checked_mul_add {
    ($($t:ty),+) => {$(
        impl CheckedMulAdd for $t {
            #[inline]
            fn checked_mul_add(self, mul: Self, add: Self) -> Option<Self> {
                self.checked_mul(mul)?.checked_add(add)
            }
        }
    )+};
}
impl_checked_mul_add!(u8, u16, u32, u64, u128);
