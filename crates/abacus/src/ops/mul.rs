use std::collections::BTreeMap;

use crate::{
    Abacus, Digit, Error, Layout,
    digits::{Dense, Sparse, low_digit, zeroed},
};

impl Abacus {
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, Error> {
        let base = self.same_base(rhs)?;
        let precision = self
            .precision
            .checked_add(rhs.precision)
            .filter(|p| *p <= Self::MAX_PRECISION)
            .ok_or_else(|| {
                Error::PrecisionOutOfRange(u64::from(self.precision) + u64::from(rhs.precision))
            })?;
        let negative = self.negative != rhs.negative;

        if self.is_zero() || rhs.is_zero() {
            return Self::from_parts(base, false, precision, Dense::zero());
        }
        if let Some(product) = self
            .word()
            .zip(rhs.word())
            .and_then(|(a, b)| a.checked_mul(b))
        {
            return Self::from_word(base, negative, product, precision);
        }
        // a sparse span may be far wider than its digit count
        if self.layout() == Layout::Sparse || rhs.layout() == Layout::Sparse {
            return self.sparse_product(rhs, negative, precision);
        }
        self.schoolbook_product(rhs, negative, precision)
    }

    /// Pairwise digit products collected by exponent
    fn sparse_product(&self, rhs: &Self, negative: bool, precision: u32) -> Result<Self, Error> {
        let base = u128::from(self.base);
        let mut columns: BTreeMap<i64, u128> = BTreeMap::new();
        for (ea, da) in self.digits() {
            for (eb, db) in rhs.digits() {
                *columns.entry(i64::from(ea) + i64::from(eb)).or_default() +=
                    u128::from(da) * u128::from(db);
            }
        }

        let mut entries = Vec::new();
        while let Some((e, column)) = columns.pop_first() {
            let carry = column / base;
            if carry > 0 {
                *columns.entry(e + 1).or_default() += carry;
            }
            entries.try_reserve(1)?;
            entries.push((e, low_digit(column, base)));
        }

        Self::from_parts(self.base, negative, precision, Sparse::from_entries(entries)?)
    }

    /// One multiply-by-digit pass per nonzero digit of `rhs`
    fn schoolbook_product(&self, rhs: &Self, negative: bool, precision: u32) -> Result<Self, Error> {
        let lo = i64::from(self.min_exponent()) + i64::from(rhs.min_exponent());
        let width = usize::try_from(self.digits.span())?;
        let multiplicand = self.digits.aligned(self.min_exponent().into(), width)?;
        let mut slots = zeroed(width + usize::try_from(rhs.digits.span())? + 1)?;

        for (e, d) in rhs.digits() {
            let offset = usize::try_from(i64::from(e) - i64::from(rhs.min_exponent()))?;
            mul_digit_into(&mut slots[offset..], &multiplicand, d, self.base);
        }

        Self::from_parts(self.base, negative, precision, Dense::from_slots(lo, slots)?)
    }

    /// `|self| · k` keeping sign and precision, `k` may exceed the base
    pub(crate) fn mul_small(&self, k: u32) -> Result<Self, Error> {
        if k == 0 || self.is_zero() {
            return Self::from_parts(self.base, false, self.precision, Dense::zero());
        }
        if self.layout() == Layout::Sparse {
            let k = Self::from_u64(k.into(), self.base)?;
            return self.sparse_product(&k, self.negative, self.precision);
        }
        let lo = i64::from(self.min_exponent());
        let width = usize::try_from(self.digits.span())?;
        let multiplicand = self.digits.aligned(lo, width)?;
        // k < 2^32 never spills more than 32 digits
        let mut slots = zeroed(width + 33)?;
        mul_digit_into(&mut slots, &multiplicand, k, self.base);
        let dense = Dense::from_slots(lo, slots)?;
        Self::from_parts(self.base, self.negative, self.precision, dense)
    }
}

/// `acc += multiplicand · k`, carries propagated into `acc`
fn mul_digit_into(acc: &mut [Digit], multiplicand: &[Digit], k: u32, base: u32) {
    let base = u128::from(base);
    let k = u128::from(k);
    let mut carry = 0u128;
    let mut slots = acc.iter_mut();
    // `multiplicand` leads so the zip never pulls a slot it then drops
    for (d, slot) in multiplicand.iter().zip(slots.by_ref()) {
        let t = u128::from(*slot) + u128::from(*d) * k + carry;
        *slot = low_digit(t, base);
        carry = t / base;
    }
    for slot in slots {
        if carry == 0 {
            break;
        }
        let t = u128::from(*slot) + carry;
        *slot = low_digit(t, base);
        carry = t / base;
    }
    debug_assert_eq!(carry, 0, "product exceeds its buffer");
}
