use core::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};
use tracing::trace;

use crate::{
    Abacus, Digit, Error, Layout,
    digits::{Dense, Sparse},
};

impl Abacus {
    pub fn try_add(&self, rhs: &Self) -> Result<Self, Error> {
        self.add_signed(rhs, rhs.negative)
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, Error> {
        self.add_signed(rhs, !rhs.negative)
    }

    /// `self + (±|rhs|)`
    fn add_signed(&self, rhs: &Self, rhs_negative: bool) -> Result<Self, Error> {
        let base = self.same_base(rhs)?;
        let precision = self.precision.max(rhs.precision);

        if rhs.is_zero() {
            return Self::from_parts(base, self.negative, precision, self.digits.clone());
        }
        if self.is_zero() {
            return Self::from_parts(base, rhs_negative, precision, rhs.digits.clone());
        }

        let word_sum = (self.negative == rhs_negative)
            .then(|| self.word().zip(rhs.word()))
            .flatten()
            .and_then(|(a, b)| a.checked_add(b));
        if let Some(sum) = word_sum {
            return Self::from_word(base, self.negative, sum, precision);
        }
        // a sparse span may be far wider than its digit count
        if self.layout() == Layout::Sparse || rhs.layout() == Layout::Sparse {
            trace!("merging digits sparsely");
            return if self.negative == rhs_negative {
                self.sparse_sum(rhs, precision)
            } else {
                self.sparse_difference(rhs, rhs_negative, precision)
            };
        }
        self.aligned_sum(rhs, rhs_negative, precision)
    }

    /// Merges the nonzero digits of two magnitudes, keeping the sign of `self`
    fn sparse_sum(&self, rhs: &Self, precision: u32) -> Result<Self, Error> {
        let base = u64::from(self.base);
        let (a, b) = (self.digits.to_sparse()?, rhs.digits.to_sparse()?);

        let mut entries = Vec::new();
        entries.try_reserve(a.entries().len() + b.entries().len() + 1)?;
        // exponent owed a carry of one
        let mut carry: Option<i64> = None;
        for item in a
            .entries()
            .iter()
            .merge_join_by(b.entries(), |(ea, _), (eb, _)| ea.cmp(eb))
        {
            let (e, mut sum) = match item {
                EitherOrBoth::Both((e, x), (_, y)) => (*e, u64::from(*x) + u64::from(*y)),
                EitherOrBoth::Left((e, x)) | EitherOrBoth::Right((e, x)) => (*e, u64::from(*x)),
            };
            let e = i64::from(e);
            match carry.take() {
                Some(c) if c == e => sum += 1,
                Some(c) => entries.push((c, 1)),
                None => {}
            }
            if sum >= base {
                sum -= base;
                carry = Some(e + 1);
            }
            entries.push((e, Digit::try_from(sum)?));
        }
        entries.extend(carry.map(|c| (c, 1)));

        Self::from_parts(
            self.base,
            self.negative,
            precision,
            Sparse::from_entries(entries)?,
        )
    }

    /// `|larger| - |smaller|` over nonzero digits. A borrow crossing a gap
    /// turns every zero in it into `base - 1`.
    fn sparse_difference(
        &self,
        rhs: &Self,
        rhs_negative: bool,
        precision: u32,
    ) -> Result<Self, Error> {
        let base = u64::from(self.base);
        let (larger, smaller, negative) = match self.magnitude_cmp(rhs) {
            Ordering::Equal => return Self::from_parts(self.base, false, precision, Dense::zero()),
            Ordering::Greater => (self, rhs, self.negative),
            Ordering::Less => (rhs, self, rhs_negative),
        };
        let (a, b) = (larger.digits.to_sparse()?, smaller.digits.to_sparse()?);

        let mut entries = Vec::new();
        entries.try_reserve(a.entries().len() + b.entries().len())?;
        // lowest exponent owing a borrow of one
        let mut borrow: Option<i64> = None;
        for item in a
            .entries()
            .iter()
            .merge_join_by(b.entries(), |(ea, _), (eb, _)| ea.cmp(eb))
        {
            let (e, x, mut y) = match item {
                EitherOrBoth::Both((e, x), (_, y)) => (*e, u64::from(*x), u64::from(*y)),
                EitherOrBoth::Left((e, x)) => (*e, u64::from(*x), 0),
                EitherOrBoth::Right((e, y)) => (*e, 0, u64::from(*y)),
            };
            let e = i64::from(e);
            if let Some(c) = borrow.take() {
                let gap = usize::try_from(e - c)?;
                entries.try_reserve(gap)?;
                entries.extend((c..e).map(|g| (g, self.base - 1)));
                y += 1;
            }
            let digit = if x >= y {
                x - y
            } else {
                borrow = Some(e + 1);
                x + base - y
            };
            entries.push((e, Digit::try_from(digit)?));
        }
        debug_assert_eq!(borrow, None, "smaller magnitude exceeds larger");

        Self::from_parts(self.base, negative, precision, Sparse::from_entries(entries)?)
    }

    /// Digit-wise addition or subtraction over buffers aligned by exponent
    fn aligned_sum(&self, rhs: &Self, rhs_negative: bool, precision: u32) -> Result<Self, Error> {
        let base = u64::from(self.base);
        let lo = i64::from(self.min_exponent().min(rhs.min_exponent()));
        // one spare slot for the final carry
        let hi = i64::from(self.max_exponent().max(rhs.max_exponent())) + 1;
        let len = usize::try_from(hi - lo + 1)?;

        if self.negative == rhs_negative {
            let mut slots = self.digits.aligned(lo, len)?;
            let mut carry = 0;
            for (slot, d) in slots.iter_mut().zip(rhs.digits.aligned(lo, len)?) {
                let t = u64::from(*slot) + u64::from(d) + carry;
                (*slot, carry) = if t >= base {
                    (Digit::try_from(t - base)?, 1)
                } else {
                    (Digit::try_from(t)?, 0)
                };
            }
            debug_assert_eq!(carry, 0);
            return Self::from_parts(
                self.base,
                self.negative,
                precision,
                Dense::from_slots(lo, slots)?,
            );
        }

        let (larger, smaller, negative) = match self.magnitude_cmp(rhs) {
            Ordering::Equal => return Self::from_parts(self.base, false, precision, Dense::zero()),
            Ordering::Greater => (self, rhs, self.negative),
            Ordering::Less => (rhs, self, rhs_negative),
        };
        let mut slots = larger.digits.aligned(lo, len)?;
        let mut borrow = 0;
        for (slot, d) in slots.iter_mut().zip(smaller.digits.aligned(lo, len)?) {
            let subtrahend = u64::from(d) + borrow;
            (*slot, borrow) = if u64::from(*slot) >= subtrahend {
                (Digit::try_from(u64::from(*slot) - subtrahend)?, 0)
            } else {
                (Digit::try_from(u64::from(*slot) + base - subtrahend)?, 1)
            };
        }
        debug_assert_eq!(borrow, 0);
        Self::from_parts(self.base, negative, precision, Dense::from_slots(lo, slots)?)
    }
}
