use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{Abacus, Error};

impl Abacus {
    /// Common base of both operands
    #[inline]
    pub(crate) const fn same_base(&self, other: &Self) -> Result<u32, Error> {
        if self.base != other.base {
            return Err(Error::BaseMismatch(self.base, other.base));
        }
        Ok(self.base)
    }

    /// Compares absolute values
    #[inline]
    pub fn cmp_magnitude(&self, other: &Self) -> Result<Ordering, Error> {
        self.same_base(other)?;
        Ok(self.magnitude_cmp(other))
    }

    /// Walks both digit sets from the highest exponent down,
    /// an absent digit reads as zero.
    pub(crate) fn magnitude_cmp(&self, other: &Self) -> Ordering {
        self.digits.iter().rev().cmp(other.digits.iter().rev())
    }

    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, Error> {
        self.same_base(other)?;
        Ok(match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude_cmp(other),
            (true, true) => other.magnitude_cmp(self),
        })
    }

    /// `-1`, `0` or `1` as `self` is less than, equal to or greater than `other`
    #[inline]
    pub fn compare(&self, other: &Self) -> Result<i8, Error> {
        Ok(match self.try_cmp(other)? {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }
}

/// Values of different bases are never equal.
/// Neither precision nor layout take part in equality.
impl PartialEq for Abacus {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.negative == other.negative
            && self.digits.iter().eq(other.digits.iter())
    }
}

impl Eq for Abacus {}

impl Hash for Abacus {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.negative.hash(state);
        for digit in self.digits.iter() {
            digit.hash(state);
        }
    }
}

/// `None` for values of different bases
impl PartialOrd for Abacus {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::{Ordering::*, *};

    #[rstest]
    #[case("0 (base 10)", Equal, "0 (base 10)")]
    #[case("1 (base 10)", Greater, "0 (base 10)")]
    #[case("-1 (base 10)", Less, "0 (base 10)")]
    #[case("-1 (base 10)", Greater, "-2 (base 10)")]
    #[case("1,0,0 (base 10)", Greater, "9,9 (base 10)")]
    #[case("1,0,0 (base 10)", Less, "1,0,0.0,0,1 (base 10)")]
    #[case("0.5 (base 10)", Greater, "0.4,9,9,9 (base 10)")]
    #[case("1.0,0 (base 10)", Equal, "1 (base 10)")]
    #[case("-0.0,1 (base 10)", Greater, "-0.1 (base 10)")]
    #[case("1,1 (base 2)", Greater, "1,0.1,1 (base 2)")]
    fn cmp(#[case] a: &str, #[case] ord: Ordering, #[case] b: &str) {
        let a: Abacus = a.parse().unwrap();
        let b: Abacus = b.parse().unwrap();

        assert_eq!(a.try_cmp(&b).unwrap(), ord);
        assert_eq!(b.try_cmp(&a).unwrap(), ord.reverse(), "reverse ordering mismatch");
        assert_eq!(a.partial_cmp(&b), Some(ord));
        assert_eq!(a.compare(&b).unwrap().cmp(&0), ord);
        assert_eq!(a == b, ord == Equal);
    }

    #[test]
    fn magnitude_ignores_sign() {
        let a = Abacus::from_i64(-7, 10).unwrap();
        let b = Abacus::from_i64(5, 10).unwrap();
        assert_eq!(a.cmp_magnitude(&b).unwrap(), Greater);
        assert_eq!(a.try_cmp(&b).unwrap(), Less);
    }

    #[test]
    fn layout_independent() {
        let a = Abacus::from_u64(1_000_000_001, 10).unwrap();
        let mut b = a.clone();
        b.densify().unwrap();
        let mut c = a.clone();
        c.sparsify().unwrap();
        assert_eq!(b, c);
        assert_eq!(b.try_cmp(&c).unwrap(), Equal);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn base_mismatch() {
        let a = Abacus::from_u64(3, 10).unwrap();
        let b = Abacus::from_u64(3, 16).unwrap();
        assert_eq!(a.try_cmp(&b).unwrap_err(), Error::BaseMismatch(10, 16));
        assert_eq!(a.cmp_magnitude(&b).unwrap_err(), Error::BaseMismatch(10, 16));
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, b);
    }
}
