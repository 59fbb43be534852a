use arbitrary::{Arbitrary, Result, Unstructured};

use crate::{Abacus, Digit, Exponent};

impl Abacus {
    const ARBITRARY_MAX_BASE: u32 = 256;
    const ARBITRARY_MAX_PRECISION: Exponent = 8;
    const ARBITRARY_MAX_DIGITS: usize = 16;
}

impl<'a> Arbitrary<'a> for Abacus {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let base = u.int_in_range(Self::MIN_BASE..=Self::ARBITRARY_MAX_BASE)?;
        let negative = u.arbitrary()?;
        let floor = -u.int_in_range(0..=Self::ARBITRARY_MAX_PRECISION)?;
        let len = u.int_in_range(0..=Self::ARBITRARY_MAX_DIGITS)?;

        // consecutive positions from the precision floor up, so no duplicates
        let digits = (floor..)
            .take(len)
            .map(|e| Ok((e, u.int_in_range::<Digit>(0..=base - 1)?)))
            .collect::<Result<Vec<_>>>()?;
        let mut value = Self::from_digits(base, negative, digits)
            .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        value
            .set_precision(floor.unsigned_abs())
            .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        Ok(value)
    }

    fn size_hint(_depth: usize) -> (usize, Option<usize>) {
        (4, None)
    }
}
