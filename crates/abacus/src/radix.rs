use tracing::trace;

use crate::{Abacus, Digit, Error, digits::Sparse};

impl Abacus {
    /// Same value in `new_base`, keeping about as many fractional digits
    /// as the current precision resolves
    pub fn convert_base(&self, new_base: u32) -> Result<Self, Error> {
        Self::check_base(new_base)?;
        self.convert_base_with(new_base, fraction_digits(self.precision, self.base, new_base))
    }

    /// Same value in `new_base` with at most `max_fraction_digits`
    /// fractional digits, cut toward zero. The integer part is always exact.
    ///
    /// The precision of the result is the number of fractional digits
    /// produced.
    pub fn convert_base_with(
        &self,
        new_base: u32,
        max_fraction_digits: u32,
    ) -> Result<Self, Error> {
        Self::check_base(new_base)?;
        Self::check_precision(max_fraction_digits)?;
        if new_base == self.base {
            return self.truncate(self.precision.min(max_fraction_digits));
        }

        // Horner over the nonzero integer digits, multiplying out the gaps
        let radix = Self::from_u64(self.base.into(), new_base)?;
        let mut integer = Self::zero(new_base);
        let mut previous = None;
        for (e, d) in self.digits().rev().take_while(|(e, _)| *e >= 0) {
            if let Some(previous) = previous {
                integer = integer.try_mul(&radix.pow(e.abs_diff(previous))?)?;
            }
            integer = integer.try_add(&Self::from_u64(d.into(), new_base)?)?;
            previous = Some(e);
        }
        if let Some(last) = previous {
            integer = integer.try_mul(&radix.pow(last.unsigned_abs())?)?;
        }

        let mut fraction = self.magnitude().fraction_part()?;
        let mut digits: Vec<(i64, Digit)> = Vec::new();
        for e in 1..=max_fraction_digits {
            if fraction.is_zero() {
                break;
            }
            fraction = fraction.mul_small(new_base)?;
            let digit = fraction.integer_part();
            fraction = fraction.try_sub(&digit)?;
            digits.try_reserve(1)?;
            digits.push((-i64::from(e), Digit::try_from(digit.to_u64()?)?));
        }
        if !fraction.is_zero() {
            trace!(max_fraction_digits, new_base, "fraction cut during base conversion");
        }

        let precision = u32::try_from(digits.len())?;
        let entries = digits
            .into_iter()
            .rev()
            .chain(integer.digits().map(|(e, d)| (e.into(), d)));
        let sparse = Sparse::from_entries(entries)?;
        Self::from_parts(new_base, self.negative, precision, sparse)
    }
}

/// Digits of base `to` resolving `precision` digits of base `from`,
/// `⌈precision · ln from / ln to⌉`
#[allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn fraction_digits(precision: u32, from: u32, to: u32) -> u32 {
    if precision == 0 {
        return 0;
    }
    let digits = f64::from(precision) * f64::from(from).ln() / f64::from(to).ln();
    digits.ceil().min(f64::from(Abacus::MAX_PRECISION)) as u32
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn v(s: &str) -> Abacus {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("2,5,5 (base 10)", 16, "15,15 (base 16)")]
    #[case("2,5,5 (base 10)", 2, "1,1,1,1,1,1,1,1 (base 2)")]
    #[case("-1,0,0,0 (base 10)", 7, "-2,6,2,6 (base 7)")]
    #[case("0 (base 10)", 3, "0 (base 3)")]
    #[case(
        "1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0 (base 10)",
        1_000_000_000,
        "100,0,0 (base 1000000000)"
    )]
    #[case("1,0.1 (base 2)", 10, "2.5 (base 10)")]
    #[case("0.5 (base 10)", 2, "0.1 (base 2)")]
    #[case("0.1 (base 10)", 2, "0.0,0,0,1 (base 2)")]
    #[case("0.1 (base 3)", 10, "0.3 (base 10)")]
    #[case("1.2,3 (base 10)", 10, "1.2,3 (base 10)")]
    fn convert(#[case] value: &str, #[case] base: u32, #[case] expected: &str) {
        assert_eq!(v(value).convert_base(base).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case("0.1 (base 3)", 10, 6, "0.3,3,3,3,3,3 (base 10)")]
    #[case("0.1 (base 10)", 2, 8, "0.0,0,0,1,1,0,0,1 (base 2)")]
    #[case("1.5 (base 10)", 2, 0, "1 (base 2)")]
    #[case("1.2,3,4 (base 10)", 10, 2, "1.2,3 (base 10)")]
    fn convert_with_cap(
        #[case] value: &str,
        #[case] base: u32,
        #[case] cap: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(v(value).convert_base_with(base, cap).unwrap().to_string(), expected);
    }

    #[rstest]
    fn integer_roundtrip(
        #[values(0, 1, 255, 1_000_000_007, u64::MAX)] value: u64,
        #[values(2, 3, 10, 16, 60, u32::MAX)] base: u32,
    ) {
        let original = Abacus::from_u64(value, 10).unwrap();
        let converted = original.convert_base(base).unwrap();
        assert_eq!(converted.to_u64().unwrap(), value);
        assert_eq!(converted.convert_base(10).unwrap(), original);
    }

    #[test]
    fn invalid_base() {
        let value = Abacus::from_u64(5, 10).unwrap();
        assert_eq!(value.convert_base(1).unwrap_err(), Error::InvalidBase(1));
        assert_eq!(value.convert_base_with(0, 4).unwrap_err(), Error::InvalidBase(0));
    }

    #[rstest]
    #[case(0, 10, 2, 0)]
    #[case(1, 10, 2, 4)]
    #[case(3, 2, 10, 1)]
    #[case(2, 3, 10, 1)]
    #[case(10, 2, 3, 7)]
    fn fraction_cap(
        #[case] precision: u32,
        #[case] from: u32,
        #[case] to: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(fraction_digits(precision, from, to), expected);
    }
}
