use core::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use thiserror::Error as ThisError;

use crate::{Abacus, Digit, Error, Exponent};

/// `[-]d,d,…[.d,d,…] (base N)` with every digit in decimal, most
/// significant first. Fractional digits are printed up to the precision.
impl Display for Abacus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }

        let top = self.max_exponent().max(0);
        write!(f, "{}", self.digit(top))?;
        for e in (0..top).rev() {
            write!(f, ",{}", self.digit(e))?;
        }

        let floor = Exponent::try_from(self.precision).map_err(|_| fmt::Error)?;
        for (i, e) in (-floor..0).rev().enumerate() {
            f.write_str(if i == 0 { "." } else { "," })?;
            write!(f, "{}", self.digit(e))?;
        }

        write!(f, " (base {})", self.base)
    }
}

impl FromStr for Abacus {
    type Err = ParseAbacusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, base) = s
            .strip_suffix(')')
            .and_then(|s| s.rsplit_once(" (base "))
            .ok_or(ParseAbacusError::InvalidFormat)?;
        let base = parse_decimal(base)?;
        let (negative, number) = number
            .strip_prefix('-')
            .map_or((false, number), |number| (true, number));
        let (integer, fraction) = number
            .split_once('.')
            .map_or((number, None), |(integer, fraction)| (integer, Some(fraction)));

        let integer = integer
            .split(',')
            .map(parse_decimal)
            .collect::<Result<Vec<_>, _>>()?;
        let fraction = fraction
            .map(|fraction| {
                fraction
                    .split(',')
                    .map(parse_decimal)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self::from_digits(base, negative, positioned(&integer, &fraction)?)?)
    }
}

impl Abacus {
    /// Parses conventional `[-]digits[.digits]` text, one character per
    /// digit as understood by [`char::to_digit`], so bases `2..=36`.
    ///
    /// The precision is the number of fractional characters.
    pub fn from_str_radix(s: &str, base: u32) -> Result<Self, ParseAbacusError> {
        if !(Self::MIN_BASE..=36).contains(&base) {
            return Err(Error::InvalidBase(base).into());
        }
        let (negative, number) = s.strip_prefix('-').map_or((false, s), |number| (true, number));
        let (integer, fraction) = number
            .split_once('.')
            .map_or((number, ""), |(integer, fraction)| (integer, fraction));
        if integer.is_empty() || (number.contains('.') && fraction.is_empty()) {
            return Err(ParseAbacusError::InvalidFormat);
        }

        let parse = |part: &str| {
            part.chars()
                .map(|c| c.to_digit(base).ok_or(ParseAbacusError::InvalidDigit(c)))
                .collect::<Result<Vec<_>, _>>()
        };
        let (integer, fraction) = (parse(integer)?, parse(fraction)?);
        Ok(Self::from_digits(base, negative, positioned(&integer, &fraction)?)?)
    }
}

/// Plain decimal number, no sign and no surrounding whitespace
fn parse_decimal(s: &str) -> Result<u32, ParseAbacusError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseAbacusError::InvalidFormat);
    }
    Ok(s.parse()?)
}

/// Attaches exponents to most-significant-first integer and fraction digits
fn positioned(
    integer: &[Digit],
    fraction: &[Digit],
) -> Result<Vec<(Exponent, Digit)>, ParseAbacusError> {
    let integer = integer
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| Ok((Exponent::try_from(i)?, *d)));
    let fraction = fraction
        .iter()
        .enumerate()
        .map(|(i, d)| Ok((-Exponent::try_from(i + 1)?, *d)));
    integer
        .chain(fraction)
        .collect::<Result<_, Error>>()
        .map_err(Into::into)
}

#[derive(Debug, ThisError, Clone, PartialEq, Eq)]
pub enum ParseAbacusError {
    #[error(transparent)]
    ParseIntError(#[from] ParseIntError),
    #[error("invalid format")]
    InvalidFormat,
    #[error("invalid digit {0:?}")]
    InvalidDigit(char),
    #[error(transparent)]
    Abacus(#[from] Error),
}
