use std::{collections::TryReserveError, num::TryFromIntError};

use strum::EnumString;

use crate::{Digit, Exponent};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("base must be at least 2, got {0}")]
    InvalidBase(u32),
    #[error("base mismatch: {0} vs {1}")]
    BaseMismatch(u32, u32),
    #[error("digit {digit} is out of range for base {base}")]
    DigitOutOfRange { digit: Digit, base: u32 },
    #[error("exponent {0} is given more than once")]
    DuplicateExponent(Exponent),
    #[error("precision {0} is out of range")]
    PrecisionOutOfRange(u64),
    #[error("value is not finite")]
    NotFinite,
    #[error("operand must be an integer")]
    NotAnInteger,
    #[error("operand must not be negative")]
    NegativeOperand,
    #[error("root degree must be positive")]
    ZeroRootDegree,
    #[error("value is not invertible modulo the given modulus")]
    NotInvertible,
    #[error("division by zero")]
    DivisionByZero,
    #[error("overflow")]
    Overflow,
    #[error("out of memory")]
    OutOfMemory,
}

/// Coarse classification of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    InvalidArgument,
    OutOfMemory,
    DivisionByZero,
    Overflow,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBase(_)
            | Self::BaseMismatch(..)
            | Self::DigitOutOfRange { .. }
            | Self::DuplicateExponent(_)
            | Self::PrecisionOutOfRange(_)
            | Self::NotFinite
            | Self::NotAnInteger
            | Self::NegativeOperand
            | Self::ZeroRootDegree
            | Self::NotInvertible => ErrorKind::InvalidArgument,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Overflow => ErrorKind::Overflow,
            Self::OutOfMemory => ErrorKind::OutOfMemory,
        }
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}

// exponent and machine-word conversions only ever fail by running out of range
impl From<TryFromIntError> for Error {
    #[inline]
    fn from(_: TryFromIntError) -> Self {
        Self::Overflow
    }
}
