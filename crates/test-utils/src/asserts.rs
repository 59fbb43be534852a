use core::fmt::{Debug, Display};

use crystal_abacus::{Abacus, Error, ErrorKind};

pub trait ResultAssertsExt {
    /// Panics unless `self` is an error whose message mentions `needle`
    fn assert_error_contains(&self, needle: &str);
}

impl<T: Debug, E: Display> ResultAssertsExt for Result<T, E> {
    #[track_caller]
    fn assert_error_contains(&self, needle: &str) {
        match self {
            Ok(value) => panic!("expected an error mentioning `{needle}`, got Ok({value:?})"),
            Err(err) => assert!(err.to_string().contains(needle), "unexpected error: {err}"),
        }
    }
}

pub trait AbacusResultExt {
    fn assert_kind(&self, kind: ErrorKind);
}

impl<T: Debug> AbacusResultExt for Result<T, Error> {
    #[track_caller]
    fn assert_kind(&self, kind: ErrorKind) {
        match self {
            Ok(value) => panic!("expected `{kind}` error, got Ok({value:?})"),
            Err(err) => assert_eq!(err.kind(), kind, "unexpected error: {err}"),
        }
    }
}

/// Asserts the rendering of `value` and that it is normalized
#[track_caller]
pub fn assert_abacus(value: &Abacus, expected: &str) {
    assert_eq!(value.to_string(), expected);
    assert_normalized(value);
}

#[track_caller]
pub fn assert_normalized(value: &Abacus) {
    let digits: Vec<_> = value.digits().collect();
    assert!(digits.iter().all(|&(_, d)| d != 0 && d < value.base()), "{digits:?}");
    assert!(digits.windows(2).all(|w| w[0].0 < w[1].0), "{digits:?}");
    assert!(!(value.is_zero() && value.is_negative()), "negative zero");
    assert!(
        value.is_zero() || i64::from(value.min_exponent()) >= -i64::from(value.precision()),
        "digit below precision {}: {digits:?}",
        value.precision()
    );
}
