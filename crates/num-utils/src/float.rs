//! Calculator-style IEEE-754 helpers.
//!
//! Unlike the primitive operators, [`div`] maps a zero divisor to NaN
//! rather than to a signed infinity. Everything else follows IEEE-754,
//! including NaN and infinity propagation.

#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[inline]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

#[inline]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// NaN when `b` is zero
#[inline]
pub fn div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }
    a / b
}

/// Truncated remainder, sign follows the dividend
#[inline]
pub fn fmod(a: f64, b: f64) -> f64 {
    a % b
}

#[inline]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}

#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}

/// Unlike [`f64::clamp`] this never panics: inverted or NaN bounds
/// are applied as-is, lower bound first.
#[inline]
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

#[inline]
pub fn approx_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

#[inline]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

#[inline]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Ties round away from zero
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}

#[inline]
pub fn trunc(x: f64) -> f64 {
    x.trunc()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1.0, 0.0)]
    #[case(-1.0, 0.0)]
    #[case(0.0, 0.0)]
    #[case(1.0, -0.0)]
    fn div_by_zero_is_nan(#[case] a: f64, #[case] b: f64) {
        assert!(div(a, b).is_nan());
    }

    #[rstest]
    #[case(7.0, 2.0, 1.0)]
    #[case(-7.0, 2.0, -1.0)]
    #[case(7.0, -2.0, 1.0)]
    #[case(-7.0, -2.0, -1.0)]
    #[case(5.5, 2.0, 1.5)]
    fn fmod_follows_dividend(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(fmod(a, b), expected);
    }

    #[rstest]
    #[case(2.5, 3.0)]
    #[case(-2.5, -3.0)]
    #[case(0.5, 1.0)]
    #[case(-0.5, -1.0)]
    #[case(2.4, 2.0)]
    #[case(-2.6, -3.0)]
    fn round_half_away(#[case] x: f64, #[case] expected: f64) {
        assert_eq!(round(x), expected);
    }

    #[rstest]
    #[case(-1.5, -2.0, -1.0, -1.0)]
    #[case(1.5, 1.0, 2.0, 1.0)]
    #[case(3.0, 3.0, 3.0, 3.0)]
    #[case(-0.25, -1.0, 0.0, 0.0)]
    fn trunc_floor_ceil(#[case] x: f64, #[case] fl: f64, #[case] ce: f64, #[case] tr: f64) {
        assert_eq!(floor(x), fl);
        assert_eq!(ceil(x), ce);
        assert_eq!(trunc(x), tr);
    }

    #[rstest]
    #[case(5.0, 0.0, 1.0, 1.0)]
    #[case(-5.0, 0.0, 1.0, 0.0)]
    #[case(0.5, 0.0, 1.0, 0.5)]
    #[case(0.5, 1.0, 0.0, 1.0)]
    fn clamps(#[case] x: f64, #[case] lo: f64, #[case] hi: f64, #[case] expected: f64) {
        assert_eq!(clamp(x, lo, hi), expected);
    }

    #[test]
    fn nan_propagates() {
        assert!(add(f64::NAN, 1.0).is_nan());
        assert!(mul(f64::INFINITY, 0.0).is_nan());
        assert!(sub(f64::INFINITY, f64::INFINITY).is_nan());
        assert!(fmod(1.0, 0.0).is_nan());
        assert!(abs(f64::NAN).is_nan());
        assert_eq!(max(f64::NAN, 1.0), 1.0);
        assert_eq!(min(-1.0, f64::NAN), -1.0);
    }

    #[test]
    fn approx() {
        assert!(approx_equal(0.1 + 0.2, 0.3, 1e-12));
        assert!(!approx_equal(1.0, 1.1, 1e-3));
        assert!(!approx_equal(f64::NAN, f64::NAN, 1.0));
    }
}
