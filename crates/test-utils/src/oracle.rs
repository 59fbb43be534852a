//! Reference results computed with fixed-width [`bnum`] integers.

use bnum::types::{I256, U256};
use crystal_abacus::Abacus;

/// Renders `value` the way [`Abacus`] displays integers in `base`
pub fn render(value: I256, base: u32) -> String {
    let radix = U256::from(base);
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();
    while !magnitude.is_zero() {
        let digit = (magnitude % radix).digits()[0];
        digits.push(digit.to_string());
        magnitude /= radix;
    }
    if digits.is_empty() {
        digits.push("0".to_owned());
    }
    digits.reverse();

    let sign = if value.is_negative() { "-" } else { "" };
    format!("{sign}{} (base {base})", digits.join(","))
}

/// `value` as an integral [`Abacus`] in `base`
pub fn abacus(value: i128, base: u32) -> Abacus {
    Abacus::from_i128(value, base).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_abacus() {
        let cases = [(0, 10), (-255, 16), (1000, 7), (i128::MIN, 2), (i128::MAX, 1_000_000)];
        for (value, base) in cases {
            assert_eq!(render(I256::from(value), base), abacus(value, base).to_string());
        }
    }
}
