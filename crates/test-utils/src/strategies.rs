//! [`proptest`] strategies producing normalized values.

use crystal_abacus::{Abacus, Exponent};
use proptest::{collection::vec, prelude::*};

/// Bases worth covering: binary, decimal, hex, small odd ones and the largest
pub fn base() -> impl Strategy<Value = u32> {
    prop_oneof![
        Just(2),
        Just(10),
        Just(16),
        3u32..=64,
        Just(u32::MAX),
    ]
}

/// Value in `base` with up to 6 fractional and 12 digits overall
pub fn abacus_in(base: u32) -> impl Strategy<Value = Abacus> {
    (any::<bool>(), 0..=Exponent::from(6_u8), vec(0..base, 0..=12)).prop_map(
        move |(negative, precision, digits)| {
            let digits = (-precision..).zip(digits);
            let mut value = Abacus::from_digits(base, negative, digits).unwrap();
            value.set_precision(precision.unsigned_abs()).unwrap();
            value
        },
    )
}

/// Integral value in `base` with up to 12 digits
pub fn integer_in(base: u32) -> impl Strategy<Value = Abacus> {
    (any::<bool>(), vec(0..base, 0..=12)).prop_map(move |(negative, digits)| {
        Abacus::from_digits(base, negative, (0..).zip(digits)).unwrap()
    })
}

pub fn abacus() -> impl Strategy<Value = Abacus> {
    base().prop_flat_map(abacus_in)
}

/// Two values sharing a base
pub fn pair() -> impl Strategy<Value = (Abacus, Abacus)> {
    base().prop_flat_map(|base| (abacus_in(base), abacus_in(base)))
}

/// Two integral values sharing a base
pub fn integer_pair() -> impl Strategy<Value = (Abacus, Abacus)> {
    base().prop_flat_map(|base| (integer_in(base), integer_in(base)))
}
