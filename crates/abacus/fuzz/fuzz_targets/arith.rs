#![no_main]

use crystal_abacus::Abacus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Abacus, Abacus)| {
    let (a, b) = input;
    let Ok(b) = b.convert_base(a.base()) else {
        return;
    };

    let sum = a.try_add(&b).unwrap();
    assert_eq!(sum.try_sub(&b).unwrap(), a);
    assert_eq!(b.try_add(&a).unwrap(), sum);

    let product = a.try_mul(&b).unwrap();
    assert_eq!(product, b.try_mul(&a).unwrap());

    if !b.is_zero() {
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(q.is_integer());
        assert_eq!(q.try_mul(&b).unwrap().try_add(&r).unwrap(), a);
        assert!(r.abs() < b.abs());
    }
});
