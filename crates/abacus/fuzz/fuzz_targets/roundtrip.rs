#![no_main]

use crystal_abacus::Abacus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|a: Abacus| {
    let parsed = a.to_string().parse::<Abacus>().unwrap();
    assert_eq!(parsed, a);
    assert_eq!(parsed.precision(), a.precision());
});
