#![no_main]

use crystal_abacus::Abacus;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|s: &str| {
    let _ = s.parse::<Abacus>();
    let _ = Abacus::from_str_radix(s, 16);
});
