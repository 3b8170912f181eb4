#![no_main]

use libfuzzer_sys::fuzz_target;
use localized::{Country, Rule, validate};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for country in Country::ALL {
            for rule in Rule::ALL {
                let _ = validate(country, rule, s);
            }
        }
    }
});
