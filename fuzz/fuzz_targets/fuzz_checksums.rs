#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — any verdict is fine, panics are bugs.
        let _ = localized::is_valid_china_id(s);
        let _ = localized::is_valid_france_nir(s);
        let _ = localized::is_valid_italy_codice_fiscale(s);
        let _ = localized::is_valid_taiwan_national_id(s);
        let _ = localized::is_valid_taiwan_ubn(s);
    }
});
