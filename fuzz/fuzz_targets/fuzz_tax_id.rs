#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Validity and formatting must agree with parsing.
        let valid = cadastro::validate_tax_id(s);
        assert_eq!(valid, cadastro::TaxId::parse(s).is_ok());
        let formatted = cadastro::format_tax_id(s);
        assert_eq!(cadastro::normalize(&formatted), cadastro::normalize(s));
    }
});
