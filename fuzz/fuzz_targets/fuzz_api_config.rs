#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(config) = cadastro::api::ApiConfig::from_json(s) {
            for endpoint in cadastro::api::Endpoint::ALL {
                let _ = config.collection_url(endpoint);
            }
        }
    }
});
