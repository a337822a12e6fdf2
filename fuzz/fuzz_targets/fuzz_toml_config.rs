//! Fuzz target for TOML configuration parsing.
//!
//! Tests `TomlConfig::parse()` with arbitrary input to find panics or hangs
//! in the deserializer.

#![no_main]
use libfuzzer_sys::fuzz_target;
use lexstat_settings::TomlConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = TomlConfig::parse(s) {
            // Layering over itself changes nothing.
            assert_eq!(config.clone().over(config.clone()), config);
        }
    }
});
