#![no_main]

use fluidtype::{FontSizePreset, GlobalSettings, fluid_typography_options, font_size_value};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    // Decoding is total: any JSON yields settings and a preset.
    let settings = GlobalSettings::from_json(&value);
    let config = fluid_typography_options(Some(&settings));
    let preset = FontSizePreset::from_json(value.get("preset").unwrap_or(&value));

    let _ = font_size_value(&preset, &config);
    let _ = serde_json::to_string(&config);
});
