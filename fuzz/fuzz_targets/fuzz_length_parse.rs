#![no_main]

use fluidtype_core::{DEFAULT_ROOT_SIZE_PX, Length, Unit, parse_length};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 256 {
        return;
    }

    // Parsing must never panic.
    let Ok(length) = text.parse::<Length>() else {
        return;
    };
    assert!(length.value.is_finite() && length.value >= 0.0);

    // Coercion reports the unit it was asked for.
    for unit in Unit::ALL {
        if let Ok(coerced) = parse_length(text, Some(unit), DEFAULT_ROOT_SIZE_PX) {
            assert_eq!(coerced.unit, unit);
        }
    }

    // A rounded length prints as something that parses back to itself.
    if let Some(rounded) = length.rounded() {
        let reparsed = rounded.to_string().parse::<Length>();
        assert_eq!(reparsed, Ok(rounded), "display must round-trip");
    }
});
