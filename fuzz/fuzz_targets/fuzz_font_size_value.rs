#![no_main]

use arbitrary::Arbitrary;
use fluidtype::{
    FluidBounds, FluidConfig, FluidOptions, FontSizePreset, PresetFluid, SizeValue,
    font_size_value,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    size: Option<&'a str>,
    number: Option<f64>,
    min: Option<&'a str>,
    max: Option<&'a str>,
    fluid: u8,
    config: u8,
    min_font_size: Option<&'a str>,
    max_viewport_width: Option<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let size = match (input.size, input.number) {
        (Some(s), _) => Some(SizeValue::from(s)),
        (None, Some(n)) => Some(SizeValue::Number(n)),
        (None, None) => None,
    };
    let fluid = match input.fluid % 4 {
        0 => PresetFluid::Inherit,
        1 => PresetFluid::Disabled,
        2 => PresetFluid::Enabled,
        _ => PresetFluid::Bounds(FluidBounds {
            min: input.min.map(str::to_string),
            max: input.max.map(str::to_string),
        }),
    };
    let config = match input.config % 4 {
        0 => FluidConfig::Unset,
        1 => FluidConfig::Disabled,
        2 => FluidConfig::Enabled,
        _ => FluidConfig::Custom(FluidOptions {
            min_font_size: input.min_font_size.map(str::to_string),
            max_viewport_width: input.max_viewport_width.map(str::to_string),
            ..FluidOptions::default()
        }),
    };
    let preset = FontSizePreset {
        size: size.clone(),
        fluid,
    };

    // Resolution must never panic.
    let resolved = font_size_value(&preset, &config);

    // A missing size stays missing; anything else resolves to something.
    assert_eq!(resolved.is_none(), size.is_none());

    // A clamp resolves to itself.
    if let Some(value) = &resolved {
        if value.is_fluid() {
            let again = font_size_value(&FontSizePreset::new(value.clone()), &config);
            assert_eq!(again.as_ref(), Some(value));
        }
    }
});
