//! Benchmarks for font-size resolution.
//!
//! Run with: cargo bench -p fluidtype

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fluidtype::{
    FluidBounds, FluidConfig, FluidOptions, FontSizePreset, GlobalSettings,
    fluid_typography_options, font_size_value,
};
use serde_json::json;
use std::hint::black_box;

/// A theme-sized preset list with mixed units and overrides.
fn make_presets(n: usize) -> Vec<FontSizePreset> {
    (0..n)
        .map(|i| match i % 5 {
            0 => FontSizePreset::new(format!("{}px", 12 + i)),
            1 => FontSizePreset::new(format!("{}rem", 1.0 + i as f64 * 0.125)),
            2 => FontSizePreset::new(format!("{}em", 0.75 + i as f64 * 0.25)),
            3 => FontSizePreset::new(format!("{}px", 20 + i))
                .bounds(FluidBounds::default().min("16px").max("4rem")),
            4 => FontSizePreset::new(format!("{}%", 100 + i)),
            _ => unreachable!(),
        })
        .collect()
}

fn bench_font_size_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve/font_size_value");
    let configs = [
        ("enabled", FluidConfig::Enabled),
        (
            "custom",
            FluidConfig::Custom(
                FluidOptions::default()
                    .min_font_size("16px")
                    .max_viewport_width("1200px"),
            ),
        ),
        ("unset", FluidConfig::Unset),
    ];

    for n in [5, 20, 100] {
        let presets = make_presets(n);
        for (name, config) in &configs {
            group.bench_with_input(BenchmarkId::new(*name, n), &presets, |b, presets| {
                b.iter(|| {
                    for preset in presets {
                        black_box(font_size_value(preset, config));
                    }
                })
            });
        }
    }

    group.finish();
}

fn bench_settings(c: &mut Criterion) {
    let raw = json!({
        "typography": { "fluid": { "minFontSize": "15px" } },
        "layout": { "wideSize": "1280px" }
    });
    c.bench_function("resolve/settings_from_json", |b| {
        b.iter(|| {
            let settings = GlobalSettings::from_json(black_box(&raw));
            black_box(fluid_typography_options(Some(&settings)))
        })
    });
}

criterion_group!(benches, bench_font_size_value, bench_settings);
criterion_main!(benches);
