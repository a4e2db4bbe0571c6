// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for configuration resolution and a full snackbar lifecycle.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_snackbar::ui::notifications::{
    DisplayOptions, Effect, Layers, Manager, Severity, TextStyle,
};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn bench_resolve(c: &mut Criterion) {
    let layers = Layers::new()
        .with_global(DisplayOptions::new().duration_ms(4000).color("#101010"))
        .with_severity(
            Severity::Error,
            DisplayOptions::new().text_style(TextStyle::default().size(18.0)),
        );

    c.bench_function("resolve_error", |b| {
        b.iter(|| layers.resolve(black_box(Severity::Error), black_box("disk full")))
    });
}

fn bench_lifecycle(c: &mut Criterion) {
    c.bench_function("show_measure_hide", |b| {
        b.iter(|| {
            let start = Instant::now();
            let mut manager = Manager::new();
            manager.show("saved", Severity::Success, start);
            let id = manager.notification().map(|n| n.id());
            if let Some(id) = id {
                manager.measured(id, 48.0, start);
            }
            manager.hide_notification(start + Duration::from_millis(100));
            let effect = manager.tick(start + Duration::from_millis(1000));
            assert_eq!(effect, Effect::Hidden);
        })
    });
}

criterion_group!(benches, bench_resolve, bench_lifecycle);
criterion_main!(benches);
