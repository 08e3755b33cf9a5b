// Benchmarks for the splash timer core
// Both tick paths must stay negligible so they never stall the driving loop

use chrono::{Duration, Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_splash::models::countdown::RemainingTime;
use rust_splash::services::boot::BootSequencer;
use rust_splash::services::countdown::CountdownTimer;

fn bench_recompute(c: &mut Criterion) {
    let target = Local.with_ymd_and_hms(2026, 1, 25, 0, 0, 0).unwrap();
    let timer = CountdownTimer::new(target);
    let now = Local.with_ymd_and_hms(2026, 1, 20, 12, 34, 56).unwrap();

    c.bench_function("countdown_recompute", |b| {
        b.iter(|| timer.recompute(black_box(now)))
    });

    c.bench_function("remaining_time_from_millis", |b| {
        b.iter(|| RemainingTime::from_millis(black_box(86_369_400)))
    });
}

fn bench_boot_run(c: &mut Criterion) {
    let start = Local.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap();
    let messages: Vec<String> = (0..8).map(|i| format!("STAGE_{i}...")).collect();

    c.bench_function("boot_full_run", |b| {
        b.iter(|| {
            let mut boot = BootSequencer::new(
                "INIT...",
                messages.clone(),
                1,
                Duration::milliseconds(800),
            );
            for tick in 0..110 {
                black_box(boot.tick_at(start + Duration::milliseconds(tick * 200)));
            }
        })
    });
}

criterion_group!(benches, bench_recompute, bench_boot_run);
criterion_main!(benches);
