use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lapsight::series::SummaryOptions;
use lapsight::timing::parse_duration;
use lapsight::{LapRecord, compare_field, enrich_laps, summarize_driver};
use std::time::Duration;

fn create_lap(driver: usize, lap_number: u32) -> LapRecord {
    let base = 88.0 + driver as f64 * 0.05 + (lap_number % 7) as f64 * 0.13;
    LapRecord {
        race_id: "race-1".to_string(),
        driver_id: format!("driver-{}", driver),
        lap_number,
        lap_time: Some(base),
        sector1: Some(base * 0.3),
        sector2: Some(base * 0.4),
        sector3: Some(base * 0.3),
        average_speed: Some(140.0 - (lap_number % 5) as f64),
        top_speed: Some(200.0 + (lap_number % 3) as f64),
        ..LapRecord::default()
    }
}

fn bench_enrichment(c: &mut Criterion) {
    let mut group = c.benchmark_group("lap_series");

    let stint: Vec<LapRecord> = (1..=30).map(|n| create_lap(0, n)).collect();
    group.bench_function("enrich_30_laps", |b| {
        b.iter(|| black_box(enrich_laps(black_box(&stint)).unwrap()));
    });

    let long_stint: Vec<LapRecord> = (1..=1000).map(|n| create_lap(0, n)).collect();
    group.bench_function("enrich_1000_laps", |b| {
        b.iter(|| black_box(enrich_laps(black_box(&long_stint)).unwrap()));
    });

    group.bench_function("summarize_1000_laps", |b| {
        let options = SummaryOptions::default();
        b.iter(|| black_box(summarize_driver(black_box(&long_stint), &options)));
    });

    group.finish();
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");

    let race: Vec<LapRecord> = (0..30)
        .flat_map(|driver| (1..=30).map(move |n| create_lap(driver, n)))
        .collect();
    group.bench_function("compare_field_30_drivers", |b| {
        b.iter(|| black_box(compare_field(black_box(&race), "race-1", 15)));
    });

    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing");

    group.bench_function("parse_minutes_layout", |b| {
        b.iter(|| black_box(parse_duration(black_box("1:28.512"))));
    });
    group.bench_function("parse_hours_layout", |b| {
        b.iter(|| black_box(parse_duration(black_box("00:01:28.512"))));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = bench_enrichment, bench_field, bench_parsing
}
criterion_main!(benches);
