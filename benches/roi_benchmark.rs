// ============================================================================
// ROI Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Formulas - Single decimal formulas in isolation
// 2. Full Pipeline - End-to-end calculation through the engine
// 3. Schedule Comparison - Flat rate against zone campaign
// 4. Consumption Profiles - Annual energy over the 12 × 24 matrix
// ============================================================================

use battery_roi::formulas;
use battery_roi::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn amount(s: &str) -> Amount {
    s.parse().unwrap()
}

fn scenario() -> CalculationInputs {
    let battery = BatterySpec::new(
        amount("15"),
        amount("95"),
        amount("97"),
        amount("5"),
        amount("5"),
        amount("40000"),
    );

    CalculationInputs::new(battery, amount("1.5"), amount("85"))
        .with_tariff(TariffInfo::new(amount("60"), amount("0"), 6, 22))
        .with_peak_shaving(amount("10"), amount("80"))
        .with_grid_services_rate(amount("500"))
        .with_pricing(amount("100000"), amount("20000"))
        .with_subsidy_rate(amount("0.5"))
}

// ============================================================================
// Formula Benchmarks
// ============================================================================

fn benchmark_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("formulas");

    group.bench_function("effective_capacity", |b| {
        let (capacity, charge, discharge, depth) =
            (amount("15"), amount("95"), amount("97"), amount("85"));
        b.iter(|| {
            black_box(formulas::effective_capacity_per_cycle(
                black_box(capacity),
                charge,
                discharge,
                depth,
            ))
        });
    });

    group.bench_function("spot_price_savings", |b| {
        let (capacity, cycles, efficiency, spread) =
            (amount("15"), amount("1.5"), amount("0.8"), amount("100"));
        b.iter(|| {
            black_box(formulas::spot_price_savings(
                black_box(capacity),
                cycles,
                efficiency,
                spread,
                formulas::DAYS_PER_YEAR,
            ))
        });
    });

    group.bench_function("payback_period", |b| {
        let (net, savings) = (amount("75000"), amount("26610"));
        b.iter(|| black_box(formulas::payback_period(black_box(net), savings)));
    });

    group.finish();
}

// ============================================================================
// Full Pipeline Benchmarks
// ============================================================================

fn benchmark_full_pipeline(c: &mut Criterion) {
    let engine = RoiEngine::new(EngineConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
    let inputs = scenario();

    c.bench_function("calculate_decimal", |b| {
        b.iter(|| black_box(engine.calculate_decimal(black_box(&inputs))));
    });

    c.bench_function("calculate_with_native_view", |b| {
        b.iter(|| black_box(engine.calculate(black_box(&inputs))));
    });
}

fn benchmark_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_services_schedule");
    let engine = RoiEngine::default();

    let cases = [
        ("flat_rate", scenario()),
        (
            "zone_campaign",
            scenario().with_zone_campaign(PriceZone::Se4, true),
        ),
    ];

    for (name, inputs) in cases.iter() {
        for years in [10u32, 15, 25].iter() {
            let inputs = inputs.clone().with_projection_years(*years);
            group.bench_with_input(BenchmarkId::new(*name, years), &inputs, |b, inputs| {
                b.iter(|| black_box(engine.calculate_decimal(inputs)));
            });
        }
    }

    group.finish();
}

// ============================================================================
// Consumption Profile Benchmarks
// ============================================================================

fn benchmark_consumption_profile(c: &mut Criterion) {
    let mut rows = vec![vec![amount("0.4"); 24]; 12];
    for (month0, row) in rows.iter_mut().enumerate() {
        row[18] = Amount::from_integer(2 + month0 as i64 % 4);
    }
    let profile = ConsumptionProfile::from_rows(&rows).unwrap();

    c.bench_function("annual_consumption", |b| {
        b.iter(|| black_box(profile.annual_energy(DaysPerMonth::Average)));
    });

    c.bench_function("consumption_peak_kw", |b| {
        b.iter(|| black_box(profile.peak_kw()));
    });
}

criterion_group!(
    benches,
    benchmark_formulas,
    benchmark_full_pipeline,
    benchmark_schedules,
    benchmark_consumption_profile,
);
criterion_main!(benches);
