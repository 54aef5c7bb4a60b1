//! FILENAME: report-engine/benches/report_calculations.rs
//! Performance benchmarks for the report calculation engine.
//!
//! Run with: `cargo bench -p report-engine`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use catalogue::{MeasureFieldDef, MeasureSource, Record};
use report_engine::{calculate_report, Reduction, ReportDefinition};

const SEASONS: [&str; 4] = ["SS24", "FW24", "SS25", "FW25"];
const CATEGORIES: [&str; 5] = ["Tops", "Bottoms", "Outerwear", "Dresses", "Accessories"];
const COLORS: [&str; 6] = ["Red", "Blue", "Green", "Black", "White", "Navy"];

/// Builds a synthetic catalogue of `size` records with a few set-valued
/// color tags per record.
fn create_catalogue(size: usize) -> Vec<Record> {
    (0..size)
        .map(|i| {
            let mut record = Record::new();
            record.set("season", SEASONS[i % SEASONS.len()]);
            record.set("category", CATEGORIES[i % CATEGORIES.len()]);
            record.set(
                "color",
                vec![COLORS[i % COLORS.len()], COLORS[(i + 2) % COLORS.len()]],
            );
            record.set("quantity_sold", (i % 40) as f64);
            record.set("price", 20.0 + (i % 90) as f64);
            record.set("cost", 10.0 + (i % 45) as f64);
            record
        })
        .collect()
}

fn quantity_definition() -> ReportDefinition {
    ReportDefinition::new(
        "season",
        "category",
        MeasureFieldDef {
            key: "quantity_sold".to_string(),
            label: "Quantity Sold".to_string(),
            source: MeasureSource::Field,
        },
        Reduction::Sum,
    )
}

fn margin_definition() -> ReportDefinition {
    ReportDefinition::new(
        "season",
        "color",
        MeasureFieldDef {
            key: "margin".to_string(),
            label: "Margin".to_string(),
            source: MeasureSource::MarginAmount,
        },
        Reduction::Average,
    )
}

fn bench_sum_by_scalar_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_by_scalar_stack");
    let definition = quantity_definition();

    for size in [100, 1000, 5000].iter() {
        let records = create_catalogue(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(calculate_report(&records, &definition)));
        });
    }

    group.finish();
}

fn bench_average_by_set_valued_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_by_set_valued_stack");
    let definition = margin_definition();

    for size in [100, 1000, 5000].iter() {
        let records = create_catalogue(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(calculate_report(&records, &definition)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sum_by_scalar_stack,
    bench_average_by_set_valued_stack,
);

criterion_main!(benches);
