use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unicode_casing_benches::{special_casing, unicode_data};
use unicode_casing_prepare::output::{self, OutputOptions};
use unicode_casing_prepare::tables::{alpha_runs, map_runs, UcdTables};
use unicode_casing_source::{CasingData, ExtractOptions};

mod group;

/// группа с общими настройками времени
macro_rules! group {
    ($c: expr, $name: expr) => {{
        let mut group = $c.benchmark_group($name);

        group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
        group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

        group
    }};
}

fn inputs() -> Vec<(String, String, String)>
{
    group::SIZES
        .iter()
        .map(|&(last, count)| (format!("{:X}", last), unicode_data(last), special_casing(count)))
        .collect()
}

/// разбор обоих файлов и сборка коллекций
fn extract(c: &mut Criterion)
{
    let mut group = group!(c, "extract");

    for (name, unicode, special) in inputs() {
        group.bench_with_input(BenchmarkId::new("parse", &name), &(unicode, special), |b, data| {
            b.iter(|| CasingData::parse(black_box(&data.0), black_box(&data.1), ExtractOptions::default()))
        });
    }

    group.finish();
}

/// сжатие в диапазоны
fn compress(c: &mut Criterion)
{
    let mut group = group!(c, "compress");

    for (name, unicode, special) in inputs() {
        let data = CasingData::parse(&unicode, &special, ExtractOptions::default()).unwrap();

        group.bench_with_input(BenchmarkId::new("alpha", &name), &data, |b, data| {
            b.iter(|| alpha_runs(black_box(&data.isalpha_codes)))
        });

        group.bench_with_input(BenchmarkId::new("tolower", &name), &data, |b, data| {
            b.iter(|| map_runs(black_box(&data.simple_lower_pairs)))
        });

        group.bench_with_input(BenchmarkId::new("prepare", &name), &data, |b, data| {
            b.iter(|| UcdTables::prepare(black_box(data.clone())))
        });
    }

    group.finish();
}

/// запись таблиц в текст
fn render(c: &mut Criterion)
{
    let mut group = group!(c, "render");
    let options = OutputOptions::default();

    for (name, unicode, special) in inputs() {
        let data = CasingData::parse(&unicode, &special, ExtractOptions::default()).unwrap();
        let tables = UcdTables::prepare(data).unwrap();

        group.bench_with_input(BenchmarkId::new("render", &name), &tables, |b, tables| {
            b.iter(|| output::render(black_box(tables), &options))
        });
    }

    group.finish();
}

criterion_group!(benches, extract, compress, render);
criterion_main!(benches);
