use cipher_base::{
    CalendarDate, ComputedFacts, can_chi_from_year, life_path_from_str, personal_cycles,
    reduce_to_single_digit,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn reduce_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.bench_function("reduce_no_master", |b| {
        b.iter(|| reduce_to_single_digit(black_box(987_654_321), false))
    });
    group.bench_function("reduce_master", |b| {
        b.iter(|| reduce_to_single_digit(black_box(1993), true))
    });
    group.finish();
}

fn date_bench(c: &mut Criterion) {
    let birth = CalendarDate::new(1990, 7, 16).unwrap();
    let reference = CalendarDate::new(2026, 10, 18).unwrap();

    let mut group = c.benchmark_group("date");
    group.bench_function("life_path_from_str", |b| {
        b.iter(|| life_path_from_str(black_box("1990-07-16")))
    });
    group.bench_function("personal_cycles", |b| {
        b.iter(|| personal_cycles(black_box(&birth), black_box(&reference)))
    });
    group.bench_function("can_chi_from_year", |b| {
        b.iter(|| can_chi_from_year(black_box(1990)))
    });
    group.bench_function("computed_facts", |b| {
        b.iter(|| ComputedFacts::compute(black_box(&birth), black_box(&reference)))
    });
    group.finish();
}

criterion_group!(benches, reduce_bench, date_bench);
criterion_main!(benches);
