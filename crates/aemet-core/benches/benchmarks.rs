use aemet_core::similarity::similarity;
use aemet_core::text::normalize;
use aemet_core::{Gazetteer, Resolver};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_gazetteer() -> Gazetteer {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    Gazetteer::load_from_dir(dir).expect("fixtures load")
}

fn bench_text(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("  Santa Cruz de Tenerife / Alcalá de Henares ")))
    });
    c.bench_function("similarity", |b| {
        b.iter(|| similarity(black_box("san sebastian de los reyes"), black_box("san sebastian de la gomera")))
    });
}

fn bench_resolver(c: &mut Criterion) {
    let gazetteer = fixture_gazetteer();
    let resolver = Resolver::new(&gazetteer);

    c.bench_function("resolve_municipality", |b| {
        b.iter(|| resolver.resolve_municipality(black_box("alcala de henare")))
    });
    c.bench_function("resolve_beach_or_code", |b| {
        b.iter(|| resolver.resolve_beach_or_code(black_box("coruna")))
    });
}

criterion_group!(benches, bench_text, bench_resolver);
criterion_main!(benches);
