//! Cycle construction benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quizdeck::selection::{build_cycle, Catalog, FrequencyRegistry, TagRegistry};
use quizdeck::{GeneratorFrequency, Question, QuestionGenerator, ShuffleOptions};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

struct BenchGenerator {
    id: String,
    tags: Vec<String>,
}

impl QuestionGenerator for BenchGenerator {
    fn id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn generate(&self, _rng: &mut dyn RngCore) -> quizdeck::Result<Question> {
        Ok(Question::new(&self.id, String::new(), String::new()))
    }
}

fn catalog_of(size: usize) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..size {
        catalog.push(Box::new(BenchGenerator {
            id: format!("g{}", i),
            tags: vec![format!("topic{}::sub{}", i % 8, i % 3)],
        }));
    }
    catalog
}

fn bench_build_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_cycle");
    let options = ShuffleOptions::default();

    for size in [10usize, 100, 1000] {
        let mut catalog = catalog_of(size);
        let mut tags = TagRegistry::new();
        tags.register_catalog_tags(catalog.all_tags());
        let mut frequencies = FrequencyRegistry::new();
        frequencies.set("g0", GeneratorFrequency::Rare);
        let mut rng = StdRng::seed_from_u64(42);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                build_cycle(
                    black_box(&mut catalog),
                    &tags,
                    &frequencies,
                    &options,
                    &mut rng,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_cycle);
criterion_main!(benches);
