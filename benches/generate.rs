use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use ugen::domain::GenerationConfig;
use ugen::service::Generator;

fn bench_strategy(c: &mut Criterion, name: &str, config: &GenerationConfig, length: usize) {
    let mut generator = Generator::new(config.clone());
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function(name, |b| {
        b.iter(|| {
            out.clear();
            generator
                .generate(&mut out, black_box(100), black_box(length))
                .unwrap();
            black_box(&out);
        });
    });
}

fn generate_benchmarks(c: &mut Criterion) {
    let builds = [
        ("alphanumeric_x100", GenerationConfig::builder(), 12),
        ("digit_x100", GenerationConfig::builder().digit(true), 12),
        ("base64_x100", GenerationConfig::builder().base64(true), 32),
        ("hex_x100", GenerationConfig::builder().hex(true), 32),
        ("ulid_x100", GenerationConfig::builder().ulid(true), 0),
        ("uuid7_x100", GenerationConfig::builder().uuid7(true), 0),
        (
            "interval_x100",
            GenerationConfig::builder().interval("-1000000,1000000"),
            0,
        ),
    ];

    for (name, builder, length) in builds {
        let config = builder.build().unwrap();
        bench_strategy(c, name, &config, length);
    }
}

criterion_group!(benches, generate_benchmarks);
criterion_main!(benches);
