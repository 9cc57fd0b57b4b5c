//! Performance benchmarks for the direct transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spectral_edit::transform::{analyze, band_stop, synthesize};
use spectral_edit::{GaussianNoise, SignalBuffer, TransformConfig};

fn test_signal(sample_count: usize) -> SignalBuffer {
    let mut signal = SignalBuffer::new(sample_count, 1.0).expect("valid signal parameters");
    signal.add_shift(1.0);
    signal.add_noise(0.0, 1.0, 0.5, &mut GaussianNoise::seeded(42));
    signal.add_sinusoid(1.0, 3.0, 0.0);
    signal.add_sinusoid(3.0, 8.0, 5.0);
    signal
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for &sample_count in &[256usize, 1000, 4096] {
        let signal = test_signal(sample_count);
        for (label, config) in [
            ("sequential", TransformConfig::default()),
            ("parallel", TransformConfig::parallel()),
        ] {
            group.bench_with_input(BenchmarkId::new(label, sample_count), &signal, |b, s| {
                b.iter(|| analyze(black_box(s), black_box(&config)));
            });
        }
    }
    group.finish();
}

fn bench_band_stop_resynthesis(c: &mut Criterion) {
    let signal = test_signal(1000);
    let config = TransformConfig::default();
    let spectrum = analyze(&signal, &config);

    c.bench_function("band_stop_synthesize_1000", |b| {
        b.iter(|| {
            let mut edited = spectrum.clone();
            band_stop(&mut edited, 10, 500).expect("valid bin range");
            synthesize(black_box(&edited), black_box(&config))
        });
    });
}

criterion_group!(benches, bench_analyze, bench_band_stop_resynthesis);
criterion_main!(benches);
