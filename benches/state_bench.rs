use bb84_sim::{
    generate_bb84_state, measure_bb84_state, run_protocol, sift, BasisString, BitString,
    MeasurementBasis, QubitChannel,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn benchmark_state_operations(c: &mut Criterion) {
    c.bench_function("measure_single_state", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        let state = generate_bb84_state(true, MeasurementBasis::Computational);
        b.iter(|| measure_bb84_state(black_box(state), MeasurementBasis::Hadamard, &mut rng));
    });

    c.bench_function("channel_measure_1024", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        let channel = QubitChannel::new();
        let state = BitString::random(1024, &mut rng);
        let prep = BasisString::random(1024, &mut rng);
        let meas = BasisString::random(1024, &mut rng);
        b.iter(|| {
            channel
                .measure(black_box(&state), &prep, &meas, &mut rng)
                .unwrap()
        });
    });

    c.bench_function("sift_1024", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        let basis_a = BasisString::random(1024, &mut rng);
        let basis_b = BasisString::random(1024, &mut rng);
        let bits_a = BitString::random(1024, &mut rng);
        let bits_b = BitString::random(1024, &mut rng);
        b.iter(|| sift(black_box(&basis_a), &basis_b, &bits_a, &bits_b).unwrap());
    });

    c.bench_function("protocol_run_1024", |b| {
        let mut rng = StdRng::seed_from_u64(4);
        b.iter(|| run_protocol(black_box(1024), &mut rng).unwrap());
    });
}

criterion_group!(benches, benchmark_state_operations);
criterion_main!(benches);
