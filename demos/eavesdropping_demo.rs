use bb84_sim::{run_protocol, BasisString, BitString, InterceptRelay, MeasurementBasis};
use rand::thread_rng;

fn simulate_eavesdropping() {
    println!("BB84 Eavesdropping Simulation");

    let mut rng = thread_rng();

    // One qubit, step by step.
    let alice_state = BitString::random(1, &mut rng);
    let alice_basis = BasisString::new(vec![MeasurementBasis::random()]);
    let eve_basis = BasisString::new(vec![MeasurementBasis::random()]);
    let bob_basis = BasisString::new(vec![MeasurementBasis::random()]);

    let relay = InterceptRelay::new();
    let outcome = relay
        .relay(&alice_state, &alice_basis, &eve_basis, &bob_basis, &mut rng)
        .expect("all sequences have length 1");

    println!(
        "Alice sends bit {} in {:?} basis.",
        u8::from(alice_state[0]),
        alice_basis[0]
    );
    println!(
        "Eve intercepts and measures in {:?} basis. Measurement: {}",
        eve_basis[0], outcome.eve_result[0]
    );
    println!(
        "Eve re-prepares from her measurement and forwards the qubit to Bob."
    );
    println!(
        "Bob measures in {:?} basis. Measurement: {}",
        bob_basis[0], outcome.bob_result[0]
    );

    // A disagreement where Alice and Bob used the same basis betrays Eve.
    let eavesdropping_detected =
        alice_basis[0] == bob_basis[0] && alice_state[0] != outcome.bob_result[0];
    println!("Eavesdropping detected on this qubit: {}", eavesdropping_detected);

    // The statistical signature over a large run.
    let large = run_protocol(4096, &mut rng).expect("internally consistent lengths");
    println!(
        "\nOver 4096 qubits: {} sifted bits, {} disagreements, QBER {:.1}% (expected ~25%)",
        large.key_length,
        large.disagreements,
        large.qber * 100.0
    );
}

fn main() {
    env_logger::init();
    simulate_eavesdropping();
}
