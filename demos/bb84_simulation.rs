use bb84_sim::run_protocol;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    let n = 16; // Number of qubits
    let mut rng = StdRng::seed_from_u64(2024);

    let outcome = run_protocol(n, &mut rng).expect("internally consistent lengths");

    println!("--- BB84 with an intercept-resend eavesdropper ---");
    println!("Alice's Bits:    {}", outcome.alice_bits);
    println!("Alice's Bases:   {:?}", outcome.alice_basis.bases());
    println!("Eve's Bases:     {:?}", outcome.eve_basis.bases());
    println!("Bob's Bases:     {:?}", outcome.bob_basis.bases());
    println!("Eve's Results:   {}", outcome.eve_results);
    println!("Bob's Results:   {}", outcome.bob_results);

    println!("\n--- Sifting (Alice/Bob basis comparison) ---");
    println!("Kept indices:    {:?}", outcome.kept_indices);
    println!("Alice's Key:     {}", outcome.alice_key);
    println!("Bob's Key:       {}", outcome.bob_key);
    println!("Eve's Key:       {}", outcome.eve_key);
    println!("Key length:      {}", outcome.key_length);
    println!(
        "Disagreements:   {} (QBER {:.1}%)",
        outcome.disagreements,
        outcome.qber * 100.0
    );

    if outcome.qber > 0.1 {
        println!("\nError rate is far above the no-eavesdropper expectation of 0%.");
        println!("Alice and Bob would abort: the channel is being intercepted.");
    }
}
