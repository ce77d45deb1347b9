use crate::bb84::InterceptRelay;
use crate::bb84_states::{BasisString, BitString, Key};
use crate::error::Bb84Error;
use crate::sifting::{extract_key, matching_indices};
use log::debug;
use rand::Rng;

/// Everything observable about one protocol run.
///
/// The `eve_*` fields are attacker-side analysis output. A deployed
/// protocol would never reveal them; they are kept here so the attack's
/// statistical signature can be inspected and tested.
#[derive(Debug, Clone)]
pub struct ProtocolOutcome {
    pub alice_bits: BitString,
    pub alice_basis: BasisString,
    pub eve_basis: BasisString,
    pub bob_basis: BasisString,
    pub eve_results: BitString,
    pub bob_results: BitString,
    /// Indices kept by Alice/Bob basis reconciliation, increasing.
    pub kept_indices: Vec<usize>,
    pub alice_key: Key,
    pub bob_key: Key,
    /// Eve's bits at the same kept indices.
    pub eve_key: Key,
    pub key_length: usize,
    /// Positions where Alice's and Bob's sifted keys differ.
    pub disagreements: usize,
    /// Quantum bit error rate of the sifted key, as a fraction in [0, 1].
    /// Zero for an empty key. An always-intercepting Eve pushes this
    /// toward 0.25.
    pub qber: f64,
}

/// Runs one full BB84 exchange with an always-intercepting eavesdropper.
///
/// Random draws happen in a fixed order — Alice's bits, Alice's bases,
/// Eve's bases, Bob's bases, then each hop's measurement disturbances in
/// qubit-index order — so a seeded generator reproduces a run exactly.
/// `num_qubits == 0` is valid and produces empty sequences and keys.
pub fn run_protocol<R: Rng + ?Sized>(
    num_qubits: usize,
    rng: &mut R,
) -> Result<ProtocolOutcome, Bb84Error> {
    let alice_bits = BitString::random(num_qubits, rng);
    let alice_basis = BasisString::random(num_qubits, rng);
    let eve_basis = BasisString::random(num_qubits, rng);
    let bob_basis = BasisString::random(num_qubits, rng);

    let relay = InterceptRelay::new();
    let outcome = relay.relay(&alice_bits, &alice_basis, &eve_basis, &bob_basis, rng)?;

    let kept_indices = matching_indices(&alice_basis, &bob_basis)?;
    let alice_key = extract_key(&alice_bits, &kept_indices)?;
    let bob_key = extract_key(&outcome.bob_result, &kept_indices)?;
    let eve_key = extract_key(&outcome.eve_result, &kept_indices)?;

    let key_length = kept_indices.len();
    let disagreements = alice_key.disagreements(&bob_key)?;
    let qber = if key_length > 0 {
        disagreements as f64 / key_length as f64
    } else {
        0.0
    };

    debug!(
        "run complete: {} qubits sent, {} kept after sifting, {} disagreements (QBER {:.3})",
        num_qubits, key_length, disagreements, qber
    );

    Ok(ProtocolOutcome {
        alice_bits,
        alice_basis,
        eve_basis,
        bob_basis,
        eve_results: outcome.eve_result,
        bob_results: outcome.bob_result,
        kept_indices,
        alice_key,
        bob_key,
        eve_key,
        key_length,
        disagreements,
        qber,
    })
}
