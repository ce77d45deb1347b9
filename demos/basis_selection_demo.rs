use bb84_sim::{matching_indices, BasisString};
use rand::thread_rng;

fn basis_selection_demo() {
    println!("BB84 Basis Selection Demonstration");

    let mut rng = thread_rng();
    let n = 10;

    // Alice and Bob each choose a basis per qubit, independently.
    let alice_bases = BasisString::random(n, &mut rng);
    let bob_bases = BasisString::random(n, &mut rng);

    println!("Alice's bases: {:?}", alice_bases.bases());
    println!("Bob's bases:   {:?}", bob_bases.bases());

    // On average half the positions survive sifting.
    let kept = matching_indices(&alice_bases, &bob_bases).expect("equal lengths");
    println!("Matching positions: {:?}", kept);
    println!("Number of matching bases: {} of {}", kept.len(), n);
}

fn main() {
    basis_selection_demo();
}
