//! Numerical simulation of the BB84 quantum key distribution protocol
//! under an intercept-resend eavesdropper.
//!
//! BB84 needs no state-vector machinery: a qubit prepared in one basis
//! and measured in another reduces to a two-outcome probability rule,
//! deterministic when the bases agree and a fair coin when they differ.
//! This crate chains that rule across two hops (Alice -> Eve -> Bob),
//! sifts the results, and reports the error rate the attack leaves behind.

pub mod bb84;
pub mod bb84_protocol;
pub mod bb84_states;
pub mod error;
pub mod sifting;


pub use bb84::{measure_bb84_state, InterceptRelay, QubitChannel, RelayOutcome};
pub use bb84_protocol::{run_protocol, ProtocolOutcome};
pub use bb84_states::{
    generate_bb84_state, random_bit, BB84State, Basis, BasisString, BitString, Key,
    MeasurementBasis,
};
pub use error::Bb84Error;
pub use sifting::{extract_key, matching_indices, sift};
