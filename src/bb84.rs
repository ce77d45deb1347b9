use crate::bb84_states::{generate_bb84_state, BB84State, BasisString, BitString, MeasurementBasis};
use crate::error::Bb84Error;
use rand::Rng;

/// Measures a single BB84 state in the given basis.
///
/// When the state was prepared in the measured basis the outcome is the
/// prepared bit, with certainty. When the bases are conjugate the outcome
/// is a fair coin flip, uncorrelated with the prepared bit.
pub fn measure_bb84_state<R: Rng + ?Sized>(
    state: BB84State,
    basis: MeasurementBasis,
    rng: &mut R,
) -> bool {
    match (state, basis) {
        (BB84State::QubitZero, MeasurementBasis::Computational) => false,
        (BB84State::QubitOne, MeasurementBasis::Computational) => true,
        (BB84State::QubitPlus, MeasurementBasis::Hadamard) => true,
        (BB84State::QubitMinus, MeasurementBasis::Hadamard) => false,
        // Conjugate-basis measurement: the prepared value is unrecoverable.
        (BB84State::QubitPlus, MeasurementBasis::Computational)
        | (BB84State::QubitMinus, MeasurementBasis::Computational)
        | (BB84State::QubitZero, MeasurementBasis::Hadamard)
        | (BB84State::QubitOne, MeasurementBasis::Hadamard) => rng.gen(),
    }
}

/// One preparation -> transmission -> measurement hop over a sequence of
/// independent qubits.
#[derive(Debug, Clone, Copy, Default)]
pub struct QubitChannel;

impl QubitChannel {
    pub fn new() -> Self {
        QubitChannel
    }

    /// Prepares `state[i]` in `prep[i]` and measures it in `meas[i]`, for
    /// every index i. Randomness is consumed in qubit-index order, one
    /// draw per conjugate-basis index, so a seeded generator reproduces
    /// the hop exactly.
    ///
    /// All three inputs must have the same length; a mismatch is rejected
    /// with [`Bb84Error::InvalidInput`], never truncated or padded.
    pub fn measure<R: Rng + ?Sized>(
        &self,
        state: &BitString,
        prep: &BasisString,
        meas: &BasisString,
        rng: &mut R,
    ) -> Result<BitString, Bb84Error> {
        prep.check_len(state.len())?;
        meas.check_len(state.len())?;

        let measured = state
            .iter()
            .zip(prep.iter())
            .zip(meas.iter())
            .map(|((bit, p), m)| measure_bb84_state(generate_bb84_state(bit, p), m, rng))
            .collect();
        Ok(BitString::new(measured))
    }
}

/// Both measured sequences of an intercept-resend run.
///
/// `eve_result` is attacker-only analysis output: a real protocol never
/// reveals it, but the attack's statistical signature is tested against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    pub eve_result: BitString,
    pub bob_result: BitString,
}

/// An intercept-resend eavesdropper between Alice and Bob: two chained
/// [`QubitChannel`] hops with Eve re-preparing in the middle.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterceptRelay {
    channel: QubitChannel,
}

impl InterceptRelay {
    pub fn new() -> Self {
        InterceptRelay {
            channel: QubitChannel::new(),
        }
    }

    /// Runs Alice -> Eve -> Bob.
    ///
    /// Eve measures Alice's qubits in her own bases, then re-prepares each
    /// forwarded qubit from her measured bit in her own basis. When her
    /// basis differed from Alice's, the forwarded qubit is consistent with
    /// her observation, not with Alice's original state. Bob then measures
    /// the forwarded qubits in his bases.
    ///
    /// Hop-one randomness is consumed before hop-two randomness, each in
    /// qubit-index order. Empty inputs yield two empty sequences.
    pub fn relay<R: Rng + ?Sized>(
        &self,
        alice_state: &BitString,
        alice_basis: &BasisString,
        eve_basis: &BasisString,
        bob_basis: &BasisString,
        rng: &mut R,
    ) -> Result<RelayOutcome, Bb84Error> {
        let eve_result = self
            .channel
            .measure(alice_state, alice_basis, eve_basis, rng)?;
        let bob_result = self.channel.measure(&eve_result, eve_basis, bob_basis, rng)?;
        Ok(RelayOutcome {
            eve_result,
            bob_result,
        })
    }
}
