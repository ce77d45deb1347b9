use crate::error::Bb84Error;
use rand::Rng;

/// The four BB84 signal states.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BB84State {
    QubitZero,
    QubitOne,
    QubitPlus,  // Represents the |+> state
    QubitMinus, // Represents the |-> state
}

/// The two encoding/measurement bases of BB84. Conjugate bases are
/// maximally incompatible; equality is the only relation sifting needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MeasurementBasis {
    Computational,
    Hadamard,
}

impl MeasurementBasis {
    /// Draws a basis uniformly from the given generator.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen() {
            MeasurementBasis::Hadamard
        } else {
            MeasurementBasis::Computational
        }
    }

    /// Draws a basis uniformly from the thread-local generator.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }
}

pub type Basis = MeasurementBasis;

/// Encodes a classical bit in the given preparation basis.
pub fn generate_bb84_state(bit: bool, basis: MeasurementBasis) -> BB84State {
    match basis {
        MeasurementBasis::Computational => {
            if bit {
                BB84State::QubitOne // Represents the |1> state
            } else {
                BB84State::QubitZero // Represents the |0> state
            }
        }
        MeasurementBasis::Hadamard => {
            if bit {
                BB84State::QubitPlus // Represents the |+> state
            } else {
                BB84State::QubitMinus // Represents the |-> state
            }
        }
    }
}

pub fn random_bit<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen()
}

/// An ordered, fixed-length sequence of classical bits.
///
/// Index i is qubit identity: within one protocol run every `BitString`
/// and [`BasisString`] has the same length, and index i refers to the
/// same qubit across all of them. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitString(Vec<bool>);

impl BitString {
    pub fn new(bits: Vec<bool>) -> Self {
        BitString(bits)
    }

    /// Draws `len` independent uniform bits.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        BitString((0..len).map(|_| random_bit(rng)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Errors unless this sequence has length `expected`.
    pub fn check_len(&self, expected: usize) -> Result<(), Bb84Error> {
        if self.len() != expected {
            return Err(Bb84Error::InvalidInput {
                expected,
                got: self.len(),
            });
        }
        Ok(())
    }

    /// Number of positions at which two equal-length bit strings differ.
    pub fn disagreements(&self, other: &BitString) -> Result<usize, Bb84Error> {
        other.check_len(self.len())?;
        Ok(self
            .iter()
            .zip(other.iter())
            .filter(|(a, b)| a != b)
            .count())
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        BitString(bits)
    }
}

impl std::ops::Index<usize> for BitString {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", u8::from(*bit))?;
        }
        Ok(())
    }
}

/// A sifted key. Produced only by sifting; length is at most the number
/// of transmitted qubits.
pub type Key = BitString;

/// An ordered, fixed-length sequence of basis choices, aligned with the
/// [`BitString`]s of the same run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasisString(Vec<MeasurementBasis>);

impl BasisString {
    pub fn new(bases: Vec<MeasurementBasis>) -> Self {
        BasisString(bases)
    }

    /// Draws `len` independent uniform basis choices.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        BasisString(
            (0..len)
                .map(|_| MeasurementBasis::random_with(rng))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bases(&self) -> &[MeasurementBasis] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = MeasurementBasis> + '_ {
        self.0.iter().copied()
    }

    pub fn check_len(&self, expected: usize) -> Result<(), Bb84Error> {
        if self.len() != expected {
            return Err(Bb84Error::InvalidInput {
                expected,
                got: self.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<MeasurementBasis>> for BasisString {
    fn from(bases: Vec<MeasurementBasis>) -> Self {
        BasisString(bases)
    }
}

impl std::ops::Index<usize> for BasisString {
    type Output = MeasurementBasis;

    fn index(&self, index: usize) -> &MeasurementBasis {
        &self.0[index]
    }
}
