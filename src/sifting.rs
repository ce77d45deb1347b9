use crate::bb84_states::{BasisString, BitString, Key};
use crate::error::Bb84Error;

/// Indices at which the two parties chose the same basis, in increasing
/// order.
///
/// The kept-index set is exposed on its own so a caller can apply the same
/// mask to a third party's bit sequence (Eve's, for comparative
/// statistics) with [`extract_key`].
pub fn matching_indices(
    basis_a: &BasisString,
    basis_b: &BasisString,
) -> Result<Vec<usize>, Bb84Error> {
    basis_b.check_len(basis_a.len())?;
    Ok(basis_a
        .iter()
        .zip(basis_b.iter())
        .enumerate()
        .filter(|(_, (a, b))| a == b)
        .map(|(i, _)| i)
        .collect())
}

/// Extracts the bit subsequence at `indices`, preserving their order.
pub fn extract_key(bits: &BitString, indices: &[usize]) -> Result<Key, Bb84Error> {
    let mut key = Vec::with_capacity(indices.len());
    for &i in indices {
        match bits.get(i) {
            Some(bit) => key.push(bit),
            None => {
                return Err(Bb84Error::IndexOutOfBounds {
                    index: i,
                    len: bits.len(),
                })
            }
        }
    }
    Ok(Key::new(key))
}

/// Sifts two equal-length bit sequences against the parties' basis
/// choices: positions where the bases differ are discarded, the rest are
/// kept in order. Symmetric by construction, so both keys have the same
/// length.
pub fn sift(
    basis_a: &BasisString,
    basis_b: &BasisString,
    bits_a: &BitString,
    bits_b: &BitString,
) -> Result<(Key, Key), Bb84Error> {
    bits_a.check_len(basis_a.len())?;
    bits_b.check_len(basis_a.len())?;
    let kept = matching_indices(basis_a, basis_b)?;
    let key_a = extract_key(bits_a, &kept)?;
    let key_b = extract_key(bits_b, &kept)?;
    Ok((key_a, key_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bb84_states::MeasurementBasis::{Computational as C, Hadamard as H};

    #[test]
    fn test_matching_indices_order() {
        let a = BasisString::new(vec![C, H, C, H, H]);
        let b = BasisString::new(vec![C, C, C, H, C]);
        assert_eq!(matching_indices(&a, &b).unwrap(), vec![0, 2, 3]);
    }

    #[test]
    fn test_extract_key_rejects_out_of_range() {
        let bits = BitString::new(vec![true, false]);
        let err = extract_key(&bits, &[0, 2]).unwrap_err();
        assert_eq!(err, Bb84Error::IndexOutOfBounds { index: 2, len: 2 });
    }

    #[test]
    fn test_sift_keeps_aligned_bits() {
        let basis_a = BasisString::new(vec![C, H, H, C]);
        let basis_b = BasisString::new(vec![C, C, H, H]);
        let bits_a = BitString::new(vec![true, true, false, true]);
        let bits_b = BitString::new(vec![true, false, false, false]);

        let (key_a, key_b) = sift(&basis_a, &basis_b, &bits_a, &bits_b).unwrap();
        assert_eq!(key_a, Key::new(vec![true, false]));
        assert_eq!(key_b, Key::new(vec![true, false]));
    }
}
