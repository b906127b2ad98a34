//!
//! Shared primitive types: sequences, bases and scores.
//!

/// Type of nucleotide or amino-acid sequence
///
/// Each element is an ASCII symbol, `b'A'`, `b'C'`, ... for bases and the
/// one-letter residue code (with `b'*'` as stop) for proteins.
pub type Sequence = Vec<u8>;

/// Integer substitution score (sum of matrix entries)
pub type Score = i32;

/// Three bases read in a frame
pub type Codon = [u8; 3];

/// Two bases inserted between the fixed and the proposed base in a step
pub type Infix = [u8; 2];

/// Convert Sequence(Vec<u8>) into &str
/// useful in displaying
pub fn sequence_to_string(seq: &[u8]) -> String {
    String::from_utf8_lossy(seq).into_owned()
}

///
/// Array of valid DNA bases, in the order used for every tie-break
///
pub const VALID_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

///
/// stop symbol in amino-acid sequences
///
pub const STOP: u8 = b'*';

///
/// index of the base in `VALID_BASES`
///
pub fn base_index(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// check if the base is one of `VALID_BASES`
pub fn is_valid_base(base: u8) -> bool {
    base_index(base).is_some()
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn base_index_follows_valid_bases() {
        for (i, &b) in VALID_BASES.iter().enumerate() {
            assert_eq!(base_index(b), Some(i));
        }
        assert_eq!(base_index(b'N'), None);
        assert_eq!(base_index(b'a'), None);
        assert!(!is_valid_base(b'U'));
    }
    #[test]
    fn sequence_display() {
        assert_eq!(sequence_to_string(b"ATGC"), "ATGC");
        assert_eq!(sequence_to_string(b""), "");
    }
}
