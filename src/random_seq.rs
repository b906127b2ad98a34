use crate::common::Sequence;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

/// the 20 standard residues
pub const RESIDUES: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

///
/// generate random residues of given length from seed
///
pub fn random_protein(length: usize, seed: u64) -> Sequence {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..length)
        .map(|_| RESIDUES[rng.gen_range(0..RESIDUES.len())])
        .collect()
}

///
/// random protein starting with `M`, as translated ORFs do
///
pub fn random_orf_protein(length: usize, seed: u64) -> Sequence {
    let mut seq = random_protein(length, seed);
    if let Some(head) = seq.first_mut() {
        *head = b'M';
    }
    seq
}
