//!
//! Genetic code: codon translation and codon partitions
//!
//! The codon table is laid out in the NCBI `gc.prt` order, i.e. the first,
//! second and third bases each iterate over `T, C, A, G`.
//!
use crate::common::{base_index, Codon, Sequence, STOP, VALID_BASES};
use crate::error::{DualCodeError, Result};

/// NCBI translation table 1 (standard code)
pub const STANDARD_TABLE: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Start codon required at the head of the alpha frame
pub const START_CODON: Codon = *b"ATG";

/// position of the base in the `T, C, A, G` ordering of NCBI tables
fn base_index_tcag(base: u8) -> Option<usize> {
    match base {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

fn codon_index_tcag(codon: &[u8]) -> Result<usize> {
    codon.iter().try_fold(0, |acc, &b| {
        base_index_tcag(b)
            .map(|i| acc * 4 + i)
            .ok_or(DualCodeError::InvalidNucleotide(b as char))
    })
}

///
/// Immutable codon table with precomputed first/last-base partitions.
///
/// The partitions contain non-stop codons only, so the step optimizer can
/// search interior positions without special-casing stop codons.
///
#[derive(Debug, Clone)]
pub struct GeneticCode {
    /// amino acid per codon, TCAG order
    table: [u8; 64],
    /// non-stop codons grouped by their first base (`VALID_BASES` order)
    with_first: [Vec<Codon>; 4],
    /// non-stop codons grouped by their last base (`VALID_BASES` order)
    with_last: [Vec<Codon>; 4],
    /// all stop codons, sorted
    stops: Vec<Codon>,
}

impl GeneticCode {
    ///
    /// Build the code from a 64-symbol NCBI translation string
    ///
    pub fn from_table(table: &[u8; 64]) -> Result<GeneticCode> {
        let mut with_first: [Vec<Codon>; 4] = Default::default();
        let mut with_last: [Vec<Codon>; 4] = Default::default();
        let mut stops = Vec::new();

        for (i, j, k) in itertools::iproduct!(0..4, 0..4, 0..4) {
            let codon = [VALID_BASES[i], VALID_BASES[j], VALID_BASES[k]];
            let aa = table[codon_index_tcag(&codon)?];
            if !aa.is_ascii_uppercase() && aa != STOP {
                return Err(DualCodeError::Parse(format!(
                    "codon table has invalid symbol `{}`",
                    aa as char
                )));
            }
            if aa == STOP {
                stops.push(codon);
                continue;
            }
            with_first[i].push(codon);
            with_last[k].push(codon);
        }

        Ok(GeneticCode {
            table: *table,
            with_first,
            with_last,
            stops,
        })
    }
    ///
    /// The standard genetic code (NCBI table 1)
    ///
    pub fn standard() -> GeneticCode {
        GeneticCode::from_table(STANDARD_TABLE).expect("standard table is well-formed")
    }
    ///
    /// Translate a single codon into its amino-acid symbol
    ///
    pub fn translate_codon(&self, codon: &[u8]) -> Result<u8> {
        if codon.len() != 3 {
            return Err(DualCodeError::UnknownCodon(
                String::from_utf8_lossy(codon).into_owned(),
            ));
        }
        Ok(self.table[codon_index_tcag(codon)?])
    }
    ///
    /// Translate consecutive non-overlapping codons of `seq`
    ///
    /// A trailing remainder shorter than a codon is dropped.
    ///
    pub fn translate(&self, seq: &[u8]) -> Result<Sequence> {
        seq.chunks_exact(3)
            .map(|codon| self.translate_codon(codon))
            .collect()
    }
    /// Is the codon one of the stop codons?
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        matches!(self.translate_codon(codon), Ok(STOP))
    }
    /// Non-stop codons whose first base is `base`
    pub fn codons_with_first(&self, base: u8) -> Result<&[Codon]> {
        let i = base_index(base).ok_or(DualCodeError::InvalidNucleotide(base as char))?;
        Ok(&self.with_first[i])
    }
    /// Non-stop codons whose last base is `base`
    pub fn codons_with_last(&self, base: u8) -> Result<&[Codon]> {
        let i = base_index(base).ok_or(DualCodeError::InvalidNucleotide(base as char))?;
        Ok(&self.with_last[i])
    }
    /// Stop codons of this code, in `VALID_BASES` lexicographic order
    pub fn stop_codons(&self) -> &[Codon] {
        &self.stops
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        GeneticCode::standard()
    }
}

///
/// All 64 codons in `VALID_BASES` lexicographic order
///
pub fn all_codons() -> impl Iterator<Item = Codon> {
    let bases = || VALID_BASES.iter().copied();
    itertools::iproduct!(bases(), bases(), bases()).map(|(a, b, c)| [a, b, c])
}
