//!
//! Protein FASTA input
//!
use crate::common::{sequence_to_string, Sequence, STOP};
use crate::error::{DualCodeError, Result};
use bio::io::fasta;
use log::{info, warn};
use std::path::Path;

/// residues accepted by the substitution matrices
const VALID_RESIDUES: &[u8] = b"ACDEFGHIKLMNPQRSTVWYBZX";

///
/// Upper-case residues and replace unknown symbols with `X`
///
pub fn sanitize_residues(seq: &[u8]) -> Sequence {
    seq.iter()
        .enumerate()
        .map(|(i, &aa)| {
            let aa = aa.to_ascii_uppercase();
            if aa == STOP || VALID_RESIDUES.contains(&aa) {
                aa
            } else {
                warn!("informal residue `{}` detected in residues[{}]", aa as char, i);
                b'X'
            }
        })
        .collect()
}

///
/// A named protein sequence
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protein {
    pub id: String,
    pub seq: Sequence,
}

impl std::fmt::Display for Protein {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}", self.id, sequence_to_string(&self.seq))
    }
}

///
/// Read all protein records of a FASTA file
///
pub fn parse_proteins<P: AsRef<Path>>(filename: P) -> Result<Vec<Protein>> {
    let reader = fasta::Reader::from_file(filename.as_ref())
        .map_err(|e| DualCodeError::Parse(format!("{}: {}", filename.as_ref().display(), e)))?;
    let mut proteins = Vec::new();
    for result in reader.records() {
        let record = result?;
        proteins.push(Protein {
            id: record.id().to_string(),
            seq: sanitize_residues(record.seq()),
        });
    }
    info!(
        "read {} proteins from {}",
        proteins.len(),
        filename.as_ref().display()
    );
    Ok(proteins)
}

///
/// First record of a FASTA file
///
pub fn parse_first_protein<P: AsRef<Path>>(filename: P) -> Result<Protein> {
    let path = filename.as_ref().display().to_string();
    parse_proteins(filename)?
        .into_iter()
        .next()
        .ok_or_else(|| DualCodeError::Parse(format!("{} has no record", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sanitize() {
        assert_eq!(sanitize_residues(b"mkV*"), b"MKV*");
        assert_eq!(sanitize_residues(b"MK1J"), b"MKXX");
    }
    #[test]
    fn read_fasta() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">alpha desc\nMNKL\nVV*\n>beta\nmkk").unwrap();
        let proteins = parse_proteins(file.path()).unwrap();
        assert_eq!(proteins.len(), 2);
        assert_eq!(proteins[0].id, "alpha");
        assert_eq!(proteins[0].seq, b"MNKLVV*");
        assert_eq!(proteins[1].seq, b"MKK");
        assert_eq!(proteins[1].to_string(), ">beta\nMKK");
        assert_eq!(parse_first_protein(file.path()).unwrap().id, "alpha");
    }
    #[test]
    fn empty_fasta() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(parse_first_protein(file.path()).is_err());
        assert!(parse_proteins("/nonexistent/path.fa").is_err());
    }
}
