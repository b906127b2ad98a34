//!
//! Command line entry points
//!
use crate::code::GeneticCode;
use crate::encoder::DualEncoder;
use crate::error::Result;
use crate::io;
use crate::params::EncodeParams;
use crate::scoring::SubstitutionMatrix;
use crate::summary::DualEncodingSummary;
use log::info;
use std::path::Path;

///
/// Load a substitution matrix in NCBI text layout, or BLOSUM62 if `None`
///
pub fn load_matrix(matrix: Option<&Path>) -> Result<SubstitutionMatrix> {
    match matrix {
        Some(path) => {
            info!("loading matrix {}", path.display());
            std::fs::read_to_string(path)?.parse()
        }
        None => Ok(SubstitutionMatrix::blosum62()),
    }
}

///
/// Encode the first record of `alpha_fa` and `beta_fa` and render the report
///
/// The report is JSON if `json` is set, otherwise a tab-separated text.
///
pub fn encode(
    alpha_fa: &Path,
    beta_fa: &Path,
    beta_offset: isize,
    matrix: Option<&Path>,
    params: EncodeParams,
    json: bool,
) -> Result<String> {
    let alpha = io::fasta::parse_first_protein(alpha_fa)?;
    let beta = io::fasta::parse_first_protein(beta_fa)?;
    info!(
        "alpha={} ({} aa) beta={} ({} aa) offset={}",
        alpha.id,
        alpha.seq.len(),
        beta.id,
        beta.seq.len(),
        beta_offset
    );
    info!("params {}", params.to_string().replace('\n', " "));

    let encoder = DualEncoder::new(GeneticCode::standard(), load_matrix(matrix)?, params)?;
    let summary: DualEncodingSummary =
        encoder.encode_with_summary(&alpha.seq, &beta.seq, beta_offset)?;
    if json {
        Ok(serde_json::to_string_pretty(&summary)?)
    } else {
        Ok(summary.to_string())
    }
}
