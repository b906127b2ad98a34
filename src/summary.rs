//!
//! Frame translations and identities of a dual encoding
//!
use crate::code::GeneticCode;
use crate::common::{sequence_to_string, Score, Sequence};
use crate::error::Result;
use crate::trellis::DualEncoding;
use serde::{Deserialize, Serialize};

/// translation in the alpha frame (offset 0)
pub fn translate_alpha(code: &GeneticCode, seq: &[u8]) -> Result<Sequence> {
    code.translate(seq)
}

/// translation in the beta frame (offset +1, leading base dropped)
pub fn translate_beta(code: &GeneticCode, seq: &[u8]) -> Result<Sequence> {
    code.translate(seq.get(1..).unwrap_or(&[]))
}

///
/// Fraction of positions where `observed` equals `expected`
///
/// Compared over the shorter of the two; `0.0` if that is empty.
///
pub fn identity(expected: &[u8], observed: &[u8]) -> f64 {
    let n = expected.len().min(observed.len());
    if n == 0 {
        return 0.0;
    }
    let n_match = expected
        .iter()
        .zip(observed.iter())
        .filter(|(a, b)| a == b)
        .count();
    n_match as f64 / n as f64
}

///
/// Report of a dual encoding against its two target proteins
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualEncodingSummary {
    pub sequence: String,
    pub score: Score,
    pub beta_offset: usize,
    /// target alpha
    pub alpha: String,
    /// alpha frame of `sequence`
    pub alpha_translated: String,
    pub alpha_identity: f64,
    /// covered window `beta[beta_offset..beta_offset+alpha.len()]`
    pub beta: String,
    /// beta frame of `sequence`
    pub beta_translated: String,
    pub beta_identity: f64,
}

impl DualEncodingSummary {
    pub fn new(
        code: &GeneticCode,
        encoding: &DualEncoding,
        alpha: &[u8],
        beta: &[u8],
    ) -> Result<Self> {
        let alpha_translated = translate_alpha(code, &encoding.sequence)?;
        let beta_translated = translate_beta(code, &encoding.sequence)?;
        let start = encoding.beta_offset.min(beta.len());
        let end = (encoding.beta_offset + alpha.len()).min(beta.len());
        let beta_window = &beta[start..end];
        Ok(DualEncodingSummary {
            sequence: sequence_to_string(&encoding.sequence),
            score: encoding.score,
            beta_offset: encoding.beta_offset,
            alpha: sequence_to_string(alpha),
            alpha_identity: identity(alpha, &alpha_translated),
            alpha_translated: sequence_to_string(&alpha_translated),
            beta: sequence_to_string(beta_window),
            beta_identity: identity(beta_window, &beta_translated),
            beta_translated: sequence_to_string(&beta_translated),
        })
    }
}

impl std::fmt::Display for DualEncodingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "score\t{}", self.score)?;
        writeln!(f, "sequence\t{}", self.sequence)?;
        writeln!(f, "alpha\t{}", self.alpha)?;
        writeln!(
            f,
            "alpha'\t{}\t{:.0}%",
            self.alpha_translated,
            self.alpha_identity * 100.0
        )?;
        writeln!(f, "beta\t{}", self.beta)?;
        write!(
            f,
            "beta'\t{}\t{:.0}%",
            self.beta_translated,
            self.beta_identity * 100.0
        )
    }
}
