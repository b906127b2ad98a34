//!
//! DualEncoder: immutable tables shared by any number of trellis runs
//!
use crate::code::GeneticCode;
use crate::error::Result;
use crate::params::EncodeParams;
use crate::scoring::{ScoringTable, SubstitutionMatrix};
use crate::summary::DualEncodingSummary;
use crate::trellis::{DualEncoding, Trellis};

///
/// Genetic code, scoring table and run parameters
///
/// Built once; every `encode` call creates its own `Trellis` so runs never
/// share mutable state.
///
#[derive(Debug, Clone)]
pub struct DualEncoder {
    code: GeneticCode,
    scoring: ScoringTable,
    params: EncodeParams,
}

impl DualEncoder {
    ///
    /// Fails with `InvalidStopPenalty` unless `params.stop_penalty` is negative
    ///
    pub fn new(
        code: GeneticCode,
        matrix: SubstitutionMatrix,
        params: EncodeParams,
    ) -> Result<Self> {
        Ok(DualEncoder {
            code,
            scoring: ScoringTable::new(matrix, params.stop_penalty)?,
            params,
        })
    }
    /// standard code and BLOSUM62
    pub fn blosum62(params: EncodeParams) -> Result<Self> {
        DualEncoder::new(
            GeneticCode::standard(),
            SubstitutionMatrix::blosum62(),
            params,
        )
    }
    pub fn code(&self) -> &GeneticCode {
        &self.code
    }
    pub fn scoring(&self) -> &ScoringTable {
        &self.scoring
    }
    pub fn params(&self) -> &EncodeParams {
        &self.params
    }
    ///
    /// A fresh trellis for step-by-step driving or checkpointing
    ///
    pub fn trellis<'a>(
        &'a self,
        alpha: &'a [u8],
        beta: &'a [u8],
        beta_offset: isize,
    ) -> Result<Trellis<'a>> {
        Trellis::new(&self.code, &self.scoring, alpha, beta, beta_offset)
    }
    ///
    /// Optimal sequence encoding `alpha` in frame 0 and
    /// `beta[beta_offset..]` in frame +1
    ///
    pub fn encode(&self, alpha: &[u8], beta: &[u8], beta_offset: isize) -> Result<DualEncoding> {
        self.trellis(alpha, beta, beta_offset)?
            .run(self.params.parallel)
    }
    ///
    /// `encode` followed by the frame translations and identities
    ///
    pub fn encode_with_summary(
        &self,
        alpha: &[u8],
        beta: &[u8],
        beta_offset: isize,
    ) -> Result<DualEncodingSummary> {
        let encoding = self.encode(alpha, beta, beta_offset)?;
        DualEncodingSummary::new(&self.code, &encoding, alpha, beta)
    }
}
