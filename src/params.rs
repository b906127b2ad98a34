//!
//! EncodeParams for the dual encoding trellis
//!
use crate::common::Score;
use crate::error::{DualCodeError, Result};
use crate::scoring::DEFAULT_STOP_PENALTY;
use serde::{Deserialize, Serialize};

///
/// Run-level parameters of the trellis
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodeParams {
    /// score of a stop codon or an unsatisfiable start/stop constraint
    pub stop_penalty: Score,
    /// evaluate the four proposed bases of each position with rayon
    pub parallel: bool,
}

impl EncodeParams {
    pub fn new(stop_penalty: Score, parallel: bool) -> Result<EncodeParams> {
        if stop_penalty >= 0 {
            return Err(DualCodeError::InvalidStopPenalty(stop_penalty));
        }
        Ok(EncodeParams {
            stop_penalty,
            parallel,
        })
    }
    /// sequential run with the default stop penalty
    pub fn default() -> EncodeParams {
        EncodeParams {
            stop_penalty: DEFAULT_STOP_PENALTY,
            parallel: false,
        }
    }
    /// parallel run with the default stop penalty
    pub fn parallel() -> EncodeParams {
        EncodeParams {
            parallel: true,
            ..EncodeParams::default()
        }
    }
}

impl std::fmt::Display for EncodeParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "stop_penalty: {}", self.stop_penalty)?;
        writeln!(f, "parallel: {}", self.parallel)
    }
}
