//!
//! Error types of dual encoding construction
//!
use thiserror::Error;

/// Errors surfaced to the caller of the trellis and its collaborators.
///
/// Boundary violations (a start/stop codon that cannot be placed) are not
/// errors; they are scored with the stop penalty and only escalate to
/// `NoFeasibleSolution` when every terminal slot is infeasible.
#[derive(Error, Debug)]
pub enum DualCodeError {
    /// `beta_offset` places a required beta index out of range
    #[error("invalid beta offset {offset}: alpha length {alpha_len} needs beta indices {offset}..{end} but beta has length {beta_len}")]
    InvalidOffset {
        offset: isize,
        alpha_len: usize,
        beta_len: usize,
        end: isize,
    },
    /// alpha sequence has no residue to encode
    #[error("alpha sequence is empty")]
    EmptyAlpha,
    /// no infix is valid for both frames at an interior position
    #[error("no feasible infix between fixed base {fixed} and proposed base {proposed} at position {position}")]
    InfeasibleStep {
        position: usize,
        fixed: char,
        proposed: char,
    },
    /// every terminal slot carries a boundary violation
    #[error("no feasible dual encoding exists (start/stop codons cannot be placed)")]
    NoFeasibleSolution,
    /// substitution score missing for the pair in both orientations
    #[error("substitution score for ({0}, {1}) is not defined")]
    MissingScore(char, char),
    /// codon absent from the genetic code
    #[error("codon {0} has no translation")]
    UnknownCodon(String),
    /// base outside of A/C/G/T
    #[error("invalid nucleotide `{0}`")]
    InvalidNucleotide(char),
    /// stop penalty must rank below every substitution score
    #[error("stop penalty must be negative, got {0}")]
    InvalidStopPenalty(i32),
    /// malformed checkpoint (wrong position or slot count)
    #[error("invalid trellis state: {0}")]
    InvalidState(String),
    /// malformed matrix or sequence text
    #[error("parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DualCodeError>;
