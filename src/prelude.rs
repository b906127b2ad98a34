//!
//! globally-available parts
//!
pub use crate::code::GeneticCode;
pub use crate::common::{Score, Sequence};
pub use crate::encoder::DualEncoder;
pub use crate::error::{DualCodeError, Result};
pub use crate::params::EncodeParams;
pub use crate::scoring::{ScoringTable, SubstitutionMatrix};
pub use crate::trellis::{DualEncoding, Trellis, TrellisState};
