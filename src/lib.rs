//!
//! Dual encoding of two proteins in overlapping reading frames
//!
//! Finds the nucleotide sequence whose frame 0 translation is closest to
//! `alpha` and whose frame +1 translation is closest to `beta`, by a forward
//! trellis that keeps the best partial sequence per terminal base.
//!
pub mod cli;
pub mod code;
pub mod common;
pub mod encoder;
pub mod error;
pub mod io;
pub mod params;
pub mod prelude;
pub mod random_seq;
pub mod scoring;
pub mod step;
pub mod summary;
pub mod trellis;
