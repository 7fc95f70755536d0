#![forbid(unsafe_code)]

//! Letter-sequence to chain generator (headless).
//!
//! Design goals:
//! - geometry is a pure function of the input text and the surface size
//! - deterministic, testable outputs (identical input yields identical chains)
//! - no I/O and no drawing API; rendering lives in `strand-render`

pub mod chain;
pub mod error;
pub mod geom;
pub mod sequence;
pub mod walk;

pub use chain::{Chain, Node, build_chain, generate};
pub use error::{Result, ValidationError};
pub use sequence::Sequence;
pub use walk::{Regime, map_range};

#[cfg(test)]
mod tests;
