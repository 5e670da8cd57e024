//! ALU and condition-code reference model for Flagforge.

/// Status flag tuple and PSW nibble encoding.
pub mod flags;
pub use flags::{Flags, PSW_C, PSW_N, PSW_V, PSW_Z};

/// Closed ALU operation catalog and flag-exact evaluation.
pub mod ops;
pub use ops::{AluOp, AluOutcome};

/// Branch and set condition predicates.
pub mod cond;
pub use cond::Condition;

/// Fixed-width bit-field packing into 32-bit words.
pub mod pack;
pub use pack::{pack_fields, unpack_fields, BitWidth};

/// Domain precondition errors.
pub mod error;
pub use error::ModelError;

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
