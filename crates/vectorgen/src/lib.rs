//! Flagforge verification vector generator library.
//!
//! Drives the `alu-core` reference model over the static test plan and
//! assembles the packed word stream plus the expectation tables consumed
//! by the downstream verification harness.

/// Textual `.WORD` listing and expectation table rendering.
pub mod listing;
/// Static test plan: operand corpora and operation groups.
pub mod plan;
/// Assembly of the packed verification word stream.
pub mod stream;

pub use listing::render_listing;
pub use plan::{TestGroup, ALU_PLAN};
pub use stream::{assemble_alu, assemble_conditions, Block, ExpectationRecord, VectorStream};

#[cfg(test)]
use tempfile as _;
