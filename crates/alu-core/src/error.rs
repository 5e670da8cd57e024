use thiserror::Error;

/// Domain precondition violations the model refuses to evaluate past.
///
/// Any of these aborts the generation pass that hit it: a stream produced
/// from a bad case would desynchronize the positional layout consumers
/// depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ModelError {
    /// `div` was asked to divide by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Shift or rotate amount outside the defined `0..=31` domain.
    #[error("shift amount {amount} outside 0..=31")]
    ShiftOutOfRange {
        /// The offending `rs2` value.
        amount: i32,
    },
    /// A header field was asked to hold a count wider than 8 bits.
    #[error("{what} count {count} exceeds header field limit of 255")]
    CountOverflow {
        /// Which header field overflowed.
        what: &'static str,
        /// The count that did not fit.
        count: usize,
    },
}
