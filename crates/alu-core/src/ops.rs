//! Closed ALU operation catalog and flag-exact evaluation.
//!
//! Every operation maps a signed 32-bit operand pair to a result plus the
//! four status flags. Arithmetic wraps modulo 2^32; overflow and carry are
//! derived exactly as the target datapath derives them, which differs per
//! operation family (33rd-bit carry for add/sub, full-precision comparison
//! for mul, shifted-out bits for shifts).

#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::error::ModelError;
use crate::flags::Flags;

/// Operation families understood by the reference model.
///
/// The variant order is the catalog order used everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(missing_docs)]
pub enum AluOp {
    Add,
    Sub,
    Andl,
    Orl,
    Eorl,
    Andb,
    Orb,
    Eorb,
    Mul,
    Div,
    Shr,
    Shl,
    Rotl,
    Rotr,
    Neg,
    Notl,
    Notb,
}

/// Result and status flags produced by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AluOutcome {
    /// Truncated 32-bit result.
    pub result: i32,
    /// Flags derived from the evaluation.
    pub flags: Flags,
}

impl AluOp {
    /// Every operation in catalog order.
    pub const ALL: [Self; 17] = [
        Self::Add,
        Self::Sub,
        Self::Andl,
        Self::Orl,
        Self::Eorl,
        Self::Andb,
        Self::Orb,
        Self::Eorb,
        Self::Mul,
        Self::Div,
        Self::Shr,
        Self::Shl,
        Self::Rotl,
        Self::Rotr,
        Self::Neg,
        Self::Notl,
        Self::Notb,
    ];

    /// Canonical mnemonic for this operation.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Andl => "andl",
            Self::Orl => "orl",
            Self::Eorl => "eorl",
            Self::Andb => "andb",
            Self::Orb => "orb",
            Self::Eorb => "eorb",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Shr => "shr",
            Self::Shl => "shl",
            Self::Rotl => "rotl",
            Self::Rotr => "rotr",
            Self::Neg => "neg",
            Self::Notl => "notl",
            Self::Notb => "notb",
        }
    }

    /// Resolves a mnemonic back to its operation.
    #[must_use]
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == name)
    }

    /// Evaluates this operation over a signed operand pair.
    ///
    /// `neg` ignores `rs1`; `notl` and `notb` ignore `rs2`. Shift and
    /// rotate operations take their amount from `rs2`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DivisionByZero`] for `div` with `rs2 == 0`,
    /// and [`ModelError::ShiftOutOfRange`] for a shift or rotate amount
    /// outside `0..=31`.
    pub fn apply(self, rs1: i32, rs2: i32) -> Result<AluOutcome, ModelError> {
        let outcome = match self {
            Self::Add => add(rs1, rs2),
            Self::Sub => sub(rs1, rs2),
            Self::Andl => truth_value(rs1 != 0 && rs2 != 0),
            Self::Orl => truth_value(rs1 != 0 || rs2 != 0),
            Self::Eorl => truth_value((rs1 != 0) != (rs2 != 0)),
            Self::Andb => nz_only(rs1 & rs2),
            Self::Orb => nz_only(rs1 | rs2),
            Self::Eorb => nz_only(rs1 ^ rs2),
            Self::Mul => mul(rs1, rs2),
            Self::Div => div(rs1, rs2)?,
            Self::Shr => shr(rs1, rs2)?,
            Self::Shl => shl(rs1, rs2)?,
            Self::Rotl => rotl(rs1, rs2)?,
            Self::Rotr => rotr(rs1, rs2)?,
            Self::Neg => sub(0, rs2),
            Self::Notl => truth_value(rs1 == 0),
            Self::Notb => nz_only(!rs1),
        };
        Ok(outcome)
    }
}

fn add(rs1: i32, rs2: i32) -> AluOutcome {
    let (result, overflow) = rs1.overflowing_add(rs2);
    let (_, carry) = (rs1 as u32).overflowing_add(rs2 as u32);
    AluOutcome {
        result,
        flags: Flags::from_result(result, carry, overflow),
    }
}

fn sub(rs1: i32, rs2: i32) -> AluOutcome {
    let (result, overflow) = rs1.overflowing_sub(rs2);
    let (_, borrow) = (rs1 as u32).overflowing_sub(rs2 as u32);
    AluOutcome {
        result,
        flags: Flags::from_result(result, borrow, overflow),
    }
}

fn mul(rs1: i32, rs2: i32) -> AluOutcome {
    let (result, overflow) = rs1.overflowing_mul(rs2);
    AluOutcome {
        result,
        flags: Flags::from_result(result, false, overflow),
    }
}

fn div(rs1: i32, rs2: i32) -> Result<AluOutcome, ModelError> {
    if rs2 == 0 {
        return Err(ModelError::DivisionByZero);
    }
    // Truncates toward zero; the only quotient that does not fit is MIN / -1.
    let (result, overflow) = rs1.overflowing_div(rs2);
    Ok(AluOutcome {
        result,
        flags: Flags::from_result(result, false, overflow),
    })
}

fn shr(rs1: i32, rs2: i32) -> Result<AluOutcome, ModelError> {
    let amount = shift_amount(rs2)?;
    let result = rs1 >> amount;
    let carry = amount > 0 && (rs1 >> (amount - 1)) & 1 != 0;
    Ok(AluOutcome {
        result,
        flags: Flags::from_result(result, carry, false),
    })
}

fn shl(rs1: i32, rs2: i32) -> Result<AluOutcome, ModelError> {
    let amount = shift_amount(rs2)?;
    let bits = rs1 as u32;
    let result = (bits << amount) as i32;
    let carry = amount > 0 && (bits >> (32 - amount)) & 1 != 0;
    Ok(AluOutcome {
        result,
        flags: Flags::from_result(result, carry, false),
    })
}

fn rotl(rs1: i32, rs2: i32) -> Result<AluOutcome, ModelError> {
    let amount = shift_amount(rs2)?;
    let result = (rs1 as u32).rotate_left(amount) as i32;
    let carry = amount > 0 && result & 1 != 0;
    Ok(AluOutcome {
        result,
        flags: Flags::from_result(result, carry, false),
    })
}

fn rotr(rs1: i32, rs2: i32) -> Result<AluOutcome, ModelError> {
    let amount = shift_amount(rs2)?;
    let result = (rs1 as u32).rotate_right(amount) as i32;
    let carry = amount > 0 && result < 0;
    Ok(AluOutcome {
        result,
        flags: Flags::from_result(result, carry, false),
    })
}

fn truth_value(value: bool) -> AluOutcome {
    nz_only(i32::from(value))
}

fn nz_only(result: i32) -> AluOutcome {
    AluOutcome {
        result,
        flags: Flags::from_result(result, false, false),
    }
}

fn shift_amount(rs2: i32) -> Result<u32, ModelError> {
    u32::try_from(rs2)
        .ok()
        .filter(|amount| *amount < 32)
        .ok_or(ModelError::ShiftOutOfRange { amount: rs2 })
}
