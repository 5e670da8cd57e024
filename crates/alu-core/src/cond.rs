//! Branch and set condition predicates over the status flags.
//!
//! A branch tests the flags and leaves them untouched. The set form writes
//! its 0/1 outcome to the destination and then rebuilds the flags from that
//! outcome alone, so `N`, `V` and `C` always come out clear. That asymmetry
//! is part of the instruction set contract.

use crate::flags::Flags;
use crate::ops::AluOutcome;

/// Condition predicates, pure functions of the four status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Condition {
    /// Equal: `Z`.
    Eq,
    /// Not equal: `!Z`.
    Ne,
    /// Signed greater or equal: `N == V`.
    Ge,
    /// Signed less than: `N != V`.
    Lt,
    /// Signed greater than: `!Z && N == V`.
    Gt,
    /// Signed less or equal: `Z || N != V`.
    Le,
    /// Unsigned higher: `!C && !Z`.
    Hi,
    /// Unsigned lower or same: `C || Z`.
    Ls,
    /// Carry clear: `!C`.
    Cc,
    /// Carry set: `C`.
    Cs,
    /// Overflow clear: `!V`.
    Vc,
    /// Overflow set: `V`.
    Vs,
    /// Plus: `!N`.
    Pl,
    /// Minus: `N`.
    Mi,
    /// Always true.
    T,
    /// Always false.
    F,
}

impl Condition {
    /// Branch conditions in the fixed emission order consumers rely on.
    pub const BRANCH_ORDER: [Self; 16] = [
        Self::Eq,
        Self::Ge,
        Self::T,
        Self::F,
        Self::Hi,
        Self::Ls,
        Self::Gt,
        Self::Le,
        Self::Lt,
        Self::Ne,
        Self::Cc,
        Self::Cs,
        Self::Vc,
        Self::Vs,
        Self::Pl,
        Self::Mi,
    ];

    /// Set conditions in the fixed emission order consumers rely on.
    pub const SET_ORDER: [Self; 6] = [Self::Eq, Self::Ge, Self::Gt, Self::Le, Self::Lt, Self::Ne];

    /// Evaluates the predicate against a flag state.
    #[must_use]
    pub const fn holds(self, flags: Flags) -> bool {
        match self {
            Self::Eq => flags.zero,
            Self::Ne => !flags.zero,
            Self::Ge => flags.negative == flags.overflow,
            Self::Lt => flags.negative != flags.overflow,
            Self::Gt => !flags.zero && flags.negative == flags.overflow,
            Self::Le => flags.zero || flags.negative != flags.overflow,
            Self::Hi => !flags.carry && !flags.zero,
            Self::Ls => flags.carry || flags.zero,
            Self::Cc => !flags.carry,
            Self::Cs => flags.carry,
            Self::Vc => !flags.overflow,
            Self::Vs => flags.overflow,
            Self::Pl => !flags.negative,
            Self::Mi => flags.negative,
            Self::T => true,
            Self::F => false,
        }
    }

    /// Applies the set-on-condition form: the predicate outcome becomes the
    /// destination value and the flags are rebuilt from it.
    #[must_use]
    pub const fn evaluate_set(self, flags: Flags) -> AluOutcome {
        let result = if self.holds(flags) { 1 } else { 0 };
        AluOutcome {
            result,
            flags: Flags {
                negative: false,
                zero: result == 0,
                overflow: false,
                carry: false,
            },
        }
    }

    /// Mnemonic of the branch instruction testing this condition.
    #[must_use]
    pub const fn branch_mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "beq",
            Self::Ne => "bne",
            Self::Ge => "bge",
            Self::Lt => "blt",
            Self::Gt => "bgt",
            Self::Le => "ble",
            Self::Hi => "bhi",
            Self::Ls => "bls",
            Self::Cc => "bcc",
            Self::Cs => "bcs",
            Self::Vc => "bvc",
            Self::Vs => "bvs",
            Self::Pl => "bpl",
            Self::Mi => "bmi",
            Self::T => "bt",
            Self::F => "bf",
        }
    }

    /// Mnemonic of the set-on-condition instruction for this condition.
    #[must_use]
    pub const fn set_mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "seq",
            Self::Ne => "sne",
            Self::Ge => "sge",
            Self::Lt => "slt",
            Self::Gt => "sgt",
            Self::Le => "sle",
            Self::Hi => "shi",
            Self::Ls => "sls",
            Self::Cc => "scc",
            Self::Cs => "scs",
            Self::Vc => "svc",
            Self::Vs => "svs",
            Self::Pl => "spl",
            Self::Mi => "smi",
            Self::T => "st",
            Self::F => "sf",
        }
    }
}
