//! Static test plan: operand corpora and the operation groups they feed.
//!
//! The plan is data, not configuration. Pair order, operation order and
//! group order are all part of the positional protocol, so changing any of
//! them desynchronizes every consumer built against the emitted stream.

use alu_core::AluOp;

/// One corpus of operand pairs exercised by a set of operations.
#[derive(Debug, Clone, Copy)]
pub struct TestGroup {
    /// Operand pairs in emission order.
    pub pairs: &'static [(i32, i32)],
    /// Operations evaluated over every pair, in emission order.
    pub ops: &'static [AluOp],
    /// Encoding-variant count carried into the group header.
    pub variant_count: u32,
}

// Alternating-bit patterns, 0x5555_5555 and 0xAAAA_AAAA as signed words.
const EVEN_BITS: i32 = 0x5555_5555;
const ODD_BITS: i32 = -0x5555_5556;

// Rotate corpus patterns, 0xABCD_EF97 and 0x79FE_DCBA as signed words.
const ROT_PATTERN_A: i32 = -0x5432_1069;
const ROT_PATTERN_B: i32 = 0x79FE_DCBA;

/// The full ALU test plan in emission order.
pub const ALU_PLAN: &[TestGroup] = &[
    TestGroup {
        pairs: &[
            (10, 20),
            (10, -20),
            (-10, 20),
            (-10, -20),
            (0x4000_0000, 0x4000_0000),
            (-0x4000_0000, 0x4000_0000),
            (0x4000_0000, -0x4000_0000),
            (-0x4000_0000, -0x4000_0000),
            (i32::MAX, 0),
            (i32::MAX, 1),
            (i32::MAX, -1),
            (i32::MAX, i32::MAX),
            (i32::MAX, i32::MIN),
            (i32::MIN, 0),
            (i32::MIN, 1),
            (i32::MIN, -1),
            (i32::MIN, i32::MIN),
            (i32::MIN, i32::MAX),
        ],
        ops: &[AluOp::Add, AluOp::Sub],
        variant_count: 6,
    },
    TestGroup {
        pairs: &[
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
            (0, 12_345_678),
            (12_345_678, 0),
            (12_345_678, 12_345_678),
            (0, -12_345_678),
            (-12_345_678, 0),
            (-12_345_678, -12_345_678),
        ],
        ops: &[AluOp::Andl, AluOp::Orl, AluOp::Eorl],
        variant_count: 6,
    },
    TestGroup {
        pairs: &[
            (EVEN_BITS, EVEN_BITS),
            (EVEN_BITS, ODD_BITS),
            (ODD_BITS, EVEN_BITS),
            (ODD_BITS, ODD_BITS),
        ],
        ops: &[AluOp::Andb, AluOp::Orb, AluOp::Eorb],
        variant_count: 6,
    },
    TestGroup {
        pairs: &[
            (0, 0),
            (0, -1),
            (-1, 0),
            (111_111_111, 8),
            (-111_111_111, 8),
            (i32::MAX, 1),
            (i32::MIN, 1),
            (i32::MIN, -1),
            (1, i32::MAX),
            (1, i32::MIN),
            (0x8001, 0x7FFF),
            (0x20001, 0x7FFF),
        ],
        ops: &[AluOp::Mul],
        variant_count: 6,
    },
    TestGroup {
        pairs: &[
            (0, -1),
            (888_888_888, 8),
            (-888_888_888, 8),
            (i32::MIN, 2),
            (0x4000_0000, 2),
            (i32::MIN, -1),
            (1_234_567_890, 5654),
            (-1_234_567_890, 5654),
            (1_234_567_890, -5654),
            (-1_234_567_890, -5654),
            (i32::MIN, i32::MAX),
        ],
        ops: &[AluOp::Div],
        variant_count: 6,
    },
    TestGroup {
        pairs: &[
            (0, 0),
            (EVEN_BITS, 0),
            (ODD_BITS, 0),
            (-1, 0),
            (0, 1),
            (EVEN_BITS, 1),
            (ODD_BITS, 1),
            (-1, 1),
            (0, 31),
            (EVEN_BITS, 31),
            (ODD_BITS, 31),
            (-1, 31),
        ],
        ops: &[AluOp::Shr, AluOp::Shl],
        variant_count: 6,
    },
    TestGroup {
        pairs: &[
            (0, 0),
            (ROT_PATTERN_A, 0),
            (ROT_PATTERN_B, 0),
            (-1, 0),
            (0, 4),
            (ROT_PATTERN_A, 4),
            (ROT_PATTERN_B, 4),
            (-1, 4),
            (0, 16),
            (ROT_PATTERN_A, 16),
            (ROT_PATTERN_B, 16),
            (-1, 16),
            (0, 31),
            (ROT_PATTERN_A, 31),
            (ROT_PATTERN_B, 31),
            (-1, 31),
        ],
        ops: &[AluOp::Rotl, AluOp::Rotr],
        variant_count: 6,
    },
    TestGroup {
        pairs: &[
            (0, 0),
            (0, 1),
            (0, i32::MAX),
            (0, i32::MIN),
            (0, -i32::MAX),
            (0, -1),
        ],
        ops: &[AluOp::Neg],
        variant_count: 5,
    },
    TestGroup {
        pairs: &[
            (0, 0),
            (1, 0),
            (i32::MAX, 0),
            (i32::MIN, 0),
            (-i32::MAX, 0),
            (-1, 0),
        ],
        ops: &[AluOp::Notl],
        variant_count: 2,
    },
    TestGroup {
        pairs: &[
            (0, 0),
            (1, 0),
            (EVEN_BITS, 0),
            (i32::MAX, 0),
            (i32::MIN, 0),
            (-i32::MAX, 0),
            (ODD_BITS, 0),
            (-1, 0),
        ],
        ops: &[AluOp::Notb],
        variant_count: 2,
    },
];

impl TestGroup {
    /// Number of cases this group contributes: one per operation per pair.
    #[must_use]
    pub const fn case_count(&self) -> usize {
        self.pairs.len() * self.ops.len()
    }
}
