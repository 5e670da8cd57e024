//! Assembly of the packed verification word stream.
//!
//! Emission order is the protocol: per group a header, the operand pairs,
//! one result block per operation, then the group's flags packed eight per
//! word, with a zero terminator word after the last group. The expectation
//! records accumulate in the same order the words are generated, so the
//! audit table stays positionally correlated with the stream.

#![allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]

use alu_core::{pack_fields, BitWidth, Condition, Flags, ModelError};

use crate::plan::TestGroup;

/// One run of words destined for a single `.WORD` region of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The 32-bit words in emission order.
    pub words: Vec<u32>,
    /// Comment attached to the block in the rendered listing.
    pub comment: Option<String>,
    /// Whether a blank line follows this block in the rendered listing.
    pub gap_after: bool,
}

/// One audit-table row, mirroring exactly one evaluated case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectationRecord {
    /// Instruction mnemonic.
    pub mnemonic: &'static str,
    /// First operand; absent for condition cases.
    pub rs1: Option<i32>,
    /// Second operand; absent for condition cases.
    pub rs2: Option<i32>,
    /// Flags consumed by the case; absent for ALU cases.
    pub flags_in: Option<Flags>,
    /// Result or destination value.
    pub result: i32,
    /// Flags after the case.
    pub flags_out: Flags,
}

/// The packed word stream plus its parallel expectation table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorStream {
    /// Word blocks in emission order.
    pub blocks: Vec<Block>,
    /// Audit rows in the same order the words were generated.
    pub records: Vec<ExpectationRecord>,
}

impl VectorStream {
    /// Flattens the stream into the raw word sequence consumers load.
    #[must_use]
    pub fn words(&self) -> Vec<u32> {
        self.blocks
            .iter()
            .flat_map(|block| block.words.iter().copied())
            .collect()
    }

    fn push(&mut self, words: Vec<u32>, comment: Option<String>, gap_after: bool) {
        self.blocks.push(Block {
            words,
            comment,
            gap_after,
        });
    }
}

/// Assembles the ALU verification stream for a plan.
///
/// # Errors
///
/// Propagates any [`ModelError`] hit while evaluating the plan, aborting
/// the whole pass: a partially assembled stream would desynchronize the
/// positional layout.
pub fn assemble_alu(plan: &[TestGroup]) -> Result<VectorStream, ModelError> {
    let mut stream = VectorStream::default();

    for group in plan {
        stream.push(vec![group_header(group)?], None, false);

        for (index, (rs1, rs2)) in group.pairs.iter().enumerate() {
            stream.push(
                vec![*rs1 as u32, *rs2 as u32],
                Some(format!("input {index}")),
                false,
            );
        }

        let mut flags = Vec::with_capacity(group.case_count());
        for op in group.ops {
            let mut results = Vec::with_capacity(group.pairs.len());
            for (rs1, rs2) in group.pairs {
                let outcome = op.apply(*rs1, *rs2)?;
                results.push(outcome.result as u32);
                flags.push(u32::from(outcome.flags.to_nibble()));
                stream.records.push(ExpectationRecord {
                    mnemonic: op.mnemonic(),
                    rs1: Some(*rs1),
                    rs2: Some(*rs2),
                    flags_in: None,
                    result: outcome.result,
                    flags_out: outcome.flags,
                });
            }
            stream.push(
                results,
                Some(format!("outputs of {}", op.mnemonic())),
                false,
            );
        }

        stream.push(
            pack_fields(&flags, BitWidth::W4),
            Some("expected flags".to_owned()),
            true,
        );
    }

    stream.push(vec![0], None, false);
    Ok(stream)
}

/// Assembles the branch and set-on-condition verification stream.
///
/// Every condition is evaluated at all 16 PSW states: the branch
/// conditions first, then the set conditions. Branches record the input
/// flags unchanged; sets record the flags rebuilt from their own outcome.
#[must_use]
pub fn assemble_conditions() -> VectorStream {
    let mut stream = VectorStream::default();
    let case_count = (Condition::BRANCH_ORDER.len() + Condition::SET_ORDER.len()) * 16;
    stream.push(
        vec![case_count as u32],
        Some("number of tests".to_owned()),
        false,
    );

    let mut flags_out = Vec::with_capacity(case_count);
    let mut destinations = Vec::with_capacity(case_count);

    for cond in Condition::BRANCH_ORDER {
        for flags in Flags::ALL {
            let taken = cond.holds(flags);
            flags_out.push(u32::from(flags.to_nibble()));
            destinations.push(u32::from(taken));
            stream.records.push(ExpectationRecord {
                mnemonic: cond.branch_mnemonic(),
                rs1: None,
                rs2: None,
                flags_in: Some(flags),
                result: i32::from(taken),
                flags_out: flags,
            });
        }
    }

    for cond in Condition::SET_ORDER {
        for flags in Flags::ALL {
            let outcome = cond.evaluate_set(flags);
            flags_out.push(u32::from(outcome.flags.to_nibble()));
            destinations.push(outcome.result as u32);
            stream.records.push(ExpectationRecord {
                mnemonic: cond.set_mnemonic(),
                rs1: None,
                rs2: None,
                flags_in: Some(flags),
                result: outcome.result,
                flags_out: outcome.flags,
            });
        }
    }

    stream.push(
        pack_fields(&flags_out, BitWidth::W4),
        Some("flags".to_owned()),
        false,
    );
    stream.push(
        pack_fields(&destinations, BitWidth::W1),
        Some("rd or branch taken".to_owned()),
        false,
    );
    stream
}

fn group_header(group: &TestGroup) -> Result<u32, ModelError> {
    let pairs = header_field(group.pairs.len(), "operand pair")?;
    let ops = header_field(group.ops.len(), "operation")?;
    let variants = header_field(group.variant_count as usize, "variant")?;
    Ok(pairs | (variants << 8) | (ops << 16))
}

fn header_field(count: usize, what: &'static str) -> Result<u32, ModelError> {
    u32::try_from(count)
        .ok()
        .filter(|value| *value <= 255)
        .ok_or(ModelError::CountOverflow { what, count })
}
