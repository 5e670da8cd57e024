//! Textual rendering of the stream: `.WORD` directives plus the
//! human-auditable expectation tables.
//!
//! The output is assembly source for the downstream harness. Numbers print
//! as signed hexadecimal of the two's-complement interpretation, four words
//! per `.WORD` line; a block comment moves to its own line when the inline
//! form would run past 80 columns.

#![allow(clippy::cast_possible_wrap)]

use std::fmt::Write as _;

use alu_core::Flags;

use crate::stream::{Block, ExpectationRecord, VectorStream};

const INDENT: &str = "      ";
const WORDS_PER_LINE: usize = 4;
const COMMENT_LIMIT: usize = 80;

/// Label the harness uses to locate the ALU vector data.
pub const ALU_SECTION_LABEL: &str = "TestTernOrBinData";
/// Label the harness uses to locate the branch/condition vector data.
pub const CONDITION_SECTION_LABEL: &str = "TestBranchAndCondData";

/// Renders the complete listing: the ALU section followed by the
/// branch/condition section, each closed by its expectation table.
#[must_use]
pub fn render_listing(alu: &VectorStream, conditions: &VectorStream) -> String {
    format!(
        "{}\n{}",
        render_section(ALU_SECTION_LABEL, alu),
        render_section(CONDITION_SECTION_LABEL, conditions)
    )
}

/// Renders one labeled section: its word blocks, a blank line, then the
/// expectation table.
#[must_use]
pub fn render_section(label: &str, stream: &VectorStream) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{label}:");
    render_blocks(&mut out, &stream.blocks);
    out.push('\n');
    render_expectations(&mut out, &stream.records);
    out
}

/// Formats a word the way the listing prints every number: signed
/// hexadecimal of the value as a 32-bit two's-complement integer.
#[must_use]
pub fn signed_hex(value: i32) -> String {
    if value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{value:#x}")
    }
}

fn render_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        if block.words.is_empty() {
            continue;
        }
        out.push_str(&render_block(block));
        out.push('\n');
        if block.gap_after {
            out.push('\n');
        }
    }
}

fn render_block(block: &Block) -> String {
    let mut text = format!("{INDENT}.WORD");
    for (index, word) in block.words.iter().enumerate() {
        if index % WORDS_PER_LINE == 0 && index != 0 {
            let _ = write!(text, "\n{INDENT}.WORD");
        }
        let _ = write!(text, " {:>11}", signed_hex(*word as i32));
    }
    if let Some(comment) = &block.comment {
        if text.len() + comment.len() + " /*  */".len() > COMMENT_LIMIT {
            text = format!("{INDENT}/* {comment} */\n{text}");
        } else {
            let _ = write!(text, " /* {comment} */");
        }
    }
    text
}

fn render_expectations(out: &mut String, records: &[ExpectationRecord]) {
    let _ = writeln!(out, "{INDENT}/*   Expected Behavior:");
    push_row(
        out,
        "Instr.",
        "Inputs:",
        "",
        &["", "", "", ""],
        "Outputs:",
        &["", "", "", ""],
    );
    push_row(
        out,
        "",
        "RS1",
        "RS2",
        &["N", "Z", "V", "C"],
        "RD",
        &["N", "Z", "V", "C"],
    );
    for record in records {
        let rs1 = record.rs1.map_or_else(|| "-".to_owned(), signed_hex);
        let rs2 = record.rs2.map_or_else(|| "-".to_owned(), signed_hex);
        let flags_in = flag_cells(record.flags_in);
        let flags_out = flag_cells(Some(record.flags_out));
        push_row(
            out,
            record.mnemonic,
            &rs1,
            &rs2,
            &flags_in.each_ref().map(String::as_str),
            &signed_hex(record.result),
            &flags_out.each_ref().map(String::as_str),
        );
    }
    let _ = writeln!(out, "{INDENT} */");
}

fn push_row(
    out: &mut String,
    mnemonic: &str,
    rs1: &str,
    rs2: &str,
    flags_in: &[&str; 4],
    result: &str,
    flags_out: &[&str; 4],
) {
    let _ = writeln!(
        out,
        "{INDENT} * {mnemonic:>8} {rs1:>11} {rs2:>11}  {:>1} {:>1} {:>1} {:>1}  {result:>11}  {:>1} {:>1} {:>1} {:>1}",
        flags_in[0],
        flags_in[1],
        flags_in[2],
        flags_in[3],
        flags_out[0],
        flags_out[1],
        flags_out[2],
        flags_out[3],
    );
}

fn flag_cells(flags: Option<Flags>) -> [String; 4] {
    flags.map_or_else(
        || ["-"; 4].map(str::to_owned),
        |f| [f.negative, f.zero, f.overflow, f.carry].map(|bit| u8::from(bit).to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::{render_block, render_listing, signed_hex};
    use crate::plan::ALU_PLAN;
    use crate::stream::{assemble_alu, assemble_conditions, Block};

    #[test]
    fn numbers_print_as_signed_hex() {
        assert_eq!(signed_hex(0), "0x0");
        assert_eq!(signed_hex(30), "0x1e");
        assert_eq!(signed_hex(-2), "-0x2");
        assert_eq!(signed_hex(i32::MAX), "0x7fffffff");
        assert_eq!(signed_hex(i32::MIN), "-0x80000000");
        assert_eq!(signed_hex(0xABCD_EF97u32 as i32), "-0x54321069");
    }

    #[test]
    fn short_comments_stay_on_the_directive_line() {
        let block = Block {
            words: vec![30],
            comment: Some("outputs of add".to_owned()),
            gap_after: false,
        };
        assert_eq!(
            render_block(&block),
            "      .WORD        0x1e /* outputs of add */"
        );
    }

    #[test]
    fn lines_wrap_after_four_words() {
        let block = Block {
            words: vec![1, 2, 3, 4, 5],
            comment: None,
            gap_after: false,
        };
        assert_eq!(
            render_block(&block),
            "      .WORD         0x1         0x2         0x3         0x4\n\
             \u{20}     .WORD         0x5"
        );
    }

    #[test]
    fn long_comments_move_above_the_block() {
        let block = Block {
            words: vec![0; 5],
            comment: Some("expected flags".to_owned()),
            gap_after: false,
        };
        let text = render_block(&block);
        assert!(text.starts_with("      /* expected flags */\n"));
        assert!(text.ends_with("0x0"));
    }

    #[test]
    fn every_word_renders_in_the_uniform_signed_form() {
        let alu = assemble_alu(ALU_PLAN).expect("plan within domain");
        let text = render_listing(&alu, &assemble_conditions());
        // the bitwise corpus checkerboard prints signed, never 0xaaaaaaaa
        assert!(text.contains("      .WORD  0x55555555 -0x55555556 /* input 1 */"));
        assert!(!text.contains("0xaaaaaaaa"));
        // notb results print signed too, never as unsigned words
        assert!(text.contains("      .WORD        -0x1        -0x2 -0x55555556 -0x80000000"));
        assert!(!text.contains("0xffffffff"));
    }

    #[test]
    fn listing_carries_both_section_labels() {
        let alu = assemble_alu(ALU_PLAN).expect("plan within domain");
        let text = render_listing(&alu, &assemble_conditions());
        assert!(text.starts_with("TestTernOrBinData:\n"));
        assert!(text.contains("\nTestBranchAndCondData:\n"));
    }

    #[test]
    fn expectation_tables_open_and_close_as_comments() {
        let alu = assemble_alu(ALU_PLAN).expect("plan within domain");
        let text = render_listing(&alu, &assemble_conditions());
        assert_eq!(text.matches("/*   Expected Behavior:").count(), 2);
        assert_eq!(text.matches("\n       */\n").count(), 2);
        assert!(text.contains("RS1"));
        assert!(text.contains("Outputs:"));
    }

    #[test]
    fn alu_rows_dash_the_input_flags() {
        let alu = assemble_alu(ALU_PLAN).expect("plan within domain");
        let text = render_listing(&alu, &assemble_conditions());
        assert!(text.contains("add         0xa        0x14  - - - -         0x1e  0 0 0 0"));
    }

    #[test]
    fn condition_rows_dash_the_operands() {
        let text = render_listing(
            &assemble_alu(ALU_PLAN).expect("plan within domain"),
            &assemble_conditions(),
        );
        // beq at PSW 0b0100: taken, flags preserved
        assert!(text.contains("beq           -           -  0 1 0 0          0x1  0 1 0 0"));
        // seq at PSW 0: missed, flags rebuilt to Z only
        assert!(text.contains("seq           -           -  0 0 0 0          0x0  0 1 0 0"));
    }
}
