//! CLI entry point for the flagforge-gen binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use alu_core as _;
#[cfg(test)]
use tempfile as _;
use vectorgen as _;
use vectorgen::listing::{
    render_listing, render_section, ALU_SECTION_LABEL, CONDITION_SECTION_LABEL,
};
use vectorgen::plan::ALU_PLAN;
use vectorgen::stream::{assemble_alu, assemble_conditions};

const USAGE_TEXT: &str = "\
Usage: flagforge-gen <command> [options]

Commands:
  gen [options]  Generate the verification vector listing

Options:
  -o, --output <file>     Write listing to <file> (default: stdout)
  -s, --section <which>   Section to emit: alu | cond | all (default: all)
  -h, --help              Show this help message

Examples:
  flagforge-gen gen
  flagforge-gen gen -o verif_data.inc
  flagforge-gen gen --section cond
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Alu,
    Cond,
    All,
}

#[derive(Debug, PartialEq, Eq)]
struct GenArgs {
    output: Option<PathBuf>,
    section: Section,
}

#[derive(Debug)]
enum ParseResult {
    Command(GenArgs),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let first = args.next().ok_or_else(|| "missing command".to_string())?;

    if first == "--help" || first == "-h" {
        return Ok(ParseResult::Help);
    }

    let command_str = first.to_string_lossy().to_string();

    match command_str.as_str() {
        "gen" => parse_gen_args(args),
        other => Err(format!("unknown command: {other}")),
    }
}

#[allow(clippy::while_let_on_iterator)]
fn parse_gen_args(mut args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let mut output: Option<PathBuf> = None;
    let mut section = Section::All;

    while let Some(arg) = args.next() {
        if arg == "--help" || arg == "-h" {
            return Ok(ParseResult::Help);
        }

        if arg == "-o" || arg == "--output" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for -o".to_string())?;
            output = Some(PathBuf::from(value));
            continue;
        }

        if arg == "-s" || arg == "--section" {
            let value = args
                .next()
                .ok_or_else(|| "missing value for -s".to_string())?;
            section = parse_section(&value.to_string_lossy())?;
            continue;
        }

        return Err(format!("unknown argument: {}", arg.to_string_lossy()));
    }

    Ok(ParseResult::Command(GenArgs { output, section }))
}

fn parse_section(value: &str) -> Result<Section, String> {
    match value {
        "alu" => Ok(Section::Alu),
        "cond" => Ok(Section::Cond),
        "all" => Ok(Section::All),
        other => Err(format!("unknown section: {other} (expected alu, cond or all)")),
    }
}

fn run_gen(args: GenArgs) -> Result<(), i32> {
    let (text, word_count) = match args.section {
        Section::Alu => {
            let alu = assemble(ALU_PLAN)?;
            let count = alu.words().len();
            (render_section(ALU_SECTION_LABEL, &alu), count)
        }
        Section::Cond => {
            let conditions = assemble_conditions();
            let count = conditions.words().len();
            (render_section(CONDITION_SECTION_LABEL, &conditions), count)
        }
        Section::All => {
            let alu = assemble(ALU_PLAN)?;
            let conditions = assemble_conditions();
            let count = alu.words().len() + conditions.words().len();
            (render_listing(&alu, &conditions), count)
        }
    };

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &text) {
                eprintln!("error: failed to write output: {e}");
                return Err(1);
            }
            println!("Generated {word_count} words -> {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}

fn assemble(plan: &[vectorgen::plan::TestGroup]) -> Result<vectorgen::stream::VectorStream, i32> {
    assemble_alu(plan).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}

fn main() {
    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Command(args)) => match run_gen(args) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{USAGE_TEXT}");
            1
        }
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn expect_command(result: ParseResult) -> GenArgs {
        match result {
            ParseResult::Command(args) => args,
            ParseResult::Help => panic!("expected a command, parsed help"),
        }
    }

    #[test]
    fn parses_gen_command() {
        let result = parse_gen_args(
            [
                OsString::from("-o"),
                OsString::from("out.inc"),
                OsString::from("--section"),
                OsString::from("cond"),
            ]
            .into_iter(),
        )
        .expect("valid gen args should parse");

        assert_eq!(
            expect_command(result),
            GenArgs {
                output: Some(PathBuf::from("out.inc")),
                section: Section::Cond,
            }
        );
    }

    #[test]
    fn gen_defaults_to_stdout_and_both_sections() {
        let result = parse_gen_args(std::iter::empty()).expect("bare gen should parse");
        assert_eq!(
            expect_command(result),
            GenArgs {
                output: None,
                section: Section::All,
            }
        );
    }

    #[test]
    fn parses_every_section_name() {
        assert_eq!(parse_section("alu"), Ok(Section::Alu));
        assert_eq!(parse_section("cond"), Ok(Section::Cond));
        assert_eq!(parse_section("all"), Ok(Section::All));
    }

    #[test]
    fn rejects_unknown_section() {
        let error = parse_section("branches").expect_err("unknown section should fail");
        assert!(error.contains("unknown section"));
    }

    #[test]
    fn parses_help_flag() {
        let result = parse_args([OsString::from("--help")].into_iter())
            .expect("help should parse without error");
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn help_after_the_gen_command_parses_as_help() {
        let result = parse_args([OsString::from("gen"), OsString::from("--help")].into_iter())
            .expect("trailing help should parse without error");
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn help_after_other_gen_options_parses_as_help() {
        let result = parse_gen_args(
            [
                OsString::from("-s"),
                OsString::from("alu"),
                OsString::from("-h"),
            ]
            .into_iter(),
        )
        .expect("trailing help should parse without error");
        assert!(matches!(result, ParseResult::Help));
    }

    #[test]
    fn rejects_unknown_command() {
        let error = parse_args([OsString::from("emit")].into_iter())
            .expect_err("unknown command should fail parse");
        assert!(error.contains("unknown command"));
    }

    #[test]
    fn rejects_unknown_argument() {
        let error = parse_gen_args([OsString::from("--fast")].into_iter())
            .expect_err("unknown argument should fail parse");
        assert!(error.contains("unknown argument"));
    }

    #[test]
    fn missing_option_values_are_reported() {
        let error = parse_gen_args([OsString::from("-o")].into_iter())
            .expect_err("dangling -o should fail parse");
        assert!(error.contains("missing value"));

        let error = parse_gen_args([OsString::from("-s")].into_iter())
            .expect_err("dangling -s should fail parse");
        assert!(error.contains("missing value"));
    }

    #[test]
    fn parse_gen_short_section_flag() {
        let result =
            parse_gen_args([OsString::from("-s"), OsString::from("alu")].into_iter())
                .expect("short flags should parse");
        assert_eq!(expect_command(result).section, Section::Alu);
    }
}
