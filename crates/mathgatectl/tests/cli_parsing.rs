//! CLI argument parsing and bench case-file handling.

use clap::Parser;
use mathgatectl::bench;
use mathgatectl::cli::{Cli, Command};

#[test]
fn solve_accepts_positional_text() {
    let cli = Cli::try_parse_from([
        "mathgatectl",
        "solve",
        "sum of all positive divisors of 360",
    ])
    .unwrap();
    match cli.command {
        Command::Solve { text, .. } => {
            assert_eq!(text.as_deref(), Some("sum of all positive divisors of 360"));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn solve_rejects_text_combined_with_structured() {
    let result = Cli::try_parse_from([
        "mathgatectl",
        "solve",
        "some text",
        "--structured",
        "{}",
    ]);
    assert!(result.is_err());
}

#[test]
fn bench_defaults_to_a_caching_run() {
    let cli = Cli::try_parse_from(["mathgatectl", "bench", "cases.json"]).unwrap();
    match cli.command {
        Command::Bench {
            cache_size,
            no_cache,
            ..
        } => {
            assert_eq!(cache_size, 128);
            assert!(!no_cache);
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn global_json_flag_applies_after_subcommand() {
    let cli = Cli::try_parse_from(["mathgatectl", "categories", "--json"]).unwrap();
    assert!(cli.json);
}

#[test]
fn malformed_case_file_is_a_parse_error() {
    assert!(bench::parse_cases("not json").is_err());
    assert!(bench::parse_cases(r#"[{"problem": "missing id"}]"#).is_err());
}

#[test]
fn case_file_round_trip_through_disk() {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "p1", "problem": "circle radius 3, tangent length 4, find distance OP", "expected": "5"}}]"#
    )
    .unwrap();
    let contents = std::fs::read_to_string(file.path()).unwrap();
    let cases = bench::parse_cases(&contents).unwrap();
    let summary = bench::run(&cases, &mathgate_core::Pipeline::new(), &mut None);
    assert_eq!(summary.correct, 1);
}
