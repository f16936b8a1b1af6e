//! Tests for the fastgnp CLI command pipeline.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use fastgnp_core::{Algorithm, GnpError, GnpErrorCode};
use rstest::rstest;
use tempfile::TempDir;

use super::commands::{
    Cli, CliError, Command, ExecutionSummary, GenerateCommand, render_summary, run_generate,
};

fn generate_command(vertices: u64, probability: f64) -> GenerateCommand {
    GenerateCommand {
        vertices,
        probability,
        algorithm: Algorithm::Pzer,
        seed: 7,
        runs: 1,
        skip_table_depth: 10,
        log_csv: None,
        edges_out: None,
    }
}

#[rstest]
fn generate_writes_log_and_edge_files() {
    let dir = TempDir::new().expect("temp dir must be created");
    let log_path = dir.path().join("stats.csv");
    let edges_path = dir.path().join("edges.csv");

    let mut command = generate_command(5, 1.0);
    command.algorithm = Algorithm::Per;
    command.runs = 2;
    command.log_csv = Some(log_path.clone());
    command.edges_out = Some(edges_path.clone());

    let summary = run_generate(command).expect("command must succeed");
    assert_eq!(summary.results.len(), 2);

    let log = fs::read_to_string(&log_path).expect("log file must exist");
    let log_lines: Vec<&str> = log.lines().collect();
    assert_eq!(log_lines.len(), 3);
    assert_eq!(
        log_lines[0],
        "run_index,n,p,algorithm,seed,elapsed_ms,edge_count"
    );
    assert!(log_lines[1].starts_with("0,5,1,per,7,"));
    assert!(log_lines[2].starts_with("1,5,1,per,8,"));
    assert!(log_lines[1].ends_with(",25"));

    let edges = fs::read_to_string(&edges_path).expect("edge file must exist");
    let edge_lines: Vec<&str> = edges.lines().collect();
    assert_eq!(edge_lines.len(), 26);
    assert_eq!(edge_lines[0], "u,v");
    assert_eq!(edge_lines[1], "0,0");
    assert_eq!(edge_lines[25], "4,4");
}

#[rstest]
fn log_csv_header_is_written_once_across_appends() {
    let dir = TempDir::new().expect("temp dir must be created");
    let log_path = dir.path().join("stats.csv");

    for _ in 0..2 {
        let mut command = generate_command(4, 0.5);
        command.log_csv = Some(log_path.clone());
        run_generate(command).expect("command must succeed");
    }

    let log = fs::read_to_string(&log_path).expect("log file must exist");
    let header_count = log
        .lines()
        .filter(|line| line.starts_with("run_index"))
        .count();
    assert_eq!(header_count, 1);
    assert_eq!(log.lines().count(), 3);
}

#[rstest]
fn output_paths_gain_missing_parent_directories() {
    let dir = TempDir::new().expect("temp dir must be created");
    let nested: PathBuf = dir.path().join("out").join("runs").join("stats.csv");

    let mut command = generate_command(4, 0.5);
    command.log_csv = Some(nested.clone());
    run_generate(command).expect("command must succeed");

    assert!(nested.exists());
}

#[rstest]
fn each_run_advances_the_seed() {
    let mut command = generate_command(6, 0.5);
    command.seed = 100;
    command.runs = 3;

    let summary = run_generate(command).expect("command must succeed");
    let seeds: Vec<u64> = summary.results.iter().map(|result| result.seed()).collect();
    assert_eq!(seeds, vec![100, 101, 102]);
}

#[rstest]
fn zero_runs_still_performs_one_run() {
    let mut command = generate_command(4, 0.5);
    command.runs = 0;

    let summary = run_generate(command).expect("command must succeed");
    assert_eq!(summary.results.len(), 1);
}

#[rstest]
fn edge_file_holds_the_last_run() {
    let dir = TempDir::new().expect("temp dir must be created");
    let edges_path = dir.path().join("edges.csv");

    let mut command = generate_command(8, 0.3);
    command.runs = 2;
    command.edges_out = Some(edges_path.clone());

    let summary = run_generate(command).expect("command must succeed");
    let last = summary.results.last().expect("two runs completed");

    let written = fs::read_to_string(&edges_path).expect("edge file must exist");
    let expected: String = std::iter::once("u,v".to_owned())
        .chain(last.edge_pairs().map(|(u, v)| format!("{u},{v}")))
        .map(|line| line + "\n")
        .collect();
    assert_eq!(written, expected);
}

#[rstest]
fn invalid_probability_surfaces_the_core_error() {
    let err = run_generate(generate_command(4, 1.5)).expect_err("p = 1.5 must be rejected");
    match err {
        CliError::Core(core) => {
            assert!(matches!(core, GnpError::InvalidProbability { .. }));
            assert_eq!(core.code(), GnpErrorCode::InvalidProbability);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn parse_fills_in_defaults() {
    let cli = Cli::try_parse_from(["fastgnp", "generate", "-n", "10", "-p", "0.25"])
        .expect("arguments must parse");
    let Command::Generate(command) = cli.command;
    assert_eq!(command.vertices, 10);
    assert!((command.probability - 0.25).abs() < f64::EPSILON);
    assert_eq!(command.algorithm, Algorithm::Per);
    assert_eq!(command.seed, 7);
    assert_eq!(command.runs, 1);
    assert_eq!(command.skip_table_depth, 10);
    assert!(command.log_csv.is_none());
    assert!(command.edges_out.is_none());
}

#[rstest]
#[case::pzer("pzer", Algorithm::Pzer)]
#[case::pprezer("pprezer", Algorithm::PPreZer)]
fn parse_accepts_algorithm_tags(#[case] tag: &str, #[case] expected: Algorithm) {
    let cli = Cli::try_parse_from(["fastgnp", "generate", "-n", "4", "-p", "0.5", "-a", tag])
        .expect("arguments must parse");
    let Command::Generate(command) = cli.command;
    assert_eq!(command.algorithm, expected);
}

#[rstest]
fn parse_rejects_unknown_algorithm_tags() {
    let err = Cli::try_parse_from(["fastgnp", "generate", "-n", "4", "-p", "0.5", "-a", "zer"])
        .expect_err("unknown algorithm must be rejected");
    assert!(err.to_string().contains("unknown algorithm"));
}

#[rstest]
fn parse_rejects_negative_vertex_counts() {
    Cli::try_parse_from(["fastgnp", "generate", "--vertices=-5", "-p", "0.5"])
        .expect_err("negative vertex count must be rejected");
}

#[rstest]
fn render_summary_reports_each_run() {
    let mut command = generate_command(3, 0.0);
    command.runs = 2;
    let summary = run_generate(command).expect("command must succeed");

    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer).expect("rendering must succeed");
    let rendered = String::from_utf8(buffer).expect("output is UTF-8");

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "G(n=3, p=0) via pzer, 2 runs");
    assert!(lines[1].starts_with("run 0: seed=7, edges=0, elapsed="));
    assert!(lines[2].starts_with("run 1: seed=8, edges=0, elapsed="));
}

#[rstest]
fn render_summary_is_empty_for_no_results() {
    let summary = ExecutionSummary {
        results: Vec::new(),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer).expect("rendering must succeed");
    assert!(buffer.is_empty());
}
