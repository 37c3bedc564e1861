//! Integration tests for hotel-cycles using the library interface

use std::fs;

use hotel_cycles::analyzer::{HotelAnalyzer, IndexSource};
use hotel_cycles::cli::OutputFormat;
use hotel_cycles::common::ConfigBuilder;
use hotel_cycles::config::InspectConfig;
use hotel_cycles::error::HotelError;
use hotel_cycles::executors::{CommandExecutor, rejected_corridor_warnings};
use hotel_cycles::executors::inspect::InspectExecutor;
use hotel_cycles::loader::parse_hotel;
use hotel_cycles::reports::ArtifactWriter;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Index source that always answers with the same index
struct FixedIndex(usize);

impl IndexSource for FixedIndex {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Run the whole pipeline on `input` and return the artifact text, if any
fn run_pipeline(input: &str, pick: usize) -> Option<String> {
    let loaded = parse_hotel("input.txt", input).unwrap();
    let analysis = HotelAnalyzer::analyze(&loaded.hotel);
    if !analysis.has_cycles() {
        return None;
    }
    let selected = analysis.select_cycle(&mut FixedIndex(pick));
    let mut output = Vec::new();
    ArtifactWriter::write(&analysis, selected, &mut output).unwrap();
    Some(String::from_utf8(output).unwrap())
}

fn inspect(dir: &TempDir, input: &str, seed: u64) -> miette::Result<()> {
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, input).unwrap();

    let config = InspectConfig::builder()
        .with_input(input_path)
        .with_output(dir.path().join("output.txt"))
        .with_format(OutputFormat::Json)
        .with_seed(Some(seed))
        .build()
        .unwrap();

    InspectExecutor::execute(config)
}

fn artifact(dir: &TempDir) -> Option<String> {
    let path = dir.path().join("output.txt");
    path.exists().then(|| fs::read_to_string(&path).unwrap())
}

#[test]
fn test_triangle_has_universal_room_and_full_cycle() {
    let artifact = run_pipeline("3 3\n1 2\n2 3\n3 1\n", 0).unwrap();
    assert_eq!(artifact, "1\n3 3 2 1\n");
}

#[test]
fn test_single_corridor_reports_singleton_cycle() {
    let artifact = run_pipeline("2 1\n1 2\n", 0).unwrap();
    assert_eq!(artifact, "1\n1 1\n");
}

#[test]
fn test_no_corridors_produces_no_artifact() {
    assert_eq!(run_pipeline("2 0\n", 0), None);
}

#[test]
fn test_two_disjoint_loops_have_no_universal_room() {
    let input = "4 4\n1 2\n2 1\n3 4\n4 3\n";
    let loaded = parse_hotel("input.txt", input).unwrap();
    let analysis = HotelAnalyzer::analyze(&loaded.hotel);

    let components: Vec<Vec<usize>> = analysis
        .components()
        .iter()
        .map(|component| component.rooms().to_vec())
        .collect();
    assert_eq!(components, vec![vec![2, 1], vec![4, 3]]);

    assert_eq!(
        analysis.select_cycle(&mut FixedIndex(1)).unwrap().rooms(),
        &[4, 3]
    );
    assert_eq!(run_pipeline(input, 0).unwrap(), "-1\n");
    assert_eq!(run_pipeline(input, 1).unwrap(), "-1\n");
}

#[test]
fn test_out_of_range_corridor_is_dropped() {
    let with_bad = parse_hotel("input.txt", "3 4\n5 1\n1 2\n2 3\n3 1\n").unwrap();
    let without_bad = parse_hotel("input.txt", "3 3\n1 2\n2 3\n3 1\n").unwrap();

    assert_eq!(with_bad.rejected.len(), 1);
    assert!(matches!(
        with_bad.rejected[0],
        HotelError::InvalidCorridor { from: 5, to: 1, .. }
    ));
    assert_eq!(
        HotelAnalyzer::analyze(&with_bad.hotel),
        HotelAnalyzer::analyze(&without_bad.hotel)
    );

    let warnings = rejected_corridor_warnings(&with_bad.rejected).unwrap();
    assert_eq!(warnings.len(), 1);
    let warning = console::strip_ansi_codes(&warnings[0]).into_owned();
    assert!(warning.contains("invalid_corridor"));
    assert!(warning.contains("Corridor 5 -> 1"));
    assert!(warning.contains("room identifiers start at 1"));
}

#[test]
fn test_artifact_cycle_matches_selected_component() {
    let input = "5 6\n1 2\n2 3\n3 1\n3 4\n4 5\n5 4\n";
    let loaded = parse_hotel("input.txt", input).unwrap();
    let analysis = HotelAnalyzer::analyze(&loaded.hotel);

    for pick in 0..analysis.cycle_count() {
        let selected = analysis.select_cycle(&mut FixedIndex(pick)).unwrap();
        assert_eq!(selected, &analysis.components()[pick]);
    }
}

#[test]
fn test_inspect_writes_artifact() {
    let dir = TempDir::new().unwrap();
    inspect(&dir, "3 3\n1 2\n2 3\n3 1\n", 11).unwrap();
    assert_eq!(artifact(&dir).unwrap(), "1\n3 3 2 1\n");
}

#[test]
fn test_inspect_without_cycles_skips_artifact() {
    let dir = TempDir::new().unwrap();
    inspect(&dir, "2 0\n", 11).unwrap();
    assert_eq!(artifact(&dir), None);
}

#[test]
fn test_inspect_with_invalid_corridor_still_succeeds() {
    let dir = TempDir::new().unwrap();
    inspect(&dir, "3 1\n5 1\n", 11).unwrap();
    assert_eq!(artifact(&dir), None);
}

#[test]
fn test_inspect_same_seed_same_artifact() {
    let input = "6 6\n1 2\n2 1\n3 4\n4 3\n5 6\n6 5\n";
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    inspect(&first, input, 5).unwrap();
    inspect(&second, input, 5).unwrap();

    assert_eq!(artifact(&first), artifact(&second));
}

#[test]
fn test_inspect_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let config = InspectConfig::builder()
        .with_input(dir.path().join("missing.txt"))
        .with_output(dir.path().join("output.txt"))
        .with_format(OutputFormat::Human)
        .build()
        .unwrap();

    assert!(InspectExecutor::execute(config).is_err());
    assert_eq!(artifact(&dir), None);
}

#[test]
fn test_inspect_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, "2 2\n1 2\n2 1\n").unwrap();

    let config = InspectConfig::builder()
        .with_input(input_path)
        .with_output(dir.path().join("no-such-dir").join("output.txt"))
        .with_format(OutputFormat::Human)
        .with_seed(Some(1))
        .build()
        .unwrap();

    assert!(InspectExecutor::execute(config).is_err());
}

#[test]
fn test_malformed_input_fails() {
    let dir = TempDir::new().unwrap();
    assert!(inspect(&dir, "3 two\n", 1).is_err());
}
