use anyhow::Result;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::io::Write;

use tennis_team_scheduler::{
    config::{LoaderConfig, MalformedRowPolicy},
    parse_csv::{load_matches, CsvParseError},
    scheduler::{get_teams, opponent_report, suggest_next_opponents},
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/matches.csv");

#[test_log::test]
fn test_csv_loader_and_scheduler() -> Result<()> {
    let matches = load_matches(FIXTURE, &LoaderConfig::default())?;
    assert!(!matches.is_empty(), "loader should return the fixture rows");
    assert_eq!(matches.len(), 6);

    let teams = get_teams(&matches);
    assert_eq!(teams, HashSet::from(["TeamA", "TeamB", "TeamC", "TeamD", "TeamE"]));

    let next: HashSet<_> = suggest_next_opponents("TeamA", &matches).into_iter().collect();
    assert_eq!(next, HashSet::from(["TeamD", "TeamE"]));

    Ok(())
}

#[test]
fn test_fixture_report() -> Result<()> {
    let matches = load_matches(FIXTURE, &LoaderConfig::default())?;
    let report = opponent_report(&matches);

    let lines: Vec<String> = report.iter().map(|s| s.display()).collect();
    assert_eq!(
        lines,
        vec![
            "TeamA - Played: 2 [TeamB, TeamC], Unplayed: 2 [TeamD, TeamE]",
            "TeamB - Played: 3 [TeamA, TeamC, TeamD], Unplayed: 1 [TeamE]",
            "TeamC - Played: 3 [TeamA, TeamB, TeamE], Unplayed: 1 [TeamD]",
            "TeamD - Played: 2 [TeamB, TeamE], Unplayed: 2 [TeamA, TeamC]",
            "TeamE - Played: 2 [TeamC, TeamD], Unplayed: 2 [TeamA, TeamB]",
        ]
    );

    let json = serde_json::to_value(&report)?;
    assert_eq!(json[0]["team"], "TeamA");
    assert_eq!(json[0]["unplayed"], serde_json::json!(["TeamD", "TeamE"]));

    Ok(())
}

#[test]
fn test_missing_file_fails_before_scheduling() {
    let err = load_matches("does/not/exist.csv", &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, CsvParseError::Io(_)));
}

#[test]
fn test_malformed_file_with_both_policies() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "date,teamA,teamB,playerA,playerB,scoreA,scoreB")?;
    writeln!(file, "2024-05-04,TeamA,TeamB,Alice,Bob,6-3,3-6")?;
    writeln!(file, "2024-05-11,TeamA")?;
    writeln!(file, "2024-05-18,TeamC,TeamD,Carol,Dan,6-0,0-6")?;
    file.flush()?;

    let err = load_matches(file.path(), &LoaderConfig::default()).unwrap_err();
    assert!(err.is_row_error());

    let config = LoaderConfig {
        malformed_rows: MalformedRowPolicy::Skip,
        ..LoaderConfig::default()
    };
    let matches = load_matches(file.path(), &config)?;
    assert_eq!(matches.len(), 2);
    assert_eq!(suggest_next_opponents("TeamA", &matches), vec!["TeamC", "TeamD"]);

    Ok(())
}
