use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{LoaderConfig, MalformedRowPolicy};
use crate::types::{Match, MatchError};

const COLUMNS: [&str; 7] = [
    "date",
    "team_a",
    "team_b",
    "player_a",
    "player_b",
    "score_a",
    "score_b",
];

#[derive(Debug, Error)]
pub enum CsvParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: missing field '{field}'")]
    MissingField { line: u64, field: &'static str },
    #[error("line {line}: invalid date '{value}': {source}")]
    InvalidDate {
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("line {line}: invalid UTF-8: {source}")]
    InvalidUtf8 {
        line: u64,
        #[source]
        source: csv::FromUtf8Error,
    },
    #[error("line {line}: {source}")]
    InvalidMatch {
        line: u64,
        #[source]
        source: MatchError,
    },
}

impl CsvParseError {
    /// True for errors confined to a single data row.
    pub fn is_row_error(&self) -> bool {
        matches!(
            self,
            CsvParseError::MissingField { .. }
                | CsvParseError::InvalidDate { .. }
                | CsvParseError::InvalidUtf8 { .. }
                | CsvParseError::InvalidMatch { .. }
        )
    }
}

/// Reads match records from the CSV file at `path`.
pub fn load_matches(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Vec<Match>, CsvParseError> {
    let path = path.as_ref();
    info!("Loading matches from {:?}", path);
    let file = File::open(path)?;
    parse_matches(file, config)
}

/// Parses match records from `reader`. The first row is a header.
///
/// Columns are positional: date, team A, team B, player A, player B, score A, score B.
pub fn parse_matches<R: Read>(reader: R, config: &LoaderConfig) -> Result<Vec<Match>, CsvParseError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut matches = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.byte_records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Rows holding only whitespace trim down to a single empty field.
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }

        let parsed = StringRecord::from_byte_record(record)
            .map_err(|source| CsvParseError::InvalidUtf8 { line, source })
            .and_then(|record| parse_record(&record, line, &config.date_format));

        match parsed {
            Ok(m) => {
                debug!("Parsed match {} vs {} on {}", m.team_a, m.team_b, m.date);
                matches.push(m);
            }
            Err(e) if e.is_row_error() && config.malformed_rows == MalformedRowPolicy::Skip => {
                warn!("Skipping malformed row: {}", e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if skipped > 0 {
        warn!("Skipped {} malformed rows", skipped);
    }
    info!("Loaded {} matches", matches.len());

    Ok(matches)
}

fn get_field(record: &StringRecord, idx: usize, line: u64) -> Result<&str, CsvParseError> {
    record
        .get(idx)
        .ok_or(CsvParseError::MissingField { line, field: COLUMNS[idx] })
}

fn parse_record(record: &StringRecord, line: u64, date_format: &str) -> Result<Match, CsvParseError> {
    let field = |idx| get_field(record, idx, line);

    let raw_date = field(0)?;
    let date = NaiveDate::parse_from_str(raw_date, date_format).map_err(|source| {
        CsvParseError::InvalidDate {
            line,
            value: raw_date.to_string(),
            source,
        }
    })?;

    Match::new(date, field(1)?, field(2)?, field(3)?, field(4)?, field(5)?, field(6)?)
        .map_err(|source| CsvParseError::InvalidMatch { line, source })
}
