use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use csv::{ReaderBuilder, StringRecord, Trim};
use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, trace, warn};

pub mod date;
pub mod reduce;
pub mod summary;
pub mod units;

pub use date::{format_date, format_day};
pub use reduce::{find_max, find_min, mean, Reduction};
pub use summary::{generate_daily_summary, generate_summary, Extreme, Overview};
pub use units::{fahrenheit_to_celsius, format_celsius, round_to_tenth, Fahrenheit};

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Summary(#[from] SummaryError),
}

/// Failures of the statistics and formatting pipeline.
#[derive(Debug, Error, Diagnostic)]
pub enum SummaryError {
    #[error("Invalid number: `{0}`")]
    #[diagnostic(code(weather::invalid_number))]
    InvalidNumber(String),
    #[error("Invalid date `{input}`: {reason}")]
    #[diagnostic(
        code(weather::invalid_date),
        help("dates are expected as ISO-8601 calendar dates, e.g. 2021-07-06")
    )]
    InvalidDate { input: String, reason: String },
    #[error("Cannot compute the mean of an empty series")]
    #[diagnostic(code(weather::empty_mean))]
    DivisionByEmptySeries,
    #[error("Cannot find an extreme in an empty series")]
    #[diagnostic(
        code(weather::empty_series),
        help("an overview needs at least one day of data")
    )]
    EmptySeries,
}

#[derive(Debug, Error, Diagnostic)]
pub enum DatasetError {
    #[error("Missing header row")]
    #[diagnostic(code(weather::missing_header))]
    MissingHeader,
    #[error("Bad row on line {line}: {reason}")]
    #[diagnostic(
        code(weather::bad_row),
        help("rows must look like `2021-07-02,49,67`")
    )]
    BadRow { line: usize, reason: &'static str },
    #[error("Invalid temperature on line {line}: `{value}`")]
    #[diagnostic(code(weather::invalid_temperature))]
    InvalidTemperature { line: usize, value: String },
    #[error("Malformed CSV")]
    #[diagnostic(code(weather::csv))]
    Csv(#[from] csv::Error),
    #[error("Could not read {}", path.display())]
    #[diagnostic(code(weather::io))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One day of data: an ISO date and the low/high temperatures in Fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    date: String,
    min_temp: i32,
    max_temp: i32,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>, min_temp: i32, max_temp: i32) -> Self {
        Self {
            date: date.into(),
            min_temp,
            max_temp,
        }
    }

    /// The date exactly as it appeared in the input. It is only checked
    /// when formatted.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn min_temp(&self) -> i32 {
        self.min_temp
    }

    pub fn max_temp(&self) -> i32 {
        self.max_temp
    }

    fn from_row(line: usize, row: &StringRecord) -> Result<Self, DatasetError> {
        if row.len() > 3 {
            return Err(DatasetError::BadRow {
                line,
                reason: "unexpected data after maximum temperature",
            });
        }

        let date = match row.get(0) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => {
                return Err(DatasetError::BadRow {
                    line,
                    reason: "missing date",
                })
            }
        };
        let min_temp = temperature(line, row.get(1), "missing minimum temperature")?;
        let max_temp = temperature(line, row.get(2), "missing maximum temperature")?;

        Ok(Self {
            date,
            min_temp,
            max_temp,
        })
    }
}

fn temperature(
    line: usize,
    cell: Option<&str>,
    missing: &'static str,
) -> Result<i32, DatasetError> {
    match cell {
        Some(cell) if !cell.is_empty() => {
            cell.parse().map_err(|_| DatasetError::InvalidTemperature {
                line,
                value: cell.to_string(),
            })
        }
        _ => Err(DatasetError::BadRow {
            line,
            reason: missing,
        }),
    }
}

/// 1-based line where `record` starts in `text`.
///
/// The reader positions a record right after the previous one, so blank
/// lines in between are skipped here.
fn line_of(text: &str, record: &StringRecord) -> usize {
    let start = record
        .position()
        .and_then(|position| usize::try_from(position.byte()).ok())
        .unwrap_or(0);
    let skipped = text.get(start..).map_or(0, |rest| {
        rest.len() - rest.trim_start_matches(|c: char| c == '\r' || c == '\n').len()
    });
    text.get(..start + skipped)
        .map_or(0, |before| before.matches('\n').count())
        + 1
}

/// Days in file order. The position of a record is its day index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherDataset {
    records: Vec<DailyRecord>,
}

impl WeatherDataset {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading weather dataset");
        content.parse()
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(DailyRecord::date)
    }

    pub fn min_temps(&self) -> Vec<i32> {
        self.records.iter().map(DailyRecord::min_temp).collect()
    }

    pub fn max_temps(&self) -> Vec<i32> {
        self.records.iter().map(DailyRecord::max_temp).collect()
    }
}

impl FromIterator<DailyRecord> for WeatherDataset {
    fn from_iter<I: IntoIterator<Item = DailyRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for WeatherDataset {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // flexible(true) so short or long rows reach our own BadRow check
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(s.as_bytes());

        let mut rows = reader.records().filter_map(|row| match row {
            Ok(row) if row.iter().all(str::is_empty) => {
                trace!(line = line_of(s, &row), "skipping blank line");
                None
            }
            row => Some(row.map(|row| (line_of(s, &row), row))),
        });

        // The header names the columns, we only rely on their order
        rows.next().ok_or(DatasetError::MissingHeader)??;

        let mut records: Vec<DailyRecord> = Vec::new();
        for row in rows {
            let (line_number, row) = row?;
            let record = DailyRecord::from_row(line_number, &row)?;

            if let Some(previous) = records.last() {
                if previous.date >= record.date {
                    warn!(
                        line = line_number,
                        previous = %previous.date,
                        date = %record.date,
                        "days are not ordered"
                    );
                }
            }
            records.push(record);
        }

        debug!(days = records.len(), "parsed weather dataset");
        Ok(Self { records })
    }
}
