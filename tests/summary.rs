use std::io::Write;

use chrono::{Duration, NaiveDate};
use tempfile::NamedTempFile;
use weather_summary::{
    format_date, generate_daily_summary, generate_summary, DatasetError, Error, SummaryError,
    WeatherDataset,
};

const EXAMPLE_ONE: &str = include_str!("fixtures/example_one.csv");

fn write_csv(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn overview_from_file() {
    let f = write_csv(EXAMPLE_ONE);
    let dataset = WeatherDataset::load(f.path()).unwrap();
    assert_eq!(dataset.len(), 5);

    let summary = generate_summary(&dataset).unwrap();
    assert_eq!(
        summary,
        "5 Day Overview
  The lowest temperature will be 9.4°C, and will occur on Friday 02 July 2021.
  The highest temperature will be 20.0°C, and will occur on Saturday 03 July 2021.
  The average low this week is 12.2°C.
  The average high this week is 17.8°C.
"
    );
}

#[test]
fn daily_summary_from_file() {
    let dataset: WeatherDataset = EXAMPLE_ONE.parse().unwrap();
    let summary = generate_daily_summary(&dataset).unwrap();

    assert_eq!(summary.matches("---- ").count(), 5);
    assert!(summary.starts_with(
        "---- Friday 02 July 2021 ----
  Minimum Temperature: 9.4°C
  Maximum Temperature: 19.4°C

"
    ));
    assert!(summary.ends_with(
        "---- Tuesday 06 July 2021 ----
  Minimum Temperature: 11.7°C
  Maximum Temperature: 16.7°C

"
    ));
}

#[test]
fn cold_week_with_negative_readings() {
    let dataset: WeatherDataset = "date,min,max
2020-12-28,-4,20
2020-12-29,-13,15
2020-12-30,-13,22
2020-12-31,0,22
"
    .parse()
    .unwrap();

    let summary = generate_summary(&dataset).unwrap();
    assert!(summary.starts_with("4 Day Overview\n"));
    assert!(summary.contains(
        "The lowest temperature will be -25.0°C, and will occur on Wednesday 30 December 2020."
    ));
    assert!(summary.contains(
        "The highest temperature will be -5.6°C, and will occur on Thursday 31 December 2020."
    ));
}

#[test]
fn empty_file_cannot_be_summarised() {
    let f = write_csv("date,min,max\n");
    let dataset = WeatherDataset::load(f.path()).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(generate_daily_summary(&dataset).unwrap(), "");

    let err: Error = generate_summary(&dataset).unwrap_err().into();
    assert!(matches!(err, Error::Summary(SummaryError::EmptySeries)));
}

#[test]
fn bad_file_is_a_dataset_error() {
    let f = write_csv("date,min,max\n2021-07-02;49;67\n");
    let err: Error = WeatherDataset::load(f.path()).unwrap_err().into();
    assert!(matches!(
        err,
        Error::Dataset(DatasetError::BadRow { line: 2, .. })
    ));
}

#[test]
fn dates_match_chrono() {
    let mut day = NaiveDate::from_ymd_opt(1999, 11, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2001, 3, 31).unwrap();
    while day <= last {
        let iso = day.format("%Y-%m-%d").to_string();
        assert_eq!(
            format_date(&iso).unwrap(),
            day.format("%A %d %B %Y").to_string(),
            "{iso}"
        );
        day += Duration::days(1);
    }
}
