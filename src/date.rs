use time::{format_description::FormatItem, macros::format_description, Date};

use crate::SummaryError;

const ISO_DATE: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Turns an ISO date into something like `Tuesday 06 July 2021`.
pub fn format_date(iso_date: &str) -> Result<String, SummaryError> {
    let invalid = |reason: String| SummaryError::InvalidDate {
        input: iso_date.to_string(),
        reason,
    };

    // `[year]` takes an optional sign, calendar dates are four bare digits
    if iso_date.starts_with(['+', '-']) {
        return Err(invalid(String::from("signed year")));
    }
    let date = Date::parse(iso_date, ISO_DATE).map_err(|e| invalid(e.to_string()))?;

    Ok(format_day(date))
}

pub fn format_day(date: Date) -> String {
    format!(
        "{} {:02} {} {}",
        date.weekday(),
        date.day(),
        date.month(),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn human_readable() {
        assert_eq!(format_date("2021-07-06").unwrap(), "Tuesday 06 July 2021");
        assert_eq!(format_date("2021-07-02").unwrap(), "Friday 02 July 2021");
        assert_eq!(
            format_date("2020-02-29").unwrap(),
            "Saturday 29 February 2020"
        );
        assert_eq!(
            format_date("1999-12-31").unwrap(),
            "Friday 31 December 1999"
        );
    }

    #[test]
    fn year_has_no_extra_padding() {
        let date = Date::from_calendar_date(999, Month::January, 1).unwrap();
        assert!(format_day(date).ends_with(" January 999"));
    }

    #[test]
    fn invalid_dates() {
        for input in [
            "",
            "yesterday",
            "2021-13-01",
            "2021-02-30",
            "2021-7-6",
            "06/07/2021",
            "+2021-07-06",
            "-0001-01-01",
            "2021-07-06T07:00",
            "2021-07-06T07:00:00",
            "2021-07-06 07:00:00",
        ] {
            let err = format_date(input).unwrap_err();
            assert!(
                matches!(&err, SummaryError::InvalidDate { input: i, .. } if i == input),
                "{input}: {err:?}"
            );
        }
    }
}
