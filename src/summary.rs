use std::fmt;

use tracing::debug;

use crate::{
    date::format_date,
    reduce::{find_max, find_min, mean, Reduction},
    units::{fahrenheit_to_celsius, format_celsius},
    SummaryError, WeatherDataset,
};

/// The coldest or warmest day of a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    /// In Celsius, rounded to one decimal.
    pub temperature: f64,
    pub date: String,
    /// Index of the day in the dataset.
    pub day: usize,
}

impl Extreme {
    fn new(dataset: &WeatherDataset, reduction: Reduction) -> Result<Self, SummaryError> {
        let record = &dataset.records()[reduction.position];
        Ok(Self {
            temperature: fahrenheit_to_celsius(reduction.value),
            date: format_date(record.date())?,
            day: reduction.position,
        })
    }
}

/// Everything the overview reports. Temperatures are in Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub days: usize,
    pub lowest: Extreme,
    pub highest: Extreme,
    pub average_low: f64,
    pub average_high: f64,
}

impl Overview {
    /// The dataset must not be empty, there is no overview of zero days.
    pub fn from_dataset(dataset: &WeatherDataset) -> Result<Self, SummaryError> {
        let lows = dataset.min_temps();
        let highs = dataset.max_temps();

        let lowest = find_min(&lows).ok_or(SummaryError::EmptySeries)?;
        let highest = find_max(&highs).ok_or(SummaryError::EmptySeries)?;

        Ok(Self {
            days: dataset.len(),
            lowest: Extreme::new(dataset, lowest)?,
            highest: Extreme::new(dataset, highest)?,
            average_low: fahrenheit_to_celsius(mean(&lows)?),
            average_high: fahrenheit_to_celsius(mean(&highs)?),
        })
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Day Overview", self.days)?;
        writeln!(
            f,
            "  The lowest temperature will be {}, and will occur on {}.",
            format_celsius(self.lowest.temperature),
            self.lowest.date
        )?;
        writeln!(
            f,
            "  The highest temperature will be {}, and will occur on {}.",
            format_celsius(self.highest.temperature),
            self.highest.date
        )?;
        writeln!(
            f,
            "  The average low this week is {}.",
            format_celsius(self.average_low)
        )?;
        writeln!(
            f,
            "  The average high this week is {}.",
            format_celsius(self.average_high)
        )
    }
}

pub fn generate_summary(dataset: &WeatherDataset) -> Result<String, SummaryError> {
    debug!(days = dataset.len(), "generating overview");
    Ok(Overview::from_dataset(dataset)?.to_string())
}

/// One block per day, in dataset order. Nothing at all for an empty dataset.
pub fn generate_daily_summary(dataset: &WeatherDataset) -> Result<String, SummaryError> {
    debug!(days = dataset.len(), "generating daily summary");

    let mut summary = String::new();
    for record in dataset.records() {
        summary.push_str(&format!(
            "---- {} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n\n",
            format_date(record.date())?,
            format_celsius(fahrenheit_to_celsius(record.min_temp().into())),
            format_celsius(fahrenheit_to_celsius(record.max_temp().into())),
        ));
    }

    Ok(summary)
}
