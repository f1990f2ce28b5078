use std::cmp::Ordering;

use crate::SummaryError;

/// An extreme value of a series and where it was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduction {
    pub value: f64,
    pub position: usize,
}

pub fn mean<T>(series: &[T]) -> Result<f64, SummaryError>
where
    T: Copy + Into<f64>,
{
    if series.is_empty() {
        return Err(SummaryError::DivisionByEmptySeries);
    }

    let sum: f64 = series.iter().map(|&x| x.into()).sum();
    Ok(sum / series.len() as f64)
}

/// Smallest value of the series. On ties the last occurrence wins.
pub fn find_min<T>(series: &[T]) -> Option<Reduction>
where
    T: Copy + PartialOrd + Into<f64>,
{
    extreme(series, Ordering::Less)
}

/// Largest value of the series. On ties the last occurrence wins.
pub fn find_max<T>(series: &[T]) -> Option<Reduction>
where
    T: Copy + PartialOrd + Into<f64>,
{
    extreme(series, Ordering::Greater)
}

// Left to right scan where anything that beats or equals the current
// extreme takes its place, hence the last occurrence wins.
fn extreme<T>(series: &[T], direction: Ordering) -> Option<Reduction>
where
    T: Copy + PartialOrd + Into<f64>,
{
    let (&first, rest) = series.split_first()?;

    let mut best = first;
    let mut position = 0;
    for (index, &value) in rest.iter().enumerate() {
        match value.partial_cmp(&best) {
            Some(Ordering::Equal) => (),
            Some(ordering) if ordering == direction => (),
            _ => continue,
        }
        best = value;
        position = index + 1;
    }

    Some(Reduction {
        value: best.into(),
        position,
    })
}
