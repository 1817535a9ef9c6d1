//! Observation window arithmetic
//!
//! Queries for "the last year of data" anchor a window on a date taken from
//! the dataset and extend it twelve calendar months into the past. The
//! subtraction follows calendar-offset semantics: a Feb 29 anchor clamps to
//! Feb 28 in the non-leap target year.

use crate::constants::{DATE_FORMAT, OBSERVATION_WINDOW_MONTHS};
use crate::{Error, Result};
use chrono::{Months, NaiveDate};

/// A one-year observation window over ISO-formatted dates
///
/// Both bounds are inclusive and formatted as `YYYY-MM-DD`, ready for
/// lexicographic comparison against measurement dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationWindow {
    /// Earliest date inside the window
    pub cutoff: String,

    /// Anchor date the window ends at (the dataset's most recent date)
    pub anchor: String,
}

impl ObservationWindow {
    /// Build the window ending at `anchor`, extending one year back
    pub fn ending_at(anchor: &str) -> Result<Self> {
        Ok(Self {
            cutoff: one_year_before(anchor)?,
            anchor: anchor.to_string(),
        })
    }

    /// Whether an ISO-formatted date falls inside the window
    pub fn contains(&self, date: &str) -> bool {
        date >= self.cutoff.as_str() && date <= self.anchor.as_str()
    }
}

/// Compute the date twelve calendar months before `anchor`
///
/// The anchor must be a valid ISO `YYYY-MM-DD` date; it comes from the
/// dataset rather than from request input, so a parse failure indicates a
/// corrupt measurement row.
pub fn one_year_before(anchor: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(anchor, DATE_FORMAT)
        .map_err(|e| Error::date_parsing(format!("invalid measurement date '{anchor}'"), e))?;

    let cutoff = date
        .checked_sub_months(Months::new(OBSERVATION_WINDOW_MONTHS))
        .ok_or_else(|| {
            Error::configuration(format!("measurement date '{anchor}' is out of calendar range"))
        })?;

    Ok(cutoff.format(DATE_FORMAT).to_string())
}
