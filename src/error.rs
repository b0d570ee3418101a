//! Error types for calendar conversion.

use std::fmt;

use thiserror::Error;

use crate::lunar::table::{MAX_YEAR, MIN_YEAR};

/// Errors that can occur when converting between calendars.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// The lunar year needed for the conversion has no table entry.
    #[error("year {0} is outside the supported range {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    OutOfRangeYear(i32),

    /// A month or day that does not exist in its calendar.
    #[error("invalid {field}: {value}")]
    InvalidCalendarField { field: Field, value: i64 },

    /// A leap month was requested that the year does not have.
    #[error("lunar year {year} has no leap month {month} (leap month: {})", DisplayLeap(.leap_month))]
    InconsistentLeapRequest {
        year: i32,
        month: u32,
        leap_month: Option<u32>,
    },
}

/// Which calendar field failed validation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Field {
    Month,
    Day,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Month => "month",
            Field::Day => "day",
        })
    }
}

struct DisplayLeap<'a>(&'a Option<u32>);

impl fmt::Display for DisplayLeap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(m) => write!(f, "{m}"),
            None => f.write_str("none"),
        }
    }
}

/// Result type alias for conversions.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn month(value: impl Into<i64>) -> Self {
        Error::InvalidCalendarField {
            field: Field::Month,
            value: value.into(),
        }
    }

    pub(crate) fn day(value: impl Into<i64>) -> Self {
        Error::InvalidCalendarField {
            field: Field::Day,
            value: value.into(),
        }
    }
}
