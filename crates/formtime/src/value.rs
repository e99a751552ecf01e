//! Temporal value and family enumerations.

use std::fmt;

use jiff::Zoned;
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the temporal families a converter can handle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemporalFamily {
    /// Calendar date without time of day or zone
    Date,

    /// Time of day without date or zone
    Time,

    /// Date-time anchored to a time zone
    Zoned,
}

impl TemporalFamily {
    /// Human-readable name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalFamily::Date => "calendar date",
            TemporalFamily::Time => "time of day",
            TemporalFamily::Zoned => "zoned date-time",
        }
    }
}

impl fmt::Display for TemporalFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date/time value as exchanged with the hosting framework.
///
/// Converters never retain references to values passed through them; each
/// conversion call takes a value in and hands a fresh one back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TemporalValue {
    /// Calendar date, e.g. `2020-01-31`
    Date(Date),

    /// Time of day, e.g. `13:45:00`
    Time(Time),

    /// Zoned date-time, e.g. `2020-01-01T00:00:00Z`
    Zoned(Zoned),
}

impl TemporalValue {
    /// The temporal family this value belongs to.
    pub fn family(&self) -> TemporalFamily {
        match self {
            TemporalValue::Date(_) => TemporalFamily::Date,
            TemporalValue::Time(_) => TemporalFamily::Time,
            TemporalValue::Zoned(_) => TemporalFamily::Zoned,
        }
    }

    /// Returns the calendar date, if this is a date value.
    pub fn as_date(&self) -> Option<Date> {
        match self {
            TemporalValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Returns the time of day, if this is a time value.
    pub fn as_time(&self) -> Option<Time> {
        match self {
            TemporalValue::Time(time) => Some(*time),
            _ => None,
        }
    }

    /// Returns the zoned date-time, if this is a zoned value.
    pub fn as_zoned(&self) -> Option<&Zoned> {
        match self {
            TemporalValue::Zoned(zoned) => Some(zoned),
            _ => None,
        }
    }
}

impl From<Date> for TemporalValue {
    fn from(date: Date) -> Self {
        TemporalValue::Date(date)
    }
}

impl From<Time> for TemporalValue {
    fn from(time: Time) -> Self {
        TemporalValue::Time(time)
    }
}

impl From<Zoned> for TemporalValue {
    fn from(zoned: Zoned) -> Self {
        TemporalValue::Zoned(zoned)
    }
}
