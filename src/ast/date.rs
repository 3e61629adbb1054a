//! `revision-date` argument (RFC 7950 §6.2 `date-arg-str`): `YYYY-MM-DD`.

use crate::base::Span;
use crate::error::FrontError;
use std::fmt;
use std::str::FromStr;

/// A calendar date. Construction is total on `(year, month, day)` pairs
/// satisfying the civil-calendar predicate and rejects all others
/// (month out of 1..=12, day out of range for that month/year, including
/// leap-year February).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl Date {
    /// Checked constructor over raw numeric fields.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, String> {
        if !(1..=12).contains(&month) {
            return Err(format!("month {month} is out of range 1..=12"));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(format!(
                "day {day} is out of range for {year}-{month:02} (max {max_day})"
            ));
        }
        Ok(Self { year, month, day })
    }

    /// Parse the `YYYY-MM-DD` textual form, producing a [`FrontError`] on
    /// malformed or out-of-range input.
    pub fn parse(text: &str, span: Span) -> Result<Self, FrontError> {
        let invalid = |reason: String| FrontError::InvalidDate {
            span,
            text: text.to_string(),
            reason,
        };

        let mut parts = text.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected YYYY-MM-DD".to_string()));
        };
        if parts.next().is_some() {
            return Err(invalid("expected exactly three `-`-separated fields".to_string()));
        }
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(invalid("expected YYYY-MM-DD with fixed field widths".to_string()));
        }

        let year: u16 = y.parse().map_err(|_| invalid("year is not numeric".to_string()))?;
        let month: u8 = m.parse().map_err(|_| invalid("month is not numeric".to_string()))?;
        let day: u8 = d.parse().map_err(|_| invalid("day is not numeric".to_string()))?;

        Date::new(year, month, day).map_err(invalid)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let span = Span::at(crate::base::Position::new(0, 0));
        Date::parse(s, span).map_err(|e| e.to_string())
    }
}
