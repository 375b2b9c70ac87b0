//! Reporting period of a reimbursement request
//!
//! Either an explicit start/end range or a single day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format used for period input and output
pub const PERIOD_DATE_FORMAT: &str = "%Y-%m-%d";

/// The span of time a request's expenses cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportingPeriod {
    /// Inclusive date range
    Range { start: NaiveDate, end: NaiveDate },
    /// A single day
    Single { date: NaiveDate },
}

impl ReportingPeriod {
    /// Create a range period; fails if `start` is after `end`
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::StartAfterEnd { start, end });
        }
        Ok(Self::Range { start, end })
    }

    /// Create a single-day period
    pub fn single(date: NaiveDate) -> Self {
        Self::Single { date }
    }

    /// Parse the raw start/end fields of a form
    ///
    /// Identical start and end collapse to a single-day period.
    pub fn parse(start: &str, end: &str) -> Result<Self, PeriodError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if start == end {
            return Ok(Self::single(start));
        }
        Self::range(start, end)
    }

    /// First day covered
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Range { start, .. } => *start,
            Self::Single { date } => *date,
        }
    }

    /// Last day covered (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::Range { end, .. } => *end,
            Self::Single { date } => *date,
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Format with the given strftime pattern
    pub fn format(&self, date_format: &str) -> String {
        match self {
            Self::Range { start, end } => format!(
                "{} - {}",
                start.format(date_format),
                end.format(date_format)
            ),
            Self::Single { date } => date.format(date_format).to_string(),
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(PERIOD_DATE_FORMAT))
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, PeriodError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, PERIOD_DATE_FORMAT)
        .map_err(|_| PeriodError::InvalidDate(raw.to_string()))
}

/// Problems with period input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    InvalidDate(String),
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(raw) => {
                write!(f, "Invalid date '{}': expected YYYY-MM-DD", raw)
            }
            Self::StartAfterEnd { start, end } => {
                write!(f, "Period start {} is after period end {}", start, end)
            }
        }
    }
}

impl std::error::Error for PeriodError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_range() {
        let p = ReportingPeriod::parse("2024-03-01", " 2024-03-31").unwrap();
        assert_eq!(p.start_date(), date(2024, 3, 1));
        assert_eq!(p.end_date(), date(2024, 3, 31));
        assert!(p.contains(date(2024, 3, 15)));
        assert!(!p.contains(date(2024, 4, 1)));
        assert_eq!(p.to_string(), "2024-03-01 - 2024-03-31");
    }

    #[test]
    fn test_parse_single_day() {
        let p = ReportingPeriod::parse("2024-03-16", "2024-03-16").unwrap();
        assert_eq!(p, ReportingPeriod::single(date(2024, 3, 16)));
        assert_eq!(p.format("%d/%m/%Y"), "16/03/2024");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ReportingPeriod::parse("March", "2024-03-31"),
            Err(PeriodError::InvalidDate("March".into()))
        );
        assert!(matches!(
            ReportingPeriod::parse("2024-04-01", "2024-03-01"),
            Err(PeriodError::StartAfterEnd { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let p = ReportingPeriod::range(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"type":"range","start":"2024-03-01","end":"2024-03-31"}"#
        );
        let back: ReportingPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
