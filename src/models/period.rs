//! Calendar month representation
//!
//! A `PlanMonth` is the period an allowance plan covers. It knows its calendar
//! bounds and which of its days are weekdays (Monday through Friday).

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Check if a date falls Monday through Friday
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The first weekday strictly after `date`, or `None` past the calendar's end
pub fn next_weekday(date: NaiveDate) -> Option<NaiveDate> {
    let mut next = date.checked_add_signed(Duration::days(1))?;
    while !is_weekday(next) {
        next = next.checked_add_signed(Duration::days(1))?;
    }
    Some(next)
}

/// A calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanMonth {
    pub year: i32,
    pub month: u32,
}

impl PlanMonth {
    /// Create a month, rejecting months outside 1-12 or years chrono cannot represent
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodParseError::InvalidFormat(format!("{:04}-{:02}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// Get the first day of this month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Get the last day of this month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        match next_month {
            Some(first) => first - Duration::days(1),
            None => NaiveDate::MAX,
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// All weekdays of the month in chronological order
    pub fn weekdays(&self) -> Vec<NaiveDate> {
        self.start_date()
            .iter_days()
            .take_while(|d| *d <= self.end_date())
            .filter(|d| is_weekday(*d))
            .collect()
    }

    /// Parse a month string in "YYYY-MM" form
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }

    /// Human-friendly name, e.g. "January 2025"
    pub fn friendly_name(&self) -> String {
        self.start_date().format("%B %Y").to_string()
    }
}

impl fmt::Display for PlanMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for PlanMonth {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for PlanMonth {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let month = PlanMonth::new(2024, 2).unwrap();
        assert_eq!(month.start_date(), date(2024, 2, 1));
        assert_eq!(month.end_date(), date(2024, 2, 29));

        let december = PlanMonth::new(2025, 12).unwrap();
        assert_eq!(december.end_date(), date(2025, 12, 31));
    }

    #[test]
    fn test_weekdays() {
        // January 2025 starts on a Wednesday and has 23 weekdays
        let jan = PlanMonth::new(2025, 1).unwrap();
        let weekdays = jan.weekdays();
        assert_eq!(weekdays.len(), 23);
        assert_eq!(weekdays[0], date(2025, 1, 1));
        assert_eq!(weekdays[3], date(2025, 1, 6));
        assert!(weekdays.iter().all(|d| is_weekday(*d)));
    }

    #[test]
    fn test_next_weekday_skips_weekend() {
        // 2025-01-03 is a Friday
        assert_eq!(next_weekday(date(2025, 1, 3)), Some(date(2025, 1, 6)));
        assert_eq!(next_weekday(date(2025, 1, 4)), Some(date(2025, 1, 6)));
        assert_eq!(next_weekday(date(2025, 1, 6)), Some(date(2025, 1, 7)));
        assert_eq!(next_weekday(NaiveDate::MAX), None);
    }

    #[test]
    fn test_contains() {
        let jan = PlanMonth::new(2025, 1).unwrap();
        assert!(jan.contains(date(2025, 1, 15)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert!(!jan.contains(date(2024, 12, 31)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(PlanMonth::parse("2025-01").unwrap(), PlanMonth::new(2025, 1).unwrap());
        assert_eq!(PlanMonth::parse("2025-13"), Err(PeriodParseError::InvalidMonth(13)));
        assert!(matches!(
            PlanMonth::parse("January"),
            Err(PeriodParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        let month = PlanMonth::new(2025, 3).unwrap();
        assert_eq!(month.to_string(), "2025-03");
        assert_eq!(month.friendly_name(), "March 2025");
    }
}
