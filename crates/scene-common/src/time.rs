//! Calendar helpers for scene acquisition dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{GeoError, GeoResult};

/// A calendar month used as a jump target when browsing scene dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> GeoResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(GeoError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First calendar day of this month.
    pub fn first_day(&self) -> NaiveDate {
        // Month is validated at construction; year range is chrono's.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Check if a date falls at or after the start of this month.
    pub fn starts_on_or_before(&self, date: NaiveDate) -> bool {
        Self::of(date) >= *self
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = GeoError;

    /// Parse `"YYYY-MM"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| GeoError::InvalidYearMonth(s.to_string()))?;
        let year = year
            .parse()
            .map_err(|_| GeoError::InvalidYearMonth(s.to_string()))?;
        let month = month
            .parse()
            .map_err(|_| GeoError::InvalidYearMonth(s.to_string()))?;
        Self::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_validation() {
        assert!(YearMonth::new(2024, 12).is_ok());
        assert_eq!(YearMonth::new(2024, 13), Err(GeoError::InvalidMonth(13)));
        assert_eq!(YearMonth::new(2024, 0), Err(GeoError::InvalidMonth(0)));
    }

    #[test]
    fn test_parse_year_month() {
        let ym: YearMonth = "1999-07".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 1999, month: 7 });
        assert_eq!(ym.to_string(), "1999-07");
        assert!("1999".parse::<YearMonth>().is_err());
        assert!("1999-xx".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_first_day_and_ordering() {
        let ym = YearMonth::new(2003, 2).unwrap();
        assert_eq!(ym.first_day(), NaiveDate::from_ymd_opt(2003, 2, 1).unwrap());
        assert!(ym.starts_on_or_before(NaiveDate::from_ymd_opt(2003, 2, 28).unwrap()));
        assert!(ym.starts_on_or_before(NaiveDate::from_ymd_opt(2004, 1, 1).unwrap()));
        assert!(!ym.starts_on_or_before(NaiveDate::from_ymd_opt(2003, 1, 31).unwrap()));
    }
}
