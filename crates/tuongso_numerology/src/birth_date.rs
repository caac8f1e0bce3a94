//! Validated calendar birth date.
//!
//! A `BirthDate` is always a real proleptic-Gregorian date with a positive
//! year. Whether it lies in the past is a separate check against a
//! caller-supplied "today", so the engine itself never reads the clock.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// Day-first format used for display and accepted for parsing.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// ISO 8601 calendar format, also accepted for parsing.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct BirthDate {
    date: NaiveDate,
}

impl BirthDate {
    /// Build from day, month, year. Fails unless the triple names a real
    /// date with `year >= 1`.
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, NumerologyError> {
        if year < 1 {
            return Err(NumerologyError::InvalidDate { day, month, year });
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or(NumerologyError::InvalidDate { day, month, year })
    }

    /// Wrap a `chrono` date. Fails for years before 1.
    pub fn from_naive(date: NaiveDate) -> Result<Self, NumerologyError> {
        Self::new(date.day(), date.month(), date.year())
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Year as an unsigned value. Always positive by construction.
    pub fn year_unsigned(&self) -> u32 {
        self.date.year().unsigned_abs()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.date
    }

    /// Reject a birth date later than `today`.
    pub fn ensure_not_after(self, today: NaiveDate) -> Result<Self, NumerologyError> {
        if self.date > today {
            return Err(NumerologyError::FutureDate {
                date: self.to_string(),
                today: today.format(DISPLAY_FORMAT).to_string(),
            });
        }
        Ok(self)
    }
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.day(),
            self.month(),
            self.year()
        )
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    /// Accepts `DD/MM/YYYY` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let date = NaiveDate::parse_from_str(s, DISPLAY_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(s, ISO_FORMAT))
            .map_err(|_| NumerologyError::Parse(s.to_string()))?;
        Self::from_naive(date)
    }
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = NumerologyError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive(date)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(date: BirthDate) -> Self {
        date.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let d = BirthDate::new(15, 6, 1990).unwrap();
        assert_eq!((d.day(), d.month(), d.year()), (15, 6, 1990));
        assert_eq!(d.year_unsigned(), 1990);
    }

    #[test]
    fn rejects_month_13() {
        assert_eq!(
            BirthDate::new(1, 13, 2000),
            Err(NumerologyError::InvalidDate {
                day: 1,
                month: 13,
                year: 2000
            })
        );
    }

    #[test]
    fn rejects_day_zero() {
        assert!(BirthDate::new(0, 1, 2000).is_err());
    }

    #[test]
    fn rejects_year_zero_and_negative() {
        assert!(BirthDate::new(1, 1, 0).is_err());
        assert!(BirthDate::new(1, 1, -44).is_err());
    }

    #[test]
    fn thirty_day_months() {
        assert!(BirthDate::new(31, 4, 2000).is_err());
        assert!(BirthDate::new(30, 4, 2000).is_ok());
    }

    #[test]
    fn leap_day() {
        assert!(BirthDate::new(29, 2, 2024).is_ok());
        assert!(BirthDate::new(29, 2, 2023).is_err());
        assert!(BirthDate::new(29, 2, 1900).is_err());
        assert!(BirthDate::new(29, 2, 2000).is_ok());
    }

    #[test]
    fn parse_display_format() {
        let d: BirthDate = "15/06/1990".parse().unwrap();
        assert_eq!(d, BirthDate::new(15, 6, 1990).unwrap());
    }

    #[test]
    fn parse_iso_format() {
        let d: BirthDate = " 1990-06-15 ".parse().unwrap();
        assert_eq!(d, BirthDate::new(15, 6, 1990).unwrap());
    }

    #[test]
    fn parse_garbage() {
        assert!(matches!(
            "yesterday".parse::<BirthDate>(),
            Err(NumerologyError::Parse(_))
        ));
    }

    #[test]
    fn parse_impossible_date() {
        assert!("31/02/2000".parse::<BirthDate>().is_err());
    }

    #[test]
    fn display_pads() {
        let d = BirthDate::new(3, 3, 2003).unwrap();
        assert_eq!(d.to_string(), "03/03/2003");
    }

    #[test]
    fn future_date_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let d = BirthDate::new(2, 7, 2024).unwrap();
        let err = d.ensure_not_after(today).unwrap_err();
        assert_eq!(
            err,
            NumerologyError::FutureDate {
                date: "02/07/2024".into(),
                today: "01/07/2024".into()
            }
        );
    }

    #[test]
    fn today_is_allowed() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let d = BirthDate::from_naive(today).unwrap();
        assert_eq!(d.ensure_not_after(today), Ok(d));
    }
}
