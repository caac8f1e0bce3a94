use chrono::{Local, NaiveDate};
use tuongso_numerology::{BirthDate, CalculationResult, Indices};

use crate::error::TuongsoError;
use crate::global::tables;

/// Local calendar date.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Validate a birth date: real calendar date, not after `today`.
fn checked_date(
    day: u32,
    month: u32,
    year: i32,
    today: NaiveDate,
) -> Result<BirthDate, TuongsoError> {
    Ok(BirthDate::new(day, month, year)?.ensure_not_after(today)?)
}

/// Full calculation for a past or present date using the global tables.
///
/// Rejects impossible dates and dates after the local "today".
pub fn calculate(day: u32, month: u32, year: i32) -> Result<CalculationResult, TuongsoError> {
    let date = checked_date(day, month, year, today())?;
    Ok(tables().calculate(&date))
}

/// Like [`calculate`] but with an explicit reference day.
pub fn calculate_on(date: BirthDate, today: NaiveDate) -> Result<CalculationResult, TuongsoError> {
    let date = date.ensure_not_after(today)?;
    Ok(tables().calculate(&date))
}

/// Parse `DD/MM/YYYY` or `YYYY-MM-DD` and calculate.
pub fn calculate_str(s: &str) -> Result<CalculationResult, TuongsoError> {
    let date: BirthDate = s.parse()?;
    calculate_on(date, today())
}

/// Only the three indices, with the same validation as [`calculate`].
pub fn indices(day: u32, month: u32, year: i32) -> Result<Indices, TuongsoError> {
    let date = checked_date(day, month, year, today())?;
    Ok(Indices::from_date(&date))
}

/// Interpret raw 1-based indices against the global tables.
pub fn interpret(
    can_xuong: u8,
    tinh_luong: u8,
    tang_mao: u8,
) -> Result<CalculationResult, TuongsoError> {
    let idx = Indices::new(can_xuong, tinh_luong, tang_mao)?;
    Ok(tables().interpret(idx))
}
