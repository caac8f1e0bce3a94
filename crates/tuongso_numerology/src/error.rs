//! Error types for numerology calculations.

use thiserror::Error;

use crate::element::Element;

/// Errors from date validation, parsing, and index lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// Day/month/year do not form a real calendar date.
    #[error("invalid date: {day:02}/{month:02}/{year}")]
    InvalidDate { day: u32, month: u32, year: i32 },
    /// Birth date lies after the reference day.
    #[error("birth date {date} is after {today}")]
    FutureDate { date: String, today: String },
    /// Date text matched none of the accepted formats.
    #[error("cannot parse date: {0}")]
    Parse(String),
    /// A 1-based index is outside its table range.
    #[error("{index} must be in 1..={max}, got {value}")]
    IndexOutOfRange {
        index: &'static str,
        value: u32,
        max: u32,
    },
    /// A loaded interpretation table holds an empty string.
    #[error("empty entry in {table} at position {position}")]
    EmptyTableEntry { table: &'static str, position: usize },
    /// A stored result names an element other than its Cân Xương's.
    #[error("element {} does not belong to can xuong {can_xuong}", element.name())]
    ElementMismatch { can_xuong: u8, element: Element },
}
