//! The three birth-date indices.
//!
//! The free functions take raw day/month/year and are only meaningful for
//! inputs that form a valid [`BirthDate`]. `Indices::from_date` is the
//! checked entry point.

use serde::Serialize;

use crate::birth_date::BirthDate;
use crate::digits::{digit_sum, reduce_to_single_digit};
use crate::error::NumerologyError;

pub const CAN_XUONG_MAX: u8 = 9;
pub const TINH_LUONG_MAX: u8 = 9;
pub const TANG_MAO_MAX: u8 = 10;

/// Cân Xương: digit sums of day, month and the full year, reduced to one digit.
///
/// 15/06/1990 → 6 + 6 + 19 = 31 → 4.
pub fn can_xuong(day: u32, month: u32, year: u32) -> u8 {
    let total = digit_sum(day) + digit_sum(month) + digit_sum(year);
    reduce_to_single_digit(total) as u8
}

/// Tính Lượng: `(day + month + year mod 100) mod 9`, with 0 mapped to 9.
pub fn tinh_luong(day: u32, month: u32, year: u32) -> u8 {
    let r = (u64::from(day) + u64::from(month) + u64::from(year % 100)) % 9;
    if r == 0 { TINH_LUONG_MAX } else { r as u8 }
}

/// Tang Mão: `(2·day + 3·month + year mod 100) mod 10`, with 0 mapped to 10.
pub fn tang_mao(day: u32, month: u32, year: u32) -> u8 {
    let r = (2 * u64::from(day) + 3 * u64::from(month) + u64::from(year % 100)) % 10;
    if r == 0 { TANG_MAO_MAX } else { r as u8 }
}

/// A range-checked (Cân Xương, Tính Lượng, Tang Mão) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indices {
    can_xuong: u8,
    tinh_luong: u8,
    tang_mao: u8,
}

impl Indices {
    /// Validate raw 1-based values.
    pub fn new(can_xuong: u8, tinh_luong: u8, tang_mao: u8) -> Result<Self, NumerologyError> {
        check_range("can_xuong", can_xuong, CAN_XUONG_MAX)?;
        check_range("tinh_luong", tinh_luong, TINH_LUONG_MAX)?;
        check_range("tang_mao", tang_mao, TANG_MAO_MAX)?;
        Ok(Self {
            can_xuong,
            tinh_luong,
            tang_mao,
        })
    }

    /// Compute all three indices for a birth date.
    pub fn from_date(date: &BirthDate) -> Self {
        let (d, m, y) = (date.day(), date.month(), date.year_unsigned());
        Self {
            can_xuong: can_xuong(d, m, y),
            tinh_luong: tinh_luong(d, m, y),
            tang_mao: tang_mao(d, m, y),
        }
    }

    pub fn can_xuong(&self) -> u8 {
        self.can_xuong
    }

    pub fn tinh_luong(&self) -> u8 {
        self.tinh_luong
    }

    pub fn tang_mao(&self) -> u8 {
        self.tang_mao
    }
}

fn check_range(index: &'static str, value: u8, max: u8) -> Result<(), NumerologyError> {
    if value == 0 || value > max {
        return Err(NumerologyError::IndexOutOfRange {
            index,
            value: u32::from(value),
            max: u32::from(max),
        });
    }
    Ok(())
}
