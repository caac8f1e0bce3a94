//! Birth-date numerology engine.
//!
//! This crate provides:
//! - Digit-sum reduction primitives
//! - The three date indices: Cân Xương (1-9), Tính Lượng (1-9), Tang Mão (1-10)
//! - Static interpretation tables and their lookup
//! - A validated calendar `BirthDate`
//!
//! Every operation is pure and synchronous. Tables are immutable once
//! constructed, so results can be computed from any number of threads.

pub mod birth_date;
pub mod digits;
pub mod element;
pub mod error;
pub mod indices;
pub mod interpret;
pub mod tables;

pub use birth_date::BirthDate;
pub use digits::{digit_sum, reduce_to_single_digit};
pub use element::{ALL_ELEMENTS, Element, element_for_can_xuong};
pub use error::NumerologyError;
pub use indices::{
    CAN_XUONG_MAX, Indices, TANG_MAO_MAX, TINH_LUONG_MAX, can_xuong, tang_mao, tinh_luong,
};
pub use interpret::{CalculationResult, calculate, interpret};
pub use tables::{
    DEFAULT_INTERPRETATIONS, DEFAULT_LIFE_ADVICE, DEFAULT_PERSONALITY_TRAITS, InterpretationTables,
    TABLE_LEN,
};
