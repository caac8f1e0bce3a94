//! Assemble a full calculation result from indices and tables.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::birth_date::BirthDate;
use crate::element::{ELEMENT_BY_CAN_XUONG, Element};
use crate::error::NumerologyError;
use crate::indices::Indices;
use crate::tables::InterpretationTables;

/// Outcome of one numerology calculation.
///
/// Deserialised results are checked: indices must be in range and the
/// element must be the one fixed by `can_xuong`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ResultRecord")]
pub struct CalculationResult {
    pub can_xuong: u8,
    pub tinh_luong: u8,
    /// Raw value only; no text is attached to Tang Mão.
    pub tang_mao: u8,
    pub element: Element,
    pub interpretation: String,
    pub personality_traits: [String; 4],
    pub life_advice: [String; 3],
}

/// Unchecked wire shape of a stored result.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultRecord {
    can_xuong: u8,
    tinh_luong: u8,
    tang_mao: u8,
    element: Element,
    interpretation: String,
    personality_traits: [String; 4],
    life_advice: [String; 3],
}

impl TryFrom<ResultRecord> for CalculationResult {
    type Error = NumerologyError;

    fn try_from(record: ResultRecord) -> Result<Self, Self::Error> {
        let indices = Indices::new(record.can_xuong, record.tinh_luong, record.tang_mao)?;
        let expected = ELEMENT_BY_CAN_XUONG[usize::from(indices.can_xuong()) - 1];
        if record.element != expected {
            return Err(NumerologyError::ElementMismatch {
                can_xuong: indices.can_xuong(),
                element: record.element,
            });
        }
        Ok(Self {
            can_xuong: indices.can_xuong(),
            tinh_luong: indices.tinh_luong(),
            tang_mao: indices.tang_mao(),
            element: record.element,
            interpretation: record.interpretation,
            personality_traits: record.personality_traits,
            life_advice: record.life_advice,
        })
    }
}

impl InterpretationTables {
    /// Look up the texts for a validated index triple.
    pub fn interpret(&self, indices: Indices) -> CalculationResult {
        // `Indices` guarantees 1..=9 for both keys, so these rows exist.
        let cx_row = usize::from(indices.can_xuong()) - 1;
        let tl_row = usize::from(indices.tinh_luong()) - 1;
        CalculationResult {
            can_xuong: indices.can_xuong(),
            tinh_luong: indices.tinh_luong(),
            tang_mao: indices.tang_mao(),
            element: ELEMENT_BY_CAN_XUONG[cx_row],
            interpretation: self.interpretations[cx_row].clone(),
            personality_traits: self.personality_traits[cx_row].clone(),
            life_advice: self.life_advice[tl_row].clone(),
        }
    }

    /// Compute the indices for `date` and interpret them.
    pub fn calculate(&self, date: &BirthDate) -> CalculationResult {
        let indices = Indices::from_date(date);
        debug!(
            %date,
            can_xuong = indices.can_xuong(),
            tinh_luong = indices.tinh_luong(),
            tang_mao = indices.tang_mao(),
            "computed numerology indices"
        );
        self.interpret(indices)
    }
}

/// Interpret indices against the built-in tables.
pub fn interpret(indices: Indices) -> CalculationResult {
    InterpretationTables::builtin().interpret(indices)
}

/// Full calculation against the built-in tables.
pub fn calculate(date: &BirthDate) -> CalculationResult {
    InterpretationTables::builtin().calculate(date)
}
