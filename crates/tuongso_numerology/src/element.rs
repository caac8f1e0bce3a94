//! Ngũ Hành (five elements) attached to each Cân Xương value.

use serde::{Deserialize, Serialize};

/// The five elements. Serialised by their Vietnamese names; the ASCII
/// spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Kim,
    #[serde(rename = "Mộc", alias = "Moc")]
    Moc,
    #[serde(rename = "Thủy", alias = "Thuy")]
    Thuy,
    #[serde(rename = "Hỏa", alias = "Hoa")]
    Hoa,
    #[serde(rename = "Thổ", alias = "Tho")]
    Tho,
}

/// All five elements in generating-cycle order starting from Kim.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Kim,
    Element::Thuy,
    Element::Moc,
    Element::Hoa,
    Element::Tho,
];

impl Element {
    /// Vietnamese name with diacritics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kim => "Kim",
            Self::Moc => "Mộc",
            Self::Thuy => "Thủy",
            Self::Hoa => "Hỏa",
            Self::Tho => "Thổ",
        }
    }

    /// English gloss.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Kim => "Metal",
            Self::Moc => "Wood",
            Self::Thuy => "Water",
            Self::Hoa => "Fire",
            Self::Tho => "Earth",
        }
    }
}

/// Element for Cân Xương 1..=9 (index 0 = value 1).
pub(crate) const ELEMENT_BY_CAN_XUONG: [Element; 9] = [
    Element::Thuy,
    Element::Tho,
    Element::Moc,
    Element::Kim,
    Element::Tho,
    Element::Kim,
    Element::Thuy,
    Element::Moc,
    Element::Hoa,
];

/// Element for a 1-based Cân Xương value, `None` outside `1..=9`.
pub fn element_for_can_xuong(can_xuong: u8) -> Option<Element> {
    let idx = usize::from(can_xuong).checked_sub(1)?;
    ELEMENT_BY_CAN_XUONG.get(idx).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_nonempty() {
        for e in ALL_ELEMENTS {
            assert!(!e.name().is_empty());
            assert!(!e.english_name().is_empty());
        }
    }

    #[test]
    fn can_xuong_mapping() {
        assert_eq!(element_for_can_xuong(1), Some(Element::Thuy));
        assert_eq!(element_for_can_xuong(4), Some(Element::Kim));
        assert_eq!(element_for_can_xuong(9), Some(Element::Hoa));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(element_for_can_xuong(0), None);
        assert_eq!(element_for_can_xuong(10), None);
    }

    #[test]
    fn every_value_has_an_element() {
        for cx in 1..=9 {
            assert!(element_for_can_xuong(cx).is_some());
        }
    }

    #[test]
    fn serialises_vietnamese_names() {
        for e in ALL_ELEMENTS {
            assert_eq!(serde_json::to_value(e).unwrap(), e.name());
        }
        let parsed: Element = serde_json::from_str("\"Thuy\"").unwrap();
        assert_eq!(parsed, Element::Thuy);
    }
}
