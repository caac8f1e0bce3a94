//! Interpretation tables.
//!
//! Three parallel 9-row tables. Rows are stored 0-based; the public lookup
//! takes 1-based index values. Interpretation and personality rows are keyed
//! by Cân Xương, life-advice rows by Tính Lượng. Tang Mão has no table.
//!
//! The built-in texts are compiled in as `'static` arrays. An alternative
//! set can be deserialised from an asset file; row counts and row widths
//! are fixed by the array types, and every string must be non-empty.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

/// Rows per table.
pub const TABLE_LEN: usize = 9;

/// Built-in interpretation line for Cân Xương 1..=9.
pub const DEFAULT_INTERPRETATIONS: [&str; TABLE_LEN] = [
    "Số 1: Người có tính lãnh đạo, độc lập và sáng tạo. Hành Thủy",
    "Số 2: Người hòa đồng, hợp tác và nhạy cảm. Hành Thổ",
    "Số 3: Người lạc quan, vui vẻ và có khả năng giao tiếp tốt. Hành Mộc",
    "Số 4: Người thực tế, đáng tin cậy và làm việc chăm chỉ. Hành Kim",
    "Số 5: Người năng động, thích tự do và thay đổi. Hành Thổ",
    "Số 6: Người có trách nhiệm, yêu thương và hài hòa. Hành Kim",
    "Số 7: Người trí tuệ, sâu sắc và khao khát kiến thức. Hành Thủy",
    "Số 8: Người có tham vọng, quyết đoán và thực tế. Hành Mộc",
    "Số 9: Người nhân ái, lý tưởng và sáng tạo. Hành Hỏa",
];

/// Built-in personality traits for Cân Xương 1..=9.
pub const DEFAULT_PERSONALITY_TRAITS: [[&str; 4]; TABLE_LEN] = [
    ["Quyết đoán", "Cá tính mạnh", "Sáng tạo", "Kiên trì"],
    ["Nhạy cảm", "Hợp tác", "Chu đáo", "Trung thành"],
    ["Vui vẻ", "Lạc quan", "Giao tiếp tốt", "Giàu trí tưởng tượng"],
    ["Thực tế", "Chăm chỉ", "Đáng tin cậy", "Kỷ luật"],
    ["Linh hoạt", "Thích phiêu lưu", "Thích tự do", "Trực quan"],
    ["Có trách nhiệm", "Yêu thương", "Hài hòa", "Đáng tin cậy"],
    ["Phân tích", "Thích học hỏi", "Nội tâm", "Sâu sắc"],
    ["Có tham vọng", "Tổ chức tốt", "Thực tế", "Quyết đoán"],
    ["Lý tưởng", "Nhân ái", "Rộng lượng", "Giàu cảm xúc"],
];

/// Built-in life advice for Tính Lượng 1..=9.
pub const DEFAULT_LIFE_ADVICE: [[&str; 3]; TABLE_LEN] = [
    [
        "Nên phát triển khả năng lãnh đạo",
        "Hạn chế áp đặt ý kiến cá nhân",
        "Cần kiên nhẫn hơn với người khác",
    ],
    [
        "Nên cân bằng giữa công việc và cảm xúc",
        "Tránh quá phụ thuộc vào người khác",
        "Phát huy khả năng đồng cảm",
    ],
    [
        "Nên tập trung vào một mục tiêu",
        "Tránh phân tán sức lực",
        "Phát huy óc sáng tạo",
    ],
    [
        "Nên linh hoạt hơn trong suy nghĩ",
        "Tránh quá cứng nhắc",
        "Dành thời gian cho bản thân",
    ],
    [
        "Nên ổn định hơn trong cuộc sống",
        "Tránh thay đổi quá nhiều",
        "Phát huy tính linh hoạt",
    ],
    [
        "Nên cân bằng giữa cho và nhận",
        "Tránh quá hy sinh bản thân",
        "Học cách từ chối",
    ],
    [
        "Nên thể hiện cảm xúc nhiều hơn",
        "Tránh quá khép kín",
        "Tham gia các hoạt động xã hội",
    ],
    [
        "Nên cân bằng giữa vật chất và tinh thần",
        "Tránh quá chú trọng vào thành công",
        "Dành thời gian cho gia đình",
    ],
    [
        "Nên thực tế hơn trong mục tiêu",
        "Tránh quá lý tưởng hóa",
        "Phát huy lòng trắc ẩn",
    ],
];

/// Owned, validated interpretation tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TableAsset")]
pub struct InterpretationTables {
    pub(crate) interpretations: [String; TABLE_LEN],
    pub(crate) personality_traits: [[String; 4]; TABLE_LEN],
    pub(crate) life_advice: [[String; 3]; TABLE_LEN],
}

/// Unchecked wire shape of a table asset.
#[derive(Deserialize)]
struct TableAsset {
    interpretations: [String; TABLE_LEN],
    personality_traits: [[String; 4]; TABLE_LEN],
    life_advice: [[String; 3]; TABLE_LEN],
}

impl TryFrom<TableAsset> for InterpretationTables {
    type Error = NumerologyError;

    fn try_from(asset: TableAsset) -> Result<Self, Self::Error> {
        Self::new(
            asset.interpretations,
            asset.personality_traits,
            asset.life_advice,
        )
    }
}

impl Default for InterpretationTables {
    fn default() -> Self {
        Self {
            interpretations: DEFAULT_INTERPRETATIONS.map(String::from),
            personality_traits: DEFAULT_PERSONALITY_TRAITS.map(|row| row.map(String::from)),
            life_advice: DEFAULT_LIFE_ADVICE.map(|row| row.map(String::from)),
        }
    }
}

static BUILTIN: LazyLock<InterpretationTables> = LazyLock::new(InterpretationTables::default);

impl InterpretationTables {
    /// Shared copy of the built-in tables, built on first use.
    pub fn builtin() -> &'static InterpretationTables {
        &BUILTIN
    }

    /// Build tables from owned rows. Rejects empty strings.
    pub fn new(
        interpretations: [String; TABLE_LEN],
        personality_traits: [[String; 4]; TABLE_LEN],
        life_advice: [[String; 3]; TABLE_LEN],
    ) -> Result<Self, NumerologyError> {
        check_rows("interpretations", interpretations.iter().map(|s| [s]))?;
        check_rows("personality_traits", personality_traits.iter())?;
        check_rows("life_advice", life_advice.iter())?;
        Ok(Self {
            interpretations,
            personality_traits,
            life_advice,
        })
    }

    /// Interpretation line for a 1-based Cân Xương value.
    pub fn interpretation(&self, can_xuong: u8) -> Option<&str> {
        row(&self.interpretations, can_xuong).map(String::as_str)
    }

    /// Trait row for a 1-based Cân Xương value.
    pub fn personality_traits(&self, can_xuong: u8) -> Option<&[String; 4]> {
        row(&self.personality_traits, can_xuong)
    }

    /// Advice row for a 1-based Tính Lượng value.
    pub fn life_advice(&self, tinh_luong: u8) -> Option<&[String; 3]> {
        row(&self.life_advice, tinh_luong)
    }
}

fn row<T>(table: &[T; TABLE_LEN], one_based: u8) -> Option<&T> {
    let idx = usize::from(one_based).checked_sub(1)?;
    table.get(idx)
}

fn check_rows<'a, R, I>(table: &'static str, rows: I) -> Result<(), NumerologyError>
where
    R: IntoIterator<Item = &'a String>,
    I: Iterator<Item = R>,
{
    for (position, row) in rows.enumerate() {
        if row.into_iter().any(|s| s.trim().is_empty()) {
            return Err(NumerologyError::EmptyTableEntry { table, position });
        }
    }
    Ok(())
}
