use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One survey answer for a probability or impact question.
///
/// `value` is expected in `1..=N` for the active matrix dimension; the
/// aggregator does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: i32,
    #[serde(default)]
    pub label: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: i32, label: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            label: label.into(),
        }
    }

    /// An answer with only a value, for callers that do not track question ids.
    pub fn with_value(value: i32) -> Self {
        Self {
            question_id: String::new(),
            value,
            label: String::new(),
        }
    }
}
