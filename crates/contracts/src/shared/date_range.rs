use serde::{Deserialize, Serialize};

/// Earliest and latest order date for a dimension value, in "YYYY-MM-DD" form.
///
/// Both fields are empty strings when no record matches the dimension value.
/// That is the defined "no data" outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub min_date: String,
    pub max_date: String,
}

impl DateRange {
    pub fn new(min_date: String, max_date: String) -> Self {
        Self { min_date, max_date }
    }

    /// The "no matching records" sentinel.
    pub fn empty() -> Self {
        Self {
            min_date: String::new(),
            max_date: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_date.is_empty() && self.max_date.is_empty()
    }
}
