use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user-entered expense. Immutable once appended to the collection.
///
/// `amount` and `date` are kept exactly as entered; nothing here validates
/// them. The aggregation layer coerces or skips malformed values instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub title: String,
    pub amount: String,
    /// Calendar date in `YYYY-MM-DD` form, no time-of-day.
    pub date: String,
}

impl ExpenseRecord {
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount: amount.into(),
            date: date.into(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Grouping key, e.g. "January 2022". None when the date does not parse.
    pub fn month_label(&self) -> Option<String> {
        self.parsed_date().map(|d| d.format("%B %Y").to_string())
    }

    /// List-row label, e.g. "15 Jan 2022". None when the date does not parse.
    pub fn display_label(&self) -> Option<String> {
        self.parsed_date().map(|d| d.format("%d %b %Y").to_string())
    }
}
