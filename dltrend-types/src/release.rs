use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label carried by the synthetic "today" record appended after the last release.
pub const UNRELEASED_LABEL: &str = "unreleased";

/// Textual suffix marking a major release. No semver parsing is involved.
pub const MAJOR_SUFFIX: &str = ".0";

/// One published release and the downloads attributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub date: NaiveDate,
    pub delta: u64,
    pub label: String,
}

impl ReleaseRecord {
    pub fn new(date: NaiveDate, delta: u64, label: impl Into<String>) -> Self {
        Self {
            date,
            delta,
            label: label.into(),
        }
    }

    /// The trailing record that stretches the trend line out to `today`.
    pub fn sentinel(today: NaiveDate) -> Self {
        Self::new(today, 0, UNRELEASED_LABEL)
    }

    /// `true` for labels ending in ".0", e.g. "1.0.0" and "1.10.0" but not "1.2.1".
    pub fn is_major(&self) -> bool {
        self.label.ends_with(MAJOR_SUFFIX)
    }

    pub fn is_sentinel(&self) -> bool {
        self.delta == 0 && self.label == UNRELEASED_LABEL
    }
}
