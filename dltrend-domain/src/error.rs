use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Axis bounds need at least one point.
    #[error("series is empty")]
    EmptySeries,

    #[error("shifting {date} by {days} days leaves the supported date range")]
    DateOutOfRange { date: NaiveDate, days: i64 },
}
