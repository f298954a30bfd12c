use crate::DomainError;
use chrono::NaiveDate;
use dltrend_types::ReleaseRecord;

/// Day-precision format used by the release literals and the `--today` flag.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Authored in non-decreasing date order; nothing downstream sorts.
const HISTORICAL_RELEASES: &[(&str, u64, &str)] = &[
    ("2025-03-04", 15, "1.0.0"),
    ("2025-03-05", 6, "1.0.1"),
    ("2025-03-07", 7, "1.0.2"),
    ("2025-03-07", 1, "1.0.3"),
    ("2025-03-09", 5, "1.0.4"),
    ("2025-03-09", 8, "1.0.5"),
    ("2025-03-12", 12, "1.1.0"),
    ("2025-03-13", 8, "1.1.1"),
    ("2025-03-13", 12, "1.2.0"),
    ("2025-03-13", 1, "1.2.1"),
    ("2025-03-19", 9, "1.2.2"),
    ("2025-03-21", 17, "1.2.3"),
    ("2025-03-24", 790, "1.3.0"),
    ("2025-05-31", 124, "1.3.1"),
    ("2025-06-03", 135, "1.3.2"),
    ("2025-06-06", 334, "1.4.0"),
    ("2025-06-19", 73, "1.4.1"),
    ("2025-06-20", 224, "1.4.2"),
    ("2025-06-28", 1643, "1.4.3"),
    ("2025-07-05", 1593, "1.5.0"),
    ("2025-11-10", 153, "1.5.1"),
    ("2025-11-13", 695, "1.5.2"),
    ("2025-12-07", 549, "1.5.3"),
    ("2025-12-30", 55, "1.6.0"),
    ("2025-12-30", 263, "1.6.1"),
    ("2026-01-05", 508, "1.6.2"),
    ("2026-01-16", 298, "1.6.3"),
    ("2026-01-21", 76, "1.7.0"),
    ("2026-01-22", 188, "1.7.1"),
    ("2026-01-24", 339, "1.7.2"),
];

pub fn parse_day(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| DomainError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

/// The published releases, oldest first.
pub fn historical_releases() -> Result<Vec<ReleaseRecord>, DomainError> {
    HISTORICAL_RELEASES
        .iter()
        .map(|&(date, delta, label)| Ok(ReleaseRecord::new(parse_day(date)?, delta, label)))
        .collect()
}

pub fn with_sentinel(mut records: Vec<ReleaseRecord>, today: NaiveDate) -> Vec<ReleaseRecord> {
    records.push(ReleaseRecord::sentinel(today));
    records
}

/// Historical releases followed by the zero-delta "unreleased" record dated `today`.
pub fn build_dataset(today: NaiveDate) -> Result<Vec<ReleaseRecord>, DomainError> {
    Ok(with_sentinel(historical_releases()?, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_literals_parse_in_authored_order() {
        let records = historical_releases().expect("literals parse");
        assert_eq!(records.len(), 30);
        assert_eq!(records[0].label, "1.0.0");
        assert_eq!(records[29].label, "1.7.2");
        assert!(records.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn build_dataset_appends_one_sentinel() {
        let today = parse_day("2026-02-01").expect("date");
        let records = build_dataset(today).expect("dataset");
        assert_eq!(records.len(), 31);
        let last = records.last().expect("sentinel");
        assert!(last.is_sentinel());
        assert_eq!(last.date, today);
    }

    #[test]
    fn parse_day_rejects_other_formats() {
        let err = parse_day("03/04/2025").expect_err("not iso");
        assert!(err.to_string().contains("03/04/2025"));
    }
}
