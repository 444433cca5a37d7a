//! Publication date normalization for MEDLINE `DP` values

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

/// Timestamp form, e.g. `2020/05/01 00:00`
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Citation form, e.g. `2020 May 01`
const CITATION_FORMAT: &str = "%Y %b %d";

const NORMALIZED_FORMAT: &str = "%Y-%m-%d";

/// Normalize a publication date to `YYYY-MM-DD`
///
/// Two source layouts are recognized: `YYYY/MM/DD HH:MM` and `YYYY Mon DD`.
/// Anything else (`2020 May`, `2019 Winter`, `2021 Jan-Feb`, ...) is returned
/// verbatim so that a record is never lost over an odd date.
///
/// # Example
///
/// ```
/// use papers_parser::normalize_publication_date;
///
/// assert_eq!(normalize_publication_date("2020/05/01 00:00"), "2020-05-01");
/// assert_eq!(normalize_publication_date("2020 May 01"), "2020-05-01");
/// assert_eq!(normalize_publication_date("2020 May"), "2020 May");
/// ```
pub fn normalize_publication_date(raw: &str) -> String {
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return timestamp.format(NORMALIZED_FORMAT).to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, CITATION_FORMAT) {
        return date.format(NORMALIZED_FORMAT).to_string();
    }

    debug!(raw = %raw, "Unrecognized publication date, keeping raw value");
    raw.to_string()
}
