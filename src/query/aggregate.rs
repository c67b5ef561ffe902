//! Time-bucketed aggregation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{FieldValue, Record, TIMESTAMP_FORMAT};

const SECS_PER_DAY: i64 = 86_400;
// The unix epoch was a Thursday; shifting by four days puts week boundaries on
// Monday 00:00.
const MONDAY_OFFSET_SECS: i64 = 4 * SECS_PER_DAY;

/// Fixed bucketing intervals supported by [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Hour,
    Day,
    Week,
}

impl Interval {
    /// Parse the short interval tokens used by interactive callers.
    ///
    /// Returns `None` for unknown tokens; callers treat that as "no data", not
    /// an error.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1h" => Some(Self::Hour),
            "1d" => Some(Self::Day),
            "1w" => Some(Self::Week),
            _ => None,
        }
    }

    fn seconds(self) -> i64 {
        match self {
            Self::Hour => 3_600,
            Self::Day => SECS_PER_DAY,
            Self::Week => 7 * SECS_PER_DAY,
        }
    }

    /// Truncate `ts` down to the start of its bucket.
    ///
    /// Hours and days align to UTC clock boundaries; weeks align to Monday
    /// 00:00 UTC.
    pub fn truncate(self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let secs = ts.timestamp();
        let rem = match self {
            Self::Week => (secs - MONDAY_OFFSET_SECS).rem_euclid(self.seconds()),
            _ => secs.rem_euclid(self.seconds()),
        };
        DateTime::from_timestamp(secs - rem, 0).unwrap_or(ts)
    }
}

/// Aggregated numeric contributions for one time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BucketStats {
    pub sum: f64,
    pub count: usize,
    /// `sum / count` for the bucket.
    pub avg: f64,
}

/// Aggregate the numeric values of `field` into `interval`-sized time buckets.
///
/// Two predicates are deliberately distinct:
///
/// - membership: a record joins its bucket when `field` is *present*, numeric
///   or not;
/// - contribution: only [`FieldValue::Number`] values feed `sum`/`count`/`avg`.
///
/// Buckets whose members contributed no numeric values are omitted, so every
/// returned bucket has `count > 0`. Keys are the bucket start rendered as
/// `YYYY-MM-DD HH:MM:SS`.
pub fn aggregate(
    records: &[Record],
    field: &str,
    interval: Interval,
) -> BTreeMap<String, BucketStats> {
    let mut groups: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
    for record in records {
        if record.fields.contains_key(field) {
            let label = interval
                .truncate(record.timestamp)
                .format(TIMESTAMP_FORMAT)
                .to_string();
            groups.entry(label).or_default().push(record);
        }
    }

    let mut buckets = BTreeMap::new();
    for (label, members) in groups {
        let mut sum = 0.0;
        let mut count = 0usize;
        for record in members {
            if let Some(FieldValue::Number(v)) = record.fields.get(field) {
                sum += v;
                count += 1;
            }
        }
        if count > 0 {
            buckets.insert(
                label,
                BucketStats {
                    sum,
                    count,
                    avg: sum / count as f64,
                },
            );
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{aggregate, Interval};
    use crate::types::{coerce_field, Fields, Record};

    fn record_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, value: &str) -> Record {
        let ts = Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap();
        let mut fields = Fields::new();
        fields.insert("v".to_owned(), coerce_field(value));
        Record::new(ts, fields, "test", "csv")
    }

    #[test]
    fn hourly_bucket_sums_counts_and_averages() {
        let records = vec![
            record_at(2024, 3, 13, 10, 15, "4"),
            record_at(2024, 3, 13, 10, 45, "6"),
        ];

        let buckets = aggregate(&records, "v", Interval::Hour);
        assert_eq!(buckets.len(), 1);

        let bucket = &buckets["2024-03-13 10:00:00"];
        assert_eq!(bucket.sum, 10.0);
        assert_eq!(bucket.count, 2);
        assert_eq!(bucket.avg, 5.0);
    }

    #[test]
    fn records_in_different_hours_land_in_different_buckets() {
        let records = vec![
            record_at(2024, 3, 13, 10, 59, "1"),
            record_at(2024, 3, 13, 11, 0, "2"),
        ];

        let buckets = aggregate(&records, "v", Interval::Hour);
        assert_eq!(buckets.len(), 2);
        assert!(buckets.contains_key("2024-03-13 10:00:00"));
        assert!(buckets.contains_key("2024-03-13 11:00:00"));
    }

    #[test]
    fn daily_bucket_truncates_to_midnight() {
        let records = vec![record_at(2024, 3, 13, 23, 59, "5")];
        let buckets = aggregate(&records, "v", Interval::Day);
        assert!(buckets.contains_key("2024-03-13 00:00:00"));
    }

    #[test]
    fn weekly_bucket_starts_on_monday() {
        // 2024-03-13 is a Wednesday; its week starts Monday 2024-03-11.
        let records = vec![record_at(2024, 3, 13, 10, 15, "5")];
        let buckets = aggregate(&records, "v", Interval::Week);
        assert!(buckets.contains_key("2024-03-11 00:00:00"));
    }

    #[test]
    fn presence_without_numeric_values_omits_the_bucket() {
        let records = vec![
            record_at(2024, 3, 13, 10, 15, "n/a"),
            record_at(2024, 3, 13, 12, 15, "3"),
        ];

        let buckets = aggregate(&records, "v", Interval::Hour);
        assert_eq!(buckets.len(), 1);
        assert!(buckets.contains_key("2024-03-13 12:00:00"));
    }

    #[test]
    fn non_numeric_members_do_not_contribute() {
        let mut records = vec![
            record_at(2024, 3, 13, 10, 15, "4"),
            record_at(2024, 3, 13, 10, 30, "n/a"),
        ];
        // A record without the field at all stays out of the grouping.
        records.push(Record::new(
            Utc.with_ymd_and_hms(2024, 3, 13, 10, 40, 0).unwrap(),
            Fields::new(),
            "test",
            "csv",
        ));

        let buckets = aggregate(&records, "v", Interval::Hour);
        let bucket = &buckets["2024-03-13 10:00:00"];
        assert_eq!(bucket.sum, 4.0);
        assert_eq!(bucket.count, 1);
        assert_eq!(bucket.avg, 4.0);
    }

    #[test]
    fn interval_tokens_parse() {
        assert_eq!(Interval::parse("1h"), Some(Interval::Hour));
        assert_eq!(Interval::parse("1d"), Some(Interval::Day));
        assert_eq!(Interval::parse("1w"), Some(Interval::Week));
        assert_eq!(Interval::parse("2h"), None);
        assert_eq!(Interval::parse(""), None);
    }
}
