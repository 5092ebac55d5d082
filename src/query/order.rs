//! Presentation ordering for record lists
//!
//! Newest activity first: date descending, with `created_at` descending as
//! the tie-break so same-day entries appear in reverse insertion order.

use std::cmp::Ordering;

use crate::models::Record;

/// Sort records into display order, in place
///
/// Records lacking `created_at` (not yet round-tripped through the store)
/// sort after records that have it; the sort is stable, so they keep their
/// relative order among themselves.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(compare_newest_first);
}

fn compare_newest_first(a: &Record, b: &Record) -> Ordering {
    b.date.cmp(&a.date).then_with(|| match (a.created_at, b.created_at) {
        (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn record_on(date: &str) -> Record {
        Record::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            "entry",
            vec!["Other".into()],
        )
    }

    #[test]
    fn test_date_descending() {
        let mut records = vec![
            record_on("2024-05-01"),
            record_on("2024-05-03"),
            record_on("2024-05-02"),
        ];

        sort_newest_first(&mut records);

        let dates: Vec<_> = records.iter().map(|r| r.date_string()).collect();
        assert_eq!(dates, ["2024-05-03", "2024-05-02", "2024-05-01"]);
    }

    #[test]
    fn test_created_at_breaks_same_day_ties() {
        let mut earlier = record_on("2024-05-01");
        earlier.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
        let mut later = record_on("2024-05-01");
        later.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 19, 30, 0).unwrap());

        let later_id = later.id;
        let mut records = vec![earlier, later];
        sort_newest_first(&mut records);

        assert_eq!(records[0].id, later_id);
    }

    #[test]
    fn test_missing_created_at_sorts_last_and_stable() {
        let mut stamped = record_on("2024-05-01");
        stamped.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
        let unstamped_a = record_on("2024-05-01");
        let unstamped_b = record_on("2024-05-01");

        let (id_a, id_b, id_stamped) = (unstamped_a.id, unstamped_b.id, stamped.id);
        let mut records = vec![unstamped_a, unstamped_b, stamped];
        sort_newest_first(&mut records);

        assert_eq!(records[0].id, id_stamped);
        assert_eq!(records[1].id, id_a);
        assert_eq!(records[2].id, id_b);
    }
}
