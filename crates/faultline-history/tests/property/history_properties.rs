use chrono::{Duration, NaiveDate};
use faultline_core::models::Snapshot;
use faultline_history::{month_end_dates, SnapshotHistory};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

// ── Ordering ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn accepted_dates_are_strictly_increasing(offsets in proptest::collection::vec(0i64..2000, 0..30)) {
        let mut history = SnapshotHistory::new();
        for offset in offsets {
            let _ = history.push(Snapshot::new(base() + Duration::days(offset), vec![]));
        }
        let dates: Vec<_> = history.snapshots().iter().map(|s| s.date).collect();
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rejected_push_leaves_history_unchanged(offsets in proptest::collection::vec(0i64..2000, 1..30)) {
        let mut history = SnapshotHistory::new();
        for offset in offsets {
            let before = history.clone();
            if history.push(Snapshot::new(base() + Duration::days(offset), vec![])).is_err() {
                prop_assert_eq!(&history, &before);
            }
        }
    }
}

// ── Month ends ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn month_ends_are_last_days_in_range(start in 0i64..3000, len in 0i64..800) {
        let start = base() + Duration::days(start);
        let end = start + Duration::days(len);
        let dates = month_end_dates(start, end);
        for d in &dates {
            prop_assert!(*d >= start && *d <= end);
            prop_assert_eq!((*d + Duration::days(1)).format("%d").to_string(), "01");
        }
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
