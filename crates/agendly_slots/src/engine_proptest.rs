#[cfg(test)]
mod tests {
    use crate::conflict::{overlaps, BusyInterval};
    use crate::engine::compute_free_slots;
    use crate::rules::{AvailabilityRule, TimeWindow};
    use crate::time::generate_slot_starts;
    use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
    use proptest::prelude::*;

    // Helper to build an instant on a fixed reference day
    fn on_day(minutes_after_midnight: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 6, 0, 0, 0).unwrap() + Duration::minutes(minutes_after_midnight)
    }

    proptest! {
        // floor((end - start) / step) starts, each exactly step apart,
        // the first equal to the window start
        #[test]
        fn start_count_matches_the_formula(
            start_minute in 0..720i64,
            window_minutes in 1..720i64,
            step_minutes in 1..180i64,
        ) {
            let window_start = on_day(start_minute);
            let window_end = window_start + Duration::minutes(window_minutes);

            let starts = generate_slot_starts(window_start, window_end, step_minutes);

            prop_assert_eq!(starts.len() as i64, window_minutes / step_minutes);
            if let Some(first) = starts.first() {
                prop_assert_eq!(*first, window_start);
            }
            for pair in starts.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], Duration::minutes(step_minutes));
            }
        }

        // swapping the slot and busy roles cannot change the verdict
        #[test]
        fn overlap_is_symmetric_under_role_swap(
            slot_start in 0..1380i64,
            slot_len in 1..120i64,
            busy_start in 0..1380i64,
            busy_len in 1..120i64,
        ) {
            let slot = (on_day(slot_start), on_day(slot_start + slot_len));
            let busy = BusyInterval::new(on_day(busy_start), on_day(busy_start + busy_len));

            let forward = overlaps(slot.0, slot.1, &[busy]);
            let swapped = overlaps(busy.start, busy.end, &[BusyInterval::new(slot.0, slot.1)]);
            prop_assert_eq!(forward, swapped);
        }

        // disjoint or abutting intervals never conflict
        #[test]
        fn disjoint_intervals_never_overlap(
            slot_start in 0..600i64,
            slot_len in 1..120i64,
            gap in 0..60i64,
            busy_len in 1..120i64,
        ) {
            let slot = (on_day(slot_start), on_day(slot_start + slot_len));
            // busy begins at or after the slot ends
            let busy_start = slot_start + slot_len + gap;
            let busy = BusyInterval::new(on_day(busy_start), on_day(busy_start + busy_len));
            prop_assert!(!overlaps(slot.0, slot.1, &[busy]));
        }

        // no produced slot may overlap any busy interval, and output is
        // sorted with unique starts
        #[test]
        fn computed_slots_are_conflict_free_sorted_and_unique(
            busy_starts in prop::collection::vec(0..1380i64, 0..6),
            step_minutes in prop::sample::select(vec![15i64, 30, 45, 60]),
        ) {
            let date = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap(); // Tuesday
            let busy: Vec<BusyInterval> = busy_starts
                .iter()
                .map(|&m| BusyInterval::new(on_day(m), on_day(m + 30)))
                .collect();
            let rule = AvailabilityRule::new(
                Weekday::Tue,
                vec![TimeWindow::new(
                    NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                )],
                true,
            );

            let slots = compute_free_slots(date, &busy, &[rule], None, step_minutes);

            for slot in &slots {
                prop_assert!(!overlaps(slot.start, slot.end(), &busy));
            }
            for pair in slots.windows(2) {
                prop_assert!(pair[0].start < pair[1].start);
            }
        }

        // pure function: recomputing with identical inputs is identical
        #[test]
        fn recomputation_is_idempotent(
            busy_starts in prop::collection::vec(0..1380i64, 0..6),
        ) {
            let date = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
            let busy: Vec<BusyInterval> = busy_starts
                .iter()
                .map(|&m| BusyInterval::new(on_day(m), on_day(m + 45)))
                .collect();
            let rule = AvailabilityRule::new(
                Weekday::Tue,
                vec![TimeWindow::new(
                    NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
                )],
                true,
            );

            let first = compute_free_slots(date, &busy, &[rule.clone()], None, 30);
            let second = compute_free_slots(date, &busy, &[rule], None, 30);
            prop_assert_eq!(first, second);
        }
    }
}
