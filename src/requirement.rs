use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::models::{CoverageSlot, HiringRequirement};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Provisions for the worst single moment of understaffing: the target is the
/// largest positive deficit, not the sum, since one hire covers every slot.
pub fn calculate_requirement(slots: &[CoverageSlot], days_until_target: i64) -> HiringRequirement {
    let positive: Vec<u32> = slots
        .iter()
        .filter(|slot| slot.coverage_need > 0)
        .map(|slot| slot.coverage_need.unsigned_abs())
        .collect();

    let max_coverage = positive.iter().copied().max().unwrap_or(0);

    HiringRequirement {
        target_hires: max_coverage,
        currently_hired: 0,
        remaining: max_coverage,
        coverage_slots: slots.len(),
        max_concurrent_coverage: max_coverage,
        understaffed_slots: positive.len(),
        days_until_target: days_until_target.max(0),
    }
}

/// A requirement typed in by hand rather than derived from a pasted table.
pub fn manual_requirement(hires: u32, days_until_target: i64) -> HiringRequirement {
    HiringRequirement {
        target_hires: hires,
        currently_hired: 0,
        remaining: hires,
        coverage_slots: 0,
        max_concurrent_coverage: hires,
        understaffed_slots: 0,
        days_until_target: days_until_target.max(0),
    }
}

/// Whole days from `now` to midnight UTC of `target`, rounded up and clamped
/// at zero. A missing target counts as zero days.
pub fn days_until(target: Option<NaiveDate>, now: DateTime<Utc>) -> i64 {
    let Some(target) = target else {
        return 0;
    };

    let millis = (target.and_time(NaiveTime::MIN).and_utc() - now).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    }
}

/// The Monday that starts the coming week; today when today is a Monday.
pub fn next_monday(today: NaiveDate) -> NaiveDate {
    let weekday = i64::from(today.weekday().num_days_from_sunday());
    today + Duration::days((1 + 7 - weekday) % 7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn slots(needs: &[i32]) -> Vec<CoverageSlot> {
        needs
            .iter()
            .enumerate()
            .map(|(hour, need)| CoverageSlot {
                time: format!("{}:00:00 AM", hour + 1),
                coverage_need: *need,
            })
            .collect()
    }

    #[test]
    fn target_is_max_not_sum() {
        let requirement = calculate_requirement(&slots(&[3, -2, 7, 1]), 5);
        assert_eq!(requirement.target_hires, 7);
        assert_eq!(requirement.remaining, 7);
        assert_eq!(requirement.max_concurrent_coverage, 7);
        assert_eq!(requirement.understaffed_slots, 3);
        assert_eq!(requirement.coverage_slots, 4);
        assert_eq!(requirement.currently_hired, 0);
        assert_eq!(requirement.days_until_target, 5);
    }

    #[test]
    fn overstaffed_table_needs_no_hires_but_counts_slots() {
        let requirement = calculate_requirement(&slots(&[0, -1, -4]), 10);
        assert_eq!(requirement.target_hires, 0);
        assert_eq!(requirement.remaining, 0);
        assert_eq!(requirement.understaffed_slots, 0);
        assert_eq!(requirement.coverage_slots, 3);
    }

    #[test]
    fn ties_collapse_to_the_value() {
        let requirement = calculate_requirement(&slots(&[4, 4, 2]), 0);
        assert_eq!(requirement.target_hires, 4);
        assert_eq!(requirement.understaffed_slots, 3);
    }

    #[test]
    fn manual_requirement_keeps_invariant() {
        let requirement = manual_requirement(6, -3);
        assert_eq!(requirement.target_hires, 6);
        assert_eq!(requirement.remaining, 6);
        assert_eq!(requirement.max_concurrent_coverage, 6);
        assert_eq!(requirement.days_until_target, 0);
    }

    #[test]
    fn days_until_rounds_up_partial_days() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 15, 30, 0).unwrap();
        let target = NaiveDate::from_ymd_opt(2026, 3, 9);
        // 6 days 8.5 hours away
        assert_eq!(days_until(target, now), 7);

        let midnight = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
        assert_eq!(days_until(target, midnight), 7);
    }

    #[test]
    fn days_until_clamps_past_and_missing_dates() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap();
        assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 3, 9), now), 0);
        assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 3, 10), now), 0);
        assert_eq!(days_until(None, now), 0);
    }

    #[test]
    fn next_monday_from_each_weekday() {
        // 2026-03-02 is a Monday
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(next_monday(monday), monday);

        let wednesday = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(next_monday(wednesday), NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());

        let sunday = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
        assert_eq!(next_monday(sunday), NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
    }
}
