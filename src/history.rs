use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use uuid::Uuid;

use crate::channel::recommend_channel;
use crate::engine::Plan;
use crate::error::{PlanError, PlanResult};
use crate::models::{CoverageSlot, HistoryRecord};

const MANUAL_INPUT: &str = "Manual input";

/// Snapshots a plan for the history log. The id is provisional: the store
/// keeps the existing id when the week is already recorded.
pub fn build_record(
    plan: &Plan,
    week_start_date: NaiveDate,
    created_at: DateTime<Utc>,
) -> PlanResult<HistoryRecord> {
    let Some(requirement) = plan.requirement.as_ref() else {
        warn!("refusing to save week {week_start_date}: no parsed data");
        return Err(PlanError::NothingToSave);
    };

    // The recorded channel is filled in even when nothing is left to hire.
    let recommendation = plan.recommendation.clone().unwrap_or_else(|| {
        recommend_channel(requirement.remaining, requirement.days_until_target)
    });

    Ok(HistoryRecord {
        id: Uuid::new_v4(),
        week_start_date,
        target_hires: requirement.target_hires,
        hired: requirement.currently_hired,
        remaining: requirement.remaining,
        referral_bonus: plan.referral_bonus,
        emergency_alert: plan.emergency_alert,
        recommended_platform: recommendation.channel,
        platform_cost: recommendation.cost,
        time_slots: requirement.coverage_slots,
        max_coverage: requirement.max_concurrent_coverage,
        understaffed_slots: requirement.understaffed_slots,
        slot_details: slot_details(&plan.slots),
        created_at,
    })
}

pub fn slot_details(slots: &[CoverageSlot]) -> String {
    if slots.is_empty() {
        return MANUAL_INPUT.to_string();
    }

    slots
        .iter()
        .map(|slot| format!("{}: {}", slot.time, slot.coverage_need))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn saved_message(record: &HistoryRecord) -> String {
    format!(
        "Coverage data saved! Need {} teachers to cover {} time slots (max {} concurrent)",
        record.target_hires, record.time_slots, record.max_coverage
    )
}

/// Display badges for a stored record; `Normal` when no flag is raised.
pub fn badges(record: &HistoryRecord) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if record.referral_bonus {
        badges.push("Referral");
    }
    if record.emergency_alert {
        badges.push("Emergency");
    }
    if badges.is_empty() {
        badges.push("Normal");
    }
    badges
}
