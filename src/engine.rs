//! The pure recompute pipeline: pasted text and a day count in, every
//! dashboard value out. Feeding the same input always yields the same plan.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use serde::Serialize;

use crate::channel::{emergency_alert_active, recommend_channel, referral_bonus_active};
use crate::models::{ChannelRecommendation, CoverageSlot, HiringRequirement, ProtocolStep};
use crate::parser::parse_slots;
use crate::protocol::protocol_steps;
use crate::requirement::{calculate_requirement, days_until};
use crate::urgency::{classify_urgency, plan_status, PlanStatus, UrgencyTier};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub slots: Vec<CoverageSlot>,
    pub requirement: Option<HiringRequirement>,
    pub status: PlanStatus,
    pub urgency: Option<UrgencyTier>,
    pub recommendation: Option<ChannelRecommendation>,
    pub referral_bonus: bool,
    pub emergency_alert: bool,
    pub protocol: Vec<ProtocolStep>,
}

impl Plan {
    pub fn days_until_target(&self) -> i64 {
        self.requirement
            .as_ref()
            .map_or(0, |requirement| requirement.days_until_target)
    }
}

pub fn compute(raw: &str, target: Option<NaiveDate>, now: DateTime<Utc>) -> Plan {
    compute_for_days(raw, days_until(target, now))
}

pub fn compute_for_days(raw: &str, days_until_target: i64) -> Plan {
    let slots = parse_slots(raw);
    debug!("parsed {} coverage slots", slots.len());

    if slots.is_empty() {
        return assess(slots, None);
    }

    let requirement = calculate_requirement(&slots, days_until_target);
    assess(slots, Some(requirement))
}

/// Derives every decision from an already-computed requirement. Channel and
/// urgency are only surfaced while hires remain open.
pub fn assess(slots: Vec<CoverageSlot>, requirement: Option<HiringRequirement>) -> Plan {
    let status = plan_status(requirement.as_ref());

    let Some((days, remaining)) = requirement
        .as_ref()
        .map(|req| (req.days_until_target, req.remaining))
    else {
        return Plan {
            slots,
            requirement,
            status,
            urgency: None,
            recommendation: None,
            referral_bonus: false,
            emergency_alert: false,
            protocol: Vec::new(),
        };
    };

    let emergency_alert = emergency_alert_active(remaining, days);
    let open = remaining > 0;

    Plan {
        urgency: open.then(|| classify_urgency(days)),
        recommendation: open.then(|| recommend_channel(remaining, days)),
        referral_bonus: referral_bonus_active(remaining, days),
        emergency_alert,
        protocol: if emergency_alert {
            protocol_steps(days)
        } else {
            Vec::new()
        },
        status,
        slots,
        requirement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelUrgency;
    use crate::requirement::manual_requirement;
    use chrono::TimeZone;

    const TABLE: &str = "Time\tHiring Need\n\
                         9:00:00 AM\t3\n\
                         10:00:00 AM\t-2\n\
                         11:00:00 AM\t7\n\
                         12:00:00 PM\t1\n";

    #[test]
    fn empty_input_is_no_data() {
        let plan = compute_for_days("", 5);
        assert!(plan.requirement.is_none());
        assert_eq!(plan.status, PlanStatus::NoData);
        assert!(plan.recommendation.is_none());
        assert!(plan.urgency.is_none());
        assert!(!plan.referral_bonus);
        assert!(!plan.emergency_alert);
        assert!(plan.protocol.is_empty());
    }

    #[test]
    fn overstaffed_table_surfaces_nothing() {
        let plan = compute_for_days("9:00:00 AM -1\n10:00:00 AM 0", 3);
        let requirement = plan.requirement.as_ref().unwrap();
        assert_eq!(requirement.target_hires, 0);
        assert_eq!(requirement.remaining, 0);
        assert_eq!(requirement.coverage_slots, 2);
        assert!(plan.urgency.is_none());
        assert!(plan.recommendation.is_none());
        assert!(!plan.emergency_alert);
        assert!(plan.protocol.is_empty());
    }

    #[test]
    fn urgent_table_raises_emergency_protocol() {
        let plan = compute_for_days(TABLE, 2);
        let requirement = plan.requirement.as_ref().unwrap();
        assert_eq!(requirement.target_hires, 7);
        assert_eq!(requirement.understaffed_slots, 3);
        assert_eq!(plan.status, PlanStatus::Emergency);
        assert_eq!(plan.urgency, Some(UrgencyTier::Urgent));

        let recommendation = plan.recommendation.as_ref().unwrap();
        assert_eq!(recommendation.channel, "Indeed");
        assert_eq!(recommendation.urgency, ChannelUrgency::High);

        assert!(plan.referral_bonus);
        assert!(plan.emergency_alert);
        assert_eq!(plan.protocol, protocol_steps(2));
    }

    #[test]
    fn pre_hire_window_plans_without_protocol() {
        let plan = compute_for_days("9:00:00 AM 1", 9);
        assert_eq!(plan.status, PlanStatus::Planning);
        assert_eq!(plan.urgency, Some(UrgencyTier::PreHire));
        assert!(plan.referral_bonus);
        assert!(!plan.emergency_alert);
        assert!(plan.protocol.is_empty());
    }

    #[test]
    fn recompute_is_idempotent() {
        assert_eq!(compute_for_days(TABLE, 4), compute_for_days(TABLE, 4));
    }

    #[test]
    fn compute_derives_days_from_target_date() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap();
        let plan = compute(TABLE, NaiveDate::from_ymd_opt(2026, 3, 16), now);
        assert_eq!(plan.days_until_target(), 14);
        assert_eq!(plan.urgency, Some(UrgencyTier::Early));

        let undated = compute(TABLE, None, now);
        assert_eq!(undated.days_until_target(), 0);
        assert_eq!(undated.urgency, Some(UrgencyTier::Overdue));
    }

    #[test]
    fn assess_accepts_manual_requirement() {
        let plan = assess(Vec::new(), Some(manual_requirement(12, 1)));
        assert!(plan.slots.is_empty());
        assert_eq!(plan.recommendation.unwrap().channel, "LinkedIn");
        assert_eq!(plan.protocol, protocol_steps(1));
    }
}
