use serde::Serialize;

use crate::models::HiringRequirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyTier {
    Early,
    PreHire,
    Urgent,
    Overdue,
}

impl UrgencyTier {
    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyTier::Early => "early",
            UrgencyTier::PreHire => "pre-hire",
            UrgencyTier::Urgent => "urgent",
            UrgencyTier::Overdue => "overdue",
        }
    }
}

pub fn classify_urgency(days_until_target: i64) -> UrgencyTier {
    match days_until_target {
        i64::MIN..=0 => UrgencyTier::Overdue,
        1..=7 => UrgencyTier::Urgent,
        8..=13 => UrgencyTier::PreHire,
        14..=i64::MAX => UrgencyTier::Early,
    }
}

pub fn urgency_label(days_until_target: i64) -> String {
    match classify_urgency(days_until_target) {
        UrgencyTier::Early => format!("📅 EARLY: {days_until_target} days - Facebook only"),
        UrgencyTier::PreHire => {
            format!("⚡ PRE-HIRE: {days_until_target} days - Facebook + Referral")
        }
        UrgencyTier::Urgent => format!("🚨 URGENT: {days_until_target} days - Platform by volume"),
        UrgencyTier::Overdue => "🔥 OVERDUE: Target week arrived!".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    Secured,
    Emergency,
    Planning,
    NoData,
}

impl PlanStatus {
    pub fn headline(self) -> &'static str {
        match self {
            PlanStatus::Secured => "SECURED",
            PlanStatus::Emergency => "EMERGENCY",
            PlanStatus::Planning => "PLANNING",
            PlanStatus::NoData => "NO DATA",
        }
    }
}

/// Dashboard status; a missing requirement reads as no data.
pub fn plan_status(requirement: Option<&HiringRequirement>) -> PlanStatus {
    let Some(requirement) = requirement else {
        return PlanStatus::NoData;
    };
    let days = requirement.days_until_target;
    let remaining = requirement.remaining;
    let total = requirement.target_hires;

    if remaining == 0 && total > 0 {
        PlanStatus::Secured
    } else if days <= 7 && remaining > 0 {
        PlanStatus::Emergency
    } else if remaining > 0 && total > 0 {
        PlanStatus::Planning
    } else {
        PlanStatus::NoData
    }
}

pub fn status_details(status: PlanStatus, requirement: Option<&HiringRequirement>) -> String {
    let (days, remaining, total) = requirement
        .map(|r| (r.days_until_target, r.remaining, r.target_hires))
        .unwrap_or((0, 0, 0));

    match status {
        PlanStatus::Secured => format!("All {total} positions filled!"),
        PlanStatus::Emergency => {
            format!("Only {days} days left! Need {remaining} teachers urgently")
        }
        PlanStatus::Planning => {
            format!("{days} days to hire {remaining} teachers. On track for success")
        }
        PlanStatus::NoData => "Enter hiring data to see status".to_string(),
    }
}
