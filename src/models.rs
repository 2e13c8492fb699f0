use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSlot {
    pub time: String,
    pub coverage_need: i32,
}

/// Hiring summary reduced from one parse. `currently_hired` is not tracked,
/// so `target_hires`, `max_concurrent_coverage` and `remaining` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiringRequirement {
    pub target_hires: u32,
    pub currently_hired: u32,
    pub remaining: u32,
    pub coverage_slots: usize,
    pub max_concurrent_coverage: u32,
    pub understaffed_slots: usize,
    pub days_until_target: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelUrgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelRecommendation {
    pub channel: String,
    pub cost: String,
    pub reason: String,
    pub urgency: ChannelUrgency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolStep {
    pub title: &'static str,
    pub description: &'static str,
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub cost: String,
    pub min_hires: u32,
    /// `None` means the band is open-ended.
    pub max_hires: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub week_start_date: NaiveDate,
    pub target_hires: u32,
    pub hired: u32,
    pub remaining: u32,
    pub referral_bonus: bool,
    pub emergency_alert: bool,
    pub recommended_platform: String,
    pub platform_cost: String,
    pub time_slots: usize,
    pub max_coverage: u32,
    pub understaffed_slots: usize,
    pub slot_details: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ChannelUsage {
    pub channel: String,
    pub weeks: usize,
    pub avg_target: f64,
}
