use std::fmt::Write;

use chrono::NaiveDate;

use crate::channel::{channel_description, channel_logic};
use crate::engine::Plan;
use crate::history::badges;
use crate::models::{ChannelUsage, HistoryRecord};
use crate::urgency::{status_details, urgency_label};

pub fn summarize_by_channel(records: &[HistoryRecord]) -> Vec<ChannelUsage> {
    let mut map: std::collections::HashMap<String, (usize, u64)> =
        std::collections::HashMap::new();

    for record in records {
        let entry = map
            .entry(record.recommended_platform.clone())
            .or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(record.target_hires);
    }

    let mut usage: Vec<ChannelUsage> = map
        .into_iter()
        .map(|(channel, (weeks, total_target))| ChannelUsage {
            channel,
            weeks,
            avg_target: if weeks == 0 {
                0.0
            } else {
                total_target as f64 / weeks as f64
            },
        })
        .collect();

    usage.sort_by(|a, b| b.weeks.cmp(&a.weeks).then_with(|| a.channel.cmp(&b.channel)));
    usage
}

/// Text view of one computed plan, in dashboard order.
pub fn render_plan(plan: &Plan, week_start: NaiveDate) -> String {
    let mut output = String::new();
    let days = plan.days_until_target();
    let requirement = plan.requirement.as_ref();

    let _ = writeln!(output, "Week starting {week_start}");
    let _ = writeln!(
        output,
        "Status: {} - {}",
        plan.status.headline(),
        status_details(plan.status, requirement)
    );

    match plan.urgency {
        Some(tier) => {
            let _ = writeln!(output, "Urgency: {} [{}]", urgency_label(days), tier.as_str());
        }
        None => {
            let _ = writeln!(output, "Urgency: -");
        }
    }

    let (slots, target, hired, remaining) = requirement
        .map(|r| (r.coverage_slots, r.target_hires, r.currently_hired, r.remaining))
        .unwrap_or((0, 0, 0, 0));
    let _ = writeln!(output, "Time slots: {slots} ({days} days left)");
    let _ = writeln!(
        output,
        "Target: {target}  Hired: {hired}  Remaining: {remaining}"
    );
    let _ = writeln!(
        output,
        "Referral bonus: {}",
        if plan.referral_bonus { "Active" } else { "Inactive" }
    );
    let _ = writeln!(
        output,
        "Emergency alert: {}",
        if plan.emergency_alert { "ON" } else { "off" }
    );

    let _ = writeln!(output);
    match (&plan.recommendation, requirement) {
        (Some(recommendation), Some(requirement)) => {
            let _ = writeln!(
                output,
                "Recommended channel: {} ({})",
                recommendation.channel,
                channel_description(&recommendation.channel)
            );
            let _ = writeln!(output, "Estimated cost: {}", recommendation.cost);
            let _ = writeln!(output, "Timing: {}", recommendation.reason);
            let _ = writeln!(
                output,
                "Channel logic: {}",
                channel_logic(days, requirement.remaining)
            );
            let _ = writeln!(
                output,
                "Coverage needed: {} teachers max",
                requirement.max_concurrent_coverage
            );
            let _ = writeln!(
                output,
                "Understaffed slots: {} time periods",
                requirement.understaffed_slots
            );
        }
        (None, Some(_)) => {
            let _ = writeln!(output, "No hiring needed");
            if days > 0 {
                let _ = writeln!(output, "{days} days until target week");
            } else {
                let _ = writeln!(output, "Select target date");
            }
        }
        _ => {
            let _ = writeln!(output, "No channel selected. Paste hiring data to compute.");
        }
    }

    if !plan.protocol.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "Operational protocol:");
        for (index, step) in plan.protocol.iter().enumerate() {
            let marker = if step.critical { " [critical]" } else { "" };
            let _ = writeln!(output, "{}. {}{}", index + 1, step.title, marker);
            let _ = writeln!(output, "   {}", step.description);
        }
    }

    output
}

pub fn build_report(generated_on: NaiveDate, records: &[HistoryRecord]) -> String {
    let usage = summarize_by_channel(records);

    let mut output = String::new();
    let _ = writeln!(output, "# Hiring History Report");
    let _ = writeln!(
        output,
        "Generated on {} across {} recorded weeks",
        generated_on,
        records.len()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Channel Mix");

    if usage.is_empty() {
        let _ = writeln!(output, "No history recorded yet.");
    } else {
        for entry in usage.iter() {
            let _ = writeln!(
                output,
                "- {}: {} weeks (avg target {:.1})",
                entry.channel, entry.weeks, entry.avg_target
            );
        }
    }

    let mut recent = records.to_vec();
    recent.sort_by(|a, b| b.week_start_date.cmp(&a.week_start_date));

    let _ = writeln!(output);
    let _ = writeln!(output, "## Weeks");

    if recent.is_empty() {
        let _ = writeln!(output, "No history recorded yet.");
    } else {
        let _ = writeln!(output, "| Week | Target | Hired | Remaining | Channel | Status |");
        let _ = writeln!(output, "|---|---|---|---|---|---|");
        for record in recent.iter() {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} |",
                record.week_start_date,
                record.target_hires,
                record.hired,
                record.remaining,
                record.recommended_platform,
                badges(record).join(", ")
            );
        }
    }

    let emergencies: Vec<&HistoryRecord> =
        recent.iter().filter(|record| record.emergency_alert).collect();
    let _ = writeln!(output);
    let _ = writeln!(output, "## Emergency Weeks");

    if emergencies.is_empty() {
        let _ = writeln!(output, "No emergency weeks recorded.");
    } else {
        for record in emergencies.iter() {
            let _ = writeln!(
                output,
                "- {}: {} open across {} understaffed slots ({})",
                record.week_start_date,
                record.remaining,
                record.understaffed_slots,
                record.slot_details
            );
        }
    }

    output
}
