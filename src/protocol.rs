use crate::models::ProtocolStep;

const fn step(title: &'static str, description: &'static str, critical: bool) -> ProtocolStep {
    ProtocolStep {
        title,
        description,
        critical,
    }
}

const IMMEDIATE: [ProtocolStep; 3] = [
    step(
        "🚨 IMMEDIATE: Deploy Senior Staff",
        "Steven and Mr. Bruce step in to cover critical classes. All administrative duties redirected.",
        true,
    ),
    step(
        "📞 Emergency Teacher Pool",
        "Contact all previous teachers, part-time staff, and retired teachers for immediate availability.",
        true,
    ),
    step(
        "📚 Combine Classes",
        "Merge smaller groups, increase class sizes temporarily to reduce teacher requirements.",
        false,
    ),
];

const ONE_DAY: [ProtocolStep; 3] = [
    step(
        "🚨 CRITICAL: Senior Management Deployment",
        "Steven and Mr. Bruce prepare to teach tomorrow. Clear all administrative schedules.",
        true,
    ),
    step(
        "📋 Front Desk Coverage",
        "Administrative staff on standby to cover classes. Prepare lesson plans for non-teaching staff.",
        true,
    ),
    step(
        "🔄 Class Restructuring",
        "Finalize class combinations and schedule adjustments to minimize teacher requirements.",
        false,
    ),
];

const TWO_DAYS: [ProtocolStep; 3] = [
    step(
        "👥 Front Desk Teacher Activation",
        "Administrative staff with teaching credentials step in to cover classes. Prepare teaching materials.",
        true,
    ),
    step(
        "📞 Final Hiring Push",
        "Personal outreach to all candidates. Offer immediate start bonuses and expedited processing.",
        false,
    ),
    step(
        "📚 Emergency Lesson Prep",
        "Prepare simplified lesson plans that any staff member can execute effectively.",
        false,
    ),
];

const THREE_DAYS: [ProtocolStep; 3] = [
    step(
        "📈 Increase Group Numbers",
        "Consolidate smaller classes into larger groups. Adjust classroom capacity and seating arrangements.",
        false,
    ),
    step(
        "🎯 Intensive Recruitment",
        "Daily candidate calls, same-day interviews, immediate decision making for qualified candidates.",
        false,
    ),
    step(
        "📋 Staff Cross-Training",
        "Brief administrative staff on emergency teaching procedures and classroom management.",
        false,
    ),
];

const GENERAL: [ProtocolStep; 3] = [
    step(
        "🚨 All-Platform Recruitment",
        "Post on ALL platforms simultaneously. Increase budget allocation for urgent hiring.",
        false,
    ),
    step(
        "💰 Emergency Incentives",
        "Activate sign-on bonuses, referral rewards, and expedited start incentives.",
        false,
    ),
    step(
        "📞 Network Activation",
        "Contact personal networks, partner schools, and freelance teacher databases.",
        false,
    ),
];

/// Mitigation steps for the day bucket, most urgent first. Nothing past a week.
pub fn protocol_steps(days_until_target: i64) -> Vec<ProtocolStep> {
    let steps: &[ProtocolStep] = match days_until_target {
        i64::MIN..=0 => &IMMEDIATE,
        1 => &ONE_DAY,
        2 => &TWO_DAYS,
        3 => &THREE_DAYS,
        4..=7 => &GENERAL,
        8..=i64::MAX => &[],
    };
    steps.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn critical_flags(days: i64) -> Vec<bool> {
        protocol_steps(days).iter().map(|s| s.critical).collect()
    }

    #[test]
    fn beyond_a_week_is_empty() {
        assert!(protocol_steps(8).is_empty());
        assert!(protocol_steps(30).is_empty());
    }

    #[test]
    fn general_set_covers_four_to_seven() {
        for days in 4..=7 {
            let steps = protocol_steps(days);
            assert_eq!(steps.len(), 3);
            assert_eq!(steps[0].title, "🚨 All-Platform Recruitment");
            assert!(steps.iter().all(|s| !s.critical));
        }
    }

    #[test]
    fn immediate_set_for_zero_and_below() {
        assert_eq!(protocol_steps(0), protocol_steps(-5));
        assert_eq!(protocol_steps(0)[0].title, "🚨 IMMEDIATE: Deploy Senior Staff");
        assert_eq!(critical_flags(0), vec![true, true, false]);
    }

    #[test]
    fn exact_day_buckets_carry_fixed_flags() {
        assert_eq!(critical_flags(1), vec![true, true, false]);
        assert_eq!(critical_flags(2), vec![true, false, false]);
        assert_eq!(critical_flags(3), vec![false, false, false]);
        assert_eq!(protocol_steps(1)[1].title, "📋 Front Desk Coverage");
        assert_eq!(protocol_steps(2)[0].title, "👥 Front Desk Teacher Activation");
        assert_eq!(protocol_steps(3)[0].title, "📈 Increase Group Numbers");
    }
}
