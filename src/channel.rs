use crate::models::{Channel, ChannelRecommendation, ChannelUrgency};

pub fn default_catalog() -> Vec<Channel> {
    vec![
        Channel {
            name: "Facebook".to_string(),
            cost: "₱500".to_string(),
            min_hires: 1,
            max_hires: Some(5),
        },
        Channel {
            name: "Indeed".to_string(),
            cost: "$4/day".to_string(),
            min_hires: 6,
            max_hires: Some(7),
        },
        Channel {
            name: "LinkedIn".to_string(),
            cost: "₱2,566.33 total".to_string(),
            min_hires: 8,
            max_hires: Some(9),
        },
        Channel {
            name: "Jobstreet".to_string(),
            cost: "₱5,000+".to_string(),
            min_hires: 10,
            max_hires: None,
        },
    ]
}

/// Index into the catalog when hiring inside the last week, by volume.
fn volume_tier(remaining: u32) -> usize {
    match remaining {
        0..=2 => 0,
        3..=8 => 1,
        9..=19 => 2,
        20..=u32::MAX => 3,
    }
}

/// Time dominates volume: outside the last week the cheapest channel wins.
pub fn recommend_channel(remaining: u32, days_until_target: i64) -> ChannelRecommendation {
    let catalog = default_catalog();

    let (tier, reason, urgency) = match days_until_target {
        14..=i64::MAX => (
            0,
            format!("{days_until_target} days until target week - Use Facebook for early planning"),
            ChannelUrgency::Low,
        ),
        8..=13 => (
            0,
            format!(
                "{days_until_target} days until target week - Facebook + Referral Bonus activated"
            ),
            ChannelUrgency::Medium,
        ),
        i64::MIN..=7 => (
            volume_tier(remaining),
            format!("URGENT: {days_until_target} days left, {remaining} hires needed"),
            ChannelUrgency::High,
        ),
    };

    let channel = &catalog[tier];
    ChannelRecommendation {
        channel: channel.name.clone(),
        cost: channel.cost.clone(),
        reason,
        urgency,
    }
}

/// Either a large need or the pre-hire window switches the referral bonus on.
pub fn referral_bonus_active(remaining: u32, days_until_target: i64) -> bool {
    remaining >= 5 || (8..=13).contains(&days_until_target)
}

pub fn emergency_alert_active(remaining: u32, days_until_target: i64) -> bool {
    days_until_target <= 7 && remaining > 0
}

pub fn channel_logic(days_until_target: i64, remaining: u32) -> String {
    match days_until_target {
        14..=i64::MAX => format!("Early planning phase ({days_until_target} days) - Facebook only"),
        8..=13 => format!(
            "Pre-hiring phase ({days_until_target} days) - Facebook + Referral activated"
        ),
        i64::MIN..=7 => {
            let band = match volume_tier(remaining) {
                0 => "1-2 needed → Facebook",
                1 => "3-8 needed → Indeed",
                2 => "9-19 needed → LinkedIn",
                _ => "20+ needed → Jobstreet",
            };
            format!("URGENT HIRING ({days_until_target} days left) - Platform by need: {band}")
        }
    }
}

pub fn channel_description(name: &str) -> &'static str {
    match name {
        "Facebook" => "Small-scale hiring with local targeting",
        "Indeed" => "Medium-scale hiring with professional reach",
        "LinkedIn" => "Professional networking and quality candidates",
        "Jobstreet" => "Large-scale hiring across multiple regions",
        _ => "General hiring needs",
    }
}

/// Catalog band whose hire range contains `hires`; past the last band, the
/// last band.
pub fn channel_for_volume(catalog: &[Channel], hires: u32) -> Option<&Channel> {
    catalog
        .iter()
        .find(|channel| {
            hires >= channel.min_hires && channel.max_hires.map_or(true, |max| hires <= max)
        })
        .or_else(|| catalog.last())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_and_pre_hire_ignore_volume() {
        let early = recommend_channel(40, 21);
        assert_eq!(early.channel, "Facebook");
        assert_eq!(early.urgency, ChannelUrgency::Low);
        assert_eq!(
            early.reason,
            "21 days until target week - Use Facebook for early planning"
        );

        let pre_hire = recommend_channel(40, 8);
        assert_eq!(pre_hire.channel, "Facebook");
        assert_eq!(pre_hire.urgency, ChannelUrgency::Medium);
        assert!(pre_hire.reason.contains("Referral Bonus activated"));
    }

    #[test]
    fn last_week_selects_by_volume() {
        assert_eq!(recommend_channel(2, 5).channel, "Facebook");
        assert_eq!(recommend_channel(3, 5).channel, "Indeed");
        assert_eq!(recommend_channel(8, 5).channel, "Indeed");
        assert_eq!(recommend_channel(9, 0).channel, "LinkedIn");
        assert_eq!(recommend_channel(19, 1).channel, "LinkedIn");
        assert_eq!(recommend_channel(20, 1).channel, "Jobstreet");

        let urgent = recommend_channel(20, 1);
        assert_eq!(urgent.urgency, ChannelUrgency::High);
        assert_eq!(urgent.reason, "URGENT: 1 days left, 20 hires needed");
        assert_eq!(urgent.cost, "₱5,000+");
    }

    #[test]
    fn referral_is_volume_or_window() {
        assert!(referral_bonus_active(10, 20));
        assert!(referral_bonus_active(5, 0));
        assert!(referral_bonus_active(1, 9));
        assert!(referral_bonus_active(0, 13));
        assert!(!referral_bonus_active(1, 20));
        assert!(!referral_bonus_active(4, 7));
        assert!(!referral_bonus_active(4, 14));
    }

    #[test]
    fn emergency_needs_open_positions_inside_a_week() {
        assert!(emergency_alert_active(1, 7));
        assert!(emergency_alert_active(3, 0));
        assert!(!emergency_alert_active(1, 8));
        assert!(!emergency_alert_active(0, 0));
    }

    #[test]
    fn logic_text_names_the_band() {
        assert_eq!(
            channel_logic(4, 12),
            "URGENT HIRING (4 days left) - Platform by need: 9-19 needed → LinkedIn"
        );
        assert_eq!(
            channel_logic(15, 12),
            "Early planning phase (15 days) - Facebook only"
        );
        assert_eq!(channel_description("Indeed"), "Medium-scale hiring with professional reach");
        assert_eq!(channel_description("Craigslist"), "General hiring needs");
    }

    #[test]
    fn catalog_bands_cover_all_volumes() {
        let catalog = default_catalog();
        let name = |hires| channel_for_volume(&catalog, hires).map(|c| c.name.as_str());
        assert_eq!(name(1), Some("Facebook"));
        assert_eq!(name(5), Some("Facebook"));
        assert_eq!(name(6), Some("Indeed"));
        assert_eq!(name(9), Some("LinkedIn"));
        assert_eq!(name(10), Some("Jobstreet"));
        assert_eq!(name(5000), Some("Jobstreet"));
        assert_eq!(name(0), Some("Jobstreet"));
        assert_eq!(channel_for_volume(&[], 3), None);
    }
}
