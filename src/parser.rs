use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::models::CoverageSlot;

static TIME_PATTERN: OnceLock<Regex> = OnceLock::new();
static NEED_PATTERN: OnceLock<Regex> = OnceLock::new();

fn time_pattern() -> &'static Regex {
    TIME_PATTERN.get_or_init(|| {
        Regex::new(r"([0-9]{1,2}:[0-9]{2}:[0-9]{2}\s+[AP]M)").expect("time pattern is valid")
    })
}

fn need_pattern() -> &'static Regex {
    NEED_PATTERN.get_or_init(|| Regex::new(r"(-?[0-9]+)$").expect("need pattern is valid"))
}

/// Header rows carry this marker (case-insensitive) and never hold data.
const HEADER_MARKER: &str = "hiring need";

/// Turns a pasted coverage table into slots, one per recognized line.
///
/// Lines without both a `H:MM:SS AM|PM` time and a trailing signed integer
/// are dropped without error.
pub fn parse_slots(raw: &str) -> Vec<CoverageSlot> {
    let text = raw.trim();
    if text.is_empty() {
        return Vec::new();
    }

    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.to_lowercase().contains(HEADER_MARKER))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<CoverageSlot> {
    let time = time_pattern().captures(line)?.get(1)?.as_str();
    let need = need_pattern().captures(line)?.get(1)?.as_str();

    match need.parse::<i32>() {
        Ok(coverage_need) => Some(CoverageSlot {
            time: time.to_string(),
            coverage_need,
        }),
        Err(err) => {
            debug!("skipping row {line:?}: {err}");
            None
        }
    }
}
