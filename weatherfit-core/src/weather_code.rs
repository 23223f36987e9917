//! WMO weather code tables.
//!
//! Background kind and emoji are looked up independently: codes 85/86 share
//! the `Snowy` background with 71-77 but carry their own emoji.

use serde::Serialize;

use crate::model::BackgroundKind;

pub const SUNNY_EMOJI: &str = "☀️";
pub const CLOUDY_EMOJI: &str = "☁️";
pub const DRIZZLE_EMOJI: &str = "💧";
pub const RAIN_EMOJI: &str = "🌧";
pub const SNOW_EMOJI: &str = "❄️";
pub const SNOW_SHOWER_EMOJI: &str = "🌨";
pub const STORM_EMOJI: &str = "🌪";
pub const UNKNOWN_EMOJI: &str = "🤔";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub kind: BackgroundKind,
    pub emoji: &'static str,
}

/// Coarse condition used to name bundled outfit assets, e.g. `cloudy_20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionName {
    Clear,
    Cloudy,
    Precipitation,
}

impl ConditionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionName::Clear => "clear",
            ConditionName::Cloudy => "cloudy",
            ConditionName::Precipitation => "precipitation",
        }
    }
}

impl std::fmt::Display for ConditionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn background_for(code: i32) -> BackgroundKind {
    match code {
        0 => BackgroundKind::Sunny,
        1 | 2 | 3 | 45 | 48 => BackgroundKind::Cloudy,
        51 | 53 | 55 | 56 | 57 => BackgroundKind::Rainy,
        61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => BackgroundKind::Rainy,
        71 | 73 | 75 | 77 | 85 | 86 => BackgroundKind::Snowy,
        95 | 96 | 99 => BackgroundKind::Rainy,
        _ => BackgroundKind::Default,
    }
}

pub fn emoji_for(code: i32) -> &'static str {
    match code {
        0 => SUNNY_EMOJI,
        1 | 2 | 3 | 45 | 48 => CLOUDY_EMOJI,
        51 | 53 | 55 | 56 | 57 => DRIZZLE_EMOJI,
        61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => RAIN_EMOJI,
        71 | 73 | 75 | 77 => SNOW_EMOJI,
        85 | 86 => SNOW_SHOWER_EMOJI,
        95 | 96 | 99 => STORM_EMOJI,
        _ => UNKNOWN_EMOJI,
    }
}

pub fn classify(code: i32) -> Classification {
    Classification {
        kind: background_for(code),
        emoji: emoji_for(code),
    }
}

/// Same as [`classify`], with an absent code treated like an unknown one.
pub fn classify_optional(code: Option<i32>) -> Classification {
    match code {
        Some(code) => classify(code),
        None => Classification {
            kind: BackgroundKind::Default,
            emoji: UNKNOWN_EMOJI,
        },
    }
}

pub fn condition_name(code: i32) -> ConditionName {
    match code {
        1 | 2 | 3 | 45 | 48 => ConditionName::Cloudy,
        51..=67 | 80..=82 | 85 | 86 => ConditionName::Precipitation,
        _ => ConditionName::Clear,
    }
}

/// Rounds a temperature to the nearest multiple of ten, ties to the even
/// multiple (15 -> 20, 25 -> 20, -15 -> -20).
///
/// Tie values are rounded to even deliberately: 5 and -5 give 0, 45 gives 40.
pub fn bucket(temperature: f64) -> i32 {
    let tens = (temperature / 10.0).round_ties_even();
    // `as` saturates; -0.0 becomes 0.
    (tens as i32).saturating_mul(10)
}
