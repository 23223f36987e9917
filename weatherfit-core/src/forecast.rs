//! Forecast decoding and slot labelling.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Deserialize;

use crate::{
    error::SnapshotError,
    locale::{Locale, TimeOfDay},
    model::{ForecastDisplayItem, ForecastItem},
    weather_code::emoji_for,
};

pub const MAX_SLOTS: usize = 3;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
struct ForecastDocument {
    forecast: Vec<ForecastItem>,
}

/// Strict decoder for the `forecast_data` document. Any error rejects the
/// whole document.
pub fn parse_forecast(json: &str) -> Result<Vec<ForecastItem>, SnapshotError> {
    let doc: ForecastDocument =
        serde_json::from_str(json).map_err(SnapshotError::MalformedForecast)?;
    Ok(doc.forecast)
}

pub fn parse_time(time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(time, TIME_FORMAT).ok()
}

/// Chronologically first items, at most [`MAX_SLOTS`]. Slot identity is
/// positional; hours are not inspected here.
pub fn select_slots(forecast: &[ForecastItem]) -> Vec<&ForecastItem> {
    let mut sorted: Vec<&ForecastItem> = forecast.iter().collect();
    // Fixed-width timestamps sort correctly as strings.
    sorted.sort_by(|a, b| a.time.cmp(&b.time));
    sorted.truncate(MAX_SLOTS);
    sorted
}

pub fn day_label(date: NaiveDate, today: NaiveDate, locale: Locale) -> String {
    if date == today {
        locale.today().to_string()
    } else if today.succ_opt() == Some(date) {
        locale.tomorrow().to_string()
    } else {
        locale.weekday_short(date.weekday()).to_string()
    }
}

pub fn display_item(item: &ForecastItem, today: NaiveDate, locale: Locale) -> ForecastDisplayItem {
    let (day_label, time_of_day_label) = match parse_time(&item.time) {
        Some(at) => (
            day_label(at.date(), today, locale),
            locale
                .time_of_day(TimeOfDay::from_hour(at.hour()))
                .to_string(),
        ),
        None => {
            tracing::debug!(time = %item.time, "unparseable forecast timestamp, leaving labels empty");
            (String::new(), String::new())
        }
    };

    ForecastDisplayItem {
        day_label,
        time_of_day_label,
        emoji: emoji_for(item.weather_code).to_string(),
        temperature_rounded: item.temperature.round() as i32,
    }
}

pub fn display_slots(
    forecast: &[ForecastItem],
    today: NaiveDate,
    locale: Locale,
) -> Vec<ForecastDisplayItem> {
    select_slots(forecast)
        .into_iter()
        .map(|item| display_item(item, today, locale))
        .collect()
}
