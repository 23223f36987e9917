//! Read-only view over the key/value area the main app shares with its
//! widgets (SharedPreferences on Android, app-group UserDefaults on Apple).

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{SnapshotError, StoreError},
    forecast::parse_forecast,
    locale::DEFAULT_LOCALE_CODE,
    model::WeatherSnapshot,
};

pub const KEY_EMOJI: &str = "text_emoji";
pub const KEY_LOCATION: &str = "text_location";
pub const KEY_TEMPERATURE: &str = "text_temperature";
pub const KEY_RECOMMENDATION: &str = "text_recommendation";
pub const KEY_LAST_UPDATED: &str = "text_last_updated";
pub const KEY_IMAGE: &str = "image_weather";
pub const KEY_FORECAST: &str = "forecast_data";
pub const KEY_LANGUAGE: &str = "selected_language";
/// Single JSON blob written by the first iOS widget revision.
pub const KEY_LEGACY_BLOB: &str = "weatherData";

pub trait SharedStore {
    fn get_string(&self, key: &str) -> Option<String>;
}

impl SharedStore for HashMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl SharedStore for BTreeMap<String, String> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyWeatherData {
    emoji: Option<String>,
    location: Option<String>,
    temperature: Option<String>,
    recommendation: Option<String>,
    last_updated: Option<String>,
    image_path: Option<String>,
}

fn parse_legacy_blob(json: &str) -> Result<LegacyWeatherData, SnapshotError> {
    serde_json::from_str(json).map_err(SnapshotError::MalformedLegacyBlob)
}

/// Builds a fresh snapshot from the store. Never fails: malformed values are
/// logged and treated as absent.
pub fn read_snapshot(store: &impl SharedStore) -> WeatherSnapshot {
    let legacy = store
        .get_string(KEY_LEGACY_BLOB)
        .map(|blob| {
            parse_legacy_blob(&blob).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring legacy weather blob");
                LegacyWeatherData::default()
            })
        })
        .unwrap_or_default();

    let forecast = match store.get_string(KEY_FORECAST) {
        Some(json) => parse_forecast(&json).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "treating forecast as empty");
            Vec::new()
        }),
        None => Vec::new(),
    };

    let locale_code = store
        .get_string(KEY_LANGUAGE)
        .filter(|code| !code.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOCALE_CODE.to_string());

    WeatherSnapshot {
        emoji: store.get_string(KEY_EMOJI).or(legacy.emoji),
        location: store.get_string(KEY_LOCATION).or(legacy.location),
        temperature_text: store.get_string(KEY_TEMPERATURE).or(legacy.temperature),
        recommendation: store.get_string(KEY_RECOMMENDATION).or(legacy.recommendation),
        last_updated_text: store.get_string(KEY_LAST_UPDATED).or(legacy.last_updated),
        image_path: store.get_string(KEY_IMAGE).or(legacy.image_path),
        forecast,
        locale_code,
    }
}

/// Loads a JSON object dump of the store. Strings are kept as-is, `null`s are
/// dropped and anything else is kept as compact JSON text.
pub fn load_store_file(path: &Path) -> Result<HashMap<String, String>, StoreError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(entries) = value else {
        return Err(StoreError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let store = entries
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect();

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_store_gives_empty_snapshot() {
        let snapshot = read_snapshot(&HashMap::<String, String>::new());
        assert_eq!(snapshot, WeatherSnapshot::default());
    }

    #[test]
    fn flat_keys_map_onto_fields() {
        let s = store(&[
            (KEY_EMOJI, "🌧"),
            (KEY_LOCATION, "Lviv"),
            (KEY_TEMPERATURE, "7°C"),
            (KEY_RECOMMENDATION, "Take an umbrella"),
            (KEY_LAST_UPDATED, "10:42"),
            (KEY_IMAGE, "/tmp/outfit.png"),
            (KEY_LANGUAGE, "uk"),
            (
                KEY_FORECAST,
                r#"{"forecast":[{"time":"2024-01-02T09:00","temperature":7.2,"weather_code":61}]}"#,
            ),
        ]);

        let snapshot = read_snapshot(&s);
        assert_eq!(snapshot.emoji.as_deref(), Some("🌧"));
        assert_eq!(snapshot.location.as_deref(), Some("Lviv"));
        assert_eq!(snapshot.temperature_text.as_deref(), Some("7°C"));
        assert_eq!(snapshot.recommendation.as_deref(), Some("Take an umbrella"));
        assert_eq!(snapshot.last_updated_text.as_deref(), Some("10:42"));
        assert_eq!(snapshot.image_path.as_deref(), Some("/tmp/outfit.png"));
        assert_eq!(snapshot.locale_code, "uk");
        assert_eq!(snapshot.forecast.len(), 1);
        assert_eq!(snapshot.forecast[0].weather_code, 61);
    }

    #[test]
    fn malformed_forecast_is_dropped_entirely() {
        let s = store(&[(KEY_FORECAST, r#"{"forecast":[{"time":"x"}]}"#)]);
        assert!(read_snapshot(&s).forecast.is_empty());
    }

    #[test]
    fn blank_language_defaults_to_english() {
        let s = store(&[(KEY_LANGUAGE, "  ")]);
        assert_eq!(read_snapshot(&s).locale_code, "en");
    }

    #[test]
    fn legacy_blob_fills_gaps_but_flat_keys_win() {
        let s = store(&[
            (KEY_LOCATION, "Kyiv"),
            (
                KEY_LEGACY_BLOB,
                r#"{"emoji":"☁️","location":"Old","lastUpdated":"yesterday","imagePath":null}"#,
            ),
        ]);

        let snapshot = read_snapshot(&s);
        assert_eq!(snapshot.location.as_deref(), Some("Kyiv"));
        assert_eq!(snapshot.emoji.as_deref(), Some("☁️"));
        assert_eq!(snapshot.last_updated_text.as_deref(), Some("yesterday"));
        assert!(snapshot.image_path.is_none());
    }

    #[test]
    fn malformed_legacy_blob_is_ignored() {
        let s = store(&[(KEY_LEGACY_BLOB, "{oops"), (KEY_EMOJI, "☀️")]);
        let snapshot = read_snapshot(&s);
        assert_eq!(snapshot.emoji.as_deref(), Some("☀️"));
        assert!(snapshot.location.is_none());
    }

    #[test]
    fn btree_store_works_too() {
        let mut s = BTreeMap::new();
        s.insert(KEY_LOCATION.to_string(), "Warsaw".to_string());
        assert_eq!(read_snapshot(&s).location.as_deref(), Some("Warsaw"));
    }

    #[test]
    fn load_store_file_flattens_values() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("store.json");
        fs::write(
            &path,
            r#"{
                "text_location": "Berlin",
                "text_emoji": null,
                "forecast_data": {"forecast": []}
            }"#,
        )
        .expect("write store");

        let loaded = load_store_file(&path).expect("load should succeed");
        assert_eq!(loaded.get("text_location").map(String::as_str), Some("Berlin"));
        assert!(!loaded.contains_key("text_emoji"));
        assert_eq!(
            loaded.get("forecast_data").map(String::as_str),
            Some(r#"{"forecast":[]}"#)
        );
    }

    #[test]
    fn load_store_file_errors() {
        let dir = tempfile::tempdir().expect("temp dir");

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_store_file(&missing),
            Err(StoreError::Read { .. })
        ));

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "not json").expect("write");
        assert!(matches!(
            load_store_file(&garbage),
            Err(StoreError::Parse { .. })
        ));

        let array = dir.path().join("array.json");
        fs::write(&array, "[1, 2]").expect("write");
        let err = load_store_file(&array).unwrap_err();
        assert!(err.to_string().contains("must contain a JSON object"));
    }
}
