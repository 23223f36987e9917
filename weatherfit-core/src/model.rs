use serde::{Deserialize, Serialize};

use crate::locale::DEFAULT_LOCALE_CODE;

/// Raw values read from the shared widget store for one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub emoji: Option<String>,
    pub location: Option<String>,
    pub temperature_text: Option<String>,
    pub recommendation: Option<String>,
    pub last_updated_text: Option<String>,
    pub image_path: Option<String>,
    /// Not guaranteed to be in chronological order.
    pub forecast: Vec<ForecastItem>,
    pub locale_code: String,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            emoji: None,
            location: None,
            temperature_text: None,
            recommendation: None,
            last_updated_text: None,
            image_path: None,
            forecast: Vec::new(),
            locale_code: DEFAULT_LOCALE_CODE.to_string(),
        }
    }
}

impl WeatherSnapshot {
    /// Sample entry shown in the widget gallery or when the store can't be read.
    pub fn placeholder() -> Self {
        Self {
            emoji: Some("☀️".to_string()),
            location: Some("Placeholder".to_string()),
            temperature_text: Some("25°C".to_string()),
            recommendation: Some("Shorts and T-shirt".to_string()),
            last_updated_text: Some("Just now".to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastItem {
    /// Local time, `YYYY-MM-DDTHH:mm`.
    pub time: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub weather_code: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundKind {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Default,
}

impl BackgroundKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackgroundKind::Sunny => "sunny",
            BackgroundKind::Cloudy => "cloudy",
            BackgroundKind::Rainy => "rainy",
            BackgroundKind::Snowy => "snowy",
            BackgroundKind::Default => "default",
        }
    }
}

impl std::fmt::Display for BackgroundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OutfitImageSource {
    CachedFile(String),
    FallbackAsset(String),
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDisplayItem {
    pub day_label: String,
    pub time_of_day_label: String,
    pub emoji: String,
    pub temperature_rounded: i32,
}

/// Display-ready values for one widget refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationModel {
    pub header_emoji: String,
    pub location_text: String,
    pub temperature_text: String,
    pub recommendation_text: String,
    pub last_updated_text: String,
    pub background_kind: BackgroundKind,
    pub outfit_image_source: OutfitImageSource,
    pub forecast_slots: Vec<ForecastDisplayItem>,
}
