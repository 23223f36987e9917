use chrono::{Local, NaiveDate};

use crate::{
    forecast::{display_slots, select_slots},
    image::resolve_outfit_image,
    locale::Locale,
    messages::{MessagePicker, RandomPicker, pick_default_message},
    model::{BackgroundKind, OutfitImageSource, PresentationModel, WeatherSnapshot},
    weather_code::background_for,
};

/// Source of "today" for the Today/Tomorrow day labels.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Turns a [`WeatherSnapshot`] into a [`PresentationModel`].
///
/// Formatting never fails. The only nondeterminism is the default message,
/// which goes through the injected [`MessagePicker`].
#[derive(Debug, Clone)]
pub struct Formatter<C = SystemClock, P = RandomPicker> {
    clock: C,
    picker: P,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            clock: SystemClock,
            picker: RandomPicker::from_entropy(),
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, P: MessagePicker> Formatter<C, P> {
    pub fn with_parts(clock: C, picker: P) -> Self {
        Self { clock, picker }
    }

    pub fn format(&mut self, snapshot: &WeatherSnapshot) -> PresentationModel {
        let locale = Locale::from_code(&snapshot.locale_code);
        let outfit_image_source =
            resolve_outfit_image(snapshot.image_path.as_deref(), &snapshot.forecast);

        let recommendation_text = match snapshot.recommendation.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ if outfit_image_source == OutfitImageSource::None => {
                pick_default_message(&mut self.picker).to_string()
            }
            _ => String::new(),
        };

        let background_kind = select_slots(&snapshot.forecast)
            .first()
            .map(|nearest| background_for(nearest.weather_code))
            .unwrap_or(BackgroundKind::Default);

        PresentationModel {
            header_emoji: snapshot.emoji.clone().unwrap_or_default(),
            location_text: snapshot.location.clone().unwrap_or_default(),
            temperature_text: snapshot.temperature_text.clone().unwrap_or_default(),
            recommendation_text,
            last_updated_text: snapshot.last_updated_text.clone().unwrap_or_default(),
            background_kind,
            outfit_image_source,
            forecast_slots: display_slots(&snapshot.forecast, self.clock.today(), locale),
        }
    }
}

/// Formats with the system clock and a freshly seeded random picker.
pub fn format(snapshot: &WeatherSnapshot) -> PresentationModel {
    Formatter::new().format(snapshot)
}
