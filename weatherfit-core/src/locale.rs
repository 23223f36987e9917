//! Localized day and time-of-day labels.
//!
//! The locale is always passed in explicitly; nothing here reads or sets a
//! process-wide default.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCALE_CODE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Uk,
    Pl,
    De,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Lunch,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Lunch,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

impl Locale {
    /// Parses a BCP-47-like tag by its primary subtag. Unknown tags fall back
    /// to English.
    pub fn from_code(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "uk" => Locale::Uk,
            "pl" => Locale::Pl,
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Uk => "uk",
            Locale::Pl => "pl",
            Locale::De => "de",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Uk, Locale::Pl, Locale::De]
    }

    pub fn today(&self) -> &'static str {
        match self {
            Locale::En => "Today",
            Locale::Uk => "Сьогодні",
            Locale::Pl => "Dzisiaj",
            Locale::De => "Heute",
        }
    }

    pub fn tomorrow(&self) -> &'static str {
        match self {
            Locale::En => "Tomorrow",
            Locale::Uk => "Завтра",
            Locale::Pl => "Jutro",
            Locale::De => "Morgen",
        }
    }

    pub fn time_of_day(&self, period: TimeOfDay) -> &'static str {
        use TimeOfDay::*;

        match (self, period) {
            (Locale::En, Morning) => "Morning",
            (Locale::En, Lunch) => "Lunch",
            (Locale::En, Evening) => "Evening",
            (Locale::En, Night) => "Night",
            (Locale::Uk, Morning) => "Ранок",
            (Locale::Uk, Lunch) => "Обід",
            (Locale::Uk, Evening) => "Вечір",
            (Locale::Uk, Night) => "Ніч",
            (Locale::Pl, Morning) => "Poranek",
            (Locale::Pl, Lunch) => "Południe",
            (Locale::Pl, Evening) => "Wieczór",
            (Locale::Pl, Night) => "Noc",
            (Locale::De, Morning) => "Morgen",
            (Locale::De, Lunch) => "Mittag",
            (Locale::De, Evening) => "Abend",
            (Locale::De, Night) => "Nacht",
        }
    }

    pub fn weekday_short(&self, weekday: Weekday) -> &'static str {
        let names: [&'static str; 7] = match self {
            Locale::En => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            Locale::Uk => ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Нд"],
            Locale::Pl => ["pon.", "wt.", "śr.", "czw.", "pt.", "sob.", "niedz."],
            Locale::De => ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
        };
        names[weekday.num_days_from_monday() as usize]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_primary_subtag() {
        assert_eq!(Locale::from_code("uk"), Locale::Uk);
        assert_eq!(Locale::from_code("uk-UA"), Locale::Uk);
        assert_eq!(Locale::from_code("PL_pl"), Locale::Pl);
        assert_eq!(Locale::from_code(" de "), Locale::De);
    }

    #[test]
    fn unknown_or_empty_falls_back_to_english() {
        assert_eq!(Locale::from_code(""), Locale::En);
        assert_eq!(Locale::from_code("fr"), Locale::En);
        assert_eq!(Locale::from_code("en-GB"), Locale::En);
    }

    #[test]
    fn code_roundtrip() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), *locale);
        }
    }

    #[test]
    fn hour_boundaries() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Lunch);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Lunch);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(22), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn localized_labels() {
        assert_eq!(Locale::Uk.today(), "Сьогодні");
        assert_eq!(Locale::Pl.tomorrow(), "Jutro");
        assert_eq!(Locale::De.time_of_day(TimeOfDay::Lunch), "Mittag");
        assert_eq!(Locale::Pl.time_of_day(TimeOfDay::Evening), "Wieczór");
        assert_eq!(Locale::En.time_of_day(TimeOfDay::Night), "Night");
    }

    #[test]
    fn weekday_abbreviations() {
        assert_eq!(Locale::En.weekday_short(Weekday::Wed), "Wed");
        assert_eq!(Locale::Uk.weekday_short(Weekday::Sun), "Нд");
        assert_eq!(Locale::De.weekday_short(Weekday::Mon), "Mo.");
        assert_eq!(Locale::Pl.weekday_short(Weekday::Wed), "śr.");
    }
}
