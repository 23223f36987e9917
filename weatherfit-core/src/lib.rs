//! Presentation core for the WeatherFit home screen widgets.
//!
//! This crate defines:
//! - The snapshot read from the shared widget store and the display model
//!   produced from it
//! - Weather code classification and outfit asset naming
//! - Localized forecast slot labels
//! - Config handling for host tooling
//!
//! Platform widget layers (and `weatherfit-cli`) call [`format`] or a
//! [`Formatter`] once per refresh.

pub mod config;
pub mod error;
pub mod forecast;
pub mod formatter;
pub mod image;
pub mod locale;
pub mod messages;
pub mod model;
pub mod store;
pub mod weather_code;

pub use config::Config;
pub use error::{SnapshotError, StoreError};
pub use formatter::{Clock, FixedClock, Formatter, SystemClock, format};
pub use locale::Locale;
pub use messages::{DEFAULT_MESSAGES, FixedPicker, MessagePicker, RandomPicker};
pub use model::{
    BackgroundKind, ForecastDisplayItem, ForecastItem, OutfitImageSource, PresentationModel,
    WeatherSnapshot,
};
pub use store::{SharedStore, load_store_file, read_snapshot};
pub use weather_code::{Classification, ConditionName, bucket, classify, condition_name};
