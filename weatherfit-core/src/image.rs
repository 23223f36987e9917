//! Outfit image resolution: cached photo first, then a bundled asset named
//! after the first forecast item.

use std::path::Path;

use crate::{
    model::{ForecastItem, OutfitImageSource},
    weather_code::{bucket, condition_name},
};

pub fn resolve_outfit_image(image_path: Option<&str>, forecast: &[ForecastItem]) -> OutfitImageSource {
    if let Some(path) = image_path.filter(|p| !p.is_empty()) {
        if is_readable_image(Path::new(path)) {
            return OutfitImageSource::CachedFile(path.to_string());
        }
        tracing::debug!(path, "cached outfit image unavailable, falling back");
    }

    match forecast.first() {
        Some(first) => OutfitImageSource::FallbackAsset(fallback_asset_name(first)),
        None => OutfitImageSource::None,
    }
}

/// `"{condition}_{bucket}"`, e.g. `cloudy_20`. Whether the asset is bundled is
/// for the renderer to find out.
pub fn fallback_asset_name(item: &ForecastItem) -> String {
    format!(
        "{}_{}",
        condition_name(item.weather_code),
        bucket(item.temperature)
    )
}

/// True when the file opens and decodes fully as a raster image. A truncated
/// or half-written photo fails here and falls through to the next tier.
pub fn is_readable_image(path: &Path) -> bool {
    match decode_image(path) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "cached image not decodable");
            false
        }
    }
}

fn decode_image(path: &Path) -> Result<(), ::image::ImageError> {
    ::image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    Ok(())
}
