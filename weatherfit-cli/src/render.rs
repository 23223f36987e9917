use weatherfit_core::{OutfitImageSource, PresentationModel};

/// Plain-text rendition of the widget, top to bottom.
pub fn render_text(model: &PresentationModel) -> String {
    let image = match &model.outfit_image_source {
        OutfitImageSource::CachedFile(path) => format!("cached file {path}"),
        OutfitImageSource::FallbackAsset(name) => format!("asset {name}"),
        OutfitImageSource::None => "none".to_string(),
    };

    let mut lines = vec![
        format!("{}  {}", model.header_emoji, model.location_text),
        model.temperature_text.clone(),
        format!("Outfit image: {image}"),
    ];

    if !model.recommendation_text.is_empty() {
        lines.push(model.recommendation_text.clone());
    }

    lines.push(format!("Background: {}", model.background_kind));

    lines.extend(model.forecast_slots.iter().map(|slot| {
        format!(
            "  {:<10} {:<10} {} {:>4}°",
            slot.day_label, slot.time_of_day_label, slot.emoji, slot.temperature_rounded
        )
    }));

    lines.push(format!("Last updated: {}", model.last_updated_text));
    lines.join("\n")
}
