use super::types::SummarizeRequest;
use crate::config::SummarizeSettings;

pub const DEFAULT_TARGET_LANGUAGE: &str = "Traditional Chinese";

/// Map a UI locale code to the language the summary is written in.
pub fn target_language(code: &str) -> &'static str {
    match code {
        "en" => "English",
        _ => DEFAULT_TARGET_LANGUAGE,
    }
}

/// Assemble the wire payload for `text` under `settings`.
///
/// `text` is expected to be non-empty; the session controller checks that
/// before calling.
pub fn build_request(text: &str, settings: &SummarizeSettings) -> SummarizeRequest {
    SummarizeRequest {
        text: text.to_string(),
        model: settings.model.clone(),
        chunk_size_1: settings.chunk_size_1,
        chunk_size_2: settings.chunk_size_2,
        token_max: settings.token_max,
        temperature: settings.temperature,
        // nomap and original both collapse to false on the wire
        use_map: settings.strategy.uses_map(),
        map_temple: settings.map_template.clone(),
        reduce_temple: settings.reduce_template.clone(),
        reduce_temperature: settings.reduce_temperature,
        test_mode: settings.test_mode,
        language: target_language(&settings.language).to_string(),
    }
}
