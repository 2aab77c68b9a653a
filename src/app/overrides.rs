use crate::cli::SettingOverrides;
use crate::config::{SettingKey, SummarizeSettings};
use crate::error::ConfigError;

/// Fold command-line overrides into a new settings value. The persisted
/// settings are left as they are.
pub fn apply_overrides(
    base: &SummarizeSettings,
    overrides: &SettingOverrides,
) -> Result<SummarizeSettings, ConfigError> {
    let test_mode = overrides.test_mode.then_some("true");
    let pairs = [
        (SettingKey::Model, overrides.model.as_deref()),
        (SettingKey::Strategy, overrides.strategy.as_deref()),
        (SettingKey::Language, overrides.language.as_deref()),
        (SettingKey::ChunkSize1, overrides.chunk_size_1.as_deref()),
        (SettingKey::ChunkSize2, overrides.chunk_size_2.as_deref()),
        (SettingKey::TokenMax, overrides.token_max.as_deref()),
        (SettingKey::Temperature, overrides.temperature.as_deref()),
        (
            SettingKey::ReduceTemperature,
            overrides.reduce_temperature.as_deref(),
        ),
        (SettingKey::MapTemplate, overrides.map_template.as_deref()),
        (
            SettingKey::ReduceTemplate,
            overrides.reduce_template.as_deref(),
        ),
        (SettingKey::TestMode, test_mode),
    ];

    pairs
        .into_iter()
        .filter_map(|(key, raw)| raw.map(|raw| (key, raw)))
        .try_fold(base.clone(), |settings, (key, raw)| {
            settings.with_value(key, raw)
        })
}
