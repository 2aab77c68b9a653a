use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

// ── Summarization strategy ───────────────────────────────────────

/// How the remote service combines chunk summaries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    /// Summarize every chunk, then reduce the partial summaries.
    #[default]
    Map,
    /// Skip the map step and reduce the raw chunks directly.
    NoMap,
    Original,
}

impl Strategy {
    pub fn uses_map(self) -> bool {
        matches!(self, Self::Map)
    }
}

// ── Summarization settings ───────────────────────────────────────

/// Every parameter that shapes one summarization request.
///
/// Values are replaced wholesale on each edit: [`SummarizeSettings::with_value`]
/// returns a new value and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_chunk_size_1")]
    pub chunk_size_1: u32,
    #[serde(default = "default_chunk_size_2")]
    pub chunk_size_2: u32,
    #[serde(default = "default_token_max")]
    pub token_max: u32,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub reduce_temperature: f64,
    #[serde(default)]
    pub strategy: Strategy,
    /// Empty means "use the server's built-in map prompt".
    #[serde(default)]
    pub map_template: String,
    /// Empty means "use the server's built-in reduce prompt".
    #[serde(default)]
    pub reduce_template: String,
    #[serde(default)]
    pub test_mode: bool,
    /// UI locale code; the summary language is derived from it.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_model() -> String {
    "google/gemma-3-27b-it:free".into()
}

fn default_chunk_size_1() -> u32 {
    16_000
}

fn default_chunk_size_2() -> u32 {
    8_000
}

fn default_token_max() -> u32 {
    16_000
}

fn default_language() -> String {
    "zh".into()
}

impl Default for SummarizeSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            chunk_size_1: default_chunk_size_1(),
            chunk_size_2: default_chunk_size_2(),
            token_max: default_token_max(),
            temperature: 0.0,
            reduce_temperature: 0.0,
            strategy: Strategy::default(),
            map_template: String::new(),
            reduce_template: String::new(),
            test_mode: false,
            language: default_language(),
        }
    }
}

/// Names of the editable fields, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SettingKey {
    Model,
    #[strum(to_string = "chunk_size_1")]
    ChunkSize1,
    #[strum(to_string = "chunk_size_2")]
    ChunkSize2,
    TokenMax,
    Temperature,
    ReduceTemperature,
    Strategy,
    MapTemplate,
    ReduceTemplate,
    TestMode,
    Language,
}

impl SettingKey {
    pub const ALL: [Self; 11] = [
        Self::Model,
        Self::ChunkSize1,
        Self::ChunkSize2,
        Self::TokenMax,
        Self::Temperature,
        Self::ReduceTemperature,
        Self::Strategy,
        Self::MapTemplate,
        Self::ReduceTemplate,
        Self::TestMode,
        Self::Language,
    ];

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let normalized = raw.trim().replace('-', "_");
        Self::from_str(&normalized).map_err(|_| ConfigError::UnknownKey(raw.to_string()))
    }
}

impl SummarizeSettings {
    /// Produce a new settings value with one field replaced.
    pub fn with_value(&self, key: SettingKey, raw: &str) -> Result<Self, ConfigError> {
        let mut next = self.clone();
        match key {
            SettingKey::Model => next.model = raw.trim().to_string(),
            SettingKey::ChunkSize1 => next.chunk_size_1 = coerce_count(raw),
            SettingKey::ChunkSize2 => next.chunk_size_2 = coerce_count(raw),
            SettingKey::TokenMax => next.token_max = coerce_count(raw),
            SettingKey::Temperature => next.temperature = parse_temperature(key, raw)?,
            SettingKey::ReduceTemperature => {
                next.reduce_temperature = parse_temperature(key, raw)?;
            }
            SettingKey::Strategy => {
                next.strategy = Strategy::from_str(raw.trim()).map_err(|_| {
                    ConfigError::Validation(format!(
                        "strategy must be one of map, nomap, original (got '{raw}')"
                    ))
                })?;
            }
            SettingKey::MapTemplate => next.map_template = raw.to_string(),
            SettingKey::ReduceTemplate => next.reduce_template = raw.to_string(),
            SettingKey::TestMode => next.test_mode = parse_flag(key, raw)?,
            SettingKey::Language => next.language = raw.trim().to_lowercase(),
        }
        Ok(next)
    }

    /// Current value of a field, formatted the way `with_value` accepts it.
    pub fn value_of(&self, key: SettingKey) -> String {
        match key {
            SettingKey::Model => self.model.clone(),
            SettingKey::ChunkSize1 => self.chunk_size_1.to_string(),
            SettingKey::ChunkSize2 => self.chunk_size_2.to_string(),
            SettingKey::TokenMax => self.token_max.to_string(),
            SettingKey::Temperature => self.temperature.to_string(),
            SettingKey::ReduceTemperature => self.reduce_temperature.to_string(),
            SettingKey::Strategy => self.strategy.to_string(),
            SettingKey::MapTemplate => self.map_template.clone(),
            SettingKey::ReduceTemplate => self.reduce_template.clone(),
            SettingKey::TestMode => self.test_mode.to_string(),
            SettingKey::Language => self.language.clone(),
        }
    }
}

/// Parse a chunking threshold the way a numeric form field does: take the
/// leading integer, and resolve empty, non-numeric or negative input to 0.
pub fn coerce_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let leading: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if negative || leading.is_empty() {
        return 0;
    }
    leading.parse::<u32>().unwrap_or(u32::MAX)
}

fn parse_temperature(key: SettingKey, raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::Validation(format!("{key} must be a number (got '{raw}')")))?;
    if !(0.0..=2.0).contains(&value) {
        return Err(ConfigError::Validation(format!(
            "{key} must be between 0 and 2 (got {value})"
        )));
    }
    Ok(value)
}

fn parse_flag(key: SettingKey, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Ok(true),
        "false" | "off" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Validation(format!(
            "{key} must be true or false (got '{raw}')"
        ))),
    }
}
