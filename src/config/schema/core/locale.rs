use super::Config;

fn detect_system_locale() -> Option<String> {
    std::env::var("LANG")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .ok()
        .map(|lang| lang.trim().to_lowercase())
        .filter(|lang| !lang.is_empty())
}

/// Detect the UI locale: `MMSUMMARY_LANG` env -> configured `language` ->
/// system `LANG` -> `"en"`.
pub fn detect_locale(config_language: &str) -> String {
    if let Ok(lang) = std::env::var("MMSUMMARY_LANG") {
        let lang = lang.trim().to_lowercase();
        if !lang.is_empty() {
            return normalise_locale(&lang);
        }
    }

    let configured = config_language.trim();
    if !configured.is_empty() {
        return normalise_locale(&configured.to_lowercase());
    }

    if let Some(system_locale) = detect_system_locale() {
        return normalise_locale(&system_locale);
    }

    "en".into()
}

/// Normalise `"zh_TW.UTF-8"` -> `"zh"`, `"en_US"` -> `"en"`, passthrough `"zh"`.
pub(super) fn normalise_locale(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split(['_', '-']).next().unwrap_or(base);
    lang.to_string()
}

impl Config {
    /// Resolve the UI locale and hand it to `rust_i18n::set_locale`.
    pub fn apply_locale(&self) -> String {
        let locale = detect_locale(&self.summarize.language);
        rust_i18n::set_locale(&locale);
        locale
    }
}
