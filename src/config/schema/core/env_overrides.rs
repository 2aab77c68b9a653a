use super::Config;
use super::locale::normalise_locale;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("MMSUMMARY_BASE_URL")
            && !base_url.is_empty()
        {
            self.server.base_url = base_url;
        }

        if let Ok(model) = std::env::var("MMSUMMARY_MODEL")
            && !model.is_empty()
        {
            self.summarize.model = model;
        }

        if let Ok(flag) = std::env::var("MMSUMMARY_TEST_MODE")
            && let Ok(test_mode) = flag.trim().to_ascii_lowercase().parse::<bool>()
        {
            self.summarize.test_mode = test_mode;
        }

        if let Ok(temp_str) = std::env::var("MMSUMMARY_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.summarize.temperature = temp;
        }

        // the summary language is derived from the UI locale, so both follow this
        if let Ok(lang) = std::env::var("MMSUMMARY_LANG")
            && !lang.trim().is_empty()
        {
            self.summarize.language = normalise_locale(&lang.trim().to_lowercase());
        }
    }
}
