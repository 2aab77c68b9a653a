use super::Config;
use super::types::config_dir;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let mmsummary_dir = config_dir();
        if !mmsummary_dir.exists() {
            fs::create_dir_all(&mmsummary_dir).context("Failed to create .mmsummary directory")?;
        }
        Self::load_or_init_at(&mmsummary_dir.join("config.toml"))
    }

    /// Load the config at `config_path`, writing defaults there first if the
    /// file does not exist yet.
    pub fn load_or_init_at(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents =
                fs::read_to_string(config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path.to_path_buf();
            config.validate()?;
            Ok(config)
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("temperature", self.summarize.temperature),
            ("reduce_temperature", self.summarize.reduce_temperature),
        ] {
            anyhow::ensure!(
                (0.0..=2.0).contains(&value),
                "summarize.{name} must be between 0 and 2 (got {value})"
            );
        }
        Ok(())
    }
}
