//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub storage: StorageConfig,
    pub reply: ReplyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    /// Wake prefix marking a console message as addressed to the bot
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StorageConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReplyConfig {
    /// Max entries a keyword may hold when added through the admin path
    pub words_limit: usize,
    /// Only answer messages addressed to the bot
    pub need_prefix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "wordbank-bot".to_string(),
                prefix: "/".to_string(),
            },
            storage: StorageConfig {
                path: PathBuf::from("data/default_word_bank.json"),
            },
            reply: ReplyConfig {
                words_limit: 10,
                need_prefix: false,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ConfigError::Read(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Overlay environment overrides; unparsable values are ignored with a warning
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("WORDBANK_DATA") {
            self.storage.path = PathBuf::from(path);
        }

        if let Some(limit) = lookup("WORDBANK_WORDS_LIMIT") {
            match limit.parse() {
                Ok(limit) => self.reply.words_limit = limit,
                Err(_) => tracing::warn!("Ignoring WORDBANK_WORDS_LIMIT={}", limit),
            }
        }

        if let Some(flag) = lookup("WORDBANK_NEED_PREFIX") {
            match flag.parse() {
                Ok(flag) => self.reply.need_prefix = flag,
                Err(_) => tracing::warn!("Ignoring WORDBANK_NEED_PREFIX={}", flag),
            }
        }

        if let Some(prefix) = lookup("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reply.words_limit == 0 {
            return Err(ConfigError::InvalidValue("words-limit must be greater than 0".to_string()));
        }
        if self.storage.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("storage path must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }
}
