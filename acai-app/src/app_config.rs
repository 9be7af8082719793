use acai_catalog::MarginThresholds;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_high_margin")]
    pub high_margin_threshold: f64,
    #[serde(default = "default_medium_margin")]
    pub medium_margin_threshold: f64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_high_margin() -> f64 { 60.0 }
fn default_medium_margin() -> f64 { 40.0 }
fn default_currency_symbol() -> String { "R$".to_string() }

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            high_margin_threshold: default_high_margin(),
            medium_margin_threshold: default_medium_margin(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl BusinessRules {
    pub fn margin_thresholds(&self) -> MarginThresholds {
        MarginThresholds {
            high: self.high_margin_threshold,
            medium: self.medium_margin_threshold,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub load_mock_data: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // ACAI_BUSINESS_RULES__CURRENCY_SYMBOL=US$ sets business_rules.currency_symbol
            .add_source(
                config::Environment::with_prefix("ACAI")
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;

        let rules = &config.business_rules;
        if rules.medium_margin_threshold > rules.high_margin_threshold {
            return Err(config::ConfigError::Message(format!(
                "medium_margin_threshold ({}) must not exceed high_margin_threshold ({})",
                rules.medium_margin_threshold, rules.high_margin_threshold
            )));
        }

        Ok(config)
    }
}
