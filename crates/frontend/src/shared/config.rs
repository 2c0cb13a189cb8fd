use crate::shared::dom;
use anyhow::Context;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StoreConfig {
    pub store: StoreSection,
    pub contact: ContactConfig,
    pub catalog: CatalogConfig,
    pub effects: EffectsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StoreSection {
    pub name: String,
    pub currency_symbol: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    /// International format, digits only
    pub whatsapp_phone: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub reveal_threshold: f64,
    pub parallax_factor: f64,
    pub stagger_step_secs: f64,
    pub stagger_cycle: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl StoreConfig {
    /// Settings that load fine but are probably a mistake. Reported by the
    /// caller once logging is up.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.catalog.size == 0 {
            warnings.push("catalog.size is 0, the shop page will be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.effects.reveal_threshold) {
            warnings.push(format!(
                "effects.reveal_threshold {} is outside 0..=1",
                self.effects.reveal_threshold
            ));
        }
        warnings
    }
}

impl LoggingConfig {
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.level).unwrap_or(log::Level::Debug)
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            name: "TechstinctStore".to_string(),
            currency_symbol: "₦".to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_phone: "2349026673982".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { size: 120 }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            parallax_factor: 0.5,
            stagger_step_secs: 0.05,
            stagger_cycle: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[store]
name = "TechstinctStore"
currency_symbol = "₦"

[contact]
whatsapp_phone = "2349026673982"

[catalog]
size = 120

[effects]
reveal_threshold = 0.1
parallax_factor = 0.5
stagger_step_secs = 0.05
stagger_cycle = 10

[logging]
level = "debug"
"#;

/// Id of the optional inline config block in the host page:
/// `<script type="application/toml" id="store-config">...</script>`
const INLINE_CONFIG_SELECTOR: &str = "script#store-config";

/// Load store configuration.
///
/// Search order:
/// 1. Inline TOML block in the host page (missing keys keep their defaults)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<StoreConfig> {
    if let Some(inline) = inline_config() {
        return parse_config(&inline).context("invalid inline store-config block");
    }

    parse_config(DEFAULT_CONFIG)
}

fn parse_config(source: &str) -> anyhow::Result<StoreConfig> {
    Ok(toml::from_str(source)?)
}

fn inline_config() -> Option<String> {
    let element = dom::query(INLINE_CONFIG_SELECTOR).ok()??;
    let text = element.text_content()?;
    (!text.trim().is_empty()).then_some(text)
}
