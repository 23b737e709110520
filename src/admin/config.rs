//! Admin UI configuration
//!
//! Defaults come from the embedded `config/admin.yaml`; build-time environment
//! variables override individual values so a release can be pointed at another
//! API without editing the file.

use serde::{Deserialize, Serialize};

use crate::admin::errors::ConfigError;
use crate::admin::i18n::Locale;
use crate::admin::state::Theme;

const EMBEDDED_CONFIG: &str = include_str!("../../config/admin.yaml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminConfig {
  #[serde(default)]
  pub api: ApiSection,
  #[serde(default)]
  pub recaptcha: RecaptchaSection,
  #[serde(default)]
  pub logging: LoggingSection,
  #[serde(default)]
  pub ui: UiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
  /// Base URL of the WeCraft API, without trailing slash
  #[serde(default = "default_base_url")]
  pub base_url: String,
}

fn default_base_url() -> String {
  "/api".into()
}

impl Default for ApiSection {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
    }
  }
}

/// reCAPTCHA v2 invisible widget settings.
/// An empty site key disables the challenge entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecaptchaSection {
  #[serde(default)]
  pub site_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  /// `tracing` filter directive, e.g. `info` or `wecraft_admin=debug`
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".into()
}

impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiSection {
  #[serde(default)]
  pub locale: Locale,
  #[serde(default)]
  pub theme: Theme,
}

impl AdminConfig {
  pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
    Ok(serde_yaml::from_str(yaml)?)
  }

  /// Embedded defaults plus build-time overrides.
  pub fn load() -> Result<Self, ConfigError> {
    let mut config = Self::from_yaml(EMBEDDED_CONFIG)?;
    config.apply_overrides(BuildEnv {
      api_url: option_env!("WECRAFT_API_URL"),
      site_key: option_env!("WECRAFT_RECAPTCHA_SITE_KEY"),
      log_level: option_env!("WECRAFT_LOG"),
      locale: option_env!("WECRAFT_LOCALE"),
    })?;
    Ok(config)
  }

  fn apply_overrides(&mut self, env: BuildEnv) -> Result<(), ConfigError> {
    if let Some(url) = env.api_url {
      self.api.base_url = url.to_string();
    }
    if let Some(key) = env.site_key {
      self.recaptcha.site_key = key.to_string();
    }
    if let Some(level) = env.log_level {
      self.logging.level = level.to_string();
    }
    if let Some(locale) = env.locale {
      self.ui.locale = locale
        .parse()
        .map_err(|_| ConfigError::UnknownLocale(locale.to_string()))?;
    }
    self.api.base_url = self.api.base_url.trim_end_matches('/').to_string();
    Ok(())
  }

  /// Whether the sign-in form should run a reCAPTCHA challenge
  pub fn recaptcha_enabled(&self) -> bool {
    !self.recaptcha.site_key.trim().is_empty()
  }

  pub fn endpoint(&self, path: &str) -> String {
    format!("{}/{}", self.api.base_url, path.trim_start_matches('/'))
  }
}

#[derive(Default)]
struct BuildEnv {
  api_url: Option<&'static str>,
  site_key: Option<&'static str>,
  log_level: Option<&'static str>,
  locale: Option<&'static str>,
}
