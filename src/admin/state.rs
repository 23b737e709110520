//! Global state management for admin UI using Leptos signals

#[cfg(feature = "csr")]
use leptos::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
use crate::admin::config::AdminConfig;
#[cfg(feature = "csr")]
use crate::admin::i18n::{self, Locale};

/// Theme setting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
  #[default]
  Light,
  Dark,
}

impl Theme {
  pub fn toggled(self) -> Self {
    match self {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Theme::Light => "light",
      Theme::Dark => "dark",
    }
  }
}

/// Translated error message shown after a rejected sign-in
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
  pub id: u32,
  pub message: String,
}

/// Authenticated admin profile as returned by the API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
  #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(default)]
  pub roles: Vec<String>,
  /// Remaining profile fields, kept as-is
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AdminUser {
  pub fn has_roles(&self) -> bool {
    !self.roles.is_empty()
  }

  pub fn display_name(&self) -> String {
    match (&self.first_name, &self.last_name) {
      (Some(first), Some(last)) => format!("{} {}", first, last),
      (Some(first), None) => first.clone(),
      _ => self.email.clone().unwrap_or_default(),
    }
  }
}

/// Successful sign-in payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
  pub access_token: String,
  pub user: AdminUser,
}

#[cfg(feature = "csr")]
/// Global application state with reactive signals
#[derive(Clone, Copy)]
pub struct AppState {
  pub config: StoredValue<AdminConfig>,
  pub connected_user: RwSignal<Option<AdminUser>>,
  pub toasts: RwSignal<Vec<Toast>>,
  pub toast_counter: RwSignal<u32>,
  pub theme: RwSignal<Theme>,
  pub locale: RwSignal<Locale>,
}

#[cfg(feature = "csr")]
impl AppState {
  pub fn new(config: AdminConfig) -> Self {
    let theme = config.ui.theme;
    let locale = config.ui.locale;
    Self {
      config: store_value(config),
      connected_user: create_rw_signal(None),
      toasts: create_rw_signal(Vec::new()),
      toast_counter: create_rw_signal(0),
      theme: create_rw_signal(theme),
      locale: create_rw_signal(locale),
    }
  }

  pub fn show_error(&self, message: &str) {
    let id = self.toast_counter.get_untracked() + 1;
    self.toast_counter.set(id);
    self.toasts.update(|toasts| {
      toasts.push(Toast {
        id,
        message: message.to_string(),
      });
    });
  }

  pub fn remove_toast(&self, id: u32) {
    self.toasts.update(|toasts| {
      toasts.retain(|t| t.id != id);
    });
  }

  pub fn set_connected_user(&self, user: AdminUser) {
    self.connected_user.set(Some(user));
  }

  /// Translate a message key with the current locale
  pub fn t(&self, key: &'static str) -> &'static str {
    i18n::translate(self.locale.get(), key)
  }
}
