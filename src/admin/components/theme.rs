//! Light/dark theme switch

use gloo_storage::{LocalStorage, Storage};
use leptos::*;

use super::Icon;
use crate::admin::state::{AppState, Theme};

const THEME_KEY: &str = "theme";

/// Apply the theme saved by a previous visit, if any
pub(super) fn restore(state: AppState) {
  if let Ok(theme) = LocalStorage::get::<Theme>(THEME_KEY) {
    state.theme.set(theme);
  }
}

#[component]
pub fn ThemeSwitch() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let theme = state.theme;

  let toggle = move |_| {
    let next = theme.get_untracked().toggled();
    theme.set(next);
    if let Err(e) = LocalStorage::set(THEME_KEY, next) {
      logging::warn!("could not persist theme: {}", e);
    }
  };

  view! {
    <button
      type="button"
      class="theme-switch btn-ghost"
      title=move || match theme.get() {
        Theme::Light => state.t("Dark mode"),
        Theme::Dark => state.t("Light mode"),
      }
      on:click=toggle
    >
      {move || match theme.get() {
        Theme::Light => view! { <Icon name="moon" size=18/> },
        Theme::Dark => view! { <Icon name="sun" size=18/> },
      }}
    </button>
  }
}
