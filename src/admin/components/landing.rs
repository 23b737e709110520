//! Post sign-in landing views

use leptos::*;
use leptos_router::*;

use super::ThemeSwitch;
use crate::admin::routes::SIGN_IN_ROUTE;
use crate::admin::session::{LocalSession, SessionStore};
use crate::admin::state::AppState;

/// Back to the sign-in page when there is no session at all
fn require_session() -> Option<View> {
  if LocalSession.access_token().is_none() {
    return Some(view! { <Redirect path=SIGN_IN_ROUTE/> }.into_view());
  }
  None
}

fn greeting(state: AppState) -> String {
  match state.connected_user.get() {
    Some(user) => format!("{}, {}", state.t("Welcome"), user.display_name()),
    None => state.t("Welcome").to_string(),
  }
}

/// Onboarding for admins without any role
#[component]
pub fn Wizard() -> impl IntoView {
  if let Some(redirect) = require_session() {
    return redirect;
  }
  let state = use_context::<AppState>().expect("AppState not found");

  view! {
    <div class="landing-page">
      <header class="landing-header">
        <ThemeSwitch/>
      </header>
      <h1>{move || greeting(state)}</h1>
      <p class="color-grey">{move || state.t("Let's set up your workspace")}</p>
    </div>
  }
  .into_view()
}

#[component]
pub fn Dashboard() -> impl IntoView {
  if let Some(redirect) = require_session() {
    return redirect;
  }
  let state = use_context::<AppState>().expect("AppState not found");

  view! {
    <div class="landing-page">
      <header class="landing-header">
        <h2>{move || state.t("Dashboard")}</h2>
        <ThemeSwitch/>
      </header>
      <h1>{move || greeting(state)}</h1>
      <ul class="role-list">
        {move || {
          state
            .connected_user
            .get()
            .map(|user| user.roles)
            .unwrap_or_default()
            .into_iter()
            .map(|role| view! { <li class="badge">{role}</li> })
            .collect_view()
        }}
      </ul>
    </div>
  }
  .into_view()
}
