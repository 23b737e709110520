//! Admin UI Components

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::admin::routes::{DASHBOARD_ROUTE, SIGN_IN_ROUTE, WIZARD_ROUTE};
use crate::admin::state::AppState;
use crate::admin::AdminConfig;

mod auth;
mod icons;
mod input;
mod landing;
mod theme;
mod toast;

pub use auth::SignInPage;
pub use icons::Icon;
pub use input::Input;
pub use landing::{Dashboard, Wizard};
pub use theme::ThemeSwitch;
pub use toast::ToastContainer;

/// Main App component
#[component]
pub fn App(config: AdminConfig) -> impl IntoView {
  provide_meta_context();

  // Create global state
  let state = AppState::new(config);
  provide_context(state);
  theme::restore(state);

  let theme = state.theme;

  view! {
    <Html class=move || format!("theme-{}", theme.get().as_str())/>
    <Title text="WeCraft Admin"/>
    <Router>
      <Routes>
        <Route path="/" view=|| view! { <Redirect path=SIGN_IN_ROUTE/> }/>
        <Route path=SIGN_IN_ROUTE view=SignInPage/>
        <Route path=WIZARD_ROUTE view=Wizard/>
        <Route path=DASHBOARD_ROUTE view=Dashboard/>
      </Routes>
      <ToastContainer/>
    </Router>
  }
}
