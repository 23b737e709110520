//! WeCraft Admin UI - Client-Side Rendered (WASM)

use leptos::*;
use wecraft_admin::admin::components::App;
use wecraft_admin::admin::{logging, AdminConfig};

fn main() {
  console_error_panic_hook::set_once();

  let config = AdminConfig::load().unwrap_or_else(|e| {
    web_sys::console::error_1(&format!("falling back to default configuration: {}", e).into());
    AdminConfig::default()
  });
  logging::init(&config.logging.level);
  tracing::info!(api = %config.api.base_url, recaptcha = config.recaptcha_enabled(), "starting admin UI");

  mount_to_body(move || view! { <App config=config/> });
}
