//! Error toasts raised by a rejected sign-in

use gloo_timers::callback::Timeout;
use leptos::*;

use super::Icon;
use crate::admin::state::{AppState, Toast};

/// Time an error stays on screen unless closed by hand
const DISMISS_AFTER_MS: u32 = 5000;

#[component]
pub fn ToastContainer() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");

  view! {
    <div class="toast-container" aria-live="assertive">
      <For
        each=move || state.toasts.get()
        key=|toast| toast.id
        children=move |toast| view! { <ErrorToast toast=toast/> }
      />
    </div>
  }
}

#[component]
fn ErrorToast(toast: Toast) -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let id = toast.id;

  // A toast closed by hand must not fire its timer later
  let timeout = Timeout::new(DISMISS_AFTER_MS, move || state.remove_toast(id));
  on_cleanup(move || {
    timeout.cancel();
  });

  view! {
    <div class="toast toast-error" role="alert">
      <Icon name="alert-circle" size=18/>
      <span class="toast-message">{toast.message}</span>
      <button
        class="toast-close btn-ghost"
        aria-label="Close"
        on:click=move |_| state.remove_toast(id)
      >
        <Icon name="x" size=16/>
      </button>
    </div>
  }
}
