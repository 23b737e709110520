//! Admin sign-in page

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use super::super::{Input, ThemeSwitch};
use crate::admin::apiclient::AdminsService;
use crate::admin::captcha::{Recaptcha, RecaptchaWidget};
use crate::admin::forms::{Credentials, Field, FieldErrors};
use crate::admin::session::LocalSession;
use crate::admin::signin::{SignInFlow, SignInHost, SignInStatus};
use crate::admin::state::{AdminUser, AppState};

type PageFlow = SignInFlow<AdminsService, Recaptcha, LocalSession>;

/// Connects the sign-in flow to the page signals, the router and the toasts
struct PageHost<N> {
  state: AppState,
  status: RwSignal<SignInStatus>,
  navigate: N,
}

impl<N> SignInHost for PageHost<N>
where
  N: Fn(&str, NavigateOptions),
{
  fn set_status(&self, status: SignInStatus) {
    self.status.set(status);
  }

  fn set_connected_user(&self, user: AdminUser) {
    self.state.set_connected_user(user);
  }

  fn navigate(&self, path: &str) {
    (self.navigate)(path, NavigateOptions::default());
  }

  fn toast_error(&self, message_key: &'static str) {
    self.state.show_error(self.state.t(message_key));
  }
}

#[component]
pub fn SignInPage() -> impl IntoView {
  let state = use_context::<AppState>().expect("AppState not found");
  let navigate = use_navigate();

  let config = state.config.get_value();
  let recaptcha = Recaptcha::new(&config.recaptcha.site_key);
  let flow: StoredValue<Rc<PageFlow>> = store_value(Rc::new(SignInFlow::new(
    AdminsService::new(&config),
    recaptcha.clone(),
    LocalSession,
  )));

  let credentials = create_rw_signal(Credentials::default());
  let errors = create_rw_signal(FieldErrors::default());
  let status = create_rw_signal(SignInStatus::Initial);

  let submitting = Signal::derive(move || status.get().is_in_progress());

  // Fields validate on every change and on blur
  let on_change = move |field: Field, value: String| {
    let message = credentials
      .try_update(|c| c.edit(field, value))
      .flatten();
    errors.update(|e| e.set(field, message));
  };
  let on_visit = move |field: Field| {
    let message = credentials.with_untracked(|c| c.check(field));
    errors.update(|e| e.set(field, message));
  };

  let field_error = move |field: Field| {
    Signal::derive(move || errors.get().get(field).map(|key| state.t(key).to_string()))
  };

  let on_submit = move |ev: web_sys::SubmitEvent| {
    ev.prevent_default();
    if status.get_untracked().is_in_progress() {
      return;
    }

    let values = credentials.get_untracked();
    let flow = flow.get_value();
    let host = PageHost {
      state,
      status,
      navigate: navigate.clone(),
    };

    spawn_local(async move {
      match flow.submit(&values, &host).await {
        // The router has already left this page
        Ok(SignInStatus::Done) => {}
        Ok(_) => errors.set(FieldErrors::default()),
        Err(field_errors) => errors.set(field_errors),
      }
    });
  };

  view! {
    <div class="signin-page flex min-h-screen bg-first">
      <div class="signin-main">
        <div class="signin-card">
          <div class="signin-toolbar">
            <ThemeSwitch/>
          </div>

          <div class="signin-logo">
            <span class="logo">"WeCraft"</span>
          </div>

          <h1 class="signin-title">{move || state.t("Sign In")}</h1>

          <p class="signin-subtitle color-grey">
            {move || {
              state.t(
                "Welcome back to login. As an admin, you have access to manage our user's information.",
              )
            }}
          </p>

          <form class="signin-form" on:submit=on_submit novalidate=true>
            <Input
              id="email"
              icon="mail"
              input_type="email"
              autocomplete="username"
              placeholder=Signal::derive(move || state.t("Email").to_string())
              value=Signal::derive(move || credentials.with(|c| c.email.clone()))
              on_input=Callback::new(move |v| on_change(Field::Email, v))
              on_blur=Callback::new(move |_| on_visit(Field::Email))
              error=field_error(Field::Email)
              disabled=submitting
            />

            <Input
              id="password"
              icon="lock"
              input_type="password"
              autocomplete="current-password"
              placeholder=Signal::derive(move || state.t("Password").to_string())
              value=Signal::derive(move || credentials.with(|c| c.password.clone()))
              on_input=Callback::new(move |v| on_change(Field::Password, v))
              on_blur=Callback::new(move |_| on_visit(Field::Password))
              error=field_error(Field::Password)
              disabled=submitting
            />

            <label class="checkbox">
              <input
                type="checkbox"
                prop:checked=move || credentials.with(|c| c.remember_me)
                on:change=move |ev| {
                  let checked = event_target_checked(&ev);
                  credentials.update(|c| c.remember_me = checked);
                }
                disabled=move || submitting.get()
              />
              <span>{move || state.t("Remember me")}</span>
            </label>

            <RecaptchaWidget recaptcha=recaptcha/>

            <button
              type="submit"
              class="btn btn-primary btn-block"
              disabled=move || submitting.get()
            >
              {move || if submitting.get() { state.t("Signing in...") } else { state.t("Sign In") }}
            </button>
          </form>
        </div>
      </div>

      <aside class="signin-aside hidden lg:flex bg-sec bg-blue-low-opacity">
        <div class="signin-aside-content">
          <img alt="" src="/assets/signin-admin-bg.svg"/>
          <p class="text-justify color-black">
            "Manage craftsmen, clients and projects from a single place."
          </p>
        </div>
      </aside>
    </div>
  }
}
