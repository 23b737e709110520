//! WeCraft admin front-end
//!
//! The sign-in flow, form validation, error-code table and configuration are
//! plain Rust and compile on every target. Everything that touches the browser
//! (Leptos components, reCAPTCHA, fetch, local storage) lives behind the `csr`
//! feature.

pub mod config;
pub mod errors;
pub mod forms;
pub mod i18n;
pub mod routes;
pub mod session;
pub mod signin;
pub mod state;

#[cfg(feature = "csr")]
pub mod apiclient;
#[cfg(feature = "csr")]
pub mod captcha;
#[cfg(feature = "csr")]
pub mod components;
#[cfg(feature = "csr")]
pub mod logging;

pub use config::AdminConfig;
pub use errors::{ApiError, AuthErrorKind, ChallengeError, SessionError, SignInError};
pub use forms::{Credentials, Field, FieldErrors};
pub use signin::{AuthClient, ChallengeProvider, SignInFlow, SignInHost, SignInStatus};
pub use state::{AdminUser, AuthResult};
