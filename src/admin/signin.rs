//! Sign-in flow
//!
//! `SignInFlow` drives one submission of the sign-in form:
//! validation, challenge token, auth call, token persistence and routing.
//! The browser side (reCAPTCHA, fetch, local storage, signals, router) is
//! reached only through the traits below, so the flow runs the same in the
//! WASM app and in native tests.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::admin::errors::{ApiError, AuthErrorKind, ChallengeError, SignInError};
use crate::admin::forms::{Credentials, FieldErrors};
use crate::admin::routes::landing_route;
use crate::admin::session::SessionStore;
use crate::admin::state::{AdminUser, AuthResult};

/// UI status of the sign-in form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignInStatus {
  #[default]
  Initial,
  InProgress,
  Done,
  Error,
}

impl SignInStatus {
  pub fn is_in_progress(self) -> bool {
    self == SignInStatus::InProgress
  }
}

/// Exchanges credentials and a challenge token for a session
#[async_trait(?Send)]
pub trait AuthClient {
  async fn sign_in(
    &self,
    credentials: &Credentials,
    challenge_token: Option<&str>,
  ) -> Result<AuthResult, ApiError>;
}

/// Bot-detection widget run before each submission
#[async_trait(?Send)]
pub trait ChallengeProvider {
  /// `Ok(None)` when no widget is configured; the submission goes on without a token.
  async fn execute(&self) -> Result<Option<String>, ChallengeError>;

  /// Re-arm the widget after a failed attempt
  fn reset(&self);
}

/// Effects of a submission on the surrounding UI
pub trait SignInHost {
  fn set_status(&self, status: SignInStatus);
  fn set_connected_user(&self, user: AdminUser);
  fn navigate(&self, path: &str);
  /// Show an error toast; the host translates the key
  fn toast_error(&self, message_key: &'static str);
}

pub struct SignInFlow<A, C, S> {
  auth: A,
  challenge: C,
  session: S,
}

impl<A, C, S> SignInFlow<A, C, S>
where
  A: AuthClient,
  C: ChallengeProvider,
  S: SessionStore,
{
  pub fn new(auth: A, challenge: C, session: S) -> Self {
    Self {
      auth,
      challenge,
      session,
    }
  }

  pub fn auth(&self) -> &A {
    &self.auth
  }

  pub fn challenge(&self) -> &C {
    &self.challenge
  }

  pub fn session(&self) -> &S {
    &self.session
  }

  /// Submit the form.
  ///
  /// Invalid input returns the field errors and has no other effect.
  /// Otherwise the host sees `InProgress` followed by exactly one of
  /// `Done` or `Error`, which is also returned.
  pub async fn submit<H: SignInHost>(
    &self,
    credentials: &Credentials,
    host: &H,
  ) -> Result<SignInStatus, FieldErrors> {
    credentials.validate()?;
    let credentials = credentials.normalized();

    host.set_status(SignInStatus::InProgress);
    debug!(email = %credentials.email, remember_me = credentials.remember_me, "signing in");

    match self.authenticate(&credentials).await {
      Ok(result) => {
        let route = landing_route(&result.user);
        info!(roles = result.user.roles.len(), route, "signed in");
        host.set_status(SignInStatus::Done);
        host.set_connected_user(result.user);
        host.navigate(route);
        Ok(SignInStatus::Done)
      }
      Err(err) => {
        self.challenge.reset();
        host.set_status(SignInStatus::Error);
        match err.code().and_then(AuthErrorKind::from_code) {
          Some(kind) => {
            warn!(code = kind.code(), "sign-in rejected");
            host.toast_error(kind.message_key());
          }
          None => warn!(error = %err, code = err.code(), "sign-in failed without a known error code"),
        }
        Ok(SignInStatus::Error)
      }
    }
  }

  async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResult, SignInError> {
    let token = self.challenge.execute().await?;
    if token.is_none() {
      debug!("no challenge token, submitting without one");
    }
    let result = self.auth.sign_in(credentials, token.as_deref()).await?;
    self.session.set_access_token(&result.access_token)?;
    Ok(result)
  }
}
