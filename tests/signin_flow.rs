//! Sign-in flow tests
//!
//! The flow runs against in-memory auth, challenge and host implementations:
//! - Validation gating
//! - Token persistence and role-based routing
//! - Failure handling: challenge reset, status, error toasts

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use wecraft_admin::admin::errors::{ApiError, ChallengeError, SessionError};
use wecraft_admin::admin::forms::{Credentials, EMAIL_INVALID};
use wecraft_admin::admin::routes::{DASHBOARD_ROUTE, WIZARD_ROUTE};
use wecraft_admin::admin::session::{MemorySession, SessionStore};
use wecraft_admin::admin::state::{AdminUser, AuthResult};
use wecraft_admin::admin::{AuthClient, ChallengeProvider, SignInFlow, SignInHost, SignInStatus};

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Default)]
struct FakeAuth {
  responses: RefCell<VecDeque<Result<AuthResult, ApiError>>>,
  calls: RefCell<Vec<(Credentials, Option<String>)>>,
}

impl FakeAuth {
  fn answering(response: Result<AuthResult, ApiError>) -> Self {
    let auth = Self::default();
    auth.responses.borrow_mut().push_back(response);
    auth
  }

  fn call_count(&self) -> usize {
    self.calls.borrow().len()
  }
}

#[async_trait(?Send)]
impl AuthClient for FakeAuth {
  async fn sign_in(
    &self,
    credentials: &Credentials,
    challenge_token: Option<&str>,
  ) -> Result<AuthResult, ApiError> {
    self
      .calls
      .borrow_mut()
      .push((credentials.clone(), challenge_token.map(str::to_string)));
    self
      .responses
      .borrow_mut()
      .pop_front()
      .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
  }
}

struct FakeChallenge {
  token: Result<Option<String>, ChallengeError>,
  executions: Cell<usize>,
  resets: Cell<usize>,
}

impl FakeChallenge {
  fn with_token(token: &str) -> Self {
    Self::returning(Ok(Some(token.to_string())))
  }

  fn returning(token: Result<Option<String>, ChallengeError>) -> Self {
    Self {
      token,
      executions: Cell::new(0),
      resets: Cell::new(0),
    }
  }
}

#[async_trait(?Send)]
impl ChallengeProvider for FakeChallenge {
  async fn execute(&self) -> Result<Option<String>, ChallengeError> {
    self.executions.set(self.executions.get() + 1);
    self.token.clone()
  }

  fn reset(&self) {
    self.resets.set(self.resets.get() + 1);
  }
}

#[derive(Default)]
struct RecordingHost {
  statuses: RefCell<Vec<SignInStatus>>,
  user: RefCell<Option<AdminUser>>,
  navigations: RefCell<Vec<String>>,
  toasts: RefCell<Vec<&'static str>>,
}

impl SignInHost for RecordingHost {
  fn set_status(&self, status: SignInStatus) {
    self.statuses.borrow_mut().push(status);
  }

  fn set_connected_user(&self, user: AdminUser) {
    *self.user.borrow_mut() = Some(user);
  }

  fn navigate(&self, path: &str) {
    self.navigations.borrow_mut().push(path.to_string());
  }

  fn toast_error(&self, message_key: &'static str) {
    self.toasts.borrow_mut().push(message_key);
  }
}

/// Records the order of host calls
#[derive(Default)]
struct OrderedHost {
  events: RefCell<Vec<String>>,
}

impl SignInHost for OrderedHost {
  fn set_status(&self, status: SignInStatus) {
    self.events.borrow_mut().push(format!("status:{:?}", status));
  }

  fn set_connected_user(&self, _user: AdminUser) {
    self.events.borrow_mut().push("user".into());
  }

  fn navigate(&self, path: &str) {
    self.events.borrow_mut().push(format!("navigate:{}", path));
  }

  fn toast_error(&self, message_key: &'static str) {
    self.events.borrow_mut().push(format!("toast:{}", message_key));
  }
}

/// Storage that refuses every write, like a browser with storage disabled
struct ReadOnlySession;

impl SessionStore for ReadOnlySession {
  fn access_token(&self) -> Option<String> {
    None
  }

  fn set_access_token(&self, _token: &str) -> Result<(), SessionError> {
    Err(SessionError::Unavailable)
  }
}

fn credentials() -> Credentials {
  Credentials {
    email: "boreAdmin@wecraft.tn".into(),
    password: "wecraft".into(),
    remember_me: true,
  }
}

fn auth_result(token: &str, roles: &[&str]) -> AuthResult {
  AuthResult {
    access_token: token.to_string(),
    user: AdminUser {
      email: Some("boreAdmin@wecraft.tn".into()),
      roles: roles.iter().map(|r| r.to_string()).collect(),
      ..Default::default()
    },
  }
}

fn rejected(code: Option<&str>) -> ApiError {
  ApiError::Rejected {
    status: 400,
    code: code.map(str::to_string),
  }
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_invalid_email_does_not_call_auth() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Ok(auth_result("t", &["ADMIN"]))),
    FakeChallenge::with_token("captcha"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();
  let mut creds = credentials();
  creds.email = "not-an-email".into();

  let errors = tokio_test::block_on(flow.submit(&creds, &host)).unwrap_err();

  assert_eq!(errors.email, Some(EMAIL_INVALID));
  assert_eq!(flow.auth().call_count(), 0);
  assert_eq!(flow.challenge().executions.get(), 0);
  assert!(host.statuses.borrow().is_empty());
  assert!(host.navigations.borrow().is_empty());
}

#[test]
fn test_empty_password_does_not_call_auth() {
  let flow = SignInFlow::new(
    FakeAuth::default(),
    FakeChallenge::with_token("captcha"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();
  let mut creds = credentials();
  creds.password.clear();

  let errors = tokio_test::block_on(flow.submit(&creds, &host)).unwrap_err();

  assert!(errors.password.is_some());
  assert_eq!(flow.auth().call_count(), 0);
}

// =============================================================================
// Success
// =============================================================================

#[test]
fn test_success_stores_token_and_routes_to_dashboard() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Ok(auth_result("access-123", &["SUPER_ADMIN"]))),
    FakeChallenge::with_token("captcha-token"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();

  let status = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(status, SignInStatus::Done);
  assert_eq!(flow.session().access_token().as_deref(), Some("access-123"));
  assert_eq!(*host.navigations.borrow(), vec![DASHBOARD_ROUTE.to_string()]);
  assert_eq!(
    host.user.borrow().as_ref().map(|u| u.roles.clone()),
    Some(vec!["SUPER_ADMIN".to_string()])
  );
  assert!(host.toasts.borrow().is_empty());
  assert_eq!(flow.challenge().resets.get(), 0);
}

#[test]
fn test_success_without_roles_routes_to_wizard() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Ok(auth_result("access-456", &[]))),
    FakeChallenge::with_token("captcha-token"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();

  tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(flow.session().access_token().as_deref(), Some("access-456"));
  assert_eq!(*host.navigations.borrow(), vec![WIZARD_ROUTE.to_string()]);
}

#[test]
fn test_auth_receives_credentials_and_challenge_token() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Ok(auth_result("t", &["ADMIN"]))),
    FakeChallenge::with_token("captcha-token"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();
  let mut creds = credentials();
  creds.email = "  boreAdmin@wecraft.tn  ".into();

  tokio_test::block_on(flow.submit(&creds, &host)).unwrap();

  let calls = flow.auth().calls.borrow();
  assert_eq!(calls.len(), 1);
  assert_eq!(calls[0].0.email, "boreAdmin@wecraft.tn");
  assert_eq!(calls[0].0.password, "wecraft");
  assert!(calls[0].0.remember_me);
  assert_eq!(calls[0].1.as_deref(), Some("captcha-token"));
}

#[test]
fn test_skipped_challenge_submits_without_token() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Ok(auth_result("t", &["ADMIN"]))),
    FakeChallenge::returning(Ok(None)),
    MemorySession::default(),
  );
  let host = RecordingHost::default();

  let status = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(status, SignInStatus::Done);
  assert_eq!(flow.auth().calls.borrow()[0].1, None);
}

#[test]
fn test_success_status_sequence() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Ok(auth_result("t", &["ADMIN"]))),
    FakeChallenge::with_token("c"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();

  tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(
    *host.statuses.borrow(),
    vec![SignInStatus::InProgress, SignInStatus::Done]
  );
}

#[test]
fn test_navigation_is_the_last_host_call() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Ok(auth_result("t", &["ADMIN"]))),
    FakeChallenge::with_token("c"),
    MemorySession::default(),
  );
  let host = OrderedHost::default();

  let status = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(status, SignInStatus::Done);
  assert_eq!(
    *host.events.borrow(),
    vec![
      "status:InProgress".to_string(),
      "status:Done".to_string(),
      "user".to_string(),
      format!("navigate:{}", DASHBOARD_ROUTE),
    ]
  );
}

// =============================================================================
// Failure
// =============================================================================

#[test]
fn test_known_error_code_shows_toast() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Err(rejected(Some("INVALID_CREDENTIALS")))),
    FakeChallenge::with_token("c"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();

  let status = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(status, SignInStatus::Error);
  assert_eq!(*host.toasts.borrow(), vec!["Invalid e-mail or password"]);
  assert_eq!(flow.challenge().resets.get(), 1);
  assert_eq!(flow.session().access_token(), None);
  assert!(host.navigations.borrow().is_empty());
  assert!(host.user.borrow().is_none());
}

#[test]
fn test_unknown_error_code_shows_nothing() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Err(rejected(Some("TEAPOT")))),
    FakeChallenge::with_token("c"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();

  let status = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(status, SignInStatus::Error);
  assert!(host.toasts.borrow().is_empty());
  assert_eq!(flow.challenge().resets.get(), 1);
}

#[test]
fn test_network_error_resets_challenge_once() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Err(ApiError::Network("connection refused".into()))),
    FakeChallenge::with_token("c"),
    MemorySession::default(),
  );
  let host = RecordingHost::default();

  tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(flow.challenge().resets.get(), 1);
  assert!(host.toasts.borrow().is_empty());
  assert_eq!(
    *host.statuses.borrow(),
    vec![SignInStatus::InProgress, SignInStatus::Error]
  );
}

#[test]
fn test_challenge_failure_skips_auth() {
  let flow = SignInFlow::new(
    FakeAuth::default(),
    FakeChallenge::returning(Err(ChallengeError::Expired)),
    MemorySession::default(),
  );
  let host = RecordingHost::default();

  let status = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(status, SignInStatus::Error);
  assert_eq!(flow.auth().call_count(), 0);
  assert_eq!(flow.challenge().resets.get(), 1);
  assert_eq!(
    *host.statuses.borrow(),
    vec![SignInStatus::InProgress, SignInStatus::Error]
  );
}

#[test]
fn test_token_write_failure_ends_in_error() {
  let flow = SignInFlow::new(
    FakeAuth::answering(Ok(auth_result("access-789", &["ADMIN"]))),
    FakeChallenge::with_token("c"),
    ReadOnlySession,
  );
  let host = RecordingHost::default();

  let status = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(status, SignInStatus::Error);
  assert_eq!(
    *host.statuses.borrow(),
    vec![SignInStatus::InProgress, SignInStatus::Error]
  );
  assert!(host.navigations.borrow().is_empty());
  assert!(host.user.borrow().is_none());
  assert_eq!(flow.challenge().resets.get(), 1);
}

#[test]
fn test_retry_after_failure() {
  let auth = FakeAuth::answering(Err(rejected(Some("INVALID_RECAPTCHA"))));
  auth
    .responses
    .borrow_mut()
    .push_back(Ok(auth_result("second", &["ADMIN"])));
  let flow = SignInFlow::new(auth, FakeChallenge::with_token("c"), MemorySession::default());
  let host = RecordingHost::default();

  let first = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();
  let second = tokio_test::block_on(flow.submit(&credentials(), &host)).unwrap();

  assert_eq!(first, SignInStatus::Error);
  assert_eq!(second, SignInStatus::Done);
  assert_eq!(flow.challenge().executions.get(), 2);
  assert_eq!(flow.challenge().resets.get(), 1);
  assert_eq!(flow.session().access_token().as_deref(), Some("second"));
  assert_eq!(
    *host.toasts.borrow(),
    vec!["reCAPTCHA verification failed, please try again"]
  );
  assert_eq!(
    *host.statuses.borrow(),
    vec![
      SignInStatus::InProgress,
      SignInStatus::Error,
      SignInStatus::InProgress,
      SignInStatus::Done
    ]
  );
}
