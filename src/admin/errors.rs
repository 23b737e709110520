//! Error types and the server error-code table

use thiserror::Error;

/// Failure of the sign-in HTTP call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
  #[error("network error: {0}")]
  Network(String),
  /// Non-2xx answer. `code` is the `code` field of the JSON error body, if any.
  #[error("HTTP error: {status}")]
  Rejected { status: u16, code: Option<String> },
  #[error("invalid response: {0}")]
  Decode(String),
}

impl ApiError {
  /// Build a `Rejected` error from a non-2xx response body.
  /// The code is read from `{"code": ...}`; numeric codes are kept as text.
  pub fn rejected(status: u16, body: &str) -> Self {
    let code = serde_json::from_str::<serde_json::Value>(body)
      .ok()
      .and_then(|value| match value.get("code")? {
        serde_json::Value::String(code) => Some(code.clone()),
        serde_json::Value::Number(code) => Some(code.to_string()),
        _ => None,
      });
    ApiError::Rejected { status, code }
  }

  /// Server-provided error code, only present on rejected requests
  pub fn code(&self) -> Option<&str> {
    match self {
      ApiError::Rejected { code, .. } => code.as_deref(),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
  #[error("reCAPTCHA script is not loaded")]
  Unavailable,
  #[error("reCAPTCHA challenge expired")]
  Expired,
  #[error("reCAPTCHA error: {0}")]
  Widget(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
  #[error("local storage is not available")]
  Unavailable,
  #[error("failed to write session token: {0}")]
  Write(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid configuration: {0}")]
  Parse(#[from] serde_yaml::Error),
  #[error("unknown locale: {0}")]
  UnknownLocale(String),
}

/// Anything that sends a submission down the failure path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
  #[error(transparent)]
  Challenge(#[from] ChallengeError),
  #[error(transparent)]
  Api(#[from] ApiError),
  #[error(transparent)]
  Session(#[from] SessionError),
}

impl SignInError {
  pub fn code(&self) -> Option<&str> {
    match self {
      SignInError::Api(e) => e.code(),
      _ => None,
    }
  }
}

/// Authentication failures the server reports with a known code.
/// Codes outside this table are not shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
  InvalidCredentials,
  UserNotFound,
  UserBlocked,
  EmailNotVerified,
  InvalidRecaptcha,
  NotAnAdmin,
}

impl AuthErrorKind {
  pub const ALL: [AuthErrorKind; 6] = [
    AuthErrorKind::InvalidCredentials,
    AuthErrorKind::UserNotFound,
    AuthErrorKind::UserBlocked,
    AuthErrorKind::EmailNotVerified,
    AuthErrorKind::InvalidRecaptcha,
    AuthErrorKind::NotAnAdmin,
  ];

  pub fn from_code(code: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|kind| kind.code() == code)
  }

  pub fn code(self) -> &'static str {
    match self {
      AuthErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
      AuthErrorKind::UserNotFound => "USER_NOT_FOUND",
      AuthErrorKind::UserBlocked => "USER_BLOCKED",
      AuthErrorKind::EmailNotVerified => "EMAIL_NOT_VERIFIED",
      AuthErrorKind::InvalidRecaptcha => "INVALID_RECAPTCHA",
      AuthErrorKind::NotAnAdmin => "NOT_AN_ADMIN",
    }
  }

  /// Translation key of the toast message
  pub fn message_key(self) -> &'static str {
    match self {
      AuthErrorKind::InvalidCredentials => "Invalid e-mail or password",
      AuthErrorKind::UserNotFound => "No admin account matches this e-mail address",
      AuthErrorKind::UserBlocked => "Your account has been blocked, please contact support",
      AuthErrorKind::EmailNotVerified => "Please verify your e-mail address before signing in",
      AuthErrorKind::InvalidRecaptcha => "reCAPTCHA verification failed, please try again",
      AuthErrorKind::NotAnAdmin => "This account is not allowed to access the admin space",
    }
  }
}
