//! Sign-in form model and validation schema

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

pub const EMAIL_INVALID: &str = "Please enter a valid e-mail address";
pub const PASSWORD_REQUIRED: &str = "Please enter your password";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
  pub email: String,
  pub password: String,
  pub remember_me: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
  Email,
  Password,
}

/// Message key per invalid field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
  pub email: Option<&'static str>,
  pub password: Option<&'static str>,
}

impl FieldErrors {
  pub fn is_empty(&self) -> bool {
    self.email.is_none() && self.password.is_none()
  }

  pub fn get(&self, field: Field) -> Option<&'static str> {
    match field {
      Field::Email => self.email,
      Field::Password => self.password,
    }
  }

  pub fn set(&mut self, field: Field, message: Option<&'static str>) {
    match field {
      Field::Email => self.email = message,
      Field::Password => self.password = message,
    }
  }
}

/// JSON body of `POST /admins/signin`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest<'a> {
  #[serde(flatten)]
  pub credentials: &'a Credentials,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub recaptcha_token: Option<&'a str>,
}

fn email_regex() -> &'static Regex {
  static EMAIL: OnceLock<Regex> = OnceLock::new();
  EMAIL.get_or_init(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
      .unwrap_or_else(|e| panic!("email pattern does not compile: {e}"))
  })
}

pub fn is_valid_email(email: &str) -> bool {
  let email = email.trim();
  !email.is_empty() && email_regex().is_match(email)
}

impl Credentials {
  /// Validate a single field
  pub fn check(&self, field: Field) -> Option<&'static str> {
    match field {
      Field::Email => (!is_valid_email(&self.email)).then_some(EMAIL_INVALID),
      Field::Password => self.password.is_empty().then_some(PASSWORD_REQUIRED),
    }
  }

  /// Store typed input and return that field's fresh error, so a field is
  /// checked from its first keystroke
  pub fn edit(&mut self, field: Field, value: String) -> Option<&'static str> {
    match field {
      Field::Email => self.email = value,
      Field::Password => self.password = value,
    }
    self.check(field)
  }

  pub fn validate(&self) -> Result<(), FieldErrors> {
    let errors = FieldErrors {
      email: self.check(Field::Email),
      password: self.check(Field::Password),
    };
    if errors.is_empty() {
      Ok(())
    } else {
      Err(errors)
    }
  }

  /// Copy sent on the wire: e-mail trimmed, password untouched
  pub fn normalized(&self) -> Self {
    Self {
      email: self.email.trim().to_string(),
      password: self.password.clone(),
      remember_me: self.remember_me,
    }
  }
}
