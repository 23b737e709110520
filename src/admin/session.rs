//! Access-token persistence

use std::cell::RefCell;

use crate::admin::errors::SessionError;

/// Local-storage key holding the access token
pub const ACCESS_TOKEN_KEY: &str = "access-token";

pub trait SessionStore {
  fn access_token(&self) -> Option<String>;
  fn set_access_token(&self, token: &str) -> Result<(), SessionError>;
}

/// Session store kept in memory, used off-browser
#[derive(Debug, Default)]
pub struct MemorySession {
  token: RefCell<Option<String>>,
}

impl SessionStore for MemorySession {
  fn access_token(&self) -> Option<String> {
    self.token.borrow().clone()
  }

  fn set_access_token(&self, token: &str) -> Result<(), SessionError> {
    *self.token.borrow_mut() = Some(token.to_string());
    Ok(())
  }
}

#[cfg(feature = "csr")]
pub use browser::LocalSession;

#[cfg(feature = "csr")]
mod browser {
  use super::{SessionStore, ACCESS_TOKEN_KEY};
  use crate::admin::errors::SessionError;

  /// Browser local storage. The token is stored as a raw string, not JSON.
  #[derive(Clone, Copy, Debug, Default)]
  pub struct LocalSession;

  fn storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
      .and_then(|w| w.local_storage().ok().flatten())
      .ok_or(SessionError::Unavailable)
  }

  impl SessionStore for LocalSession {
    fn access_token(&self) -> Option<String> {
      storage().ok()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }

    fn set_access_token(&self, token: &str) -> Result<(), SessionError> {
      storage()?
        .set_item(ACCESS_TOKEN_KEY, token)
        .map_err(|e| SessionError::Write(format!("{:?}", e)))
    }
  }
}
