//! API client for communicating with the WeCraft API

use async_trait::async_trait;
use gloo_net::http::Request;
use tracing::debug;

use crate::admin::config::AdminConfig;
use crate::admin::errors::ApiError;
use crate::admin::forms::{Credentials, SignInRequest};
use crate::admin::signin::AuthClient;
use crate::admin::state::AuthResult;

const SIGN_IN_PATH: &str = "admins/signin";

/// `AdminsService` over `fetch`
#[derive(Clone, Debug)]
pub struct AdminsService {
  sign_in_url: String,
}

impl AdminsService {
  pub fn new(config: &AdminConfig) -> Self {
    Self {
      sign_in_url: config.endpoint(SIGN_IN_PATH),
    }
  }
}

#[async_trait(?Send)]
impl AuthClient for AdminsService {
  async fn sign_in(
    &self,
    credentials: &Credentials,
    challenge_token: Option<&str>,
  ) -> Result<AuthResult, ApiError> {
    let body = SignInRequest {
      credentials,
      recaptcha_token: challenge_token,
    };
    let req = Request::post(&self.sign_in_url)
      .json(&body)
      .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = req
      .send()
      .await
      .map_err(|e| ApiError::Network(e.to_string()))?;

    debug!(status = resp.status(), url = %self.sign_in_url, "sign-in response");
    if !resp.ok() {
      let body = resp.text().await.unwrap_or_default();
      return Err(ApiError::rejected(resp.status(), &body));
    }
    resp
      .json::<AuthResult>()
      .await
      .map_err(|e| ApiError::Decode(e.to_string()))
  }
}
