//! Invisible reCAPTCHA v2 challenge
//!
//! `index.html` loads `api.js?render=explicit`. The widget is rendered lazily
//! into the element handed to [`Recaptcha::attach`] on the first execution;
//! each execution resolves with the token passed to the widget callback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use leptos::{component, create_node_ref, html, logging, view, IntoView};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::admin::errors::ChallengeError;
use crate::admin::signin::ChallengeProvider;

const EXPIRED: &str = "expired";

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = render)]
  fn grecaptcha_render(container: &web_sys::HtmlElement, params: &Object) -> Result<JsValue, JsValue>;

  #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = execute)]
  fn grecaptcha_execute(widget_id: &JsValue) -> Result<(), JsValue>;

  #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = reset)]
  fn grecaptcha_reset(widget_id: &JsValue) -> Result<(), JsValue>;
}

struct Pending {
  resolve: Function,
  reject: Function,
}

#[derive(Default)]
struct Inner {
  site_key: String,
  container: RefCell<Option<web_sys::HtmlElement>>,
  widget_id: RefCell<Option<JsValue>>,
  pending: RefCell<Option<Pending>>,
  callbacks: RefCell<Vec<Closure<dyn FnMut(JsValue)>>>,
}

impl Inner {
  fn settle(&self, outcome: Result<JsValue, JsValue>) {
    let Some(pending) = self.pending.borrow_mut().take() else {
      return;
    };
    let _ = match outcome {
      Ok(token) => pending.resolve.call1(&JsValue::NULL, &token),
      Err(reason) => pending.reject.call1(&JsValue::NULL, &reason),
    };
  }
}

/// Handle on the page's invisible reCAPTCHA widget
#[derive(Clone)]
pub struct Recaptcha {
  inner: Rc<Inner>,
}

impl Recaptcha {
  /// An empty site key gives a handle whose executions are skipped
  pub fn new(site_key: &str) -> Self {
    Self {
      inner: Rc::new(Inner {
        site_key: site_key.trim().to_string(),
        ..Default::default()
      }),
    }
  }

  pub fn is_enabled(&self) -> bool {
    !self.inner.site_key.is_empty()
  }

  pub fn attach(&self, container: &web_sys::HtmlElement) {
    *self.inner.container.borrow_mut() = Some(container.clone());
  }

  fn callback(&self, on_call: fn(&Inner, JsValue)) -> Closure<dyn FnMut(JsValue)> {
    let weak: Weak<Inner> = Rc::downgrade(&self.inner);
    Closure::new(move |value: JsValue| {
      if let Some(inner) = weak.upgrade() {
        on_call(&inner, value);
      }
    })
  }

  fn widget_id(&self) -> Result<Option<JsValue>, ChallengeError> {
    if let Some(id) = self.inner.widget_id.borrow().as_ref() {
      return Ok(Some(id.clone()));
    }
    let Some(container) = self.inner.container.borrow().clone() else {
      return Ok(None);
    };

    let on_token = self.callback(|inner, token| inner.settle(Ok(token)));
    let on_expired = self.callback(|inner, _| inner.settle(Err(EXPIRED.into())));
    let on_error = self.callback(|inner, _| inner.settle(Err("widget error".into())));

    let params = Object::new();
    let set = |key: &str, value: &JsValue| {
      Reflect::set(&params, &JsValue::from_str(key), value).map(|_| ())
    };
    set("sitekey", &JsValue::from_str(&self.inner.site_key))
      .and_then(|_| set("size", &JsValue::from_str("invisible")))
      .and_then(|_| set("callback", on_token.as_ref()))
      .and_then(|_| set("expired-callback", on_expired.as_ref()))
      .and_then(|_| set("error-callback", on_error.as_ref()))
      .map_err(|e| ChallengeError::Widget(format!("{:?}", e)))?;

    let id = grecaptcha_render(&container, &params).map_err(|_| ChallengeError::Unavailable)?;
    self
      .inner
      .callbacks
      .borrow_mut()
      .extend([on_token, on_expired, on_error]);
    *self.inner.widget_id.borrow_mut() = Some(id.clone());
    Ok(Some(id))
  }
}

#[async_trait(?Send)]
impl ChallengeProvider for Recaptcha {
  async fn execute(&self) -> Result<Option<String>, ChallengeError> {
    if !self.is_enabled() {
      return Ok(None);
    }
    let Some(widget_id) = self.widget_id()? else {
      return Ok(None);
    };

    let inner = Rc::clone(&self.inner);
    let promise = Promise::new(&mut |resolve, reject| {
      *inner.pending.borrow_mut() = Some(Pending { resolve, reject });
    });
    if grecaptcha_execute(&widget_id).is_err() {
      self.inner.pending.borrow_mut().take();
      return Err(ChallengeError::Unavailable);
    }

    match JsFuture::from(promise).await {
      Ok(token) => Ok(token.as_string()),
      Err(reason) if reason.as_string().as_deref() == Some(EXPIRED) => Err(ChallengeError::Expired),
      Err(reason) => Err(ChallengeError::Widget(
        reason.as_string().unwrap_or_else(|| format!("{:?}", reason)),
      )),
    }
  }

  fn reset(&self) {
    self.inner.pending.borrow_mut().take();
    if let Some(id) = self.inner.widget_id.borrow().as_ref() {
      if let Err(e) = grecaptcha_reset(id) {
        logging::warn!("reCAPTCHA reset failed: {:?}", e);
      }
    }
  }
}

/// Mount point of the invisible widget
#[component]
pub fn RecaptchaWidget(recaptcha: Recaptcha) -> impl IntoView {
  let node_ref = create_node_ref::<html::Div>();
  node_ref.on_load(move |el| recaptcha.attach(&el));

  view! { <div class="recaptcha" node_ref=node_ref></div> }
}
