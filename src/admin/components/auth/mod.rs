//! Authentication components

mod signin;

pub use signin::SignInPage;
