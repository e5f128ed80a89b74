//! Error types for the profile page controller
//!
//! Every fallible operation returns `MyInfoError`. At the `#[wasm_bindgen]`
//! boundary it is turned into a `JsValue` string.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MyInfoError {
    /// `window.daum.Postcode` is not loaded on the page
    #[error("address lookup widget is not loaded")]
    WidgetUnavailable,

    /// Genre endpoint answered with a non-2xx status
    #[error("genre save rejected with status {status}")]
    GenreSaveRejected { status: u16 },

    /// Network failure or request construction failure
    #[error("transport error: {0}")]
    Transport(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// A required element was not found at mount time
    #[error("required element not found: {0}")]
    MissingElement(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `HTMLFormElement.submit()` threw
    #[error("form submission failed: {0}")]
    Submission(String),

    /// The handle was used before `DOMContentLoaded` bound the page
    #[error("profile page is not mounted yet")]
    NotMounted,

    #[error("save requested while edit mode is off")]
    NotEditing,

    #[error("a save is already in progress")]
    SaveInFlight,
}

impl From<serde_json::Error> for MyInfoError {
    fn from(e: serde_json::Error) -> Self {
        MyInfoError::Serialization(e.to_string())
    }
}

impl From<MyInfoError> for JsValue {
    fn from(e: MyInfoError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MyInfoError>;
