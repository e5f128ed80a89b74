//! Shared helpers for the WASM API
//!
//! Serialization to and from `JsValue` with the error logged on the way out.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::MyInfoError;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from(MyInfoError::InvalidConfig(msg))
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from(MyInfoError::Serialization(msg))
    })
}

/// Log a controller error and hand it to JavaScript
pub fn to_js_error(e: MyInfoError) -> JsValue {
    log::error!("{}", e);
    JsValue::from(e)
}
