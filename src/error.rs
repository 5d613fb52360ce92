/// Error type for host calls and configuration

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("host call failed: {0}")]
    Host(String),

    #[error("malformed host payload: {0}")]
    Decode(#[from] serde_wasm_bindgen::Error),

    #[error("invalid panel config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for PanelError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        PanelError::Host(message)
    }
}

impl From<PanelError> for JsValue {
    fn from(error: PanelError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
