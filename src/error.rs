use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while touching the live page. None of them are fatal: callers
/// log and carry on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("element not found: {0}")]
    ElementMissing(String),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_element() {
        let err = UiError::ElementMissing("#navbar".to_string());
        assert_eq!(err.to_string(), "element not found: #navbar");
    }
}
