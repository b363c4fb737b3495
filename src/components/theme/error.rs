use gloo_utils::errors::JsError;
use wasm_bindgen::JsValue;

/// Non-fatal problems met while resolving or applying a theme.
///
/// None of them stop the switch: the worst outcome is a theme that is not persisted
/// or not reflected on the page.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("storage entry `{key}` is not accessible: {reason}")]
    Storage { key: String, reason: String },

    #[error("media query `{query}` failed: {reason}")]
    MediaQuery { query: String, reason: String },

    #[error("document root update failed: {0}")]
    Document(String),

    #[error("{0} is not a supported theme. Use either `light` or `dark`.")]
    UnknownTheme(String),

    #[error("{0} is not a supported theme mode. Use either `explicit` or `system`.")]
    UnknownMode(String),

    #[error("{0} is not a supported theme attribute. Use either `class` or `data-theme`.")]
    UnknownAttribute(String),

    #[error("{0} is not a supported button type. Use either `light-icon` or `with-system`.")]
    UnknownButtonKind(String),

    #[error("invalid theme switch configuration: {0}")]
    Conf(String),
}

impl ThemeError {
    pub(crate) fn storage(key: &str, value: JsValue) -> Self {
        Self::Storage {
            key: key.to_owned(),
            reason: js_reason(value),
        }
    }

    pub(crate) fn media_query(query: &str, value: JsValue) -> Self {
        Self::MediaQuery {
            query: query.to_owned(),
            reason: js_reason(value),
        }
    }

    pub(crate) fn document(value: JsValue) -> Self {
        Self::Document(js_reason(value))
    }
}

fn js_reason(value: JsValue) -> String {
    match JsError::try_from(value) {
        Ok(error) => error.to_string(),
        Err(not_error) => not_error.to_string(),
    }
}
