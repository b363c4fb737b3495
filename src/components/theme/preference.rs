// Browser facilities the switch synchronizes with.
//
// The traits keep the switch logic away from `web_sys`, so it runs off-browser too.
// Every browser implementation reports a missing window instead of panicking.

use super::error::ThemeError;
use crate::components::imports::*;
use gloo_events::EventListener;
use web_sys::{Element, MediaQueryList, Storage};

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Persistent key-value storage holding raw strings.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn store(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// OS-level color scheme preference.
pub trait ColorScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError>;
}

/// Element the theme is exposed on, the document root in a browser.
pub trait ThemeTarget {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;
    fn add_class(&self, class: &str) -> Result<(), ThemeError>;
    fn remove_class(&self, class: &str) -> Result<(), ThemeError>;
}

/// `window.localStorage`, values are stored verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn storage(key: &str) -> Result<Storage, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        window
            .local_storage()
            .map_err(|e| ThemeError::storage(key, e))?
            .ok_or_else(|| ThemeError::Storage {
                key: key.to_owned(),
                reason: "local storage is disabled".into(),
            })
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage(key)?
            .get_item(key)
            .map_err(|e| ThemeError::storage(key, e))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage(key)?
            .set_item(key, value)
            .map_err(|e| ThemeError::storage(key, e))
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaColorScheme;

impl MediaColorScheme {
    fn query() -> Result<MediaQueryList, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        window
            .match_media(DARK_SCHEME_QUERY)
            .map_err(|e| ThemeError::media_query(DARK_SCHEME_QUERY, e))?
            .ok_or_else(|| ThemeError::MediaQuery {
                query: DARK_SCHEME_QUERY.to_owned(),
                reason: "media queries are not supported".into(),
            })
    }

    /// Emits the new match state on every `change` event.
    ///
    /// The listener is removed when the returned guard is dropped.
    pub fn listen(&self, on_change: Callback<bool>) -> Result<EventListener, ThemeError> {
        let query = Self::query()?;
        let target = query.clone();

        Ok(EventListener::new(&target, "change", move |_event| {
            on_change.emit(query.matches());
        }))
    }
}

impl ColorScheme for MediaColorScheme {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        Ok(Self::query()?.matches())
    }
}

/// `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn element() -> Result<Element, ThemeError> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or(ThemeError::NoWindow)
    }
}

impl ThemeTarget for DocumentRoot {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        Self::element()?
            .set_attribute(name, value)
            .map_err(ThemeError::document)
    }

    fn add_class(&self, class: &str) -> Result<(), ThemeError> {
        Self::element()?
            .class_list()
            .add_1(class)
            .map_err(ThemeError::document)
    }

    fn remove_class(&self, class: &str) -> Result<(), ThemeError> {
        Self::element()?
            .class_list()
            .remove_1(class)
            .map_err(ThemeError::document)
    }
}
