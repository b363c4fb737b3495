// Page-level configuration of the bundled app
//
// Read from an optional JSON script element in the host page:
//
//   <script type="application/json" id="theme-switch-conf">
//       { "attribute": "class", "btnType": "light-icon" }
//   </script>

use crate::components::imports::*;
use crate::components::theme::prelude::{ButtonKind, ThemeAttribute, ThemeError};
use serde::Deserialize;

pub static CONF_ELEMENT_ID: &str = "theme-switch-conf";

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SwitchConf {
    pub attribute: ThemeAttribute,
    pub btn_type: ButtonKind,
}

impl SwitchConf {
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(|e| ThemeError::Conf(e.to_string()))
    }

    /// Falls back to defaults when the element is missing or malformed.
    pub fn derive() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONF_ELEMENT_ID))
            .and_then(|element| element.text_content());

        let Some(raw) = raw else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(conf) => {
                console::log!(format!("theme switch conf: {:?}", conf));
                conf
            }
            Err(e) => {
                console::warn!(format!("{e}, using defaults"));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok_eq};

    #[test]
    fn empty_object_is_default() {
        assert_ok_eq!(SwitchConf::from_json("{}"), SwitchConf::default());
    }

    #[test]
    fn default_conf() {
        let conf = SwitchConf::default();
        assert_eq!(conf.attribute, ThemeAttribute::DataTheme);
        assert_eq!(conf.btn_type, ButtonKind::WithSystem);
    }

    #[test]
    fn all_fields() {
        assert_ok_eq!(
            SwitchConf::from_json(r#"{ "attribute": "class", "btnType": "light-icon" }"#),
            SwitchConf {
                attribute: ThemeAttribute::Class,
                btn_type: ButtonKind::LightIcon,
            }
        );
    }

    #[test]
    fn partial_conf_keeps_other_defaults() {
        assert_ok_eq!(
            SwitchConf::from_json(r#"{ "btnType": "light-icon" }"#),
            SwitchConf {
                attribute: ThemeAttribute::DataTheme,
                btn_type: ButtonKind::LightIcon,
            }
        );
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_err!(SwitchConf::from_json(r#"{ "attribute": "style" }"#));
        assert_err!(SwitchConf::from_json(r#"{ "btnType": "dropdown" }"#));
        assert_err!(SwitchConf::from_json(r#"{ "theme": "dark" }"#));
    }

    #[test]
    fn malformed_json_is_a_conf_error() {
        assert!(matches!(
            SwitchConf::from_json("attribute=class"),
            Err(ThemeError::Conf(_))
        ));
    }
}
