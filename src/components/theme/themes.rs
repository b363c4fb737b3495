use super::error::ThemeError;
use crate::components::imports::*;
use derive_more::Display;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Theme {
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl AsRef<str> for Theme {
    fn as_ref(&self) -> &str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl TryFrom<&str> for Theme {
    type Error = ThemeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Whether the active theme was picked by the user or mirrors the OS color scheme.
///
/// Only [`ThemeMode::System`] lets OS color-scheme changes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum ThemeMode {
    #[display(fmt = "explicit")]
    Explicit,
    #[display(fmt = "system")]
    System,
}

impl AsRef<str> for ThemeMode {
    fn as_ref(&self) -> &str {
        match self {
            Self::Explicit => "explicit",
            Self::System => "system",
        }
    }
}

impl TryFrom<&str> for ThemeMode {
    type Error = ThemeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "explicit" => Ok(Self::Explicit),
            "system" => Ok(Self::System),
            other => Err(ThemeError::UnknownMode(other.to_owned())),
        }
    }
}

/// How the theme is exposed on the document root.
///
/// `data-theme` is always written; `Class` also keeps a class named after the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeAttribute {
    #[display(fmt = "class")]
    Class,
    #[display(fmt = "data-theme")]
    DataTheme,
}

impl Default for ThemeAttribute {
    fn default() -> Self {
        Self::DataTheme
    }
}

impl TryFrom<&str> for ThemeAttribute {
    type Error = ThemeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "class" => Ok(Self::Class),
            "data-theme" => Ok(Self::DataTheme),
            other => Err(ThemeError::UnknownAttribute(other.to_owned())),
        }
    }
}

/// Which button composition the switch renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonKind {
    /// A single button flipping between light and dark.
    #[display(fmt = "light-icon")]
    LightIcon,
    /// System, light and dark buttons side by side.
    #[display(fmt = "with-system")]
    WithSystem,
}

impl Default for ButtonKind {
    fn default() -> Self {
        Self::WithSystem
    }
}

impl TryFrom<&str> for ButtonKind {
    type Error = ThemeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "light-icon" => Ok(Self::LightIcon),
            "with-system" => Ok(Self::WithSystem),
            other => Err(ThemeError::UnknownButtonKind(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub id: Theme,
    pub bg_color: AttrValue,
    pub contrast_bg_color: AttrValue,
    pub text_color: AttrValue,
    pub accent_color: AttrValue,
    pub tooltip_bg_color: AttrValue,
    pub tooltip_text_color: AttrValue,
}

struct RawPalette<'a> {
    pub id: Theme,
    pub bg_color: &'a str,
    pub contrast_bg_color: &'a str,
    pub text_color: &'a str,
    pub accent_color: &'a str,
    pub tooltip_bg_color: &'a str,
    pub tooltip_text_color: &'a str,
}

impl<'a> RawPalette<'a> {
    fn light() -> Self {
        let dark = "#212529";
        Self {
            id: Theme::Light,
            bg_color: "#FEFCF3",
            contrast_bg_color: "#efede6",
            text_color: dark,
            accent_color: "#f59e0b",
            tooltip_bg_color: "black",
            tooltip_text_color: "white",
        }
    }

    fn dark() -> Self {
        let light = "white";
        Self {
            id: Theme::Dark,
            bg_color: "#1B2430",
            contrast_bg_color: "#11171e",
            text_color: light,
            accent_color: "#f59e0b",
            tooltip_bg_color: "black",
            tooltip_text_color: light,
        }
    }
}

impl<'a> From<RawPalette<'a>> for Palette {
    fn from(palette: RawPalette) -> Self {
        Palette {
            id: palette.id,
            bg_color: palette.bg_color.to_owned().into(),
            contrast_bg_color: palette.contrast_bg_color.to_owned().into(),
            text_color: palette.text_color.to_owned().into(),
            accent_color: palette.accent_color.to_owned().into(),
            tooltip_bg_color: palette.tooltip_bg_color.to_owned().into(),
            tooltip_text_color: palette.tooltip_text_color.to_owned().into(),
        }
    }
}

impl From<Theme> for Palette {
    fn from(value: Theme) -> Self {
        match value {
            Theme::Light => RawPalette::light(),
            Theme::Dark => RawPalette::dark(),
        }
        .into()
    }
}
