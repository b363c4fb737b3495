pub mod buttons;
pub mod controller;
pub mod error;
pub mod icons;
pub mod preference;
pub mod styling;
pub mod theme_ctx;
pub mod themes;
pub mod toggle;

pub mod prelude {
    pub use super::buttons::{
        ButtonProps, ButtonView, Dark, DarkLight, Light, SwitchButtons, SwitchButtonsProps,
        SwitchCallbacks, System, WithSystem, WithSystemProps,
    };
    pub use super::error::ThemeError;
    pub use super::styling::ThemeStyles;
    pub use super::theme_ctx::{use_theme, ThemeCtx, ThemeUpdate, UseThemeHandle, WithTheme};
    pub use super::themes::{ButtonKind, Theme, ThemeAttribute, ThemeMode};
    pub use super::toggle::{ThemeSwitch, ThemeSwitchProps};
}
