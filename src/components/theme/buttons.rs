#![allow(non_snake_case)]

use super::icons::Icon;
use super::themes::{ButtonKind, Theme};
use crate::components::imports::*;

/// Everything a theme button shows, derived from the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView {
    pub id: &'static str,
    pub label: AttrValue,
    pub tooltip: &'static str,
    pub icon: Icon,
}

impl ButtonView {
    fn new(id: &'static str, theme: Theme, tooltip: &'static str, icon: Icon) -> Self {
        Self {
            id,
            label: format!("{theme} mode").into(),
            tooltip,
            icon,
        }
    }

    pub fn system(theme: Theme) -> Self {
        Self::new("theme-system", theme, "System", Icon::System)
    }

    pub fn light(theme: Theme) -> Self {
        Self::new("theme-light", theme, "Light", Icon::Light)
    }

    pub fn dark(theme: Theme) -> Self {
        Self::new("theme-dark", theme, "Dark", Icon::Dark)
    }

    /// The tooltip names the theme a click switches to.
    pub fn dark_light(theme: Theme) -> Self {
        let tooltip = match theme {
            Theme::Dark => "To Light",
            Theme::Light => "To Dark",
        };
        Self::new("dark-light", theme, tooltip, Icon::DarkLight)
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub theme: Theme,
    pub onactivate: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct ThemeButtonProps {
    view: ButtonView,
    onactivate: Callback<()>,
}

#[function_component]
fn ThemeButton(props: &ThemeButtonProps) -> Html {
    let ButtonView {
        id,
        label,
        tooltip,
        icon,
    } = props.view.clone();
    let onclick = props.onactivate.reform(|_: MouseEvent| ());

    html! {
        <button id={id} aria-label={label} {onclick} class="theme-btn" type="button">
            <span class="theme-btn__group">
                <div class="theme-btn__tooltip">
                    { tooltip }
                    <svg class="theme-btn__tooltip-arrow" viewBox="0 0 255 255">
                        <polygon points="0,0 127.5,127.5 255,0"/>
                    </svg>
                </div>
                <span class="theme-btn__icon">{ icon.html() }</span>
            </span>
        </button>
    }
}

#[function_component]
pub fn System(props: &ButtonProps) -> Html {
    html! { <ThemeButton view={ButtonView::system(props.theme)} onactivate={props.onactivate.clone()}/> }
}

#[function_component]
pub fn Light(props: &ButtonProps) -> Html {
    html! { <ThemeButton view={ButtonView::light(props.theme)} onactivate={props.onactivate.clone()}/> }
}

#[function_component]
pub fn Dark(props: &ButtonProps) -> Html {
    html! { <ThemeButton view={ButtonView::dark(props.theme)} onactivate={props.onactivate.clone()}/> }
}

#[function_component]
pub fn DarkLight(props: &ButtonProps) -> Html {
    html! { <ThemeButton view={ButtonView::dark_light(props.theme)} onactivate={props.onactivate.clone()}/> }
}

#[derive(Properties, PartialEq)]
pub struct WithSystemProps {
    pub theme: Theme,
    pub onsystem: Callback<()>,
    pub onlight: Callback<()>,
    pub ondark: Callback<()>,
}

#[function_component]
pub fn WithSystem(props: &WithSystemProps) -> Html {
    let theme = props.theme;

    html! {
        <div class="theme-picker">
            <System theme={theme} onactivate={props.onsystem.clone()}/>
            <Light theme={theme} onactivate={props.onlight.clone()}/>
            <Dark theme={theme} onactivate={props.ondark.clone()}/>
        </div>
    }
}

/// Toggle callbacks of a switch, created once so the buttons stay memoized.
#[derive(Clone, PartialEq)]
pub struct SwitchCallbacks {
    pub toggle_theme: Callback<()>,
    pub toggle_light: Callback<()>,
    pub toggle_dark: Callback<()>,
    pub toggle_system: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SwitchButtonsProps {
    pub btn_type: ButtonKind,
    pub theme: Theme,
    pub callbacks: SwitchCallbacks,
}

/// One button subtree per `btn_type`.
#[function_component]
pub fn SwitchButtons(props: &SwitchButtonsProps) -> Html {
    let theme = props.theme;
    let callbacks = &props.callbacks;

    match props.btn_type {
        ButtonKind::LightIcon => html! {
            <DarkLight theme={theme} onactivate={callbacks.toggle_theme.clone()}/>
        },
        ButtonKind::WithSystem => html! {
            <WithSystem
                theme={theme}
                onsystem={callbacks.toggle_system.clone()}
                onlight={callbacks.toggle_light.clone()}
                ondark={callbacks.toggle_dark.clone()}
            />
        },
    }
}
