use super::buttons::{SwitchButtons, SwitchCallbacks};
use super::controller::{Applied, Switcher};
use super::preference::{DocumentRoot, LocalPreferenceStore, MediaColorScheme};
use super::theme_ctx::{ThemeCtx, ThemeCtxSub};
use super::themes::{ButtonKind, ThemeAttribute};
use crate::components::imports::*;
use gloo_events::EventListener;

type BrowserSwitcher = Switcher<LocalPreferenceStore, MediaColorScheme, DocumentRoot>;

// Renders nothing until the theme is resolved after the first render,
// so the page never flashes the default theme.
pub struct ThemeSwitch {
    switcher: BrowserSwitcher,
    theme_ctx: Option<ThemeCtxSub>,
    callbacks: SwitchCallbacks,
    // dropping it removes the listener
    scheme_listener: Option<EventListener>,
}

pub enum ThemeSwitchMsg {
    Resolve,
    ThemeContextUpdate(ThemeCtx),
    ToggleTheme,
    ToggleLight,
    ToggleDark,
    ToggleSystem,
    SystemSchemeChanged(bool),
}

#[derive(Properties, PartialEq, Default)]
pub struct ThemeSwitchProps {
    #[prop_or_default]
    pub attribute: ThemeAttribute,
    #[prop_or_default]
    pub btn_type: ButtonKind,
}

impl ThemeSwitch {
    // reports issues and hands the theme over to the provider
    fn publish(&self, applied: Applied) {
        for issue in &applied.issues {
            console::warn!(format!("theme switch: {issue}"));
        }

        if let Some(theme_ctx) = &self.theme_ctx {
            let state = theme_ctx.as_ref();
            if state.theme != applied.theme {
                state.upstream::<Self>(applied.theme);
            }
        }
    }
}

impl Component for ThemeSwitch {
    type Message = ThemeSwitchMsg;
    type Properties = ThemeSwitchProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link();

        Self {
            switcher: Switcher::new(
                LocalPreferenceStore,
                MediaColorScheme,
                DocumentRoot,
                ctx.props().attribute,
            ),
            theme_ctx: ThemeCtxSub::try_subscribe(ctx, Self::Message::ThemeContextUpdate),
            callbacks: SwitchCallbacks {
                toggle_theme: link.callback(|_| Self::Message::ToggleTheme),
                toggle_light: link.callback(|_| Self::Message::ToggleLight),
                toggle_dark: link.callback(|_| Self::Message::ToggleDark),
                toggle_system: link.callback(|_| Self::Message::ToggleSystem),
            },
            scheme_listener: None,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.switcher.is_resolved() {
            return html! {};
        }

        html! {
            <SwitchButtons
                btn_type={ctx.props().btn_type}
                theme={self.switcher.theme()}
                callbacks={self.callbacks.clone()}
            />
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Self::Message::Resolve);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let attribute = ctx.props().attribute;
        if attribute != old_props.attribute {
            console::log!(format!(
                "theme switch attribute: {} -> {}",
                old_props.attribute, attribute
            ));
            for issue in self.switcher.set_attribute(attribute) {
                console::warn!(format!("theme switch: {issue}"));
            }
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let applied = match msg {
            Self::Message::Resolve => {
                if self.switcher.is_resolved() {
                    return false;
                }

                let applied = self.switcher.resolve();
                console::log!(format!(
                    "theme resolved: {} ({})",
                    applied.theme, applied.mode
                ));

                let on_change = ctx.link().callback(Self::Message::SystemSchemeChanged);
                self.scheme_listener = match self.switcher.scheme().listen(on_change) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        console::warn!(format!("theme switch: not following OS changes: {e}"));
                        None
                    }
                };

                applied
            }
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                let theme = theme_ctx.theme;
                if let Some(sub) = self.theme_ctx.as_mut() {
                    sub.set(theme_ctx);
                }

                // a consumer changed the theme through the hook
                match self.switcher.context_changed(theme) {
                    Some(applied) => {
                        console::log!(format!("theme chosen from context: {theme}"));
                        applied
                    }
                    None => return false,
                }
            }
            Self::Message::ToggleTheme => self.switcher.toggle_theme(),
            Self::Message::ToggleLight => self.switcher.toggle_light(),
            Self::Message::ToggleDark => self.switcher.toggle_dark(),
            Self::Message::ToggleSystem => self.switcher.toggle_system(),
            Self::Message::SystemSchemeChanged(prefers_dark) => {
                console::log!(format!("OS color scheme changed, prefers dark: {prefers_dark}"));
                match self.switcher.system_changed(prefers_dark) {
                    Some(applied) => applied,
                    None => return false,
                }
            }
        };

        self.publish(applied);
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if self.scheme_listener.take().is_some() {
            console::log!("theme switch: stopped following OS changes");
        }
    }
}
