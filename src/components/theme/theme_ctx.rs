// The provider owns the theme and is the only writer.
//
// Consumers read it from the context and ask for changes through the upstream
// callback, the provider then re-renders everyone subscribed.

use super::themes::Theme;
use crate::components::imports::*;

/// A requested theme change: either a value or an updater of the current one.
#[derive(derivative::Derivative, Clone)]
#[derivative(Debug)]
pub enum ThemeUpdate {
    Set(Theme),
    With(#[derivative(Debug = "ignore")] Rc<dyn Fn(Theme) -> Theme>),
}

impl ThemeUpdate {
    pub fn apply(&self, current: Theme) -> Theme {
        match self {
            Self::Set(theme) => *theme,
            Self::With(f) => f(current),
        }
    }
}

impl From<Theme> for ThemeUpdate {
    fn from(theme: Theme) -> Self {
        Self::Set(theme)
    }
}

#[derive(derivative::Derivative)]
#[derivative(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    upstream_cb: Callback<ThemeUpdate>,
}

impl ThemeState {
    // logs who asked for the change
    pub fn upstream<COMP: Component>(&self, update: impl Into<ThemeUpdate>) {
        let update = update.into();
        console::log!(format!(
            "{}\n\n  {:?}\n\t->\n  {:?}",
            std::any::type_name::<COMP>(),
            self.theme,
            &update,
        ));
        self.upstream_cb.emit(update);
    }
}

pub type ThemeCtx = Rc<ThemeState>;

pub struct WithTheme {
    theme: Theme,
    upstream_cb: Callback<ThemeUpdate>,
}

pub struct ThemeCtxSub {
    ctx: ThemeCtx,
    // keep handle for component rerender after the theme changes
    _ctx_handle: ContextHandle<ThemeCtx>,
}

impl AsRef<ThemeState> for ThemeCtxSub {
    fn as_ref(&self) -> &ThemeState {
        &self.ctx
    }
}

impl ThemeCtxSub {
    /// `None` when the component is not rendered under [`WithTheme`].
    pub fn try_subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Option<Self>
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx.link().context(ctx.link().callback(f))?;
        Some(Self { ctx, _ctx_handle })
    }

    pub fn set(&mut self, ctx: ThemeCtx) {
        self.ctx = ctx;
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    Update(ThemeUpdate),
}

impl Component for WithTheme {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme: Theme::default(),
            upstream_cb: ctx.link().callback(Msg::Update),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = Rc::new(ThemeState {
            theme: self.theme,
            upstream_cb: self.upstream_cb.clone(),
        });

        html! {
            <ContextProvider<ThemeCtx> context={state}>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::Update(update) => {
                let theme = update.apply(self.theme);
                if theme == self.theme {
                    return false;
                }
                console::log!(format!("theme changed: {} -> {}", self.theme, theme));
                self.theme = theme;
                true
            }
        }
    }
}

/// Handle returned by [`use_theme`].
#[derive(Clone)]
pub struct UseThemeHandle {
    pub theme: Theme,
    set_theme: Callback<ThemeUpdate>,
}

impl UseThemeHandle {
    pub fn set_theme(&self, update: impl Into<ThemeUpdate>) {
        self.set_theme.emit(update.into());
    }

    pub fn update<F>(&self, f: F)
    where
        F: Fn(Theme) -> Theme + 'static,
    {
        self.set_theme(ThemeUpdate::With(Rc::new(f)));
    }

    pub fn toggle(&self) {
        self.update(Theme::toggled);
    }
}

impl PartialEq for UseThemeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme && self.set_theme == other.set_theme
    }
}

/// Current theme and a way to change it.
///
/// Under [`WithTheme`] this reads and writes the shared theme. Without a provider the
/// theme lives in the calling component, starting at `light`.
#[hook]
pub fn use_theme() -> UseThemeHandle {
    let theme_ctx = use_context::<ThemeCtx>();
    let local = use_state(Theme::default);

    match theme_ctx {
        Some(state) => UseThemeHandle {
            theme: state.theme,
            set_theme: state.upstream_cb.clone(),
        },
        None => {
            let theme = *local;
            let set_theme = Callback::from(move |update: ThemeUpdate| {
                local.set(update.apply(*local));
            });
            UseThemeHandle { theme, set_theme }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_the_theme() {
        let update = ThemeUpdate::from(Theme::Dark);
        assert_eq!(update.apply(Theme::Light), Theme::Dark);
        assert_eq!(update.apply(Theme::Dark), Theme::Dark);
    }

    #[test]
    fn updater_sees_the_current_theme() {
        let update = ThemeUpdate::With(Rc::new(Theme::toggled));
        assert_eq!(update.apply(Theme::Light), Theme::Dark);
        assert_eq!(update.apply(Theme::Dark), Theme::Light);
    }

    #[test]
    fn updater_is_hidden_from_debug_output() {
        let update = ThemeUpdate::With(Rc::new(|_: Theme| Theme::Dark));
        assert_eq!(format!("{:?}", update), "With");
        assert_eq!(format!("{:?}", ThemeUpdate::Set(Theme::Dark)), "Set(Dark)");
    }

    #[test]
    fn states_compare_by_theme_only() {
        let a = ThemeState {
            theme: Theme::Dark,
            upstream_cb: Callback::noop(),
        };
        let b = ThemeState {
            theme: Theme::Dark,
            upstream_cb: Callback::noop(),
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            ThemeState {
                theme: Theme::Light,
                ..b.clone()
            }
        );
    }
}
