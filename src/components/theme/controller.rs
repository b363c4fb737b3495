use super::error::ThemeError;
use super::preference::{ColorScheme, PreferenceStore, ThemeTarget};
use super::themes::{Theme, ThemeAttribute, ThemeMode};

pub const STORAGE_KEY: &str = "theme-preference";
pub const MODE_STORAGE_KEY: &str = "theme-preference-mode";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Mount gate of the switch: it turns `Resolved` once and stays there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Unresolved,
    Resolved { theme: Theme, mode: ThemeMode },
}

/// Result of a resolve or toggle.
///
/// `issues` lists what could not be read, persisted or applied along the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    pub theme: Theme,
    pub mode: ThemeMode,
    pub issues: Vec<ThemeError>,
}

/// Keeps the stored preference, the theme target and the resolved theme in lockstep.
pub struct Switcher<S, C, T> {
    store: S,
    scheme: C,
    target: T,
    attribute: ThemeAttribute,
    resolution: Resolution,
    // theme class this switcher put on the target, removed before the next one is added
    applied_class: Option<Theme>,
}

impl<S, C, T> Switcher<S, C, T>
where
    S: PreferenceStore,
    C: ColorScheme,
    T: ThemeTarget,
{
    pub fn new(store: S, scheme: C, target: T, attribute: ThemeAttribute) -> Self {
        Self {
            store,
            scheme,
            target,
            attribute,
            resolution: Resolution::Unresolved,
            applied_class: None,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.resolution, Resolution::Resolved { .. })
    }

    /// Resolved theme, `light` until the first resolution.
    pub fn theme(&self) -> Theme {
        match self.resolution {
            Resolution::Resolved { theme, .. } => theme,
            Resolution::Unresolved => Theme::default(),
        }
    }

    pub fn mode(&self) -> Option<ThemeMode> {
        match self.resolution {
            Resolution::Resolved { mode, .. } => Some(mode),
            Resolution::Unresolved => None,
        }
    }

    pub fn scheme(&self) -> &C {
        &self.scheme
    }

    pub fn attribute(&self) -> ThemeAttribute {
        self.attribute
    }

    /// Takes effect on the next apply. Leaving `class` drops the class added so far.
    pub fn set_attribute(&mut self, attribute: ThemeAttribute) -> Vec<ThemeError> {
        let mut issues = Vec::new();
        if self.attribute == attribute {
            return issues;
        }

        if attribute != ThemeAttribute::Class {
            if let Some(previous) = self.applied_class.take() {
                if let Err(e) = self.target.remove_class(previous.as_ref()) {
                    issues.push(e);
                }
            }
        }

        self.attribute = attribute;
        issues
    }

    /// Picks the initial theme and applies it.
    ///
    /// A stored explicit choice wins, a stored `system` mode or a missing preference
    /// defers to the OS color scheme, and `light` is the last resort.
    /// Once resolved, further calls have no side effects.
    pub fn resolve(&mut self) -> Applied {
        if let Resolution::Resolved { theme, mode } = self.resolution {
            return Applied {
                theme,
                mode,
                issues: Vec::new(),
            };
        }

        let mut issues = Vec::new();
        let (theme, mode) = self.preferred(&mut issues);
        self.apply(theme, mode, issues)
    }

    pub fn toggle_theme(&mut self) -> Applied {
        self.choose(self.theme().toggled())
    }

    pub fn toggle_light(&mut self) -> Applied {
        self.choose(Theme::Light)
    }

    pub fn toggle_dark(&mut self) -> Applied {
        self.choose(Theme::Dark)
    }

    /// Snapshots the OS color scheme and follows it from now on.
    pub fn toggle_system(&mut self) -> Applied {
        let mut issues = Vec::new();
        let theme = self.system_theme_or_default(&mut issues);
        self.apply(theme, ThemeMode::System, issues)
    }

    /// Explicit choice, OS changes are ignored afterwards.
    pub fn choose(&mut self, theme: Theme) -> Applied {
        self.apply(theme, ThemeMode::Explicit, Vec::new())
    }

    /// Handles a theme set through the context by another component.
    ///
    /// `None` before resolution and for the switch's own change coming back.
    pub fn context_changed(&mut self, theme: Theme) -> Option<Applied> {
        if !self.is_resolved() || theme == self.theme() {
            return None;
        }
        Some(self.choose(theme))
    }

    /// Handles an OS color scheme change. Returns `None` unless the switch follows the OS.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Applied> {
        match self.resolution {
            Resolution::Resolved {
                mode: ThemeMode::System,
                ..
            } => Some(self.apply(
                Theme::from_prefers_dark(prefers_dark),
                ThemeMode::System,
                Vec::new(),
            )),
            _ => None,
        }
    }

    fn preferred(&self, issues: &mut Vec<ThemeError>) -> (Theme, ThemeMode) {
        let Some(stored) = self.stored_theme(issues) else {
            return (self.system_theme_or_default(issues), ThemeMode::System);
        };

        match self.stored_mode(issues) {
            ThemeMode::Explicit => (stored, ThemeMode::Explicit),
            ThemeMode::System => match self.system_theme() {
                Ok(theme) => (theme, ThemeMode::System),
                Err(e) => {
                    issues.push(e);
                    (stored, ThemeMode::System)
                }
            },
        }
    }

    fn stored_theme(&self, issues: &mut Vec<ThemeError>) -> Option<Theme> {
        match self.store.load(STORAGE_KEY) {
            Ok(Some(value)) => match Theme::try_from(value.as_str()) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    issues.push(e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                issues.push(e);
                None
            }
        }
    }

    // a theme stored without a mode was chosen explicitly
    fn stored_mode(&self, issues: &mut Vec<ThemeError>) -> ThemeMode {
        match self.store.load(MODE_STORAGE_KEY) {
            Ok(Some(value)) => ThemeMode::try_from(value.as_str()).unwrap_or_else(|e| {
                issues.push(e);
                ThemeMode::Explicit
            }),
            Ok(None) => ThemeMode::Explicit,
            Err(e) => {
                issues.push(e);
                ThemeMode::Explicit
            }
        }
    }

    fn system_theme(&self) -> Result<Theme, ThemeError> {
        self.scheme.prefers_dark().map(Theme::from_prefers_dark)
    }

    fn system_theme_or_default(&self, issues: &mut Vec<ThemeError>) -> Theme {
        self.system_theme().unwrap_or_else(|e| {
            issues.push(e);
            Theme::default()
        })
    }

    fn apply(&mut self, theme: Theme, mode: ThemeMode, mut issues: Vec<ThemeError>) -> Applied {
        if self.attribute == ThemeAttribute::Class {
            if let Some(previous) = self.applied_class.filter(|previous| *previous != theme) {
                if let Err(e) = self.target.remove_class(previous.as_ref()) {
                    issues.push(e);
                }
            }
            if let Err(e) = self.target.add_class(theme.as_ref()) {
                issues.push(e);
            }
            self.applied_class = Some(theme);
        }

        let results = [
            self.target.set_attribute(THEME_ATTRIBUTE, theme.as_ref()),
            self.store.store(STORAGE_KEY, theme.as_ref()),
            self.store.store(MODE_STORAGE_KEY, mode.as_ref()),
        ];
        issues.extend(results.into_iter().filter_map(Result::err));

        self.resolution = Resolution::Resolved { theme, mode };

        Applied {
            theme,
            mode,
            issues,
        }
    }
}
