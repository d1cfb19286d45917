use leptos::{Effect, RwSignal};

use crate::{
    domain::{logging::LogComponent, theme::Theme},
    log_debug,
    reactive::Observable,
};

/// Current theme of the dashboard, kept in memory for the session.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    current: Observable<Theme>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self { current: Observable::new(initial) }
    }

    pub fn current_theme(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle_theme(&self) {
        self.current.update(|theme| *theme = theme.toggled());
        log_debug!(
            LogComponent::Application("ThemeStore"),
            "🎨 Theme toggled to {}",
            self.current.get_untracked()
        );
    }

    pub fn set_theme(&self, theme: Theme) {
        self.current.set(theme);
        log_debug!(LogComponent::Application("ThemeStore"), "🎨 Theme set to {}", theme);
    }

    /// Observe the theme; `callback` runs now and after every change.
    pub fn subscribe(&self, callback: impl Fn(Theme) + 'static) -> Effect<()> {
        self.current.subscribe(move |theme| callback(*theme))
    }

    pub fn signal(&self) -> RwSignal<Theme> {
        self.current.signal()
    }
}
