//! Thread-local home of the active theme.
//!
//! Iced view functions receive no theme argument, and threading one through
//! every helper would dominate their signatures. The whole UI runs on the
//! main thread, so the active [`ThemeConfig`] and its [`ResolvedColors`] live
//! in a thread-local instead, written by [`set_theme`] and read by
//! [`colors`] from anywhere in the view code.

use std::cell::RefCell;

use super::ThemeConfig;
use super::resolved::ResolvedColors;

struct ThemeContext {
    config: ThemeConfig,
    colors: ResolvedColors,
}

thread_local! {
    static THEME_CONTEXT: RefCell<ThemeContext> = RefCell::new(ThemeContext {
        config: ThemeConfig::default(),
        colors: ResolvedColors::default(),
    });
}

/// Install `config` as the active theme and re-resolve the color cache.
///
/// Called from `App::new` once settings are loaded, when the user changes the
/// theme mode, and when the OS reports an appearance change.
pub fn set_theme(config: ThemeConfig) {
    THEME_CONTEXT.with(|ctx| {
        let mut ctx = ctx.borrow_mut();
        ctx.config = config;
        ctx.colors = ResolvedColors::from_config(&config);
    });
}

/// The resolved colors of the active theme, by value.
pub fn colors() -> ResolvedColors {
    THEME_CONTEXT.with(|ctx| ctx.borrow().colors)
}

/// The active theme configuration, for building the Iced `Theme` itself.
pub fn current_config() -> ThemeConfig {
    THEME_CONTEXT.with(|ctx| ctx.borrow().config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    #[test]
    fn set_theme_updates_resolved_colors() {
        set_theme(ThemeConfig {
            mode: ThemeMode::Light,
            system_is_dark: false,
        });
        let light_bg = colors().background_primary;

        set_theme(ThemeConfig {
            mode: ThemeMode::Dark,
            system_is_dark: false,
        });
        let dark_bg = colors().background_primary;

        assert_ne!(light_bg, dark_bg);
        assert!(current_config().is_dark());

        // Restore the default so other tests on this thread see light mode.
        set_theme(ThemeConfig::default());
    }
}
