//! Dark-mode preference.
//!
//! A reactive `is_dark` flag plus a toggle. The user's explicit choice wins;
//! with no choice (`Auto`) the system preference decides. Choosing the same
//! scheme the system already prefers collapses back to `Auto`, so a later
//! system change is followed again.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::reactive::{ReadSignal, Signal};
use crate::traits::ColorSchemeSource;

/// User's color-scheme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSchemePreference {
    /// Follow the system preference.
    #[default]
    Auto,
    Light,
    Dark,
}

impl fmt::Display for ColorSchemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColorSchemePreference::Auto => "auto",
            ColorSchemePreference::Light => "light",
            ColorSchemePreference::Dark => "dark",
        };
        f.write_str(s)
    }
}

impl FromStr for ColorSchemePreference {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorSchemePreference::Auto),
            "light" => Ok(ColorSchemePreference::Light),
            "dark" => Ok(ColorSchemePreference::Dark),
            other => Err(ConfigError::UnknownColorScheme(other.to_string())),
        }
    }
}

/// Reactive dark-mode flag.
pub struct DarkMode {
    source: Rc<dyn ColorSchemeSource>,
    preference: ColorSchemePreference,
    is_dark: Signal<bool>,
}

impl DarkMode {
    pub fn new(source: Rc<dyn ColorSchemeSource>, preference: ColorSchemePreference) -> Self {
        let is_dark = resolve(preference, source.as_ref());
        Self {
            source,
            preference,
            is_dark: Signal::new(is_dark),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn signal(&self) -> ReadSignal<bool> {
        self.is_dark.reader()
    }

    pub fn preference(&self) -> ColorSchemePreference {
        self.preference
    }

    /// Flip the scheme. Returns the new `is_dark` value.
    pub fn toggle(&mut self) -> bool {
        let next = !self.is_dark();
        self.set_dark(next);
        next
    }

    /// Pick a scheme explicitly.
    pub fn set_dark(&mut self, dark: bool) {
        self.preference = if dark == self.source.prefers_dark() {
            ColorSchemePreference::Auto
        } else if dark {
            ColorSchemePreference::Dark
        } else {
            ColorSchemePreference::Light
        };
        tracing::debug!(dark, preference = %self.preference, "color scheme set");
        self.is_dark.set_if_changed(dark);
    }

    pub fn set_preference(&mut self, preference: ColorSchemePreference) {
        self.preference = preference;
        self.is_dark
            .set_if_changed(resolve(preference, self.source.as_ref()));
    }

    /// Re-read the system preference. Only matters in `Auto` mode.
    pub fn refresh_system_preference(&mut self) {
        if self.preference == ColorSchemePreference::Auto {
            self.is_dark.set_if_changed(self.source.prefers_dark());
        }
    }
}

impl fmt::Debug for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DarkMode")
            .field("preference", &self.preference)
            .field("is_dark", &self.is_dark())
            .finish()
    }
}

fn resolve(preference: ColorSchemePreference, source: &dyn ColorSchemeSource) -> bool {
    match preference {
        ColorSchemePreference::Auto => source.prefers_dark(),
        ColorSchemePreference::Light => false,
        ColorSchemePreference::Dark => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockColorScheme;
    use std::cell::Cell;

    fn dark_mode(system_dark: bool, pref: ColorSchemePreference) -> (Rc<MockColorScheme>, DarkMode) {
        let source = Rc::new(MockColorScheme::new(system_dark));
        let mode = DarkMode::new(source.clone(), pref);
        (source, mode)
    }

    #[test]
    fn test_auto_follows_system() {
        let (_, mode) = dark_mode(true, ColorSchemePreference::Auto);
        assert!(mode.is_dark());
        let (_, mode) = dark_mode(false, ColorSchemePreference::Auto);
        assert!(!mode.is_dark());
    }

    #[test]
    fn test_explicit_preference_overrides_system() {
        let (_, mode) = dark_mode(true, ColorSchemePreference::Light);
        assert!(!mode.is_dark());
    }

    #[test]
    fn test_toggle_flips_and_notifies() {
        let (_, mut mode) = dark_mode(false, ColorSchemePreference::Auto);
        let seen = Rc::new(Cell::new(None));
        let s = seen.clone();
        let _sub = mode.signal().subscribe(move |v| s.set(Some(*v)));

        assert!(mode.toggle());
        assert_eq!(seen.get(), Some(true));
        assert_eq!(mode.preference(), ColorSchemePreference::Dark);

        assert!(!mode.toggle());
        assert_eq!(seen.get(), Some(false));
        // Back to what the system prefers
        assert_eq!(mode.preference(), ColorSchemePreference::Auto);
    }

    #[test]
    fn test_refresh_only_applies_in_auto() {
        let (source, mut mode) = dark_mode(false, ColorSchemePreference::Auto);
        source.set_prefers_dark(true);
        mode.refresh_system_preference();
        assert!(mode.is_dark());

        mode.set_preference(ColorSchemePreference::Light);
        source.set_prefers_dark(false);
        source.set_prefers_dark(true);
        mode.refresh_system_preference();
        assert!(!mode.is_dark());
    }

    #[test]
    fn test_preference_from_str() {
        assert_eq!("DARK".parse::<ColorSchemePreference>().unwrap(), ColorSchemePreference::Dark);
        assert!(matches!(
            "sepia".parse::<ColorSchemePreference>(),
            Err(ConfigError::UnknownColorScheme(_))
        ));
    }
}
