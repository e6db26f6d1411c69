//! Visitor theme preference.
//!
//! The only cross-session state the website keeps is a light/dark theme
//! choice persisted per browser. The context object makes the lifecycle
//! explicit: initialize from the persisted value (or the light default),
//! mark dirty on change, and hand the pending value to whatever storage
//! the caller flushes to (the API layer uses a cookie).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported color themes. Light is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Theme preference with an explicit init/flush lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeContext {
    current: Theme,
    dirty: bool,
}

impl ThemeContext {
    /// Initializes from a persisted value. Unrecognized or absent values
    /// fall back to the light default and leave nothing to flush.
    pub fn init(persisted: Option<&str>) -> Self {
        let current = persisted
            .and_then(|value| Theme::from_str(value).ok())
            .unwrap_or_default();
        Self {
            current,
            dirty: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Changes the preference; a no-op change does not mark the context
    /// dirty.
    pub fn set(&mut self, theme: Theme) {
        if self.current != theme {
            self.current = theme;
            self.dirty = true;
        }
    }

    pub fn toggle(&mut self) {
        let next = match self.current {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set(next);
    }

    /// The value to persist, if any change is pending. Clears the dirty
    /// flag.
    pub fn take_flush(&mut self) -> Option<Theme> {
        if self.dirty {
            self.dirty = false;
            Some(self.current)
        } else {
            None
        }
    }
}
