//! View selector state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which collection the presentation layer is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Pending tasks.
    #[default]
    Active,
    /// History of every created task.
    Added,
    /// Deleted tasks awaiting purge.
    Deleted,
}

impl View {
    /// All views in tab order.
    pub const ALL: [View; 3] = [View::Active, View::Added, View::Deleted];

    /// Stable lowercase id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Added => "added",
            Self::Deleted => "deleted",
        }
    }

    /// User-facing tab title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Active => "Active Tasks",
            Self::Added => "Added Items",
            Self::Deleted => "Deleted Items",
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ViewParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == normalized)
            .ok_or(ViewParseError(normalized))
    }
}

/// Unknown view name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParseError(pub String);

impl Display for ViewParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown view `{}`; expected active|added|deleted",
            self.0
        )
    }
}

impl Error for ViewParseError {}

/// Currently visible view. Starts at `View::Active`.
///
/// Any view may switch to any other; switching has no other effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewSelector {
    current: View,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Switches to `view` and returns the previously selected view.
    pub fn select(&mut self, view: View) -> View {
        std::mem::replace(&mut self.current, view)
    }
}
