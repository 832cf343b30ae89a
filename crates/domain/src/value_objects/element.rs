//! Element value object - the closed set of magical elements a wizard or spell
//! can draw on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Magical element.
///
/// Serialized as the uppercase name (e.g. `"FIRE"`), which is also the form
/// the generation schemas enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Element {
    Fire,
    Ice,
    Storm,
    Life,
    Death,
    Myth,
    Balance,
}

impl Element {
    /// Every element, in declaration order.
    pub const ALL: [Element; 7] = [
        Self::Fire,
        Self::Ice,
        Self::Storm,
        Self::Life,
        Self::Death,
        Self::Myth,
        Self::Balance,
    ];

    /// Returns the uppercase wire name (e.g., "FIRE", "STORM").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fire => "FIRE",
            Self::Ice => "ICE",
            Self::Storm => "STORM",
            Self::Life => "LIFE",
            Self::Death => "DEATH",
            Self::Myth => "MYTH",
            Self::Balance => "BALANCE",
        }
    }

    /// Wire names of every element, for schema enums.
    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Element::as_str).collect()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
