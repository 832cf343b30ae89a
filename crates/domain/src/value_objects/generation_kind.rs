//! The kinds of structured content the engine asks a model to generate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generation kind.
///
/// Selects the system prompt, the output schema and the sampling
/// configuration for a model invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    WizardStats,
    SpellList,
    ActionChoice,
}

impl GenerationKind {
    pub const ALL: [GenerationKind; 3] = [Self::WizardStats, Self::SpellList, Self::ActionChoice];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WizardStats => "wizard_stats",
            Self::SpellList => "spell_list",
            Self::ActionChoice => "action_choice",
        }
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
