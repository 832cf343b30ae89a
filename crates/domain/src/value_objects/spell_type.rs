//! What a spell does when cast.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spell category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpellType {
    /// Reduces the enemy's health.
    Damage,
    /// Raises the caster's own attack and defense.
    Buff,
    /// Lowers the enemy's attack and defense.
    Debuff,
}

impl SpellType {
    pub const ALL: [SpellType; 3] = [Self::Damage, Self::Buff, Self::Debuff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Damage => "DAMAGE",
            Self::Buff => "BUFF",
            Self::Debuff => "DEBUFF",
        }
    }

    pub fn wire_names() -> Vec<&'static str> {
        Self::ALL.iter().map(SpellType::as_str).collect()
    }
}

impl fmt::Display for SpellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_type_wire_names() {
        assert_eq!(SpellType::wire_names(), vec!["DAMAGE", "BUFF", "DEBUFF"]);
        for spell_type in SpellType::ALL {
            let json = serde_json::to_string(&spell_type).unwrap();
            assert_eq!(json, format!("\"{spell_type}\""));
        }
    }

    #[test]
    fn test_spell_type_rejects_healing() {
        assert!(serde_json::from_str::<SpellType>("\"HEAL\"").is_err());
        assert!(serde_json::from_str::<SpellType>("\"damage\"").is_err());
    }
}
