//! Spells generated for a wizard.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Element, SpellType, UnitScore};

/// A single generated spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpellRecord")]
pub struct Spell {
    pub name: String,
    /// One sentence describing how the spell works in-world
    pub description: String,
    pub spell_type: SpellType,
    pub element: Element,
    pub strength: UnitScore,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SpellRecord {
    name: String,
    description: String,
    spell_type: SpellType,
    element: Element,
    strength: f64,
}

impl TryFrom<SpellRecord> for Spell {
    type Error = DomainError;

    fn try_from(record: SpellRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            name: record.name,
            description: record.description,
            spell_type: record.spell_type,
            element: record.element,
            strength: UnitScore::for_field("strength", record.strength)?,
        })
    }
}

/// Exactly [`SpellList::LEN`] spells, in generation order.
///
/// Serialized as a plain JSON array. The prompt also asks the model for at
/// least one damage spell and four distinct spells; those are reported by
/// [`SpellList::has_damage_spell`] and [`SpellList::all_distinct`] but not
/// enforced on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Spell>", into = "Vec<Spell>")]
pub struct SpellList(Vec<Spell>);

impl SpellList {
    pub const LEN: usize = 4;

    pub fn new(spells: Vec<Spell>) -> Result<Self, DomainError> {
        if spells.len() != Self::LEN {
            return Err(DomainError::WrongCount {
                what: "spells",
                expected: Self::LEN,
                actual: spells.len(),
            });
        }
        Ok(Self(spells))
    }

    pub fn spells(&self) -> &[Spell] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spell> {
        self.0.iter()
    }

    pub fn has_damage_spell(&self) -> bool {
        self.0.iter().any(|s| s.spell_type == SpellType::Damage)
    }

    /// True when no two spells share a name (case-insensitive) or a description.
    pub fn all_distinct(&self) -> bool {
        let names: HashSet<String> = self
            .0
            .iter()
            .map(|s| s.name.trim().to_lowercase())
            .collect();
        let descriptions: HashSet<String> = self
            .0
            .iter()
            .map(|s| s.description.trim().to_lowercase())
            .collect();
        names.len() == self.0.len() && descriptions.len() == self.0.len()
    }
}

impl TryFrom<Vec<Spell>> for SpellList {
    type Error = DomainError;

    fn try_from(spells: Vec<Spell>) -> Result<Self, Self::Error> {
        Self::new(spells)
    }
}

impl From<SpellList> for Vec<Spell> {
    fn from(list: SpellList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a SpellList {
    type Item = &'a Spell;
    type IntoIter = std::slice::Iter<'a, Spell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
