//! Wizard stat block generated from a short description.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Element, UnitScore};

/// A generated wizard.
///
/// Every numeric stat is a [`UnitScore`]; deserialization names the stat
/// that fell outside `[0, 1]`. [`WizardStats::validate`] covers the
/// cross-field rules that serde cannot express.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WizardStatsRecord")]
pub struct WizardStats {
    pub name: String,
    pub primary_element: Element,
    pub secondary_element: Element,
    /// Damage potential
    pub attack: UnitScore,
    /// Damage reduction
    pub defense: UnitScore,
    /// Max HP potential
    pub health: UnitScore,
    /// Heal per action potential
    pub healing: UnitScore,
    /// Starting and per-round mana potential
    pub arcane: UnitScore,
    /// One sentence on how the wizard approaches a fight
    pub combat_style: String,
}

impl WizardStats {
    /// Check the invariants that hold across fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("wizard name cannot be empty"));
        }
        if self.combat_style.trim().is_empty() {
            return Err(DomainError::validation("combat_style cannot be empty"));
        }
        if self.primary_element == self.secondary_element {
            return Err(DomainError::validation(format!(
                "primary_element and secondary_element must differ (both {})",
                self.primary_element
            )));
        }
        Ok(())
    }
}

/// Wire shape of [`WizardStats`] before the stats are range-checked.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WizardStatsRecord {
    name: String,
    primary_element: Element,
    secondary_element: Element,
    attack: f64,
    defense: f64,
    health: f64,
    healing: f64,
    arcane: f64,
    combat_style: String,
}

impl TryFrom<WizardStatsRecord> for WizardStats {
    type Error = DomainError;

    fn try_from(record: WizardStatsRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            name: record.name,
            primary_element: record.primary_element,
            secondary_element: record.secondary_element,
            attack: UnitScore::for_field("attack", record.attack)?,
            defense: UnitScore::for_field("defense", record.defense)?,
            health: UnitScore::for_field("health", record.health)?,
            healing: UnitScore::for_field("healing", record.healing)?,
            arcane: UnitScore::for_field("arcane", record.arcane)?,
            combat_style: record.combat_style,
        })
    }
}
