//! WizBattle domain types.
//!
//! Transient records built from one model response each: a wizard's stats,
//! the four spells that go with it, and a chosen combat action. Nothing here
//! performs I/O.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{ActionChoice, Spell, SpellList, WizardStats};
pub use error::DomainError;
pub use value_objects::{
    Element, GenerationKind, SamplingConfig, SamplingTable, SpellType, UnitScore,
    DEFAULT_KEEP_ALIVE, SPELL_STOP_MARKER,
};
