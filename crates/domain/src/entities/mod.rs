//! Records produced by a single generation call.

mod action;
mod spell;
mod wizard;

pub use action::ActionChoice;
pub use spell::{Spell, SpellList};
pub use wizard::WizardStats;
