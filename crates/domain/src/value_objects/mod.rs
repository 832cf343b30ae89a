//! Value objects shared by the generated records.

mod element;
mod generation_kind;
mod sampling;
mod spell_type;
mod unit_score;

pub use element::Element;
pub use generation_kind::GenerationKind;
pub use sampling::{SamplingConfig, SamplingTable, DEFAULT_KEEP_ALIVE, SPELL_STOP_MARKER};
pub use spell_type::SpellType;
pub use unit_score::UnitScore;
