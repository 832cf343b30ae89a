//! Use cases - orchestration between the API and the model port.

pub mod generation;
pub mod validation;

pub use generation::{GenerationClient, GenerationError, SpellPrompt};
