//! WizBattle Engine library.
//!
//! Generates wizards, spells and combat decisions for WizBattle by asking a
//! local model for schema-constrained JSON.
//!
//! ## Structure
//!
//! - `use_cases/` - Generation client and request validation
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `prompt_templates` / `schemas` - What gets sent with each generation kind

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod prompt_templates;
pub mod schemas;
pub mod use_cases;

pub use app::App;
