//! Application state and composition.

use std::sync::Arc;

use wizbattle_domain::SamplingTable;

use crate::infrastructure::ports::LlmPort;
use crate::prompt_templates::PromptCatalog;
use crate::schemas::SchemaRegistry;
use crate::use_cases::GenerationClient;

/// Main application state.
///
/// Immutable after startup and shared by every request.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub generation: Arc<GenerationClient>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(llm: Arc<dyn LlmPort>, prompts: PromptCatalog, sampling: SamplingTable) -> Self {
        let generation = Arc::new(GenerationClient::new(
            llm,
            prompts,
            SchemaRegistry::new(),
            sampling,
        ));

        Self {
            use_cases: UseCases { generation },
        }
    }
}
