//! Schema-constrained content generation.
//!
//! Every operation follows the same steps: assemble a system + user message
//! pair, bind the kind's output schema and sampling configuration, invoke the
//! model once, then parse the returned text into a typed record. A parse or
//! shape mismatch is a fault; nothing is partially recovered or retried.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use wizbattle_domain::{ActionChoice, GenerationKind, SamplingTable, SpellList, WizardStats};

use crate::infrastructure::ports::{FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse};
use crate::prompt_templates::PromptCatalog;
use crate::schemas::SchemaRegistry;
use crate::use_cases::validation::{require_non_empty, ValidationError};


#[cfg(test)]
mod ollama_integration_tests;

/// Inputs for spell generation, taken from a previously generated wizard.
#[derive(Debug, Clone)]
pub struct SpellPrompt {
    pub description: String,
    pub name: String,
    pub primary_element: String,
    pub secondary_element: String,
    pub combat_style: String,
}

impl SpellPrompt {
    /// Render as labelled `key: value` lines for the user message.
    pub fn to_user_message(&self) -> String {
        format!(
            "wizard_description: {}\nwizard_name: {}\ncombat_style: {}\nprimary_element: {}\nsecondary_element: {}",
            self.description,
            self.name,
            self.combat_style,
            self.primary_element,
            self.secondary_element
        )
    }
}

/// Errors raised by the generation client.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// A prompt was empty; the model was not called.
    #[error("invalid generation request: {0}")]
    InvalidRequest(#[from] ValidationError),

    /// The model host could not be reached or failed.
    #[error(transparent)]
    Invocation(#[from] LlmError),

    /// The model answered with text that is not a valid record of the bound shape.
    #[error("malformed {kind} output: {reason}")]
    MalformedOutput {
        kind: GenerationKind,
        reason: String,
    },

    /// The sampling table has no entry for this kind.
    #[error("no sampling configuration for {0}")]
    Unconfigured(GenerationKind),
}

impl GenerationError {
    fn malformed(kind: GenerationKind, reason: impl ToString) -> Self {
        Self::MalformedOutput {
            kind,
            reason: reason.to_string(),
        }
    }
}

/// Turns prompts into validated records via the model port.
pub struct GenerationClient {
    llm: Arc<dyn LlmPort>,
    prompts: PromptCatalog,
    schemas: SchemaRegistry,
    sampling: SamplingTable,
}

impl GenerationClient {
    pub fn new(
        llm: Arc<dyn LlmPort>,
        prompts: PromptCatalog,
        schemas: SchemaRegistry,
        sampling: SamplingTable,
    ) -> Self {
        Self {
            llm,
            prompts,
            schemas,
            sampling,
        }
    }

    /// Generate a wizard's stats from a free-text description.
    pub async fn generate_wizard_stats(
        &self,
        description: &str,
    ) -> Result<WizardStats, GenerationError> {
        let kind = GenerationKind::WizardStats;
        let stats: WizardStats = self
            .invoke(kind, self.prompts.wizard_system_prompt(), description)
            .await?;

        stats
            .validate()
            .map_err(|e| GenerationError::malformed(kind, e))?;

        Ok(stats)
    }

    /// Generate the four spells for a wizard.
    pub async fn generate_spells(&self, prompt: &SpellPrompt) -> Result<SpellList, GenerationError> {
        let kind = GenerationKind::SpellList;
        let spells: SpellList = self
            .invoke(kind, self.prompts.spells_system_prompt(), &prompt.to_user_message())
            .await?;

        // Asked of the model in the prompt, reported here, not enforced.
        if !spells.has_damage_spell() {
            tracing::warn!(wizard = %prompt.name, "Generated spell list has no DAMAGE spell");
        }
        if !spells.all_distinct() {
            tracing::warn!(wizard = %prompt.name, "Generated spell list contains duplicate spells");
        }

        Ok(spells)
    }

    /// Choose a combat action.
    ///
    /// Both prompts come from the caller, which encodes the battle state and
    /// the numbered options itself.
    pub async fn generate_action_choice(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<ActionChoice, GenerationError> {
        self.invoke(GenerationKind::ActionChoice, system_prompt, user_prompt)
            .await
    }

    async fn invoke<T: DeserializeOwned>(
        &self,
        kind: GenerationKind,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<T, GenerationError> {
        let request = self.build_request(kind, system_prompt, user_prompt)?;

        tracing::debug!(
            kind = %kind,
            temperature = ?request.sampling.temperature,
            max_tokens = ?request.sampling.max_tokens,
            "Invoking model"
        );

        let response = self.llm.generate(request).await.map_err(|e| {
            tracing::warn!(kind = %kind, error = %e, "Model invocation failed");
            GenerationError::from(e)
        })?;

        if let Some(usage) = response.usage {
            tracing::info!(
                kind = %kind,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Model generation completed"
            );
        } else {
            tracing::info!(kind = %kind, "Model generation completed");
        }

        parse_output(kind, &response).inspect_err(|e| {
            tracing::warn!(kind = %kind, error = %e, "Rejected model output");
        })
    }

    fn build_request(
        &self,
        kind: GenerationKind,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<LlmRequest, GenerationError> {
        require_non_empty(system_prompt, "system_prompt")?;
        require_non_empty(user_prompt, "user_prompt")?;

        let sampling = self
            .sampling
            .get(kind)
            .cloned()
            .ok_or(GenerationError::Unconfigured(kind))?;

        Ok(LlmRequest::new(kind, self.schemas.get(kind).clone())
            .with_system_prompt(system_prompt)
            .with_user_message(user_prompt)
            .with_sampling(sampling))
    }
}

fn parse_output<T: DeserializeOwned>(
    kind: GenerationKind,
    response: &LlmResponse,
) -> Result<T, GenerationError> {
    serde_json::from_str(response.content.trim()).map_err(|e| {
        if response.finish_reason == FinishReason::Length {
            GenerationError::malformed(kind, format!("{e} (output truncated at token limit)"))
        } else {
            GenerationError::malformed(kind, e)
        }
    })
}
