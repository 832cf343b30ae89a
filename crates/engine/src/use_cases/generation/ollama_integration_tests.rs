//! Live generation against a local Ollama server.
//!
//! ```bash
//! OLLAMA_BASE_URL=http://localhost:11434 OLLAMA_MODEL=llama3.2 \
//!     cargo test -p wizbattle-engine --lib ollama_integration -- --ignored --test-threads=1
//! ```

use std::sync::Arc;

use wizbattle_domain::{SamplingTable, SpellList};

use super::{GenerationClient, SpellPrompt};
use crate::infrastructure::ollama::{OllamaClient, DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL};
use crate::prompt_templates::PromptCatalog;
use crate::schemas::SchemaRegistry;

fn live_client() -> GenerationClient {
    let base_url =
        std::env::var("OLLAMA_BASE_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_BASE_URL.to_string());
    let model = std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string());

    GenerationClient::new(
        Arc::new(OllamaClient::new(&base_url, &model)),
        PromptCatalog::defaults(),
        SchemaRegistry::new(),
        SamplingTable::standard(),
    )
}

#[tokio::test]
#[ignore = "requires ollama"]
async fn wizard_then_spells_then_action() {
    let client = live_client();

    let wizard = client
        .generate_wizard_stats("A thunderstorm trapped in a jar")
        .await
        .expect("wizard generation failed");
    assert_ne!(wizard.primary_element, wizard.secondary_element);
    assert!(!wizard.combat_style.trim().is_empty());

    let spells = client
        .generate_spells(&SpellPrompt {
            description: "A thunderstorm trapped in a jar".to_string(),
            name: wizard.name.clone(),
            primary_element: wizard.primary_element.to_string(),
            secondary_element: wizard.secondary_element.to_string(),
            combat_style: wizard.combat_style.clone(),
        })
        .await
        .expect("spell generation failed");
    assert_eq!(spells.spells().len(), SpellList::LEN);

    let options: Vec<String> = spells
        .iter()
        .enumerate()
        .map(|(i, spell)| format!("{i}: {} ({})", spell.name, spell.spell_type))
        .collect();
    let choice = client
        .generate_action_choice(
            "You control a wizard in a duel. Pick exactly one numbered action.",
            &format!("Your health is low. Options:\n{}", options.join("\n")),
        )
        .await
        .expect("action choice failed");
    assert!(!choice.justification.is_empty());
}
