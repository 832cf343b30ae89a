//! Sampling (decoding) configuration for model invocations.
//!
//! Values are chosen per [`GenerationKind`] by the operator, never by the
//! caller of a generation endpoint. Creative kinds (wizards, spells) run at a
//! moderate temperature with nucleus and min-p trimming; action choice runs
//! cooler with a top-k cutoff so the pick over a small option set is decisive.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::GenerationKind;

/// How long the model host should keep the model loaded between requests.
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(10 * 60);

/// Stop marker appended to spell generation.
pub const SPELL_STOP_MARKER: &str = "<END>";

/// Decoding knobs for a single invocation.
///
/// `None` leaves the knob at the model host's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: Option<f32>,
    /// Nucleus cutoff.
    pub top_p: Option<f32>,
    /// Minimum-probability cutoff relative to the most likely token.
    pub min_p: Option<f32>,
    /// Candidate pool size.
    pub top_k: Option<u32>,
    /// Mirostat mode (0 disables it).
    pub mirostat: Option<u8>,
    pub repeat_penalty: Option<f32>,
    /// Lookback window for `repeat_penalty`, in tokens.
    pub repeat_last_n: Option<u32>,
    /// Context window size, in tokens.
    pub context_window: Option<u32>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    #[serde(default)]
    pub stop_sequences: Vec<String>,
    /// Session keep-alive for the loaded model.
    pub keep_alive: Option<Duration>,
}

impl SamplingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_min_p(mut self, min_p: f32) -> Self {
        self.min_p = Some(min_p);
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_mirostat(mut self, mode: u8) -> Self {
        self.mirostat = Some(mode);
        self
    }

    pub fn with_repeat_penalty(mut self, penalty: f32, last_n: u32) -> Self {
        self.repeat_penalty = Some(penalty);
        self.repeat_last_n = Some(last_n);
        self
    }

    pub fn with_context_window(mut self, tokens: u32) -> Self {
        self.context_window = Some(tokens);
        self
    }

    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    pub fn with_stop_sequence(mut self, stop: impl Into<String>) -> Self {
        self.stop_sequences.push(stop.into());
        self
    }

    pub fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }

    /// Wizard stats: varied but schema-valid, short output.
    pub fn wizard_stats() -> Self {
        Self::new()
            .with_temperature(0.65)
            .with_top_p(0.92)
            .with_min_p(0.07)
            .with_mirostat(0)
            .with_repeat_penalty(1.1, 128)
            .with_context_window(3000)
            .with_max_tokens(220)
            .with_keep_alive(DEFAULT_KEEP_ALIVE)
    }

    /// Spell list: same creativity as wizard stats, longer output, explicit stop.
    pub fn spell_list() -> Self {
        Self::new()
            .with_temperature(0.65)
            .with_top_p(0.92)
            .with_min_p(0.07)
            .with_repeat_penalty(1.1, 128)
            .with_context_window(3000)
            .with_max_tokens(315)
            .with_stop_sequence(SPELL_STOP_MARKER)
            .with_keep_alive(DEFAULT_KEEP_ALIVE)
    }

    /// Action choice: low randomness, bounded candidate pool.
    pub fn action_choice() -> Self {
        Self::new()
            .with_temperature(0.4)
            .with_top_p(0.9)
            .with_top_k(40)
            .with_max_tokens(200)
            .with_keep_alive(DEFAULT_KEEP_ALIVE)
    }
}

/// Sampling configuration keyed by generation kind.
///
/// Built once at startup and injected into the generation client, so new
/// kinds or retuned values never touch invocation logic.
#[derive(Debug, Clone, Default)]
pub struct SamplingTable {
    configs: HashMap<GenerationKind, SamplingConfig>,
}

impl SamplingTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The production table covering every [`GenerationKind`].
    pub fn standard() -> Self {
        Self::new()
            .with(GenerationKind::WizardStats, SamplingConfig::wizard_stats())
            .with(GenerationKind::SpellList, SamplingConfig::spell_list())
            .with(GenerationKind::ActionChoice, SamplingConfig::action_choice())
    }

    /// Insert or replace the configuration for `kind`.
    pub fn with(mut self, kind: GenerationKind, config: SamplingConfig) -> Self {
        self.configs.insert(kind, config);
        self
    }

    pub fn get(&self, kind: GenerationKind) -> Option<&SamplingConfig> {
        self.configs.get(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_covers_every_kind() {
        let table = SamplingTable::standard();
        for kind in GenerationKind::ALL {
            assert!(table.get(kind).is_some(), "missing sampling config for {kind}");
        }
    }

    #[test]
    fn creative_kinds_use_nucleus_and_min_p_trimming() {
        for config in [SamplingConfig::wizard_stats(), SamplingConfig::spell_list()] {
            assert_eq!(config.temperature, Some(0.65));
            assert_eq!(config.top_p, Some(0.92));
            assert_eq!(config.min_p, Some(0.07));
            assert_eq!(config.top_k, None);
            assert_eq!(config.repeat_penalty, Some(1.1));
            assert_eq!(config.repeat_last_n, Some(128));
            assert_eq!(config.context_window, Some(3000));
        }
    }

    #[test]
    fn spell_list_allows_longer_output_and_stops_on_marker() {
        let wizard = SamplingConfig::wizard_stats();
        let spells = SamplingConfig::spell_list();

        assert_eq!(wizard.max_tokens, Some(220));
        assert_eq!(spells.max_tokens, Some(315));
        assert!(wizard.stop_sequences.is_empty());
        assert_eq!(spells.stop_sequences, vec![SPELL_STOP_MARKER.to_string()]);
    }

    #[test]
    fn action_choice_favors_determinism() {
        let action = SamplingConfig::action_choice();
        let wizard = SamplingConfig::wizard_stats();

        assert!(action.temperature < wizard.temperature);
        assert_eq!(action.top_k, Some(40));
        assert_eq!(action.min_p, None);
        assert_eq!(action.max_tokens, Some(200));
    }

    #[test]
    fn every_standard_config_keeps_the_model_warm() {
        let table = SamplingTable::standard();
        for kind in GenerationKind::ALL {
            assert_eq!(table.get(kind).and_then(|c| c.keep_alive), Some(DEFAULT_KEEP_ALIVE));
        }
    }

    #[test]
    fn with_replaces_existing_entry() {
        let table = SamplingTable::standard().with(
            GenerationKind::ActionChoice,
            SamplingConfig::new().with_temperature(0.0),
        );
        assert_eq!(
            table.get(GenerationKind::ActionChoice).and_then(|c| c.temperature),
            Some(0.0)
        );
    }

    #[test]
    fn empty_table_has_no_entries() {
        assert!(SamplingTable::new().get(GenerationKind::WizardStats).is_none());
    }
}
