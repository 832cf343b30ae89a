//! JSON Schemas bound to each generation kind.
//!
//! These are sent to the model host as the structured-output format, so the
//! shape is enforced while tokens are sampled. Parsing on our side still
//! re-checks everything the schema says.

use serde_json::{json, Value};
use wizbattle_domain::{Element, GenerationKind, SpellList, SpellType};

/// Schema for a single wizard stat block.
pub fn wizard_stats_schema() -> Value {
    let elements = Element::wire_names();
    json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "primary_element": {"type": "string", "enum": elements},
            "secondary_element": {"type": "string", "enum": elements},
            "attack": unit_number(),
            "defense": unit_number(),
            "health": unit_number(),
            "healing": unit_number(),
            "arcane": unit_number(),
            "combat_style": {"type": "string"}
        },
        "required": [
            "name", "primary_element", "secondary_element",
            "attack", "defense", "health", "healing", "arcane",
            "combat_style"
        ],
        "additionalProperties": false
    })
}

/// Schema for the array of exactly four spells.
pub fn spell_list_schema() -> Value {
    json!({
        "type": "array",
        "minItems": SpellList::LEN,
        "maxItems": SpellList::LEN,
        "items": {
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "description": {"type": "string"},
                "spell_type": {"type": "string", "enum": SpellType::wire_names()},
                "element": {"type": "string", "enum": Element::wire_names()},
                "strength": unit_number()
            },
            "required": ["name", "description", "spell_type", "element", "strength"],
            "additionalProperties": false
        }
    })
}

/// Schema for a chosen action.
pub fn action_choice_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "action_index": {"type": "integer", "minimum": 0},
            "justification": {"type": "string"}
        },
        "required": ["action_index", "justification"],
        "additionalProperties": false
    })
}

fn unit_number() -> Value {
    json!({"type": "number", "minimum": 0, "maximum": 1})
}

/// Schemas resolved once at startup, one per kind.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    wizard_stats: Value,
    spell_list: Value,
    action_choice: Value,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            wizard_stats: wizard_stats_schema(),
            spell_list: spell_list_schema(),
            action_choice: action_choice_schema(),
        }
    }

    pub fn get(&self, kind: GenerationKind) -> &Value {
        match kind {
            GenerationKind::WizardStats => &self.wizard_stats,
            GenerationKind::SpellList => &self.spell_list,
            GenerationKind::ActionChoice => &self.action_choice,
        }
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(schema: &Value) -> Vec<&str> {
        schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect()
    }

    #[test]
    fn wizard_schema_requires_every_field() {
        let schema = wizard_stats_schema();
        let properties = schema["properties"].as_object().unwrap();
        let required = required(&schema);

        assert_eq!(properties.len(), 9);
        for key in properties.keys() {
            assert!(required.contains(&key.as_str()), "{key} should be required");
        }
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn wizard_schema_bounds_stats_and_enumerates_elements() {
        let schema = wizard_stats_schema();
        for stat in ["attack", "defense", "health", "healing", "arcane"] {
            assert_eq!(schema["properties"][stat]["minimum"], 0);
            assert_eq!(schema["properties"][stat]["maximum"], 1);
        }
        assert_eq!(
            schema["properties"]["primary_element"]["enum"],
            json!(["FIRE", "ICE", "STORM", "LIFE", "DEATH", "MYTH", "BALANCE"])
        );
    }

    #[test]
    fn spell_schema_fixes_length_at_four() {
        let schema = spell_list_schema();
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["minItems"], 4);
        assert_eq!(schema["maxItems"], 4);
        assert_eq!(
            schema["items"]["properties"]["spell_type"]["enum"],
            json!(["DAMAGE", "BUFF", "DEBUFF"])
        );
    }

    #[test]
    fn action_schema_requires_non_negative_integer() {
        let schema = action_choice_schema();
        assert_eq!(schema["properties"]["action_index"]["type"], "integer");
        assert_eq!(schema["properties"]["action_index"]["minimum"], 0);
        assert_eq!(required(&schema), vec!["action_index", "justification"]);
    }

    #[test]
    fn registry_returns_schema_matching_kind() {
        let registry = SchemaRegistry::new();
        assert_eq!(registry.get(GenerationKind::WizardStats), &wizard_stats_schema());
        assert_eq!(registry.get(GenerationKind::SpellList), &spell_list_schema());
        assert_eq!(registry.get(GenerationKind::ActionChoice), &action_choice_schema());
    }
}
