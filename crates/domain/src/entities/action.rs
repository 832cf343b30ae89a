//! Combat action picked by the model.

use serde::{Deserialize, Serialize};

/// Which of the caller's options the model chose, and why.
///
/// The options themselves live in the caller's prompt, so `action_index` is
/// only known to be non-negative here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionChoice {
    pub action_index: u32,
    pub justification: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_action_choice() {
        let choice: ActionChoice =
            serde_json::from_str(r#"{"action_index": 2, "justification": "Finish them."}"#)
                .unwrap();
        assert_eq!(choice.action_index, 2);
        assert_eq!(choice.justification, "Finish them.");
    }

    #[test]
    fn test_rejects_negative_index() {
        let result =
            serde_json::from_str::<ActionChoice>(r#"{"action_index": -1, "justification": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_fractional_index() {
        let result =
            serde_json::from_str::<ActionChoice>(r#"{"action_index": 1.5, "justification": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_missing_justification() {
        assert!(serde_json::from_str::<ActionChoice>(r#"{"action_index": 0}"#).is_err());
    }
}
