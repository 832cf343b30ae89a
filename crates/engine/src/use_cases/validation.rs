//! Request validation helpers, run before any model invocation.

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },
}

impl ValidationError {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Empty { field_name } => field_name,
        }
    }
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

/// Validate every `(value, field_name)` pair, failing on the first empty one.
pub fn require_all_non_empty<'a>(
    fields: impl IntoIterator<Item = (&'a str, &'static str)>,
) -> Result<(), ValidationError> {
    fields
        .into_iter()
        .try_for_each(|(value, field_name)| require_non_empty(value, field_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("A left-handed shadow", "description").is_ok());
        assert_eq!(
            require_non_empty("", "description"),
            Err(ValidationError::Empty {
                field_name: "description"
            })
        );
        assert!(require_non_empty(" \n\t", "description").is_err());
    }

    #[test]
    fn test_require_all_non_empty_reports_first_empty_field() {
        let err = require_all_non_empty([
            ("Sherlock Holmes", "description"),
            ("The Baker Street Magus", "name"),
            ("", "primary_element"),
            ("", "secondary_element"),
        ])
        .unwrap_err();
        assert_eq!(err.field_name(), "primary_element");
        assert_eq!(err.to_string(), "primary_element cannot be empty");
    }
}
