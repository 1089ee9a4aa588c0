//! Validation Module
//!
//! Declarative field-rule evaluation for incoming payloads.
//!
//! Rules for one field run in order and every failure is recorded; a payload
//! is rejected with the full list of violations rather than the first one.

use crate::error::FieldError;

// == Validator ==
/// Collects rule violations across all fields of one payload.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    /// Creates an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts rule evaluation for a named field.
    pub fn field(&mut self, name: &'static str) -> FieldRules<'_> {
        FieldRules {
            name,
            errors: &mut self.errors,
        }
    }

    /// Returns `Ok(())` when no rule failed, otherwise all collected errors.
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

// == Field Rules ==
/// Ordered rule evaluation for a single field.
pub struct FieldRules<'a> {
    name: &'static str,
    errors: &'a mut Vec<FieldError>,
}

impl FieldRules<'_> {
    /// Records `message` when `ok` is false. Evaluation continues so later
    /// rules for the same field still run.
    pub fn rule(self, ok: bool, message: &str) -> Self {
        if !ok {
            self.errors.push(FieldError::new(self.name, message));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_passes() {
        let v = Validator::new();
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_passing_rules_collect_nothing() {
        let mut v = Validator::new();
        v.field("quantityOnHand")
            .rule(true, "must be an integer")
            .rule(true, "must be at least 0");
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_failed_rule_records_field_and_message() {
        let mut v = Validator::new();
        v.field("description").rule(false, "Description is required");

        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "description");
        assert_eq!(errors[0].message, "Description is required");
    }

    #[test]
    fn test_all_failures_collected_across_fields() {
        let mut v = Validator::new();
        v.field("partNumber").rule(false, "Part number is required");
        v.field("description")
            .rule(false, "Description is required")
            .rule(false, "Description must be at most 200 characters long");

        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "partNumber");
        assert_eq!(errors[1].field, "description");
        assert_eq!(errors[2].field, "description");
    }
}
