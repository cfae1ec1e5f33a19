//! Declarative field rules for account writes. First violation wins.

use crate::model::AccountInput;
use serde::Serialize;
use thiserror::Error;

/// A single constraint on a text field. Lengths count characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Url,
}

impl Rule {
    fn check(self, value: &str) -> Result<(), String> {
        match self {
            Rule::Required if value.is_empty() => Err("This field is required".into()),
            Rule::MinLength(min) if value.chars().count() < min => {
                Err(format!("Must be at least {} characters", min))
            }
            Rule::MaxLength(max) if value.chars().count() > max => {
                Err(format!("Must be at most {} characters", max))
            }
            Rule::Url if !is_url(value) => Err("Must be a valid URL".into()),
            _ => Ok(()),
        }
    }
}

/// Absolute URL check on the raw value. `Url::parse` trims and strips
/// whitespace and controls, so those are refused up front; the parsed URL
/// must then carry a host, a fragment, or an opaque path.
fn is_url(value: &str) -> bool {
    if value.trim() != value || value.chars().any(char::is_control) {
        return false;
    }
    match url::Url::parse(value) {
        Ok(u) => {
            u.host_str().is_some_and(|h| !h.is_empty())
                || u.fragment().is_some_and(|f| !f.is_empty())
                || (u.cannot_be_a_base() && !u.path().is_empty())
        }
        Err(_) => false,
    }
}

/// Rules for one field, applied in declared order.
#[derive(Clone, Copy, Debug)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

/// Field order here is the order violations are looked for.
pub const ACCOUNT_RULES: &[FieldRules] = &[
    FieldRules {
        field: "platform",
        rules: &[Rule::Required, Rule::MinLength(1), Rule::MaxLength(100)],
    },
    FieldRules {
        field: "url",
        rules: &[Rule::Required, Rule::Url, Rule::MaxLength(255)],
    },
    FieldRules {
        field: "identity",
        rules: &[Rule::Required, Rule::MinLength(1), Rule::MaxLength(255)],
    },
    FieldRules {
        field: "passphrase",
        rules: &[Rule::Required, Rule::MinLength(8)],
    },
    FieldRules {
        field: "notes",
        rules: &[Rule::MaxLength(1000)],
    },
];

/// The first rule an input breaks.
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate an account body against [`ACCOUNT_RULES`]. Only the first
    /// violation is reported; later fields are not inspected.
    // TODO: return every violation once clients can render a list of field errors.
    pub fn validate(input: &AccountInput) -> Result<(), FieldViolation> {
        Self::validate_with(input, ACCOUNT_RULES)
    }

    pub fn validate_with(input: &AccountInput, rule_set: &[FieldRules]) -> Result<(), FieldViolation> {
        let values = input.fields();
        for field_rules in rule_set {
            let value = values
                .iter()
                .find(|(name, _)| *name == field_rules.field)
                .map(|(_, v)| *v)
                .unwrap_or_default();
            for rule in field_rules.rules {
                if let Err(message) = rule.check(value) {
                    return Err(FieldViolation::new(field_rules.field, message));
                }
            }
        }
        Ok(())
    }
}
