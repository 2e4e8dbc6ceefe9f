//! Error Types

use thiserror::Error;

use crate::form::FormField;

/// Result type alias for form operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Which format rule a form value broke
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatRule {
    Email,
    /// First and last name share one rule
    Name,
    Amount,
}

impl FormatRule {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatRule::Email => "email",
            FormatRule::Name => "name",
            FormatRule::Amount => "amount",
        }
    }

    /// Message shown in the form's error banner
    pub fn message(self) -> &'static str {
        match self {
            FormatRule::Email => "Invalid email address",
            FormatRule::Name => "First and last name must contain only letters",
            FormatRule::Amount => "Invalid amount",
        }
    }
}

/// Form validation errors. Blocks submission until the user fixes the field.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field left empty
    #[error("{} is required", .0.label())]
    MissingField(FormField),

    /// Value does not match the field's pattern
    #[error("{}", .0.message())]
    InvalidFormat(FormatRule),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingField(FormField::NationalId).to_string(),
            "CPF is required"
        );
        assert_eq!(
            ValidationError::InvalidFormat(FormatRule::Name).to_string(),
            "First and last name must contain only letters"
        );
        assert_eq!(FormatRule::Amount.as_str(), "amount");
    }
}
