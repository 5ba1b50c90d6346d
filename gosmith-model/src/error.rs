//! Error types for model validation.

use thiserror::Error;

/// Error type for design model validation.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Duplicate named type definition.
    #[error("duplicate type definition: '{name}'")]
    DuplicateType {
        /// Name of the duplicate.
        name: String,
    },

    /// A named reference does not resolve in the design.
    #[error("unknown type '{type_name}' referenced at '{context}'")]
    UnknownType {
        /// Referenced type name.
        type_name: String,
        /// Attribute path of the reference.
        context: String,
    },

    /// A required field name is not present among its object's fields.
    #[error("required field '{field}' does not exist at '{context}'")]
    UnknownRequiredField {
        /// Required field name.
        field: String,
        /// Attribute path of the object.
        context: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ModelError {
    /// Creates a duplicate type error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateType { name: name.into() }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            context: context.into(),
        }
    }

    /// Creates an unknown required field error.
    pub fn unknown_required_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownRequiredField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
