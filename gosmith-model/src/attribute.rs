//! Attribute definitions.
//!
//! An attribute wraps a type node together with the metadata the generators
//! need at that slot: a description and the set of required field names.

use crate::types::DataType;

/// Describes one value slot in the model.
#[derive(Debug, Clone)]
pub struct AttributeDefinition {
    /// The wrapped type node.
    pub ty: DataType,
    /// Description.
    pub description: Option<String>,
    /// Names of required fields. Meaningful when `ty` is an object; the
    /// fields not listed here are emitted with the omit-when-empty marker.
    pub required: Vec<String>,
}

impl AttributeDefinition {
    /// Creates a new attribute definition wrapping the given type.
    #[must_use]
    pub fn new(ty: DataType) -> Self {
        Self {
            ty,
            description: None,
            required: Vec::new(),
        }
    }

    /// Marks a field name as required.
    pub fn require(&mut self, field: impl Into<String>) {
        self.required.push(field.into());
    }

    /// Returns true if the given field is in the required set.
    #[must_use]
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|f| f == field)
    }
}

/// Anything that exposes an attribute describing its layout.
///
/// Lowering a definition body goes through this seam, so it accepts both a
/// bare attribute and a registered named type definition.
pub trait DataStructure {
    /// Returns the attribute describing the underlying type.
    fn definition(&self) -> &AttributeDefinition;
}

impl DataStructure for AttributeDefinition {
    fn definition(&self) -> &AttributeDefinition {
        self
    }
}
