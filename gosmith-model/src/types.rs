//! Type model definitions.
//!
//! This module contains the data structures representing design-time types:
//! primitives, arrays, anonymous objects, and by-name references to named
//! type definitions.

use std::collections::HashMap;

use crate::attribute::AttributeDefinition;

/// An anonymous structural type: field name to attribute.
///
/// Field names are unique by map-key semantics. Iteration order carries no
/// meaning; emission re-sorts field names, so two objects built in different
/// insertion orders lower to identical text.
pub type Object = HashMap<String, AttributeDefinition>;

/// Scalar kinds of the design language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Truth value.
    Boolean,
    /// Machine-sized signed integer.
    Integer,
    /// Double-precision floating point number.
    Number,
    /// UTF-8 text.
    String,
}

impl Primitive {
    /// Returns the Go type name for this primitive.
    #[must_use]
    pub const fn go_type(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::Integer => "int",
            Self::Number => "float64",
            Self::String => "string",
        }
    }
}

/// Type node variants.
///
/// The set is closed on purpose: every consumer matches exhaustively, so
/// adding a variant is a compile-time-enforced change rather than a runtime
/// "forgot a case" hazard.
#[derive(Debug, Clone)]
pub enum DataType {
    /// Scalar type.
    Primitive(Primitive),
    /// Sequence type. The element is a full attribute so it can carry its
    /// own description and required set.
    Array(Box<AttributeDefinition>),
    /// Anonymous structural type, inlined at every use site.
    Object(Object),
    /// By-name reference to a type registered in a [`Design`].
    ///
    /// Only the name is carried; the underlying type lives on the registry
    /// entry. That is what keeps mutually-referencing named types
    /// representable as plain owned data.
    ///
    /// [`Design`]: crate::design::Design
    Named {
        /// Design name of the referenced type definition.
        name: String,
    },
}

impl DataType {
    /// Creates an array of the given element attribute.
    #[must_use]
    pub fn array(elem: AttributeDefinition) -> Self {
        Self::Array(Box::new(elem))
    }

    /// Creates a by-name reference to a named type definition.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named { name: name.into() }
    }

    /// Returns true if this is a primitive type.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns true if this is an array type.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns true if this is an anonymous object type.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns true if this is a named type reference.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Named { .. })
    }

    /// Returns the kind of this node for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "primitive",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Named { .. } => "named reference",
        }
    }
}
