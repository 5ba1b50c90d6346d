//! Named type definitions and the design registry.
//!
//! Named types are registered in a [`Design`] and referenced elsewhere by
//! name only. Cyclic designs are legal: a reference never embeds the
//! definition it points at.

use std::collections::HashMap;

use crate::attribute::{AttributeDefinition, DataStructure};

/// A named type definition.
///
/// Covers both user-defined types and media-derived types; the latter carry
/// the media type identifier they were projected from. Both lower
/// identically.
#[derive(Debug, Clone)]
pub struct NamedTypeDef {
    /// Design name (raw, unsanitized).
    pub name: String,
    /// Underlying type and required set.
    pub attribute: AttributeDefinition,
    /// Description.
    pub description: Option<String>,
    /// Media type identifier (media-derived definitions only).
    pub identifier: Option<String>,
}

impl NamedTypeDef {
    /// Creates a user-defined named type.
    #[must_use]
    pub fn new(name: String, attribute: AttributeDefinition) -> Self {
        Self {
            name,
            attribute,
            description: None,
            identifier: None,
        }
    }

    /// Creates a media-derived named type with its media type identifier.
    #[must_use]
    pub fn media(name: String, attribute: AttributeDefinition, identifier: String) -> Self {
        Self {
            name,
            attribute,
            description: None,
            identifier: Some(identifier),
        }
    }

    /// Returns true if this definition was derived from a media type.
    #[must_use]
    pub fn is_media_type(&self) -> bool {
        self.identifier.is_some()
    }
}

impl DataStructure for NamedTypeDef {
    fn definition(&self) -> &AttributeDefinition {
        &self.attribute
    }
}

/// A complete design: the set of named type definitions a generation run is
/// scoped to.
#[derive(Debug, Clone)]
pub struct Design {
    /// Design name.
    pub name: String,
    /// Named type definitions in registration order.
    pub types: Vec<NamedTypeDef>,
    /// Name lookup map (maintained as types are added).
    type_map: HashMap<String, usize>,
}

impl Design {
    /// Creates a new empty design.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            types: Vec::new(),
            type_map: HashMap::new(),
        }
    }

    /// Adds a named type definition to the design.
    pub fn add_type(&mut self, def: NamedTypeDef) {
        let name = def.name.clone();
        let index = self.types.len();
        self.types.push(def);
        self.type_map.insert(name, index);
    }

    /// Looks up a named type definition by design name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&NamedTypeDef> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Rebuilds the name lookup map from the types vector.
    pub fn build_type_map(&mut self) {
        self.type_map.clear();
        for (idx, def) in self.types.iter().enumerate() {
            self.type_map.insert(def.name.clone(), idx);
        }
    }
}
