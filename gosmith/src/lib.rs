//! # GoSmith
//!
//! Design-driven Go type generation for Rust.
//!
//! GoSmith lowers an in-memory, design-time type model into fragments of Go
//! source text: scalar names, array and pointer references, inline struct
//! bodies with `json:` tags, and collision-safe Go identifiers.
//!
//! ## Features
//!
//! - **Closed type model** - Primitives, arrays, anonymous objects, and
//!   by-name references to named types, with exhaustive compile-time dispatch
//! - **Deterministic output** - Struct fields and declarations are sorted, so
//!   generation is byte-reproducible regardless of model insertion order
//! - **Cycle-proof lowering** - Named references lower by name and are never
//!   followed, so mutually-referencing types generate in finite time
//! - **Collision-safe identifiers** - Arbitrary strings become valid Go
//!   CamelCase identifiers, disambiguated against the reserved-word table
//!
//! ## Quick Start
//!
//! ```
//! use gosmith::prelude::*;
//!
//! let mut fields = Object::new();
//! fields.insert(
//!     "id".to_string(),
//!     AttributeDefinition::new(DataType::Primitive(Primitive::Integer)),
//! );
//! let mut attr = AttributeDefinition::new(DataType::Object(fields));
//! attr.require("id");
//!
//! let mut design = Design::new("store".to_string());
//! design.add_type(NamedTypeDef::new("account".to_string(), attr));
//!
//! let declarations = Generator::new(&design).generate()?;
//! assert_eq!(declarations[0].name, "Account");
//! # Ok::<(), gosmith::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Type model, design registry, validation
//! - [`codegen`] - Go lowering, identifier sanitization, declaration
//!   generation

pub mod prelude;

/// Design-time type model and validation.
pub mod model {
    pub use gosmith_model::*;
}

/// Go code generation from design models.
pub mod codegen {
    pub use gosmith_codegen::*;
}

// Re-export commonly used items at the crate root
pub use gosmith_codegen::{
    CodegenError, Declaration, Generator, goify, source_code, type_name, type_ref,
};
pub use gosmith_model::{
    AttributeDefinition, DataStructure, DataType, Design, ModelError, NamedTypeDef, Object,
    Primitive, validate_design,
};
