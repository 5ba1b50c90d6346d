//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use gosmith::prelude::*;
//! ```

// Model types
pub use gosmith_model::{
    AttributeDefinition, DataStructure, DataType, Design, ModelError, NamedTypeDef, Object,
    Primitive, validate_design,
};

// Codegen types
pub use gosmith_codegen::{
    CodegenError, Declaration, Generator, goify, source_code, struct_source, type_name, type_ref,
};
