//! # GoSmith Model
//!
//! Design-time type model for Go code generation.
//!
//! This crate provides:
//! - The closed type model (primitives, arrays, anonymous objects, named
//!   references)
//! - Attribute definitions carrying descriptions and required-field sets
//! - The design registry named type definitions live in
//! - Structural validation of whole designs

pub mod attribute;
pub mod design;
pub mod error;
pub mod types;
pub mod validation;

pub use attribute::{AttributeDefinition, DataStructure};
pub use design::{Design, NamedTypeDef};
pub use error::ModelError;
pub use types::{DataType, Object, Primitive};
pub use validation::validate_design;
