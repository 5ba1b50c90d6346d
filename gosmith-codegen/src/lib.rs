//! # GoSmith Codegen
//!
//! Go code generation from GoSmith design models.
//!
//! This crate provides:
//! - Type lowering from the design model to Go source fragments
//! - Go identifier sanitization with reserved-word disambiguation
//! - Declaration generation over whole designs

pub mod error;
pub mod generator;
pub mod go;

pub use error::CodegenError;
pub use generator::{Declaration, Generator};
pub use go::{goify, source_code, struct_source, type_name, type_ref};

/// Generates Go type declarations from a design.
///
/// # Arguments
/// * `design` - Validated or to-be-validated design model
///
/// # Returns
/// One declaration per named type, sorted by design name.
///
/// # Errors
/// Returns `CodegenError` if the design fails validation.
pub fn generate(design: &gosmith_model::Design) -> Result<Vec<Declaration>, CodegenError> {
    Generator::new(design).generate()
}
