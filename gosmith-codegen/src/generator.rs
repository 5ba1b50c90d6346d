//! Declaration generation from a design.

use tracing::debug;

use gosmith_model::{Design, validate_design};

use crate::error::CodegenError;
use crate::go::{goify, source_code};

/// One named type's generated record.
///
/// The surrounding pipeline splices `source` into a complete declaration
/// (`type <name> <source>` plus imports and the package header); everything
/// it needs to do that is carried here.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Sanitized exported Go name.
    pub name: String,
    /// Design name the declaration was generated from.
    pub design_name: String,
    /// Description from the definition, if any.
    pub description: Option<String>,
    /// Go definition body (the part after `type <name>`).
    pub source: String,
}

/// Generator for Go type declarations.
pub struct Generator<'a> {
    design: &'a Design,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a design.
    #[must_use]
    pub fn new(design: &'a Design) -> Self {
        Self { design }
    }

    /// Generates one declaration per named type, sorted by design name.
    ///
    /// The design is validated first, so lowering only ever sees
    /// well-formed input. Registration order does not affect the output.
    ///
    /// # Errors
    /// Returns `CodegenError` if the design fails validation.
    pub fn generate(&self) -> Result<Vec<Declaration>, CodegenError> {
        validate_design(self.design)?;

        let mut defs: Vec<_> = self.design.types.iter().collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));

        let mut declarations = Vec::with_capacity(defs.len());
        for def in defs {
            let name = goify(&def.name, true);
            debug!(design_name = %def.name, go_name = %name, "lowering named type");
            declarations.push(Declaration {
                name,
                design_name: def.name.clone(),
                description: def.description.clone(),
                source: source_code(def),
            });
        }
        Ok(declarations)
    }
}
