//! Design validation utilities.
//!
//! This module checks a design for structural well-formedness before
//! generation: definition names are unique, named references resolve, and
//! required-field sets match the objects they belong to.

use std::collections::HashSet;

use crate::attribute::AttributeDefinition;
use crate::design::Design;
use crate::error::ModelError;
use crate::types::DataType;

/// Validates a design for correctness.
///
/// The walk descends arrays and object fields but never follows named
/// references, so cyclic designs validate in finite time. Object fields are
/// visited in sorted order, making the first reported error deterministic.
///
/// # Errors
/// Returns `ModelError` describing the first problem found.
pub fn validate_design(design: &Design) -> Result<(), ModelError> {
    let mut seen_names = HashSet::new();
    for def in &design.types {
        if !seen_names.insert(def.name.as_str()) {
            return Err(ModelError::duplicate(def.name.as_str()));
        }
    }

    for def in &design.types {
        validate_attribute(design, &def.attribute, &def.name)?;
    }

    Ok(())
}

/// Validates a single attribute subtree rooted at `context`.
fn validate_attribute(
    design: &Design,
    attr: &AttributeDefinition,
    context: &str,
) -> Result<(), ModelError> {
    if !attr.required.is_empty() && !attr.ty.is_object() {
        return Err(ModelError::validation(format!(
            "required fields declared on {} attribute at '{}'",
            attr.ty.kind_name(),
            context
        )));
    }

    match &attr.ty {
        DataType::Primitive(_) => Ok(()),
        DataType::Array(elem) => validate_attribute(design, elem, &format!("{context}[]")),
        DataType::Object(fields) => {
            for field in &attr.required {
                if !fields.contains_key(field) {
                    return Err(ModelError::unknown_required_field(field, context));
                }
            }

            let mut entries: Vec<(&String, &AttributeDefinition)> = fields.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (name, field_attr) in entries {
                validate_attribute(design, field_attr, &format!("{context}.{name}"))?;
            }
            Ok(())
        }
        DataType::Named { name } => {
            if design.has_type(name) {
                Ok(())
            } else {
                Err(ModelError::unknown_type(name.as_str(), context))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::NamedTypeDef;
    use crate::types::{Object, Primitive};

    fn int_attr() -> AttributeDefinition {
        AttributeDefinition::new(DataType::Primitive(Primitive::Integer))
    }

    fn string_attr() -> AttributeDefinition {
        AttributeDefinition::new(DataType::Primitive(Primitive::String))
    }

    #[test]
    fn test_validate_valid_design() {
        let mut obj = Object::new();
        obj.insert("id".to_string(), int_attr());
        obj.insert("name".to_string(), string_attr());
        let mut attr = AttributeDefinition::new(DataType::Object(obj));
        attr.require("id");

        let mut design = Design::new("store".to_string());
        design.add_type(NamedTypeDef::new("account".to_string(), attr));

        assert!(validate_design(&design).is_ok());
    }

    #[test]
    fn test_validate_cyclic_design() {
        let mut account = Object::new();
        account.insert(
            "orders".to_string(),
            AttributeDefinition::new(DataType::array(AttributeDefinition::new(
                DataType::named("order"),
            ))),
        );
        let mut order = Object::new();
        order.insert(
            "account".to_string(),
            AttributeDefinition::new(DataType::named("account")),
        );

        let mut design = Design::new("store".to_string());
        design.add_type(NamedTypeDef::new(
            "account".to_string(),
            AttributeDefinition::new(DataType::Object(account)),
        ));
        design.add_type(NamedTypeDef::new(
            "order".to_string(),
            AttributeDefinition::new(DataType::Object(order)),
        ));

        assert!(validate_design(&design).is_ok());
    }

    #[test]
    fn test_validate_duplicate_type() {
        let mut design = Design::new("store".to_string());
        design.add_type(NamedTypeDef::new("account".to_string(), int_attr()));
        design.add_type(NamedTypeDef::new("account".to_string(), string_attr()));

        let err = validate_design(&design).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateType { name } if name == "account"));
    }

    #[test]
    fn test_validate_dangling_reference() {
        let mut obj = Object::new();
        obj.insert(
            "owner".to_string(),
            AttributeDefinition::new(DataType::named("missing")),
        );

        let mut design = Design::new("store".to_string());
        design.add_type(NamedTypeDef::new(
            "order".to_string(),
            AttributeDefinition::new(DataType::Object(obj)),
        ));

        let err = validate_design(&design).unwrap_err();
        match err {
            ModelError::UnknownType { type_name, context } => {
                assert_eq!(type_name, "missing");
                assert_eq!(context, "order.owner");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_phantom_required_field() {
        let mut obj = Object::new();
        obj.insert("id".to_string(), int_attr());
        let mut attr = AttributeDefinition::new(DataType::Object(obj));
        attr.require("name");

        let mut design = Design::new("store".to_string());
        design.add_type(NamedTypeDef::new("account".to_string(), attr));

        let err = validate_design(&design).unwrap_err();
        match err {
            ModelError::UnknownRequiredField { field, context } => {
                assert_eq!(field, "name");
                assert_eq!(context, "account");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_required_on_non_object() {
        let mut attr = int_attr();
        attr.require("id");

        let mut design = Design::new("store".to_string());
        design.add_type(NamedTypeDef::new("count".to_string(), attr));

        let err = validate_design(&design).unwrap_err();
        assert!(err.to_string().contains("primitive attribute at 'count'"));
    }

    #[test]
    fn test_validate_descends_arrays_and_objects() {
        let mut inner = Object::new();
        inner.insert(
            "ref".to_string(),
            AttributeDefinition::new(DataType::named("missing")),
        );
        let elem = AttributeDefinition::new(DataType::Object(inner));
        let attr = AttributeDefinition::new(DataType::array(elem));

        let mut design = Design::new("store".to_string());
        design.add_type(NamedTypeDef::new("entries".to_string(), attr));

        let err = validate_design(&design).unwrap_err();
        match err {
            ModelError::UnknownType { context, .. } => assert_eq!(context, "entries[].ref"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
