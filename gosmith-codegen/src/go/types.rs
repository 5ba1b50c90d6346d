//! Type lowering to Go source fragments.
//!
//! Three entry points cover the three places a type can appear:
//! [`type_name`] yields the bare Go name of a type, [`type_ref`] yields the
//! usage-site reference written at a struct field, and [`source_code`]
//! yields the full definition body written after `type <Name>`. Anonymous
//! objects are inlined structurally; named references lower to their
//! sanitized exported name and are never followed, which is what keeps
//! cyclic designs bounded.

use gosmith_model::{AttributeDefinition, DataStructure, DataType, Object};

use crate::go::ident::goify;

/// Returns the bare Go type name for a data type.
#[must_use]
pub fn type_name(ty: &DataType) -> String {
    match ty {
        DataType::Primitive(p) => p.go_type().to_string(),
        DataType::Array(elem) => format!("[]{}", type_name(&elem.ty)),
        DataType::Object(_) => "map[string]interface{}".to_string(),
        DataType::Named { name } => goify(name, true),
    }
}

/// Returns the Go type reference for a field attribute.
///
/// Anonymous objects are written out structurally at the use site; named
/// references become indirect (`*Name`), the nullable form that breaks
/// reference cycles.
#[must_use]
pub fn type_ref(attr: &AttributeDefinition) -> String {
    match &attr.ty {
        DataType::Primitive(p) => p.go_type().to_string(),
        DataType::Array(elem) => format!("[]{}", type_ref(elem)),
        DataType::Object(_) => source_code(attr),
        DataType::Named { name } => format!("*{}", goify(name, true)),
    }
}

/// Returns the Go definition body for a data structure (the part that comes
/// after `type <Name>`).
///
/// A named reference in definition position lowers to its bare exported
/// name: a named body is itself a usage site, not a place to inline the
/// referenced structure.
#[must_use]
pub fn source_code(ds: &dyn DataStructure) -> String {
    let def = ds.definition();
    match &def.ty {
        DataType::Primitive(p) => p.go_type().to_string(),
        DataType::Array(elem) => format!("[]{}", source_code(elem.as_ref())),
        DataType::Object(fields) => struct_source(fields, |field| def.is_required(field)),
        DataType::Named { name } => goify(name, true),
    }
}

/// Emits an inline Go struct for an anonymous object.
///
/// Fields are emitted in lexicographic name order so output is
/// byte-reproducible regardless of the model's internal map ordering. The
/// `json:` tag carries the original, unsanitized field name, with
/// `,omitempty` appended for every field the predicate does not mark
/// required. An empty object still yields a syntactically valid struct.
#[must_use]
pub fn struct_source(fields: &Object, is_required: impl Fn(&str) -> bool) -> String {
    let mut out = String::from("struct {\n");
    let mut names: Vec<&String> = fields.keys().collect();
    names.sort();
    for name in names {
        let fname = goify(name, true);
        let typedef = type_ref(&fields[name]);
        let omit = if is_required(name) { "" } else { ",omitempty" };
        out.push_str(&format!("\t{fname} {typedef} `json:\"{name}{omit}\"`\n"));
    }
    out.push('}');
    out
}
