//! Reserved Go words.
//!
//! The table holds the Go keywords plus the predeclared scalar type names a
//! generated identifier must never collide with. It is a sorted static
//! slice, read-only for the life of the process.

/// Go keywords and predeclared scalar type names, sorted ascending.
pub static RESERVED: &[&str] = &[
    "break",
    "byte",
    "case",
    "chan",
    "complex128",
    "complex64",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "float32",
    "float64",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "int",
    "int16",
    "int32",
    "int64",
    "int8",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "rune",
    "select",
    "string",
    "struct",
    "switch",
    "type",
    "uint16",
    "uint32",
    "uint64",
    "uint8",
    "var",
];

/// Returns true if `word` is a reserved Go word.
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    RESERVED.binary_search(&word).is_ok()
}
