//! Go lowering modules.

pub mod ident;
pub mod reserved;
pub mod types;

pub use ident::goify;
pub use reserved::{RESERVED, is_reserved};
pub use types::{source_code, struct_source, type_name, type_ref};
