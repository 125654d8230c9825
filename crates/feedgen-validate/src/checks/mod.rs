//! Individual check families, each appending to the shared error list.

pub mod conditional;
pub mod enums;
pub mod format;
pub mod identifiers;
pub mod price;
pub mod required;
