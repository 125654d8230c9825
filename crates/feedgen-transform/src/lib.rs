//! Value transformation library and destination-wide transformation pass.
//!
//! Every transformer is a named, pure, total function: defined for any
//! input, idempotent, and coercing (never failing) when handed a value type
//! it does not expect. Mapping rules reference transformers by name through
//! the registry; the transformation pass applies a destination's blanket
//! normalization after per-attribute rules have run.

pub mod category;
pub mod context;
pub mod datetime;
pub mod enums;
pub mod pass;
pub mod price;
pub mod registry;
pub mod text;

pub use context::TransformContext;
pub use pass::apply_platform_pass;
pub use registry::{TransformerFn, apply_chain, lookup, transformer_names};
