//! Concrete destination schemas and the platform registry.
//!
//! Each destination module is configuration data: attribute lists, default
//! mapping tables, enumerations, and format metadata. The only code here is
//! the handful of custom check/transform hooks too destination-specific to
//! express as data.

mod bing;
mod custom;
mod facebook;
mod google;
mod google_local;
mod idealo;
mod openai;
mod pinterest;
mod registry;
mod trovaprezzi;

pub use registry::{PlatformRegistry, default_registry};
