//! Schema versions and the behavior each one selects.
//!
//! A cluster's schema version picks one [`VersionBehavior`]: a plain data
//! descriptor listing what the renderer includes for scale sets and for the
//! sync bundle, and which digest algorithm applies. Renderers branch on the
//! descriptor's fields, never on version strings.
//!
//! Released descriptors are frozen. Changing one changes stored digests in
//! production and rotates every affected scale set; add a new version
//! instead.

pub mod behavior;
pub mod registry;

pub use behavior::{ReleaseStatus, ScaleSetSchema, SyncSchema, VersionBehavior};
pub use registry::{VersionRegistry, BUILTIN_VERSIONS};
