//! Error types for paperscope-core.
//!
//! Data-shape problems never surface here: they are absorbed at load time.
//! Only structural failures (a host missing a mount point) and bad
//! user-supplied names (CLI flags, commands) are errors.

use crate::surface::MountPoint;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExplorerError {
    /// The host surface does not provide a required container.
    #[error("required mount point `{0}` is missing from the host surface")]
    MissingMount(MountPoint),

    /// A facet name that is not one of the configured facet fields.
    #[error("unknown facet `{0}` (expected one of: signals, medical_imaging, uses_dl, dl_type, task, context)")]
    UnknownFacet(String),

    /// A `field=value` filter expression without the `=`.
    #[error("invalid facet filter `{0}`, expected FIELD=VALUE")]
    InvalidFilter(String),
}
