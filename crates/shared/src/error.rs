use thiserror::Error;

use crate::registry::MarkerId;

/// Failures while resolving a location through the device or the provider.
///
/// All variants are recoverable: the pending selection survives so the user
/// can retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("location services are not available")]
    Unsupported,

    #[error("location permission denied: {0}")]
    PermissionDenied(String),

    #[error("position unavailable: {0}")]
    Unavailable(String),

    #[error("position request timed out: {0}")]
    Timeout(String),

    #[error("no matching place found")]
    NoResults,

    #[error("place result carries no geometry")]
    MissingGeometry,

    #[error("provider error: {0}")]
    Provider(String),
}

/// Failures addressing the marker registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no marker with id {0}")]
    UnknownMarker(MarkerId),
}
