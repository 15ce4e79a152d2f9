//! Shared interaction model for the relief map.
//!
//! The pure state machine behind the map UI: status kinds and their fixed
//! update cycle, resolved locations, the marker registry, and the transient
//! pending-selection / notice state. Nothing in this crate touches the
//! browser or the mapping provider, so all of it is host-testable.

pub mod error;
pub mod location;
pub mod notice;
pub mod registry;
pub mod session;
pub mod status;

pub use error::{RegistryError, ResolveError};
pub use location::{Location, GENERIC_PLACE_TYPE};
pub use notice::NoticeBoard;
pub use registry::{MarkerId, MarkerRecord, MarkerRegistry};
pub use session::{Generation, PendingSelection, RequestCounter};
pub use status::{StatusKind, STATUS_CYCLE};
