use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::location::Location;
use crate::status::StatusKind;

/// Opaque token identifying one placed marker.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MarkerId(u64);

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// One placed marker: a status bound to a resolved location.
///
/// The title is derived from the status and kept in sync by
/// [`MarkerRegistry::advance_status`]. The timestamp is a caller-formatted
/// wall-clock string; the model never reads a clock itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerRecord {
    pub id: MarkerId,
    pub status: StatusKind,
    pub location: Location,
    pub title: String,
    pub timestamp: String,
}

impl MarkerRecord {
    pub fn new(
        id: MarkerId,
        status: StatusKind,
        location: Location,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            status,
            location,
            title: status.title().to_string(),
            timestamp: timestamp.into(),
        }
    }
}

/// In-memory list of placed markers. Insertion order, never reordered.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRegistry {
    records: Vec<MarkerRecord>,
    next_id: u64,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the id for a marker that is about to be placed.
    ///
    /// Id allocation is split from [`insert`](Self::insert) so the caller can
    /// construct external resources first and commit nothing when that fails.
    pub fn allocate_id(&mut self) -> MarkerId {
        self.next_id += 1;
        MarkerId(self.next_id)
    }

    /// Append a fully built record.
    pub fn insert(&mut self, record: MarkerRecord) {
        self.records.push(record);
    }

    /// Allocate, build and append in one step.
    pub fn create(
        &mut self,
        location: Location,
        status: StatusKind,
        timestamp: impl Into<String>,
    ) -> MarkerRecord {
        let id = self.allocate_id();
        let record = MarkerRecord::new(id, status, location, timestamp);
        self.records.push(record.clone());
        record
    }

    /// Advance the marker's status one step around the cycle, refreshing the
    /// title and timestamp. Id and location are preserved.
    pub fn advance_status(
        &mut self,
        id: MarkerId,
        timestamp: impl Into<String>,
    ) -> Result<MarkerRecord, RegistryError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RegistryError::UnknownMarker(id))?;
        record.status = record.status.next();
        record.title = record.status.title().to_string();
        record.timestamp = timestamp.into();
        Ok(record.clone())
    }

    /// Remove the marker, returning its record. Unknown ids are a no-op.
    pub fn remove(&mut self, id: MarkerId) -> Option<MarkerRecord> {
        let idx = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(idx))
    }

    pub fn get(&self, id: MarkerId) -> Option<&MarkerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn somewhere() -> Location {
        Location::new(34.0, -118.5).with_address("123 Main St")
    }

    #[test]
    fn test_create_appends_one_record_with_matching_fields() {
        let mut registry = MarkerRegistry::new();
        for status in crate::STATUS_CYCLE {
            let before = registry.len();
            let record = registry.create(somewhere(), status, "now");
            assert_eq!(registry.len(), before + 1);
            assert_eq!(record.status, status);
            assert_eq!(record.title, status.title());
            assert_eq!(record.location, somewhere());
            assert_eq!(registry.get(record.id), Some(&record));
        }
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut registry = MarkerRegistry::new();
        let a = registry.create(somewhere(), StatusKind::Safe, "t1");
        let b = registry.create(somewhere(), StatusKind::Safe, "t1");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_allocate_without_insert_commits_nothing() {
        let mut registry = MarkerRegistry::new();
        let id = registry.allocate_id();
        assert!(registry.is_empty());
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_advance_status_cycles_and_preserves_identity() {
        let mut registry = MarkerRegistry::new();
        let record = registry.create(somewhere(), StatusKind::Safe, "t1");

        let updated = registry.advance_status(record.id, "t2").unwrap();
        assert_eq!(updated.status, StatusKind::NeedHelp);
        assert_eq!(updated.title, "Needs Help");
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.location, record.location);
        assert_eq!(updated.timestamp, "t2");

        let again = registry.advance_status(record.id, "t3").unwrap();
        assert_eq!(again.status, StatusKind::OfferHelp);
        let third = registry.advance_status(record.id, "t4").unwrap();
        assert_eq!(third.status, StatusKind::Safe);
    }

    #[test]
    fn test_advance_status_unknown_id_errors_and_changes_nothing() {
        let mut registry = MarkerRegistry::new();
        let record = registry.create(somewhere(), StatusKind::NeedHelp, "t1");
        let ghost = MarkerId(999);

        assert_eq!(
            registry.advance_status(ghost, "t2"),
            Err(RegistryError::UnknownMarker(ghost))
        );
        assert_eq!(registry.get(record.id).unwrap().status, StatusKind::NeedHelp);
    }

    #[test]
    fn test_remove_deletes_exactly_one_and_keeps_order() {
        let mut registry = MarkerRegistry::new();
        let a = registry.create(somewhere(), StatusKind::NeedHelp, "t");
        let b = registry.create(somewhere(), StatusKind::OfferHelp, "t");
        let c = registry.create(somewhere(), StatusKind::Safe, "t");

        let removed = registry.remove(b.id).unwrap();
        assert_eq!(removed.id, b.id);

        let remaining: Vec<MarkerId> = registry.iter().map(|r| r.id).collect();
        assert_eq!(remaining, vec![a.id, c.id]);
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let mut registry = MarkerRegistry::new();
        let a = registry.create(somewhere(), StatusKind::Safe, "t");
        assert!(registry.remove(MarkerId(42)).is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.get(a.id).is_some());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = MarkerRecord::new(
            MarkerId(7),
            StatusKind::OfferHelp,
            somewhere(),
            "2/3/2026, 10:15:00 AM",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "offerHelp");
        assert_eq!(json["title"], "Offering Help");
        assert_eq!(json["location"]["address"], "123 Main St");
    }
}
