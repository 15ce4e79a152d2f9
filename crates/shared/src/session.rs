use crate::location::Location;
use crate::status::StatusKind;

/// Transient state held between a status click and a location resolution.
///
/// A marker may only be committed once both halves are present. The caller
/// clears the selection after a successful commit and leaves it intact when
/// the commit fails, so the user can retry either half.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PendingSelection {
    status: Option<StatusKind>,
    location: Option<Location>,
}

impl PendingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status choice. Returns the commit payload when a location is
    /// already pending.
    pub fn select_status(&mut self, status: StatusKind) -> Option<(StatusKind, Location)> {
        self.status = Some(status);
        self.payload()
    }

    /// Record a resolved location. Returns the commit payload when a status
    /// is already pending.
    pub fn resolve_location(&mut self, location: Location) -> Option<(StatusKind, Location)> {
        self.location = Some(location);
        self.payload()
    }

    fn payload(&self) -> Option<(StatusKind, Location)> {
        match (self.status, &self.location) {
            (Some(status), Some(location)) => Some((status, location.clone())),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.status = None;
        self.location = None;
    }

    pub fn status(&self) -> Option<StatusKind> {
        self.status
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

/// Generation tag carried by one in-flight location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// Hands out generations for location requests so a completion can tell
/// whether a newer request superseded it while it was in flight.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestCounter {
    current: u64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current == generation.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park() -> Location {
        Location::new(34.0, -118.5).with_address("Griffith Park")
    }

    #[test]
    fn test_status_first_then_location_yields_payload_once_complete() {
        let mut pending = PendingSelection::new();
        assert!(pending.select_status(StatusKind::NeedHelp).is_none());
        let payload = pending.resolve_location(park()).unwrap();
        assert_eq!(payload, (StatusKind::NeedHelp, park()));
    }

    #[test]
    fn test_location_first_then_status_yields_payload_once_complete() {
        let mut pending = PendingSelection::new();
        assert!(pending.resolve_location(park()).is_none());
        let payload = pending.select_status(StatusKind::Safe).unwrap();
        assert_eq!(payload, (StatusKind::Safe, park()));
    }

    #[test]
    fn test_clear_empties_both_halves() {
        let mut pending = PendingSelection::new();
        pending.select_status(StatusKind::OfferHelp);
        pending.resolve_location(park());
        pending.clear();
        assert!(pending.status().is_none());
        assert!(pending.location().is_none());
        assert!(pending.select_status(StatusKind::OfferHelp).is_none());
    }

    #[test]
    fn test_reselecting_status_replaces_the_pending_one() {
        let mut pending = PendingSelection::new();
        pending.select_status(StatusKind::NeedHelp);
        pending.select_status(StatusKind::Safe);
        let (status, _) = pending.resolve_location(park()).unwrap();
        assert_eq!(status, StatusKind::Safe);
    }

    #[test]
    fn test_failed_resolution_leaves_status_intact() {
        // A resolver failure never calls resolve_location; the selection must
        // still hold the status for the retry.
        let mut pending = PendingSelection::new();
        pending.select_status(StatusKind::NeedHelp);
        assert_eq!(pending.status(), Some(StatusKind::NeedHelp));
    }

    #[test]
    fn test_commit_flow_adds_one_record_and_clears_pending() {
        use crate::registry::MarkerRegistry;
        use crate::STATUS_CYCLE;

        for status in STATUS_CYCLE {
            let mut pending = PendingSelection::new();
            let mut registry = MarkerRegistry::new();

            assert!(pending.select_status(status).is_none());
            let (chosen, location) = pending.resolve_location(park()).unwrap();

            let record = registry.create(location, chosen, "now");
            pending.clear();

            assert_eq!(registry.len(), 1);
            assert_eq!(record.status, status);
            assert_eq!(record.location, park());
            assert!(pending.status().is_none());
            assert!(pending.location().is_none());
        }
    }

    #[test]
    fn test_generations_supersede() {
        let mut requests = RequestCounter::new();
        let first = requests.issue();
        assert!(requests.is_current(first));
        let second = requests.issue();
        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }
}
