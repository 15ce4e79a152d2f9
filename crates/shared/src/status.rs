use serde::{Deserialize, Serialize};

/// Status a user can declare for a location.
///
/// Closed set; the order of [`STATUS_CYCLE`] defines the update rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    NeedHelp,
    OfferHelp,
    Safe,
}

/// Fixed rotation order for status updates.
pub const STATUS_CYCLE: [StatusKind; 3] = [
    StatusKind::NeedHelp,
    StatusKind::OfferHelp,
    StatusKind::Safe,
];

impl StatusKind {
    /// Marker fill color.
    pub fn color(self) -> &'static str {
        match self {
            StatusKind::NeedHelp => "#D55E00",
            StatusKind::OfferHelp => "#009E73",
            StatusKind::Safe => "#0072B2",
        }
    }

    /// One-character glyph shown inside the marker symbol.
    pub fn glyph(self) -> &'static str {
        match self {
            StatusKind::NeedHelp => "!",
            StatusKind::OfferHelp => "H",
            StatusKind::Safe => "S",
        }
    }

    /// Display title, also used as the marker record title.
    pub fn title(self) -> &'static str {
        match self {
            StatusKind::NeedHelp => "Needs Help",
            StatusKind::OfferHelp => "Offering Help",
            StatusKind::Safe => "Safe Location",
        }
    }

    /// Next status in the fixed three-step rotation.
    pub fn next(self) -> StatusKind {
        let idx = STATUS_CYCLE.iter().position(|&k| k == self).unwrap_or(0);
        STATUS_CYCLE[(idx + 1) % STATUS_CYCLE.len()]
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(StatusKind::NeedHelp.next(), StatusKind::OfferHelp);
        assert_eq!(StatusKind::OfferHelp.next(), StatusKind::Safe);
        assert_eq!(StatusKind::Safe.next(), StatusKind::NeedHelp);
    }

    #[test]
    fn test_cycle_returns_to_start_after_three_steps() {
        for start in STATUS_CYCLE {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn test_cycle_never_leaves_the_triple() {
        for start in STATUS_CYCLE {
            assert!(STATUS_CYCLE.contains(&start.next()));
        }
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(StatusKind::NeedHelp.to_string(), "Needs Help");
        assert_eq!(StatusKind::Safe.to_string(), "Safe Location");
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&StatusKind::NeedHelp).unwrap(),
            r#""needHelp""#
        );
        assert_eq!(
            serde_json::from_str::<StatusKind>(r#""offerHelp""#).unwrap(),
            StatusKind::OfferHelp
        );
    }
}
