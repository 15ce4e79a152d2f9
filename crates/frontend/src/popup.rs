//! Popup content for a placed marker. Pure string building, so the markup is
//! testable on the host.

use relief_shared::MarkerRecord;

/// Element ids the popup-ready handler binds the controls to. At most one
/// popup is ever open, so fixed ids cannot collide.
pub const UPDATE_CONTROL_ID: &str = "marker-update";
pub const REMOVE_CONTROL_ID: &str = "marker-remove";

/// Render the popup content block for `record`: title, status badge, address
/// and place type when known, last-updated stamp, and the two controls.
pub fn content_html(record: &MarkerRecord) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(r#"<div class="marker-popup">"#);
    html.push_str(&format!(
        r#"<div class="marker-popup-head"><h3>{}</h3><span class="marker-popup-badge" style="background-color: {};">Current Status</span></div>"#,
        escape_html(&record.title),
        record.status.color(),
    ));
    if let Some(address) = &record.location.address {
        html.push_str(&format!(
            r#"<p class="marker-popup-line">{}</p>"#,
            escape_html(address)
        ));
    }
    if let Some(place_type) = &record.location.place_type {
        html.push_str(&format!(
            r#"<p class="marker-popup-line">Location Type: {}</p>"#,
            escape_html(place_type)
        ));
    }
    html.push_str(&format!(
        r#"<p class="marker-popup-stamp">Last updated: {}</p>"#,
        escape_html(&record.timestamp)
    ));
    html.push_str(&format!(
        r#"<div class="marker-popup-controls"><button id="{UPDATE_CONTROL_ID}" class="marker-popup-update">Update Status</button><button id="{REMOVE_CONTROL_ID}" class="marker-popup-remove">Remove</button></div>"#
    ));
    html.push_str("</div>");
    html
}

/// Minimal escape for provider-supplied strings interpolated into markup.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_shared::{Location, MarkerRecord, MarkerRegistry, StatusKind};

    fn record_at(status: StatusKind, location: Location) -> MarkerRecord {
        let id = MarkerRegistry::new().allocate_id();
        MarkerRecord::new(id, status, location, "2/3/2026, 10:15:00 AM")
    }

    #[test]
    fn test_content_shows_title_badge_and_stamp() {
        let record = record_at(StatusKind::NeedHelp, Location::new(34.0, -118.5));
        let html = content_html(&record);
        assert!(html.contains("<h3>Needs Help</h3>"));
        assert!(html.contains("background-color: #D55E00"));
        assert!(html.contains("Last updated: 2/3/2026, 10:15:00 AM"));
    }

    #[test]
    fn test_content_contains_both_control_ids() {
        let record = record_at(StatusKind::Safe, Location::new(0.0, 0.0));
        let html = content_html(&record);
        assert!(html.contains(r#"id="marker-update""#));
        assert!(html.contains(r#"id="marker-remove""#));
        assert!(html.contains("Update Status"));
        assert!(html.contains("Remove"));
    }

    #[test]
    fn test_content_includes_address_and_place_type_when_present() {
        let record = record_at(
            StatusKind::OfferHelp,
            Location::new(34.0, -118.5)
                .with_address("123 Main St")
                .with_place_type("street_address"),
        );
        let html = content_html(&record);
        assert!(html.contains("123 Main St"));
        assert!(html.contains("Location Type: street_address"));
    }

    #[test]
    fn test_content_omits_missing_optional_lines() {
        let record = record_at(StatusKind::OfferHelp, Location::new(34.0, -118.5));
        let html = content_html(&record);
        assert!(!html.contains("Location Type:"));
        // No bare address paragraph between the head and the stamp.
        assert!(!html.contains(r#"<p class="marker-popup-line">"#));
    }

    #[test]
    fn test_content_escapes_provider_strings() {
        let record = record_at(
            StatusKind::Safe,
            Location::new(0.0, 0.0).with_address("<script>alert(1)</script> & Co"),
        );
        let html = content_html(&record);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; Co"));
    }
}
