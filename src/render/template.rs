//! Static dashboard template and payload embedding
//!
//! The template is a fixed HTML document maintained in
//! `templates/dashboard.html`. It holds one placeholder inside a
//! `<script type="application/json">` element; the serialized payload
//! replaces it and the page script renders everything from that data.

use crate::error::{DashboardError, Result};
use crate::render::payload::DashboardPayload;
use tracing::debug;

/// Dashboard template compiled into the binary
pub const DASHBOARD_TEMPLATE: &str = include_str!("../../templates/dashboard.html");

/// Marker replaced by the serialized payload
pub const DATA_PLACEHOLDER: &str = "__DASHBOARD_DATA__";

/// Render the dashboard with the built-in template
pub fn render_dashboard(payload: &DashboardPayload) -> Result<String> {
    render_with_template(DASHBOARD_TEMPLATE, payload)
}

/// Render `payload` into `template` at its single data placeholder
pub fn render_with_template(template: &str, payload: &DashboardPayload) -> Result<String> {
    let occurrences = template.matches(DATA_PLACEHOLDER).count();
    if occurrences != 1 {
        return Err(DashboardError::Template {
            message: format!(
                "expected exactly one {} placeholder, found {}",
                DATA_PLACEHOLDER, occurrences
            ),
        });
    }

    let json = escape_for_script(&serde_json::to_string(payload)?);
    debug!("Serialized dashboard payload: {} bytes", json.len());

    Ok(template.replacen(DATA_PLACEHOLDER, &json, 1))
}

/// Escape markup-significant characters so JSON cannot close or confuse
/// the surrounding script element. These characters only occur inside JSON
/// strings, where the `\uXXXX` forms decode to the same text.
pub fn escape_for_script(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RegisterAnalyzer;
    use crate::models::RawRecord;

    fn payload_with_name(name: &str) -> DashboardPayload {
        let rows = vec![RawRecord::from_pairs([
            ("ae_lei", "A"),
            ("ae_homeMemberState", "NL"),
            ("ae_lei_name", name),
        ])];
        let analysis = RegisterAnalyzer::new("NL").analyze(rows);
        DashboardPayload::with_generated_date(&analysis, "01 January 2026")
    }

    #[test]
    fn test_builtin_template_has_one_placeholder() {
        assert_eq!(DASHBOARD_TEMPLATE.matches(DATA_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_render_embeds_payload() {
        let html = render_dashboard(&payload_with_name("Bitvavo B.V.")).unwrap();

        assert!(!html.contains(DATA_PLACEHOLDER));
        assert!(html.contains("Bitvavo B.V."));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_render_escapes_script_terminators() {
        let html = render_dashboard(&payload_with_name("Evil</script><b>Co</b> & Sons")).unwrap();

        assert!(!html.contains("Evil</script>"));
        assert!(html.contains("Evil\\u003c/script\\u003e"));
        assert!(html.contains("\\u0026 Sons"));
    }

    #[test]
    fn test_escaped_payload_is_still_valid_json() {
        let payload = payload_with_name("A <b> & C");
        let escaped = escape_for_script(&serde_json::to_string(&payload).unwrap());

        let value: serde_json::Value = serde_json::from_str(&escaped).unwrap();

        assert_eq!(value["directory"][0]["e"], "A <b> & C");
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let result = render_with_template("<html></html>", &payload_with_name("X"));
        assert!(matches!(result, Err(DashboardError::Template { .. })));
    }
}
