//! The page-ready binding operation.

use crate::dom::{DocumentView, OverlayHandle, Submittable};
use log::info;

/// Identifier of the busy overlay element expected in the host markup.
pub const OVERLAY_ID: &str = "spinner-overlay";

/// Inline display value that reveals the overlay.
pub const BUSY_DISPLAY: &str = "flex";

/// Wire every form currently in `doc` to reveal the busy overlay on submit.
///
/// Resolves the overlay by [`OVERLAY_ID`]; if no such element exists the
/// feature is disabled and nothing is wired. Otherwise each form present at
/// this instant gets a submit handler that sets the overlay's inline display
/// to [`BUSY_DISPLAY`]. Forms inserted afterwards are not observed.
///
/// Returns the number of forms wired. Intended to be called exactly once by
/// the hosting environment at startup.
pub fn bind_busy_overlay<D: DocumentView>(doc: &D) -> usize {
    info!("page ready, busy-overlay binder active");
    let overlay = match doc.element_by_id(OVERLAY_ID) {
        Some(overlay) => overlay,
        None => {
            let log_string = format!("no #{} element found, overlay disabled", OVERLAY_ID);
            info!("{}", log_string);
            return 0;
        }
    };
    let forms = doc.forms();
    for form in &forms {
        let overlay = overlay.clone();
        form.on_submit(Box::new(move || {
            overlay.set_display(BUSY_DISPLAY);
        }));
    }
    forms.len()
}

#[cfg(test)]
mod tests {
    use super::{bind_busy_overlay, BUSY_DISPLAY, OVERLAY_ID};
    use crate::mem::MemDocument;

    #[test]
    fn test_missing_overlay_wires_nothing() {
        let doc = MemDocument::new();
        let form = doc.insert("form", Some("f1"));
        assert_eq!(bind_busy_overlay(&doc), 0);
        assert_eq!(doc.listener_count(form), 0);
        // submitting is still a valid no-op
        doc.submit(form);
    }

    #[test]
    fn test_overlay_without_forms_is_inert() {
        let doc = MemDocument::new();
        let overlay = doc.insert("div", Some(OVERLAY_ID));
        assert_eq!(bind_busy_overlay(&doc), 0);
        assert_eq!(doc.style(overlay, "display"), None);
    }

    #[test]
    fn test_each_form_reveals_overlay_independently() {
        let doc = MemDocument::new();
        let overlay = doc.insert("div", Some(OVERLAY_ID));
        doc.set_style(overlay, "display", "none");
        let first = doc.insert("form", Some("f1"));
        let second = doc.insert("form", Some("f2"));
        let third = doc.insert("form", None);
        assert_eq!(bind_busy_overlay(&doc), 3);

        doc.submit(second);
        assert_eq!(doc.style(overlay, "display").as_deref(), Some(BUSY_DISPLAY));

        doc.set_style(overlay, "display", "none");
        doc.submit(first);
        assert_eq!(doc.style(overlay, "display").as_deref(), Some(BUSY_DISPLAY));

        doc.set_style(overlay, "display", "none");
        doc.submit(third);
        assert_eq!(doc.style(overlay, "display").as_deref(), Some(BUSY_DISPLAY));
    }

    #[test]
    fn test_repeat_submit_sets_display_both_times() {
        let doc = MemDocument::new();
        let overlay = doc.insert("div", Some(OVERLAY_ID));
        let form = doc.insert("form", Some("f1"));
        assert_eq!(bind_busy_overlay(&doc), 1);

        doc.submit(form);
        assert_eq!(doc.style(overlay, "display").as_deref(), Some(BUSY_DISPLAY));
        doc.set_style(overlay, "display", "none");
        doc.submit(form);
        assert_eq!(doc.style(overlay, "display").as_deref(), Some(BUSY_DISPLAY));
    }

    #[test]
    fn test_late_form_is_not_wired() {
        let doc = MemDocument::new();
        let overlay = doc.insert("div", Some(OVERLAY_ID));
        doc.set_style(overlay, "display", "none");
        assert_eq!(bind_busy_overlay(&doc), 0);

        let late_form = doc.insert("form", Some("late"));
        doc.submit(late_form);
        assert_eq!(doc.listener_count(late_form), 0);
        assert_eq!(doc.style(overlay, "display").as_deref(), Some("none"));
    }

    #[test]
    fn test_hidden_overlay_with_single_form_scenario() {
        // <div id="spinner-overlay" style="display:none"></div><form id="f1"></form>
        let doc = MemDocument::new();
        let overlay = doc.insert("div", Some(OVERLAY_ID));
        doc.set_style(overlay, "display", "none");
        let form = doc.insert("form", Some("f1"));

        assert_eq!(bind_busy_overlay(&doc), 1);
        doc.submit(form);
        assert_eq!(doc.style(overlay, "display").as_deref(), Some("flex"));
    }

    #[test]
    fn test_only_forms_are_wired() {
        let doc = MemDocument::new();
        doc.insert("div", Some(OVERLAY_ID));
        let div = doc.insert("div", Some("not-a-form"));
        let form = doc.insert("form", None);
        assert_eq!(bind_busy_overlay(&doc), 1);
        assert_eq!(doc.listener_count(div), 0);
        assert_eq!(doc.listener_count(form), 1);
    }
}
