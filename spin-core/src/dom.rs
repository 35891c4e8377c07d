//! Capability traits over the host document tree.
//!
//! The binder never talks to a concrete DOM. It sees the document through
//! these three traits, implemented by `web-sys` wrappers in the browser and
//! by [`crate::mem`] in native tests.

/// An element whose inline display style can be rewritten.
///
/// The style is write-only from the binder's point of view; it is never read
/// back. Handles are cheap to clone so each submit handler can own one.
pub trait OverlayHandle: Clone {
    fn set_display(&self, value: &str);
}

/// A form-like element that fires a submit notification.
///
/// Registered handlers live for the remainder of the page and may fire any
/// number of times, once per user-initiated submit.
pub trait Submittable {
    fn on_submit(&self, handler: Box<dyn FnMut() + 'static>);
}

/// Read-side view of the document needed by the binder.
pub trait DocumentView {
    type Overlay: OverlayHandle + 'static;
    type Form: Submittable;

    /// Resolve a single element by its identifier, or `None` if absent.
    fn element_by_id(&self, id: &str) -> Option<Self::Overlay>;

    /// Snapshot of the form elements present in the document right now.
    /// Forms inserted after this call are not part of the returned list.
    fn forms(&self) -> Vec<Self::Form>;
}
