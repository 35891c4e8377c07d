//! `web-sys` implementations of the document capability traits.

use log::info;
use spin_core::dom::{DocumentView, OverlayHandle, Submittable};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

/// The live browser document.
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    /// Attach to `window.document`, or `None` when no window global exists.
    pub fn attach() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(|document| WebDocument { document })
    }
}

/// The overlay element; clones share the same underlying node.
#[derive(Clone)]
pub struct WebOverlay {
    element: HtmlElement,
}

impl OverlayHandle for WebOverlay {
    fn set_display(&self, value: &str) {
        if self.element.style().set_property("display", value).is_err() {
            info!("failed to update the overlay display style");
        }
    }
}

/// A form element found in the startup snapshot.
pub struct WebForm {
    element: Element,
}

impl Submittable for WebForm {
    fn on_submit(&self, mut handler: Box<dyn FnMut() + 'static>) {
        let closure =
            Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
        if self
            .element
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
            .is_err()
        {
            info!("failed to attach a submit listener");
        }
        // the listener lives for the remainder of the page
        closure.forget();
    }
}

impl DocumentView for WebDocument {
    type Overlay = WebOverlay;
    type Form = WebForm;

    fn element_by_id(&self, id: &str) -> Option<WebOverlay> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(|element| WebOverlay { element })
    }

    fn forms(&self) -> Vec<WebForm> {
        let collection = self.document.get_elements_by_tag_name("form");
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .map(|element| WebForm { element })
            .collect()
    }
}
