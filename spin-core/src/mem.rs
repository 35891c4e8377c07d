//! In-memory document for headless tests.
//!
//! A small node store with tag names, optional identifiers, inline style
//! maps, and per-node submit listener lists. Enough surface to exercise the
//! binder's observable behavior natively, without a browser.

use crate::dom::{DocumentView, OverlayHandle, Submittable};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Index of a node inside a [`MemDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

struct Node {
    tag: String,
    id: Option<String>,
    style: HashMap<String, String>,
    listeners: Vec<SubmitHandler>,
}

type SubmitHandler = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
struct DomState {
    nodes: Vec<Node>,
}

/// Handle to an in-memory document tree.
#[derive(Clone, Default)]
pub struct MemDocument {
    state: Rc<RefCell<DomState>>,
}

impl MemDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element with the given tag and optional identifier.
    pub fn insert(&self, tag: &str, id: Option<&str>) -> NodeId {
        let mut state = self.state.borrow_mut();
        state.nodes.push(Node {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            style: HashMap::new(),
            listeners: Vec::new(),
        });
        NodeId(state.nodes.len() - 1)
    }

    /// Write an inline style property on a node.
    pub fn set_style(&self, node: NodeId, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        state.nodes[node.0]
            .style
            .insert(property.to_string(), value.to_string());
    }

    /// Read back an inline style property, or `None` if never written.
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.state.borrow().nodes[node.0].style.get(property).cloned()
    }

    /// Number of submit listeners registered on a node.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.state.borrow().nodes[node.0].listeners.len()
    }

    /// Dispatch a submit event on a node, running its listeners in
    /// registration order. Listeners may mutate the document, so the state
    /// borrow is released before any of them runs.
    pub fn submit(&self, node: NodeId) {
        let handlers: Vec<SubmitHandler> = self.state.borrow().nodes[node.0].listeners.clone();
        for handler in handlers {
            (*handler.borrow_mut())();
        }
    }

    /// Handle to a single node, usable through the capability traits.
    pub fn element(&self, node: NodeId) -> MemElement {
        MemElement {
            state: Rc::clone(&self.state),
            node,
        }
    }
}

/// Handle to one node of a [`MemDocument`].
#[derive(Clone)]
pub struct MemElement {
    state: Rc<RefCell<DomState>>,
    node: NodeId,
}

impl OverlayHandle for MemElement {
    fn set_display(&self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.nodes[self.node.0]
            .style
            .insert("display".to_string(), value.to_string());
    }
}

impl Submittable for MemElement {
    fn on_submit(&self, handler: Box<dyn FnMut() + 'static>) {
        let mut state = self.state.borrow_mut();
        state.nodes[self.node.0]
            .listeners
            .push(Rc::new(RefCell::new(handler)));
    }
}

impl DocumentView for MemDocument {
    type Overlay = MemElement;
    type Form = MemElement;

    fn element_by_id(&self, id: &str) -> Option<MemElement> {
        let state = self.state.borrow();
        state
            .nodes
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
            .map(|index| MemElement {
                state: Rc::clone(&self.state),
                node: NodeId(index),
            })
    }

    fn forms(&self) -> Vec<MemElement> {
        let state = self.state.borrow();
        state
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.tag == "form")
            .map(|(index, _)| MemElement {
                state: Rc::clone(&self.state),
                node: NodeId(index),
            })
            .collect()
    }
}
