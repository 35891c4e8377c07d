//! Core of the busy-overlay form binder.
//!
//! This crate provides:
//! - `dom`: capability traits over the host document tree
//! - `binder`: the page-ready binding operation
//! - `mem`: an in-memory document for headless testing

pub mod binder;
pub mod dom;
pub mod mem;

pub use binder::{bind_busy_overlay, BUSY_DISPLAY, OVERLAY_ID};
pub use dom::{DocumentView, OverlayHandle, Submittable};
