//! Page model the console renders into.
//!
//! Nothing in the crate reaches for a global document: lookups and writes go
//! through a [`Document`] handle passed in explicitly, so the same handlers
//! run against the in-memory [`VirtualPage`] or any other implementation.

mod selector;
mod virtual_page;

pub use selector::Selector;
pub use virtual_page::{VirtualPage, VirtualPageBuilder};

use crate::forms::FormData;

/// Kind of element a page can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Form,
    Button,
    /// A display region handlers write their results into.
    Output,
}

impl ElementKind {
    /// Tag name used when matching type selectors.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Form => "form",
            ElementKind::Button => "button",
            ElementKind::Output => "pre",
        }
    }
}

/// Handle to an element found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef {
    pub id: String,
    pub kind: ElementKind,
}

/// Minimal query/update capability over a rendered page.
pub trait Document: Send + Sync {
    /// Returns the first element, in document order, matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<ElementRef>;

    /// Returns the element with the given id.
    fn element_by_id(&self, id: &str) -> Option<ElementRef>;

    /// Current text content of the element, if it exists.
    fn text_content(&self, id: &str) -> Option<String>;

    /// Replaces the text content of the element.
    /// Returns false when no element has that id.
    fn set_text_content(&self, id: &str, text: &str) -> bool;

    /// Snapshot of the named fields of a form element.
    fn form_data(&self, form_id: &str) -> Option<FormData>;
}
