//! In-memory page used by the REPL and by tests.

use std::sync::Mutex;

use super::{Document, ElementKind, ElementRef, Selector};
use crate::forms::FormData;

#[derive(Debug)]
struct Element {
    id: String,
    kind: ElementKind,
    text: String,
    fields: FormData,
}

impl Element {
    fn to_ref(&self) -> ElementRef {
        ElementRef {
            id: self.id.clone(),
            kind: self.kind,
        }
    }
}

/// A flat, ordered list of forms, buttons and output regions.
///
/// Form fields are edited with [`VirtualPage::fill`]; submitting reads them
/// back through [`Document::form_data`].
#[derive(Debug, Default)]
pub struct VirtualPage {
    elements: Mutex<Vec<Element>>,
}

impl VirtualPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> VirtualPageBuilder {
        VirtualPageBuilder::default()
    }

    /// Appends an element at the end of the document.
    pub fn append(&self, id: impl Into<String>, kind: ElementKind) {
        self.elements.lock().unwrap().push(Element {
            id: id.into(),
            kind,
            text: String::new(),
            fields: FormData::new(),
        });
    }

    /// Sets a form field, replacing any previous value.
    /// Returns false if `form_id` is not a form on this page.
    pub fn fill(&self, form_id: &str, name: &str, value: &str) -> bool {
        let mut elements = self.elements.lock().unwrap();
        match elements
            .iter_mut()
            .find(|e| e.id == form_id && e.kind == ElementKind::Form)
        {
            Some(form) => {
                form.fields.set(name, value);
                true
            }
            None => false,
        }
    }

    /// Removes every field value from a form, like a form reset.
    pub fn reset(&self, form_id: &str) -> bool {
        let mut elements = self.elements.lock().unwrap();
        match elements
            .iter_mut()
            .find(|e| e.id == form_id && e.kind == ElementKind::Form)
        {
            Some(form) => {
                form.fields = FormData::new();
                true
            }
            None => false,
        }
    }

    /// All elements in document order.
    pub fn elements(&self) -> Vec<ElementRef> {
        self.elements
            .lock()
            .unwrap()
            .iter()
            .map(Element::to_ref)
            .collect()
    }
}

impl Document for VirtualPage {
    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        let selector = Selector::parse(selector)?;
        self.elements
            .lock()
            .unwrap()
            .iter()
            .find(|e| selector.matches_parts(&e.id, e.kind))
            .map(Element::to_ref)
    }

    fn element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.elements
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .map(Element::to_ref)
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.elements
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.text.clone())
    }

    fn set_text_content(&self, id: &str, text: &str) -> bool {
        let mut elements = self.elements.lock().unwrap();
        match elements.iter_mut().find(|e| e.id == id) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn form_data(&self, form_id: &str) -> Option<FormData> {
        self.elements
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == form_id && e.kind == ElementKind::Form)
            .map(|e| e.fields.clone())
    }
}

/// Builder for pages with a fixed layout.
#[derive(Debug, Default)]
pub struct VirtualPageBuilder {
    elements: Vec<(String, ElementKind)>,
}

impl VirtualPageBuilder {
    pub fn form(mut self, id: impl Into<String>) -> Self {
        self.elements.push((id.into(), ElementKind::Form));
        self
    }

    pub fn button(mut self, id: impl Into<String>) -> Self {
        self.elements.push((id.into(), ElementKind::Button));
        self
    }

    pub fn output(mut self, id: impl Into<String>) -> Self {
        self.elements.push((id.into(), ElementKind::Output));
        self
    }

    pub fn build(self) -> VirtualPage {
        let page = VirtualPage::new();
        for (id, kind) in self.elements {
            page.append(id, kind);
        }
        page
    }
}
