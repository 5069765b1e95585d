//! The page at runtime: handlers installed, events delivered.

use std::sync::Arc;

use crate::api::Backend;
use crate::events::{DomEvent, Dispatch, Listeners};
use crate::handlers::{self, FormRoute};
use crate::page::Document;

/// A loaded page with its handlers bound.
///
/// Submissions and clicks return immediately with the spawned request tasks;
/// each task writes its outcome into its own output region when it finishes.
pub struct Console {
    document: Arc<dyn Document>,
    listeners: Listeners,
    bound: Vec<&'static str>,
}

impl Console {
    /// Page load: binds every Streamflix handler whose element exists.
    pub fn load(document: Arc<dyn Document>, backend: Arc<dyn Backend>) -> Self {
        Self::load_routes(document, backend, handlers::ROUTES)
    }

    pub fn load_routes(
        document: Arc<dyn Document>,
        backend: Arc<dyn Backend>,
        routes: &'static [FormRoute],
    ) -> Self {
        let listeners = Listeners::new();
        let bound = handlers::install(document.clone(), backend, &listeners, routes);
        Self {
            document,
            listeners,
            bound,
        }
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.document
    }

    /// Ids of the elements that received a handler.
    pub fn bound(&self) -> &[&'static str] {
        &self.bound
    }

    pub fn is_bound(&self, element_id: &str) -> bool {
        self.bound.contains(&element_id)
    }

    /// Submits a form with the values currently on the page.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&self, form_id: &str) -> Dispatch {
        let form = self.document.form_data(form_id).unwrap_or_default();
        self.listeners.dispatch(DomEvent::submit(form_id, form))
    }

    /// Clicks a button. Must be called from within a Tokio runtime.
    pub fn click(&self, button_id: &str) -> Dispatch {
        self.listeners.dispatch(DomEvent::click(button_id))
    }

    /// Delivers an arbitrary event.
    pub fn dispatch(&self, event: DomEvent) -> Dispatch {
        self.listeners.dispatch(event)
    }

    pub fn region_text(&self, region_id: &str) -> Option<String> {
        self.document.text_content(region_id)
    }
}
