//! Event listeners and the guarded binder.
//!
//! A handler runs in two parts, mirroring an async browser callback: the
//! synchronous part sees the event (and may call
//! [`DomEvent::prevent_default`]), and the returned future is spawned as an
//! independent task. Tasks are never cancelled and share no state.

use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::forms::FormData;
use crate::page::Document;

pub const SUBMIT: &str = "submit";
pub const CLICK: &str = "click";

/// An event delivered to an element.
#[derive(Debug, Clone)]
pub struct DomEvent {
    name: String,
    target: String,
    form: FormData,
    default_prevented: bool,
}

impl DomEvent {
    pub fn new(name: impl Into<String>, target: impl Into<String>, form: FormData) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            form,
            default_prevented: false,
        }
    }

    /// A form submission carrying the form's fields.
    pub fn submit(target: impl Into<String>, form: FormData) -> Self {
        Self::new(SUBMIT, target, form)
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::new(CLICK, target, FormData::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the element the event was delivered to.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn form_data(&self) -> &FormData {
        &self.form
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

pub type HandlerFuture = BoxFuture<'static, ()>;

/// Something that reacts to events on an element.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &mut DomEvent) -> HandlerFuture;
}

impl<F> EventHandler for F
where
    F: Fn(&mut DomEvent) -> HandlerFuture + Send + Sync,
{
    fn handle(&self, event: &mut DomEvent) -> HandlerFuture {
        self(event)
    }
}

/// Result of delivering one event.
#[derive(Debug)]
pub struct Dispatch {
    pub default_prevented: bool,
    /// One spawned task per listener that handled the event.
    pub tasks: Vec<JoinHandle<()>>,
}

impl Dispatch {
    /// True if at least one listener handled the event.
    pub fn handled(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Waits for every spawned task to finish.
    pub async fn wait(self) -> Result<(), JoinError> {
        for task in self.tasks {
            task.await?;
        }
        Ok(())
    }
}

type ListenerKey = (String, String);

/// Listeners registered per (element id, event name).
#[derive(Default)]
pub struct Listeners {
    listeners: Mutex<HashMap<ListenerKey, Vec<Arc<dyn EventHandler>>>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, element_id: &str, event: &str, handler: Arc<dyn EventHandler>) {
        self.listeners
            .lock()
            .unwrap()
            .entry((element_id.to_string(), event.to_string()))
            .or_default()
            .push(handler);
    }

    pub fn listener_count(&self, element_id: &str, event: &str) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .get(&(element_id.to_string(), event.to_string()))
            .map_or(0, Vec::len)
    }

    /// Delivers `event` to the listeners of its target, in registration order.
    ///
    /// Must be called from within a Tokio runtime: each listener's future is
    /// spawned onto it.
    pub fn dispatch(&self, mut event: DomEvent) -> Dispatch {
        let handlers: Vec<Arc<dyn EventHandler>> = self
            .listeners
            .lock()
            .unwrap()
            .get(&(event.target().to_string(), event.name().to_string()))
            .cloned()
            .unwrap_or_default();

        debug!(
            "Dispatching {} to #{} ({} listeners)",
            event.name(),
            event.target(),
            handlers.len()
        );

        let tasks = handlers
            .iter()
            .map(|handler| tokio::spawn(handler.handle(&mut event)))
            .collect();

        Dispatch {
            default_prevented: event.default_prevented(),
            tasks,
        }
    }
}

/// Attaches `handler` to the first element matching `selector`.
///
/// A selector that matches nothing is not an error: nothing is bound and
/// `false` is returned, so pages rendering only some of the forms still work.
pub fn bind(
    document: &dyn Document,
    listeners: &Listeners,
    selector: &str,
    event: &str,
    handler: Arc<dyn EventHandler>,
) -> bool {
    match document.query_selector(selector) {
        Some(element) => {
            listeners.add_listener(&element.id, event, handler);
            true
        }
        None => {
            debug!("No element matches {}, skipping {} binding", selector, event);
            false
        }
    }
}
