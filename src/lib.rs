//! Streamflix Console Library
//!
//! Form-to-REST plumbing for the Streamflix demo page: each form submission
//! is turned into a typed call against the backend and its outcome is
//! rendered into the form's output region.

pub mod api;
pub mod config;
pub mod console;
pub mod display;
pub mod events;
pub mod forms;
pub mod handlers;
pub mod page;

// Re-export commonly used types for convenience
pub use api::{Backend, HttpBackend, RequestError};
pub use console::Console;
pub use page::{Document, VirtualPage};
