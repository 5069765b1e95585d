#![allow(dead_code)]

//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{FakeBackendServer, streamflix_page};
//!
//! #[tokio::test]
//! async fn test_get_user() {
//!     let server = FakeBackendServer::spawn().await;
//!     let (page, console) = streamflix_page(server.backend());
//!     page.fill("form-get-user", "id", "1");
//!     console.submit("form-get-user").wait().await.unwrap();
//! }
//! ```

mod constants;
mod fake_server;
mod gated;
mod raw_responder;

pub use constants::*;
pub use fake_server::{FakeBackendServer, RecordedRequest};
pub use gated::GatedBackend;
pub use raw_responder::spawn_raw_responder;

use std::sync::Arc;
use streamflix_console::handlers::render_page;
use streamflix_console::{Backend, Console, VirtualPage};

/// Renders the full Streamflix page and loads a console on it.
pub fn streamflix_page(backend: Arc<dyn Backend>) -> (Arc<VirtualPage>, Console) {
    streamflix_page_without(backend, &[])
}

/// Same as [`streamflix_page`], leaving the given element ids out.
pub fn streamflix_page_without(
    backend: Arc<dyn Backend>,
    omit: &[&str],
) -> (Arc<VirtualPage>, Console) {
    let omit: Vec<String> = omit.iter().map(|s| s.to_string()).collect();
    let page = Arc::new(render_page(&omit));
    let console = Console::load(page.clone(), backend);
    (page, console)
}
