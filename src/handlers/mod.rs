//! Form handlers.
//!
//! Every handler follows the same template: suppress the default action,
//! read the form, assemble a call, run it, and show the result (or
//! `"Error: ..."`) in the handler's output region. Handlers differ only in
//! the data of their [`FormRoute`].

pub mod content;
pub mod diagnostics;
pub mod recommendations;
pub mod users;
pub mod videos;

use futures::FutureExt;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::{Backend, RequestError};
use crate::display::show;
use crate::events::{bind, DomEvent, EventHandler, HandlerFuture, Listeners, CLICK, SUBMIT};
use crate::forms::FormData;
use crate::page::{Document, ElementKind, VirtualPage};

/// A single backend call assembled from a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Get { path: String },
    Post { path: String, body: Value },
}

impl ApiCall {
    pub fn get(path: impl Into<String>) -> Self {
        ApiCall::Get { path: path.into() }
    }

    /// A POST whose body is the JSON encoding of `payload`.
    pub fn post<T: Serialize>(path: impl Into<String>, payload: &T) -> Result<Self, RequestError> {
        let body = serde_json::to_value(payload).map_err(|e| RequestError::Encode(e.to_string()))?;
        Ok(ApiCall::Post {
            path: path.into(),
            body,
        })
    }

    pub fn method(&self) -> &'static str {
        match self {
            ApiCall::Get { .. } => "GET",
            ApiCall::Post { .. } => "POST",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ApiCall::Get { path } | ApiCall::Post { path, .. } => path,
        }
    }

    pub async fn execute(&self, backend: &dyn Backend) -> Result<Value, RequestError> {
        match self {
            ApiCall::Get { path } => backend.get_json(path).await,
            ApiCall::Post { path, body } => backend.post_json(path, body).await,
        }
    }
}

pub type BuildCall = fn(&FormData) -> Result<ApiCall, RequestError>;

/// Everything that distinguishes one handler from another.
pub struct FormRoute {
    /// Id of the form or button the handler is bound to.
    pub element_id: &'static str,
    pub element_kind: ElementKind,
    pub event: &'static str,
    /// Output region for results and errors.
    pub region: &'static str,
    /// Written to the region before the request is issued.
    pub provisional: Option<&'static str>,
    pub build: BuildCall,
}

impl FormRoute {
    /// A handler for a form's submit event.
    pub const fn form(element_id: &'static str, region: &'static str, build: BuildCall) -> Self {
        Self {
            element_id,
            element_kind: ElementKind::Form,
            event: SUBMIT,
            region,
            provisional: None,
            build,
        }
    }

    /// A handler for a button click that shows `provisional` while in flight.
    pub const fn button(
        element_id: &'static str,
        region: &'static str,
        provisional: &'static str,
        build: BuildCall,
    ) -> Self {
        Self {
            element_id,
            element_kind: ElementKind::Button,
            event: CLICK,
            region,
            provisional: Some(provisional),
            build,
        }
    }

    pub fn selector(&self) -> String {
        format!("#{}", self.element_id)
    }
}

/// Every handler of the Streamflix page, in page order.
pub static ROUTES: &[FormRoute] = &[
    users::REGISTER,
    users::GET_USER,
    content::MOVIE,
    content::TV_SERIES,
    content::GET_CONTENT,
    content::LIST_CONTENT,
    videos::WATCH,
    videos::RATE,
    videos::WATCH_HISTORY,
    videos::CONTENT_RATING,
    recommendations::RECOMMENDATIONS,
    diagnostics::SINGLETON_TEST,
    diagnostics::GATEWAY_HEALTH,
];

/// Looks up the route bound to an element id.
pub fn route_for(element_id: &str) -> Option<&'static FormRoute> {
    ROUTES.iter().find(|route| route.element_id == element_id)
}

/// Event handler running one [`FormRoute`].
pub struct RouteHandler {
    route: &'static FormRoute,
    document: Arc<dyn Document>,
    backend: Arc<dyn Backend>,
}

impl RouteHandler {
    pub fn new(
        route: &'static FormRoute,
        document: Arc<dyn Document>,
        backend: Arc<dyn Backend>,
    ) -> Self {
        Self {
            route,
            document,
            backend,
        }
    }
}

impl EventHandler for RouteHandler {
    fn handle(&self, event: &mut DomEvent) -> HandlerFuture {
        event.prevent_default();

        let route = self.route;
        if let Some(message) = route.provisional {
            show(self.document.as_ref(), route.region, message);
        }

        let call = (route.build)(event.form_data());
        let document = self.document.clone();
        let backend = self.backend.clone();

        async move {
            let outcome = match call {
                Ok(call) => {
                    debug!("#{} -> {} {}", route.element_id, call.method(), call.path());
                    call.execute(backend.as_ref()).await
                }
                Err(err) => Err(err),
            };

            match outcome {
                Ok(data) => show(document.as_ref(), route.region, data),
                Err(err) => {
                    debug!("#{} failed: {}", route.element_id, err);
                    show(document.as_ref(), route.region, format!("Error: {}", err));
                }
            }
        }
        .boxed()
    }
}

/// Binds every route whose element is present on the page.
///
/// Returns the ids of the elements that were bound.
pub fn install(
    document: Arc<dyn Document>,
    backend: Arc<dyn Backend>,
    listeners: &Listeners,
    routes: &'static [FormRoute],
) -> Vec<&'static str> {
    let mut bound = Vec::new();
    for route in routes {
        let handler = Arc::new(RouteHandler::new(route, document.clone(), backend.clone()));
        if bind(
            document.as_ref(),
            listeners,
            &route.selector(),
            route.event,
            handler,
        ) {
            bound.push(route.element_id);
        }
    }
    info!("Bound {} of {} handlers", bound.len(), routes.len());
    bound
}

/// Renders the Streamflix page: each route's trigger element followed by
/// its output region. Ids listed in `omit` are left out.
pub fn render_page(omit: &[String]) -> VirtualPage {
    let page = VirtualPage::new();
    let kept = |id: &str| !omit.iter().any(|o| o == id);
    for route in ROUTES {
        if kept(route.element_id) {
            page.append(route.element_id, route.element_kind);
        }
        if kept(route.region) {
            page.append(route.region, ElementKind::Output);
        }
    }
    page
}
