//! Fixed, argument-less probes of the backend.

use super::{ApiCall, FormRoute};
use crate::api::RequestError;
use crate::forms::FormData;

pub const SINGLETON_TEST: FormRoute = FormRoute::button(
    "btn-demo-singleton",
    "res-demo-singleton",
    "Running singleton test...",
    singleton_test,
);

pub const GATEWAY_HEALTH: FormRoute = FormRoute::button(
    "btn-gateway-health",
    "res-gateway-health",
    "Checking gateway health...",
    gateway_health,
);

fn singleton_test(_: &FormData) -> Result<ApiCall, RequestError> {
    Ok(ApiCall::get("/api/demo/singleton-test"))
}

fn gateway_health(_: &FormData) -> Result<ApiCall, RequestError> {
    Ok(ApiCall::get("/api/gateway/health"))
}
