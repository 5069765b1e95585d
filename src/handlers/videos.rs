//! Playback handlers: watch progress, ratings and their lookups.

use super::{ApiCall, FormRoute};
use crate::api::RequestError;
use crate::forms::{FormData, RatingEvent, WatchEvent};

pub const WATCH: FormRoute = FormRoute::form("form-watch", "res-watch", record_watch);
pub const RATE: FormRoute = FormRoute::form("form-rate", "res-rate", record_rating);
pub const WATCH_HISTORY: FormRoute =
    FormRoute::form("form-watch-history", "res-watch-history", watch_history);
pub const CONTENT_RATING: FormRoute =
    FormRoute::form("form-content-rating", "res-content-rating", content_rating);

fn record_watch(form: &FormData) -> Result<ApiCall, RequestError> {
    let payload = WatchEvent {
        user_id: form.number("userId"),
        content_id: form.number("contentId"),
        progress: form.number("progressSeconds"),
        completed: form.flag("completed"),
    };
    ApiCall::post("/api/videos/watch", &payload)
}

fn record_rating(form: &FormData) -> Result<ApiCall, RequestError> {
    let payload = RatingEvent {
        user_id: form.number("userId"),
        content_id: form.number("contentId"),
        score: form.number("rating"),
    };
    ApiCall::post("/api/videos/rate", &payload)
}

fn watch_history(form: &FormData) -> Result<ApiCall, RequestError> {
    Ok(ApiCall::get(format!(
        "/api/videos/watch/user/{}",
        form.number("userId")
    )))
}

fn content_rating(form: &FormData) -> Result<ApiCall, RequestError> {
    Ok(ApiCall::get(format!(
        "/api/videos/rate/content/{}/average",
        form.number("contentId")
    )))
}
