//! Catalog handlers: creating movies and series, looking content up.

use super::{ApiCall, FormRoute};
use crate::api::RequestError;
use crate::forms::{ContentCreate, ContentDetails, FormData};

pub const MOVIE: FormRoute = FormRoute::form("form-movie", "res-movie", create_movie);
pub const TV_SERIES: FormRoute = FormRoute::form("form-tv", "res-tv", create_tv_series);
pub const GET_CONTENT: FormRoute =
    FormRoute::form("form-get-content", "res-get-content", get_content);
pub const LIST_CONTENT: FormRoute =
    FormRoute::form("form-list-content", "res-list-content", list_content);

const CONTENT_PATH: &str = "/api/content";

fn details(form: &FormData) -> ContentDetails {
    ContentDetails {
        title: form.text("title"),
        description: form.text("description"),
        genre: form.text("genre"),
        release_year: form.number("releaseYear"),
    }
}

fn create_movie(form: &FormData) -> Result<ApiCall, RequestError> {
    let payload = ContentCreate::movie(
        details(form),
        form.number("durationMinutes"),
        form.text("director"),
    );
    ApiCall::post(CONTENT_PATH, &payload)
}

fn create_tv_series(form: &FormData) -> Result<ApiCall, RequestError> {
    let payload = ContentCreate::tv_series(
        details(form),
        form.number("seasons"),
        form.number("totalEpisodes"),
    );
    ApiCall::post(CONTENT_PATH, &payload)
}

fn get_content(form: &FormData) -> Result<ApiCall, RequestError> {
    Ok(ApiCall::get(format!("{}/{}", CONTENT_PATH, form.number("id"))))
}

/// Whole catalog, or one genre when the `genre` field is filled in.
fn list_content(form: &FormData) -> Result<ApiCall, RequestError> {
    let path = match form.get("genre").filter(|g| !g.is_empty()) {
        Some(genre) => format!("{}/genre/{}", CONTENT_PATH, urlencoding::encode(genre)),
        None => CONTENT_PATH.to_string(),
    };
    Ok(ApiCall::get(path))
}
