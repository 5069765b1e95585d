//! Personalized recommendations, queried through the URL.

use super::{ApiCall, FormRoute};
use crate::api::RequestError;
use crate::forms::{FormData, RecommendationQuery};

pub const RECOMMENDATIONS: FormRoute =
    FormRoute::form("form-reco", "res-reco", recommendations);

fn recommendations(form: &FormData) -> Result<ApiCall, RequestError> {
    let query = RecommendationQuery {
        user_id: form.number("userId"),
        limit: form.number("limit"),
    };
    Ok(ApiCall::get(query.path()))
}
