//! Account handlers: registration and lookup by id.

use super::{ApiCall, FormRoute};
use crate::api::RequestError;
use crate::forms::{FormData, UserRegistration};

pub const REGISTER: FormRoute = FormRoute::form("form-register", "res-register", register);
pub const GET_USER: FormRoute = FormRoute::form("form-get-user", "res-get-user", get_user);

fn register(form: &FormData) -> Result<ApiCall, RequestError> {
    let payload = UserRegistration {
        username: form.text("username"),
        email: form.text("email"),
        password: form.text("password"),
        tier: form.text("tier"),
    };
    ApiCall::post("/api/users/register", &payload)
}

fn get_user(form: &FormData) -> Result<ApiCall, RequestError> {
    Ok(ApiCall::get(format!("/api/users/{}", form.number("id"))))
}
