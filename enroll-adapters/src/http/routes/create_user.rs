use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::Deserialize;

use enroll_application::RegisterUserUseCase;
use enroll_core::{Email, NewUser, Password, PersonName, UserStore};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub lastname: String,
    pub mail: String,
    pub password: Secret<String>,
}

/// `POST /api/users`: validate the payload, run the register use case,
/// and answer 201 with the password-free view.
#[tracing::instrument(name = "Create user", skip_all)]
pub async fn create_user<U>(
    State(user_store): State<U>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
{
    // A body that does not parse as JSON at all is an internal failure;
    // a parsed body with the wrong shape is a validation failure.
    let Json(body) = payload.map_err(|e| ApiError::UnexpectedError(e.to_string()))?;
    let request: CreateUserRequest =
        serde_json::from_value(body).map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let new_user = NewUser {
        name: PersonName::try_from(request.name)?,
        lastname: PersonName::try_from(request.lastname)?,
        mail: Email::try_from(request.mail)?,
        password: Password::try_from(request.password)?,
    };

    let use_case = RegisterUserUseCase::new(&user_store);
    let created = use_case.execute(new_user).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
