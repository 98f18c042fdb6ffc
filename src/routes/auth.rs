//! Auth routes: account creation, sign-in, bank-link tokens.
//!
//! Every body is re-validated with the same schema the browser form uses, so
//! a request that skips the form never reaches the identity backend.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::identity::REJECTED_NOTICE;
use client::net::types::{ApiError, LinkTokenRequest};
use client::state::fields::{Credentials, FieldSet, FormMode, SignUpFields};
use client::util::validation::{FieldErrors, ValidationSchema};

use crate::services::identity::{IdentityApi, IdentityError};
use crate::state::AppState;

fn api_error(status: StatusCode, error: &str) -> Response {
    (status, Json(ApiError { error: error.to_owned(), ..ApiError::default() })).into_response()
}

fn invalid(errors: &FieldErrors) -> Response {
    let fields = errors.iter().map(|(field, e)| (field.name().to_owned(), e.to_string())).collect();
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiError { error: "validation failed".to_owned(), fields }))
        .into_response()
}

fn identity(state: &AppState) -> Result<Arc<dyn IdentityApi>, Response> {
    state
        .identity
        .clone()
        .ok_or_else(|| api_error(StatusCode::SERVICE_UNAVAILABLE, "identity backend not configured"))
}

fn identity_failure(op: &'static str, e: &IdentityError) -> Response {
    if let IdentityError::Rejected = e {
        tracing::info!(op, "identity backend rejected credentials");
        return api_error(StatusCode::UNAUTHORIZED, REJECTED_NOTICE);
    }
    tracing::error!(error = %e, op, "identity call failed");
    api_error(StatusCode::BAD_GATEWAY, "identity backend unavailable")
}

fn validate(mode: FormMode, fields: FieldSet) -> Result<(), Response> {
    ValidationSchema::for_mode(mode).validate(&fields).map_err(|errors| {
        tracing::debug!(%mode, count = errors.len(), "rejected invalid auth body");
        invalid(&errors)
    })
}

/// `POST /api/auth/sign-up`
pub async fn sign_up(State(state): State<AppState>, Json(fields): Json<SignUpFields>) -> Response {
    if let Err(resp) = validate(FormMode::SignUp, FieldSet::SignUp(fields.clone())) {
        return resp;
    }
    let identity = match identity(&state) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    match identity.sign_up(&fields).await {
        Ok(user) => {
            tracing::info!(user_id = %user.user_id, "account created");
            Json(user).into_response()
        }
        Err(e) => identity_failure("sign-up", &e),
    }
}

/// `POST /api/auth/sign-in`
pub async fn sign_in(State(state): State<AppState>, Json(credentials): Json<Credentials>) -> Response {
    if let Err(resp) = validate(FormMode::SignIn, FieldSet::SignIn(credentials.clone())) {
        return resp;
    }
    let identity = match identity(&state) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    match identity.sign_in(&credentials).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => identity_failure("sign-in", &e),
    }
}

/// `POST /api/link/token`
pub async fn link_token(State(state): State<AppState>, Json(request): Json<LinkTokenRequest>) -> Response {
    if request.user_id.trim().is_empty() {
        let fields = [("userId".to_owned(), "User ID is required".to_owned())].into_iter().collect();
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiError { error: "validation failed".to_owned(), fields }))
            .into_response();
    }
    let identity = match identity(&state) {
        Ok(identity) => identity,
        Err(resp) => return resp,
    };

    match identity.create_link_token(&request).await {
        Ok(token) => Json(token).into_response(),
        Err(e) => identity_failure("link-token", &e),
    }
}
