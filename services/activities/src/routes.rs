use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::registry::{Listing, Registry};

pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Clone)]
pub struct AppState {
    pub registry: Registry,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    email: Option<String>,
}

impl EmailQuery {
    fn into_email(self) -> ApiResult<String> {
        self.email.ok_or(ApiError::MissingEmail)
    }
}

pub async fn root() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "mergington-activities",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Unknown query parameters (the page's `?t=` cache buster) are ignored.
pub async fn list_activities(State(state): State<AppState>) -> Json<Listing> {
    Json(state.registry.list_activities().await)
}

pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(query) = query?;
    let email = query.into_email()?;

    let message = state.registry.signup(&activity_name, &email).await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<Value>> {
    let Query(query) = query?;
    let email = query.into_email()?;

    let message = state.registry.unregister(&activity_name, &email).await?;
    Ok(Json(json!({ "message": message })))
}
