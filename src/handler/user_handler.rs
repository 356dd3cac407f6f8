use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{http::StatusCode, Json};
use validator::Validate;

use crate::dto::common_dto::Pagination;
use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest};
use crate::handler::parse_object_id;
use crate::service::user_service::UserService;
use crate::util::error::HandlerError;

pub async fn create_user_handler(
    State(service): State<Arc<UserService>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    let created = service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_user_handler(
    State(service): State<Arc<UserService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "user")?;
    Ok(Json(service.get_user(id).await?))
}

pub async fn update_user_handler(
    State(service): State<Arc<UserService>>,
    Path((id,)): Path<(String,)>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "user")?;
    payload
        .validate()
        .map_err(|e| HandlerError::validation(format!("Validation error: {}", e)))?;
    Ok(Json(service.update_user(id, payload).await?))
}

pub async fn delete_user_handler(
    State(service): State<Arc<UserService>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "user")?;
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_users_handler(
    State(service): State<Arc<UserService>>,
    Query(pagination): Query<Pagination>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service
        .list_users(pagination.page(), pagination.limit())
        .await?;
    Ok(Json(users))
}
