//! Thought endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::repos::{Thought, ThoughtRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ThoughtId;
use crate::http::server::AppState;
use crate::models::ThoughtMessage;

/// Fixed cap for the list endpoint, no pagination cursor
const LIST_LIMIT: i64 = 20;

/// Create thought request
///
/// Only `message` is read; hearts and createdAt are server-controlled.
#[derive(Deserialize)]
pub struct CreateThoughtRequest {
    pub message: Option<String>,
}

/// Update thought request
#[derive(Deserialize)]
pub struct UpdateThoughtRequest {
    pub message: Option<String>,
}

/// Thought response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtResponse {
    pub id: Uuid,
    pub message: String,
    pub hearts: i32,
    pub created_at: String,
}

impl From<Thought> for ThoughtResponse {
    fn from(t: Thought) -> Self {
        Self {
            id: t.id,
            message: t.message,
            hearts: t.hearts,
            created_at: t.created_at.to_rfc3339(),
        }
    }
}

/// Delete confirmation response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteThoughtResponse {
    pub success: bool,
    pub message: &'static str,
    pub deleted_thought: ThoughtResponse,
}

/// GET /thoughts - newest thoughts, at most 20
async fn list_thoughts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ThoughtResponse>>, ApiError> {
    let thoughts = ThoughtRepo::new(&state.pool).list_recent(LIST_LIMIT).await?;

    Ok(Json(
        thoughts.into_iter().map(ThoughtResponse::from).collect(),
    ))
}

/// GET /thoughts/{id} - single thought
async fn get_thought(
    State(state): State<Arc<AppState>>,
    ThoughtId(id): ThoughtId,
) -> Result<Json<ThoughtResponse>, ApiError> {
    let thought = ThoughtRepo::new(&state.pool).get(id).await?;
    Ok(Json(ThoughtResponse::from(thought)))
}

/// POST /thoughts - create a thought
async fn create_thought(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateThoughtRequest>,
) -> Result<(StatusCode, Json<ThoughtResponse>), ApiError> {
    let message = ThoughtMessage::new(req.message.as_deref())?;

    let thought = ThoughtRepo::new(&state.pool).create(message).await?;

    Ok((StatusCode::CREATED, Json(ThoughtResponse::from(thought))))
}

/// POST /thoughts/{id}/like - increment hearts
async fn like_thought(
    State(state): State<Arc<AppState>>,
    ThoughtId(id): ThoughtId,
) -> Result<Json<ThoughtResponse>, ApiError> {
    let thought = ThoughtRepo::new(&state.pool).like(id).await?;
    Ok(Json(ThoughtResponse::from(thought)))
}

/// PUT /thoughts/{id} - replace the message
async fn update_thought(
    State(state): State<Arc<AppState>>,
    ThoughtId(id): ThoughtId,
    Json(req): Json<UpdateThoughtRequest>,
) -> Result<Json<ThoughtResponse>, ApiError> {
    let message = ThoughtMessage::new(req.message.as_deref())?;

    let thought = ThoughtRepo::new(&state.pool)
        .update_message(id, message)
        .await?;

    Ok(Json(ThoughtResponse::from(thought)))
}

/// DELETE /thoughts/{id} - remove and return prior state
async fn delete_thought(
    State(state): State<Arc<AppState>>,
    ThoughtId(id): ThoughtId,
) -> Result<Json<DeleteThoughtResponse>, ApiError> {
    let thought = ThoughtRepo::new(&state.pool).delete(id).await?;

    Ok(Json(DeleteThoughtResponse {
        success: true,
        message: "Thought deleted successfully",
        deleted_thought: ThoughtResponse::from(thought),
    }))
}

/// Thought routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/thoughts", get(list_thoughts).post(create_thought))
        .route(
            "/thoughts/{id}",
            get(get_thought).put(update_thought).delete(delete_thought),
        )
        .route("/thoughts/{id}/like", post(like_thought))
}
