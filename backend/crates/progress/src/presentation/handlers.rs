//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::{AdjustProgressUseCase, GetProgressUseCase};
use crate::domain::repository::ProgressRepository;
use crate::error::ProgressResult;
use crate::presentation::dto::{
    AdjustProgressRequest, AdjustProgressResponse, ProgressValueResponse,
};

/// Shared state for progress handlers
#[derive(Clone)]
pub struct ProgressAppState<R>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Increment
// ============================================================================

/// POST /api/incrementProgress
pub async fn increment_progress<R>(
    State(state): State<ProgressAppState<R>>,
    Json(req): Json<AdjustProgressRequest>,
) -> ProgressResult<Json<AdjustProgressResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let use_case = AdjustProgressUseCase::new(state.repo.clone());

    let value = use_case.execute(req.number).await?;

    Ok(Json(AdjustProgressResponse {
        message: "Incremented successfully".to_string(),
        value,
    }))
}

// ============================================================================
// Decrement
// ============================================================================

/// POST /api/decrementProgress
pub async fn decrement_progress<R>(
    State(state): State<ProgressAppState<R>>,
    Json(req): Json<AdjustProgressRequest>,
) -> ProgressResult<Json<AdjustProgressResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let use_case = AdjustProgressUseCase::new(state.repo.clone());

    let value = use_case.execute(-req.number).await?;

    Ok(Json(AdjustProgressResponse {
        message: "Decremented successfully".to_string(),
        value,
    }))
}

// ============================================================================
// Get
// ============================================================================

/// GET /api/getProgress
pub async fn get_progress<R>(
    State(state): State<ProgressAppState<R>>,
) -> ProgressResult<Json<ProgressValueResponse>>
where
    R: ProgressRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetProgressUseCase::new(state.repo.clone());

    let value = use_case.execute().await?;

    Ok(Json(ProgressValueResponse { value }))
}
