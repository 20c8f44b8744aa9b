//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Increment / Decrement
// ============================================================================

/// Adjustment request for increment and decrement
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustProgressRequest {
    pub number: i64,
}

/// Adjustment response carrying the new value
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustProgressResponse {
    pub message: String,
    pub value: i64,
}

// ============================================================================
// Get
// ============================================================================

/// Current value response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressValueResponse {
    pub value: i64,
}
