//! Presale Schedule Fetch
//!
//! One-shot fetch of the presale end time from the remote JSON endpoint.
//! Any failure is non-fatal: the caller gets the fixed fallback instant
//! and the error only reaches the log.

use chrono::DateTime;
use serde::Deserialize;
use thiserror::Error;

/// Fallback presale end: 2025-01-14T16:00:00Z
pub const FALLBACK_END_TIME_MS: i64 = 1_736_870_400_000;

/// Schedule fetch errors; all of them collapse to the fallback
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Request failed or the endpoint returned a non-success status
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Body did not carry a parsable ISO-8601 end time
    #[error("invalid presale end time: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
}

/// Remote endpoint body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresaleTimeBody {
    presale_end_time: String,
}

/// Fetch the presale end time as epoch milliseconds, substituting the
/// fallback instant on any failure.
pub async fn fetch_end_time(client: &reqwest::Client, url: &str) -> i64 {
    match try_fetch_end_time(client, url).await {
        Ok(end_ms) => end_ms,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to built-in presale end time");
            FALLBACK_END_TIME_MS
        }
    }
}

async fn try_fetch_end_time(client: &reqwest::Client, url: &str) -> Result<i64, ScheduleError> {
    let body: PresaleTimeBody = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    parse_end_time(&body.presale_end_time)
}

/// Parse an ISO-8601 timestamp into epoch milliseconds
fn parse_end_time(raw: &str) -> Result<i64, ScheduleError> {
    let end = DateTime::parse_from_rfc3339(raw)?;
    Ok(end.timestamp_millis())
}
