//! Wire shapes for the HTTP surface.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use settle_core::{AreaTag, Group, ReferenceKey};

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub processing_id: String,
}

#[derive(Debug, Serialize)]
pub struct JobSummary {
    pub total_transactions: u32,
    pub total_amount: Decimal,
}

/// `GET /api/processing-status/<id>`. `processed_data`/`raw_contents`/
/// `separator`/`summary` are only populated once the job has completed.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub progress_percent: u8,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_data: Option<IndexMap<ReferenceKey, Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_contents: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<JobSummary>,
}

/// `POST /api/generate-report`. A deliberately stateless shape: the client
/// echoes back what the status endpoint handed it rather than the server
/// re-deriving the groups from job state.
/// `raw_contents`/`separator` are accepted for wire compatibility but
/// unused here — unlike the source, `processed_data`'s groups already
/// carry their own raw lines end to end, so there's nothing left to
/// re-derive from them.
#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    pub processed_data: IndexMap<ReferenceKey, Group>,
    #[serde(default)]
    pub raw_contents: Option<String>,
    #[serde(default)]
    pub separator: Option<String>,
    pub original_filename: String,
    pub area: AreaTag,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
