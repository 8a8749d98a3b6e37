//! Axum handlers for the upload, status, report, and health endpoints.

use std::str::FromStr;

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{info, warn};
use uuid::Uuid;

use settle_core::{AreaTag, ChannelId, Job, JobId, JobState, SettleError};

use crate::dto::{GenerateReportRequest, HealthResponse, JobSummary, StatusResponse, UploadResponse};
use crate::error::ApiError;
use crate::filename;
use crate::state::AppState;
use crate::worker;

/// `POST /api/upload-file` — multipart `file`, `payment_mode`, `area`.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut payment_mode: Option<String> = None;
    let mut area: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SettleError::validation(format!("malformed multipart body: {e}")))?
    {
        match field.name().unwrap_or_default() {
            "file" => {
                file_name = field.file_name().map(str::to_string);
                file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| SettleError::validation(format!("could not read file field: {e}")))?
                        .to_vec(),
                );
            }
            "payment_mode" => {
                payment_mode = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| SettleError::validation(format!("bad payment_mode field: {e}")))?,
                );
            }
            "area" => {
                area = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| SettleError::validation(format!("bad area field: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let file_bytes = file_bytes.ok_or_else(|| SettleError::validation("missing file field"))?;
    let original_name = file_name.unwrap_or_else(|| "upload.txt".to_string());
    let payment_mode = payment_mode.ok_or_else(|| SettleError::validation("missing payment_mode field"))?;
    let area = area.ok_or_else(|| SettleError::validation("missing area field"))?;

    if file_bytes.len() as u64 > state.config.max_upload_bytes {
        return Err(SettleError::validation(format!(
            "file exceeds maximum upload size of {} bytes",
            state.config.max_upload_bytes
        ))
        .into());
    }

    let channel_id = ChannelId::from_str(&payment_mode)?;
    let area_tag = AreaTag::from_str(&area)?;

    let secured = filename::secure_filename(&original_name);
    let suffixed = filename::suffix_filename(&secured, area_tag);

    let job_id = JobId::new(Uuid::new_v4().to_string());
    let job = Job::new(job_id.clone(), channel_id, area_tag, suffixed.clone(), file_bytes.clone());
    let (slot, cancel) = state.jobs.insert(job);

    info!(%job_id, %channel_id, %area_tag, "job submitted");

    let upload_dir = state.config.upload_dir.clone();
    let staged_path = upload_dir.join(&suffixed);
    tokio::spawn(async move {
        if let Err(e) = tokio::fs::create_dir_all(&upload_dir).await {
            warn!(error = %e, "could not create upload directory");
        } else if let Err(e) = tokio::fs::write(&staged_path, &file_bytes).await {
            warn!(error = %e, "could not stage uploaded file to disk");
        }

        worker::run(slot, cancel).await;

        if let Err(e) = tokio::fs::remove_file(&staged_path).await {
            warn!(error = %e, "could not remove staged upload after job completion");
        }
    });

    Ok(Json(UploadResponse {
        processing_id: job_id.to_string(),
    }))
}

/// `GET /api/processing-status/<id>`.
pub async fn processing_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let job_id = JobId::new(id.clone());
    let job: Job = state
        .jobs
        .snapshot(&job_id)
        .ok_or_else(|| SettleError::job_not_found(id))?;

    let response = match job.state {
        JobState::Queued => StatusResponse {
            status: job.state.to_string(),
            progress_percent: 0,
            created_at: job.created_at,
            completed_at: None,
            error: None,
            processed_data: None,
            raw_contents: None,
            separator: None,
            summary: None,
        },
        JobState::Processing => StatusResponse {
            status: job.state.to_string(),
            progress_percent: 50,
            created_at: job.created_at,
            completed_at: None,
            error: None,
            processed_data: None,
            raw_contents: None,
            separator: None,
            summary: None,
        },
        JobState::Error => StatusResponse {
            status: job.state.to_string(),
            progress_percent: 100,
            created_at: job.created_at,
            completed_at: job.completed_at,
            error: job.error_message.clone(),
            processed_data: None,
            raw_contents: None,
            separator: None,
            summary: None,
        },
        JobState::Completed => {
            let total_transactions = job.total_record_count();
            let total_amount = job.groups.values().map(|g| g.total).sum();
            let separator = settle_core::registry::lookup(job.channel_id)
                .delimiter_kind
                .to_string();
            StatusResponse {
                status: job.state.to_string(),
                progress_percent: 100,
                created_at: job.created_at,
                completed_at: job.completed_at,
                error: None,
                processed_data: Some(job.groups.clone()),
                raw_contents: job.raw_text.clone(),
                separator: Some(separator),
                summary: Some(JobSummary {
                    total_transactions,
                    total_amount,
                }),
            }
        }
    };

    Ok(Json(response))
}

/// `POST /api/generate-report` — stateless: the client echoes back
/// `processed_data` from the status endpoint, and this handler renders it
/// straight to a ZIP without touching the job table.
pub async fn generate_report(Json(req): Json<GenerateReportRequest>) -> Result<Response, ApiError> {
    let bytes = settle_report::build_archive(&req.processed_data, req.area).map_err(ApiError::from)?;
    let base = filename::original_base(&req.original_filename);
    let archive_name = settle_report::archive_filename(base, req.area);

    let mut response = bytes.into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/zip"));
    let disposition = format!("attachment; filename=\"{archive_name}\"");
    response.headers_mut().insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| SettleError::internal(format!("invalid archive filename: {e}")))?,
    );
    *response.status_mut() = StatusCode::OK;
    Ok(response)
}

/// `GET /api/health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
