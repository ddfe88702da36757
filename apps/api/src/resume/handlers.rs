//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{
    insert_application, CoverLetterRow, JobApplicationRow, JobInquiryRow, ResumeSuggestionRow,
};
use crate::resume::{optimizer, pdf};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    pub date_applied: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub job_application_id: Uuid,
    pub suggestions: String,
}

/// POST /task3/resume-optimization
///
/// Generates suggestions from raw resume text and records them against a new
/// job application.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    optimize_and_persist(
        &state,
        &request.resume_text,
        &request.job_description,
        &request.company,
        &request.job_title,
        request.date_applied,
    )
    .await
    .map(Json)
}

/// POST /task3/resume-optimization-pdf
///
/// Multipart variant: `resume_file` carries the PDF, `job_description` (and
/// optionally `company` / `job_title`) come as text parts.
pub async fn handle_optimize_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OptimizeResponse>, AppError> {
    let mut resume_bytes: Option<Vec<u8>> = None;
    let mut job_description: Option<String> = None;
    let mut company = String::new();
    let mut job_title = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let part = field.name().unwrap_or_default().to_string();
        match part.as_str() {
            "resume_file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read resume_file: {e}")))?;
                resume_bytes = Some(bytes.to_vec());
            }
            "job_description" => job_description = Some(read_text_part(field, &part).await?),
            "company" => company = read_text_part(field, &part).await?,
            "job_title" => job_title = read_text_part(field, &part).await?,
            _ => {}
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("resume_file part is required".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description part is required".to_string()))?;
    let resume_text = pdf::extract_text(&resume_bytes)?;

    optimize_and_persist(
        &state,
        &resume_text,
        &job_description,
        &company,
        &job_title,
        None,
    )
    .await
    .map(Json)
}

async fn read_text_part(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("failed to read {name}: {e}")))
}

async fn optimize_and_persist(
    state: &AppState,
    resume_text: &str,
    job_description: &str,
    company: &str,
    job_title: &str,
    date_applied: Option<NaiveDate>,
) -> Result<OptimizeResponse, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let suggestions =
        optimizer::optimization_suggestions(state.llm.as_ref(), resume_text, job_description)
            .await?;

    let job_application_id = insert_application(
        &state.db,
        company,
        job_title,
        job_description,
        date_applied,
    )
    .await?;

    sqlx::query(
        "INSERT INTO resume_suggestions (id, job_application_id, suggestions) VALUES ($1, $2, $3)",
    )
    .bind(Uuid::new_v4())
    .bind(job_application_id)
    .bind(&suggestions)
    .execute(&state.db)
    .await?;

    Ok(OptimizeResponse {
        job_application_id,
        suggestions,
    })
}

#[derive(Debug, Serialize)]
pub struct ApplicationDetailResponse {
    pub application: JobApplicationRow,
    pub resume_suggestion: Option<ResumeSuggestionRow>,
    pub cover_letter: Option<CoverLetterRow>,
    pub inquiries: Vec<JobInquiryRow>,
}

/// GET /applications/:id
///
/// Returns the application row with every artifact generated for it.
pub async fn handle_get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicationDetailResponse>, AppError> {
    let application =
        sqlx::query_as::<_, JobApplicationRow>("SELECT * FROM job_applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    let resume_suggestion = sqlx::query_as::<_, ResumeSuggestionRow>(
        "SELECT * FROM resume_suggestions WHERE job_application_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let cover_letter = sqlx::query_as::<_, CoverLetterRow>(
        "SELECT * FROM cover_letters WHERE job_application_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let inquiries = sqlx::query_as::<_, JobInquiryRow>(
        "SELECT * FROM job_inquiries WHERE job_application_id = $1 ORDER BY created_at",
    )
    .bind(id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(ApplicationDetailResponse {
        application,
        resume_suggestion,
        cover_letter,
        inquiries,
    }))
}
