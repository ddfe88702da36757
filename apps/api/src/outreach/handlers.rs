//! Axum route handlers for the Outreach API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::insert_application;
use crate::models::contact::ContactRow;
use crate::outreach::generator;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConnectionRequestBody {
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub about_section: String,
}

#[derive(Debug, Serialize)]
pub struct ConnectionRequestResponse {
    pub contact_id: Uuid,
    pub message: String,
}

/// POST /task1/linkedin-request
///
/// Generates a connection request and stores the contact together with the
/// message that was sent.
pub async fn handle_connection_request(
    State(state): State<AppState>,
    Json(request): Json<ConnectionRequestBody>,
) -> Result<Json<ConnectionRequestResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let message =
        generator::connection_request(state.llm.as_ref(), &request.name, &request.about_section)
            .await?;

    let contact_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO contacts (id, name, role, company, message_sent) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(contact_id)
    .bind(&request.name)
    .bind(&request.role)
    .bind(&request.company)
    .bind(&message)
    .execute(&state.db)
    .await?;

    Ok(Json(ConnectionRequestResponse {
        contact_id,
        message,
    }))
}

#[derive(Debug, Deserialize)]
pub struct JobInquiryBody {
    pub name: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub about_section: String,
    pub job_title: String,
    pub job_description: String,
    pub date_applied: Option<NaiveDate>,
    pub date_reached_out: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct JobInquiryResponse {
    pub inquiry_id: Uuid,
    pub contact_id: Uuid,
    pub job_application_id: Uuid,
    pub message: String,
}

/// POST /task2/job-inquiry
///
/// Generates the inquiry message, then records the contact, the application,
/// and the inquiry linking the two.
pub async fn handle_job_inquiry(
    State(state): State<AppState>,
    Json(request): Json<JobInquiryBody>,
) -> Result<Json<JobInquiryResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let message = generator::job_inquiry(
        state.llm.as_ref(),
        &request.name,
        &request.about_section,
        &request.job_description,
    )
    .await?;

    let contact_id = Uuid::new_v4();
    sqlx::query("INSERT INTO contacts (id, name, role, company) VALUES ($1, $2, $3, $4)")
        .bind(contact_id)
        .bind(&request.name)
        .bind(&request.role)
        .bind(&request.company)
        .execute(&state.db)
        .await?;

    let job_application_id = insert_application(
        &state.db,
        &request.company,
        &request.job_title,
        &request.job_description,
        request.date_applied,
    )
    .await?;

    let inquiry_id = Uuid::new_v4();
    let date_reached_out = request
        .date_reached_out
        .unwrap_or_else(|| Utc::now().date_naive());
    sqlx::query(
        "INSERT INTO job_inquiries (id, contact_id, job_application_id, date_reached_out, message_sent)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(inquiry_id)
    .bind(contact_id)
    .bind(job_application_id)
    .bind(date_reached_out)
    .bind(&message)
    .execute(&state.db)
    .await?;

    Ok(Json(JobInquiryResponse {
        inquiry_id,
        contact_id,
        job_application_id,
        message,
    }))
}

/// GET /contacts/:id
pub async fn handle_get_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactRow>, AppError> {
    sqlx::query_as::<_, ContactRow>("SELECT * FROM contacts WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Contact {id} not found")))
}
