use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One job application. Resume suggestions, cover letters, and inquiries all
/// hang off this row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobApplicationRow {
    pub id: Uuid,
    pub company: String,
    pub job_title: String,
    pub job_description: String,
    pub date_applied: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeSuggestionRow {
    pub id: Uuid,
    pub job_application_id: Uuid,
    pub suggestions: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CoverLetterRow {
    pub id: Uuid,
    pub job_application_id: Uuid,
    pub cover_letter: String,
    pub created_at: DateTime<Utc>,
}

/// An outreach message sent about a specific application, linking the contact
/// it went to with the application it concerns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobInquiryRow {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub job_application_id: Uuid,
    pub date_reached_out: NaiveDate,
    pub message_sent: String,
    pub created_at: DateTime<Utc>,
}

/// Inserts a job application and returns its id.
/// `date_applied` defaults to today when the caller does not supply one.
pub async fn insert_application(
    pool: &PgPool,
    company: &str,
    job_title: &str,
    job_description: &str,
    date_applied: Option<NaiveDate>,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let date_applied = date_applied.unwrap_or_else(|| Utc::now().date_naive());
    sqlx::query(
        "INSERT INTO job_applications (id, company, job_title, job_description, date_applied)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(company)
    .bind(job_title)
    .bind(job_description)
    .bind(date_applied)
    .execute(pool)
    .await?;
    Ok(id)
}
