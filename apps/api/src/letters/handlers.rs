//! Axum route handlers for the Letters API.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::letters::generator::{self, CoverLetterOutcome};
use crate::models::application::insert_application;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequestBody {
    pub resume_text: String,
    pub job_description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_title: String,
    /// Answers to a previous follow-up round. Present means "final pass".
    pub follow_up_answers: Option<String>,
    pub date_applied: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CoverLetterResponse {
    Letter {
        job_application_id: Uuid,
        cover_letter: String,
    },
    FollowUp {
        follow_up_needed: bool,
        questions: Vec<String>,
    },
}

/// POST /task4/cover-letter
///
/// Without `follow_up_answers`: initial pass, which either persists a
/// finished letter or returns follow-up questions (nothing persisted).
/// With answers: final pass, always persisting the letter.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequestBody>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let portfolio = state.config.portfolio_url.as_deref();
    let outcome = match &request.follow_up_answers {
        Some(answers) => CoverLetterOutcome::Letter(
            generator::final_letter(
                state.llm.as_ref(),
                portfolio,
                &request.resume_text,
                &request.job_description,
                answers,
            )
            .await?,
        ),
        None => {
            generator::initial_letter(
                state.llm.as_ref(),
                portfolio,
                &request.resume_text,
                &request.job_description,
            )
            .await?
        }
    };

    match outcome {
        CoverLetterOutcome::FollowUp(questions) => Ok(Json(CoverLetterResponse::FollowUp {
            follow_up_needed: true,
            questions,
        })),
        CoverLetterOutcome::Letter(cover_letter) => {
            let job_application_id = insert_application(
                &state.db,
                &request.company,
                &request.job_title,
                &request.job_description,
                request.date_applied,
            )
            .await?;

            sqlx::query(
                "INSERT INTO cover_letters (id, job_application_id, cover_letter) VALUES ($1, $2, $3)",
            )
            .bind(Uuid::new_v4())
            .bind(job_application_id)
            .bind(&cover_letter)
            .execute(&state.db)
            .await?;

            Ok(Json(CoverLetterResponse::Letter {
                job_application_id,
                cover_letter,
            }))
        }
    }
}
