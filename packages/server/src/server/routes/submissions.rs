// Form submission CRUD. Every query is scoped to the authenticated user;
// another user's submission id reads as not found, never as forbidden.

use axum::extract::{Extension, Path};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::common::{ApiError, FormType, SubmissionStatus};
use crate::domains::submissions::{FormSubmission, FormSubmissionData, SubmissionChanges};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub form_type: String,
    pub status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubmissionRequest {
    pub form_data: Option<Value>,
    pub extracted_data: Option<Value>,
    pub status: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

pub async fn create_submission_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    Json(request): Json<CreateSubmissionRequest>,
) -> Result<Json<FormSubmissionData>, ApiError> {
    let form_type = FormType::parse(&request.form_type)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid form type: {}", request.form_type)))?;

    let status = match request.status.as_deref() {
        Some(s) => SubmissionStatus::parse(s)
            .ok_or_else(|| ApiError::BadRequest(format!("Invalid status: {}", s)))?,
        None => SubmissionStatus::Draft,
    };

    let submission = FormSubmission::create(
        user.user_id,
        form_type.as_str(),
        status.as_str(),
        &state.db_pool,
    )
    .await?;

    tracing::info!(
        submission_id = %submission.id,
        form_type = form_type.as_str(),
        "Submission created"
    );

    Ok(Json(submission.into()))
}

pub async fn list_submissions_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<FormSubmissionData>>, ApiError> {
    let submissions = FormSubmission::list_for_user(user.user_id, &state.db_pool).await?;

    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

pub async fn get_submission_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<FormSubmissionData>, ApiError> {
    let submission = FormSubmission::find_by_id_for_user(id, user.user_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Submission"))?;

    Ok(Json(submission.into()))
}

pub async fn update_submission_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSubmissionRequest>,
) -> Result<Json<FormSubmissionData>, ApiError> {
    if let Some(status) = request.status.as_deref() {
        if SubmissionStatus::parse(status).is_none() {
            return Err(ApiError::BadRequest(format!("Invalid status: {}", status)));
        }
    }

    let current = FormSubmission::find_by_id_for_user(id, user.user_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Submission"))?;

    let changes = build_changes(request, &current);

    let submission = FormSubmission::update_for_user(id, user.user_id, changes, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Submission"))?;

    tracing::info!(
        submission_id = %submission.id,
        status = %submission.status,
        "Submission updated"
    );

    Ok(Json(submission.into()))
}

/// Turn a PATCH body into a partial update. The first transition to
/// submitted stamps the reference, and the timestamp too unless the
/// client supplied one. Re-submitting keeps the original reference.
fn build_changes(request: UpdateSubmissionRequest, current: &FormSubmission) -> SubmissionChanges {
    let submitting = request.status.as_deref() == Some(SubmissionStatus::Submitted.as_str());

    let mut changes = SubmissionChanges {
        form_data: request.form_data,
        extracted_data: request.extracted_data,
        status: request.status,
        submitted_at: request.submitted_at,
        ..Default::default()
    };

    if submitting && current.submission_reference.is_none() {
        changes.submission_reference = Some(FormSubmission::generate_reference());
        if changes.submitted_at.is_none() {
            changes.submitted_at = Some(Utc::now());
        }
    }

    changes
}

pub async fn delete_submission_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = FormSubmission::delete_for_user(id, user.user_id, &state.db_pool).await?;

    if !deleted {
        return Err(ApiError::NotFound("Submission"));
    }

    tracing::info!(submission_id = %id, "Submission deleted");

    Ok(Json(DeleteResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn submission(reference: Option<&str>) -> FormSubmission {
        let now = Utc::now();
        FormSubmission {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            form_type: "passport".to_string(),
            status: "draft".to_string(),
            form_data: json!({}),
            extracted_data: json!({}),
            submission_reference: reference.map(|r| r.to_string()),
            created_at: now,
            updated_at: now,
            submitted_at: None,
        }
    }

    fn request(status: Option<&str>, submitted_at: Option<DateTime<Utc>>) -> UpdateSubmissionRequest {
        UpdateSubmissionRequest {
            form_data: None,
            extracted_data: None,
            status: status.map(|s| s.to_string()),
            submitted_at,
        }
    }

    #[test]
    fn test_first_submit_stamps_reference_and_timestamp() {
        let changes = build_changes(request(Some("submitted"), None), &submission(None));

        assert!(changes
            .submission_reference
            .as_deref()
            .unwrap()
            .starts_with("SUB-"));
        assert!(changes.submitted_at.is_some());
    }

    #[test]
    fn test_client_supplied_submitted_at_is_kept() {
        let when = "2026-08-20T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let changes = build_changes(request(Some("submitted"), Some(when)), &submission(None));

        assert_eq!(changes.submitted_at, Some(when));
        assert!(changes.submission_reference.is_some());
    }

    #[test]
    fn test_resubmit_keeps_existing_reference() {
        let changes = build_changes(
            request(Some("submitted"), None),
            &submission(Some("SUB-1724580000000-9F3A")),
        );

        assert!(changes.submission_reference.is_none());
        assert!(changes.submitted_at.is_none());
    }

    #[test]
    fn test_submitted_at_patchable_without_status_change() {
        let when = "2026-08-20T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let changes = build_changes(request(None, Some(when)), &submission(None));

        assert_eq!(changes.submitted_at, Some(when));
        assert!(changes.submission_reference.is_none());
    }

    #[test]
    fn test_patch_body_accepts_camel_case_submitted_at() {
        let body = json!({
            "status": "submitted",
            "submittedAt": "2026-08-20T09:30:00Z"
        });
        let request: UpdateSubmissionRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.status.as_deref(), Some("submitted"));
        assert!(request.submitted_at.is_some());
    }
}
