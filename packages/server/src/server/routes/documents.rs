// Documents attached to a submission.

use axum::extract::{Extension, Path};
use axum::Json;
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::documents::{Document, DocumentData};
use crate::domains::submissions::FormSubmission;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

pub async fn list_documents_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    Path(submission_id): Path<Uuid>,
) -> Result<Json<Vec<DocumentData>>, ApiError> {
    // Ownership check on the submission itself, so an unknown or foreign
    // id is a 404 rather than an empty list.
    FormSubmission::find_by_id_for_user(submission_id, user.user_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Submission"))?;

    let documents =
        Document::find_for_submission(submission_id, user.user_id, &state.db_pool).await?;

    Ok(Json(documents.into_iter().map(Into::into).collect()))
}
