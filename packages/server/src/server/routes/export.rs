// Export a submission as a downloadable printable HTML document.

use axum::extract::{Extension, Path};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::export::{export_file_name, render_submission};
use crate::domains::submissions::FormSubmission;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

pub async fn export_submission_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let submission = FormSubmission::find_by_id_for_user(id, user.user_id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound("Submission"))?;

    let html = render_submission(&submission);
    let file_name = export_file_name(&submission);

    tracing::info!(submission_id = %id, file_name = %file_name, "Submission exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        html,
    )
        .into_response())
}
