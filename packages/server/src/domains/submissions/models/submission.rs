use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A form submission in progress or completed.
///
/// `extracted_data` holds what the pipeline pulled from the documents;
/// `form_data` holds the user-reviewed/edited fields. Export prefers
/// `form_data` and falls back to `extracted_data`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FormSubmission {
    pub id: Uuid,
    pub user_id: Uuid,
    pub form_type: String,
    pub status: String,
    pub form_data: serde_json::Value,
    pub extracted_data: serde_json::Value,
    pub submission_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Partial update for PATCH. None fields keep their current value.
#[derive(Debug, Default, Clone)]
pub struct SubmissionChanges {
    pub form_data: Option<serde_json::Value>,
    pub extracted_data: Option<serde_json::Value>,
    pub status: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub submission_reference: Option<String>,
}

impl FormSubmission {
    pub async fn create(
        user_id: Uuid,
        form_type: &str,
        status: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO form_submissions (user_id, form_type, status, form_data, extracted_data)
            VALUES ($1, $2, $3, '{}'::jsonb, '{}'::jsonb)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(form_type)
        .bind(status)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id_for_user(
        id: Uuid,
        user_id: Uuid,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM form_submissions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn list_for_user(user_id: Uuid, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM form_submissions WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Apply a partial update. Returns None when the row does not exist or
    /// belongs to another user.
    pub async fn update_for_user(
        id: Uuid,
        user_id: Uuid,
        changes: SubmissionChanges,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE form_submissions
            SET form_data = COALESCE($3, form_data),
                extracted_data = COALESCE($4, extracted_data),
                status = COALESCE($5, status),
                submitted_at = COALESCE($6, submitted_at),
                submission_reference = COALESCE($7, submission_reference),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(changes.form_data)
        .bind(changes.extracted_data)
        .bind(changes.status)
        .bind(changes.submitted_at)
        .bind(changes.submission_reference)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a submission the user owns. Returns whether a row was removed.
    pub async fn delete_for_user(id: Uuid, user_id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM form_submissions WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Human-readable reference stamped the first time a submission is
    /// submitted, e.g. SUB-1724580000000-9F3A.
    pub fn generate_reference() -> String {
        let suffix: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(4)
            .collect::<String>()
            .to_uppercase();
        format!("SUB-{}-{}", Utc::now().timestamp_millis(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_reference_format() {
        let reference = FormSubmission::generate_reference();
        assert!(reference.starts_with("SUB-"));

        let parts: Vec<&str> = reference.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_reference_unique() {
        assert_ne!(
            FormSubmission::generate_reference(),
            FormSubmission::generate_reference()
        );
    }
}
