use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// An uploaded identity document: blob-store pointer plus the OCR text
/// once recognition has run.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    pub id: Uuid,
    pub user_id: Uuid,
    pub form_submission_id: Option<Uuid>,
    pub document_type: String,
    pub file_url: String,
    pub file_name: String,
    pub file_size: i64,
    pub content_hash: Option<String>,
    pub extracted_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        user_id: Uuid,
        form_submission_id: Option<Uuid>,
        document_type: &str,
        file_url: &str,
        file_name: &str,
        file_size: i64,
        content_hash: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO documents (user_id, form_submission_id, document_type, file_url, file_name, file_size, content_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(form_submission_id)
        .bind(document_type)
        .bind(file_url)
        .bind(file_name)
        .bind(file_size)
        .bind(content_hash)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id_for_user(
        id: Uuid,
        user_id: Uuid,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM documents WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Store the OCR output on the document row.
    pub async fn update_extracted_text(id: Uuid, text: &str, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE documents SET extracted_text = $2 WHERE id = $1")
            .bind(id)
            .bind(text)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Documents linked to a submission, oldest first (upload order).
    pub async fn find_for_submission(
        form_submission_id: Uuid,
        user_id: Uuid,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM documents
            WHERE form_submission_id = $1 AND user_id = $2
            ORDER BY created_at ASC
            "#,
        )
        .bind(form_submission_id)
        .bind(user_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// An earlier upload of the same bytes by the same user, if any.
    pub async fn find_by_content_hash(
        user_id: Uuid,
        content_hash: &str,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM documents
            WHERE user_id = $1 AND content_hash = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(content_hash)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}
