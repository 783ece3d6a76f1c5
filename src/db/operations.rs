use sqlx::PgPool;
use crate::models::Book;
use crate::types::AppResult;

/// Persistence operations for the books table. Create and lookup only;
/// book content is immutable once written.
pub struct BookStore;

impl BookStore {
    pub async fn create(pool: &PgPool, filename: &str, content: &str) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (filename, content)
            VALUES ($1, $2)
            RETURNING id, filename, content, uploaded_at
            "#,
        )
        .bind(filename)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(book)
    }

    pub async fn get_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT id, filename, content, uploaded_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(book)
    }
}
