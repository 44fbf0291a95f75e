use sqlx::{PgExecutor, PgPool};

use crate::db::errors::{DatabaseError, Result};
use crate::models::PointCategory;

/// Load a point category with its award bounds. Executor-generic so the
/// award path reads the bounds inside its own transaction.
pub async fn get_category<'e, E>(executor: E, category_id: i64) -> Result<Option<PointCategory>>
where
    E: PgExecutor<'e>,
{
    let category = sqlx::query_as::<_, PointCategory>(
        r#"
        SELECT id, name, min_value, max_value, is_active
        FROM club_pointcategory
        WHERE id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(executor)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(category)
}

/// Categories currently usable for new awards, for the staff award form
pub async fn list_active_categories(pool: &PgPool) -> Result<Vec<PointCategory>> {
    let categories = sqlx::query_as::<_, PointCategory>(
        r#"
        SELECT id, name, min_value, max_value, is_active
        FROM club_pointcategory
        WHERE is_active = TRUE
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(categories)
}
