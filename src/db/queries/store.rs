use sqlx::{PgConnection, PgExecutor, PgPool, Row};
use tracing::debug;

use crate::db::errors::{DatabaseError, Result};
use crate::models::StoreItem;

/// Take the transaction-scoped advisory lock for a student's redemptions.
/// Serializes one student's redemptions across different items so two
/// in-flight transactions cannot both pass the balance check against a
/// balance neither reflects. Released automatically at commit or rollback.
pub async fn lock_student_for_redemption(conn: &mut PgConnection, student_id: i64) -> Result<()> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(student_id)
        .execute(&mut *conn)
        .await
        .map_err(DatabaseError::QueryError)?;

    debug!(student_id, "Acquired per-student redemption lock");
    Ok(())
}

/// Lock and load a store item row. FOR UPDATE blocks concurrent
/// redemptions of the same item until the owning transaction completes,
/// so stock is observed one transaction at a time.
pub async fn lock_store_item(conn: &mut PgConnection, item_id: i64) -> Result<Option<StoreItem>> {
    let item = sqlx::query_as::<_, StoreItem>(
        r#"
        SELECT id, name, cost, stock, is_active
        FROM club_storeitem
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(item_id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(item)
}

/// Decrement item stock by one. The caller holds the row lock and has
/// already verified stock > 0; the guard in the statement keeps stock
/// non-negative even so.
pub async fn decrement_stock(conn: &mut PgConnection, item_id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE club_storeitem
        SET stock = stock - 1
        WHERE id = $1 AND stock > 0
        "#,
    )
    .bind(item_id)
    .execute(&mut *conn)
    .await
    .map_err(DatabaseError::QueryError)?;

    if result.rows_affected() != 1 {
        return Err(DatabaseError::IntegrityError(format!(
            "stock decrement affected {} rows for item {}",
            result.rows_affected(),
            item_id
        )));
    }

    Ok(())
}

/// Append one redemption with the cost snapshotted at lock time. Returns
/// the server-assigned id. Rows written here are immutable.
pub async fn insert_redemption(
    conn: &mut PgConnection,
    student_id: i64,
    item_id: i64,
    cost_at_tx: i32,
    created_by: i64,
) -> Result<i64> {
    let row = sqlx::query(
        r#"
        INSERT INTO club_redemption (student_id, item_id, cost_at_tx, redeemed_at, created_by)
        VALUES ($1, $2, $3, NOW(), $4)
        RETURNING id
        "#,
    )
    .bind(student_id)
    .bind(item_id)
    .bind(cost_at_tx)
    .bind(created_by)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::QueryError)?;

    let redemption_id: i64 = row.get("id");

    debug!(redemption_id, student_id, item_id, "Inserted redemption");
    Ok(redemption_id)
}

/// Load a store item without locking it, for catalog reads
pub async fn get_store_item<'e, E>(executor: E, item_id: i64) -> Result<Option<StoreItem>>
where
    E: PgExecutor<'e>,
{
    let item = sqlx::query_as::<_, StoreItem>(
        r#"
        SELECT id, name, cost, stock, is_active
        FROM club_storeitem
        WHERE id = $1
        "#,
    )
    .bind(item_id)
    .fetch_optional(executor)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(item)
}

/// Store catalog: active items, ordered by name
pub async fn list_active_store_items(pool: &PgPool) -> Result<Vec<StoreItem>> {
    let items = sqlx::query_as::<_, StoreItem>(
        r#"
        SELECT id, name, cost, stock, is_active
        FROM club_storeitem
        WHERE is_active = TRUE
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(items)
}
