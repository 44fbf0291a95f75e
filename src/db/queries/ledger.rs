use sqlx::{PgConnection, PgExecutor, Row};
use tracing::debug;

use crate::db::errors::{DatabaseError, Result};

/// Net point balance for a student: sum of point event deltas minus sum of
/// redemption costs, 0 when no history exists.
///
/// Executor-generic: run against the pool for a standalone read, or against
/// an open transaction so the result reflects rows already written (and
/// locks already held) there.
pub async fn net_balance<'e, E>(executor: E, student_id: i64) -> Result<i64>
where
    E: PgExecutor<'e>,
{
    let balance: i64 = sqlx::query_scalar(
        r#"
        SELECT COALESCE((SELECT SUM(delta) FROM club_pointevent WHERE student_id = $1), 0)
             - COALESCE((SELECT SUM(cost_at_tx) FROM club_redemption WHERE student_id = $1), 0)
        "#,
    )
    .bind(student_id)
    .fetch_one(executor)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(balance)
}

/// Append one point event to the ledger. Returns the server-assigned id.
/// Rows written here are immutable; no update or delete statement exists
/// for this table anywhere in the crate.
pub async fn insert_point_event(
    conn: &mut PgConnection,
    student_id: i64,
    category_id: i64,
    delta: i32,
    note: Option<&str>,
    created_by: i64,
) -> Result<i64> {
    let row = sqlx::query(
        r#"
        INSERT INTO club_pointevent (student_id, category_id, delta, note, event_time, created_by)
        VALUES ($1, $2, $3, $4, NOW(), $5)
        RETURNING id
        "#,
    )
    .bind(student_id)
    .bind(category_id)
    .bind(delta)
    .bind(note)
    .bind(created_by)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::QueryError)?;

    let event_id: i64 = row.get("id");

    debug!(event_id, student_id, delta, "Inserted point event");
    Ok(event_id)
}
