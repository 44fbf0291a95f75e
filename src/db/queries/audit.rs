use serde_json::Value as JsonValue;
use sqlx::{PgConnection, PgPool, Row};
use tracing::debug;

use crate::db::errors::{DatabaseError, Result};
use crate::models::{AuditAction, AuditLogEntry};

/// Append one audit entry. Always called inside the transaction that
/// performs the mutation it records, so the pair commits or rolls back as
/// one unit.
pub async fn insert_audit_entry(
    conn: &mut PgConnection,
    actor_id: i64,
    action: AuditAction,
    target_id: i64,
    meta: JsonValue,
) -> Result<i64> {
    let row = sqlx::query(
        r#"
        INSERT INTO club_auditlogentry (actor_id, action, target_id, meta, created_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING id
        "#,
    )
    .bind(actor_id)
    .bind(action.as_str())
    .bind(target_id)
    .bind(meta)
    .fetch_one(&mut *conn)
    .await
    .map_err(DatabaseError::QueryError)?;

    let audit_id: i64 = row.get("id");

    debug!(audit_id, action = action.as_str(), "Inserted audit entry");
    Ok(audit_id)
}

/// Most recent audit entries, newest first, for the admin audit screen
pub async fn recent_audit_entries(pool: &PgPool, limit: i64) -> Result<Vec<AuditLogEntry>> {
    let entries = sqlx::query_as::<_, AuditLogEntry>(
        r#"
        SELECT id, actor_id, action, target_id, meta, created_at
        FROM club_auditlogentry
        ORDER BY created_at DESC, id DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(entries)
}
