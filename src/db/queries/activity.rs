use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::db::errors::{DatabaseError, Result};
use crate::models::{ActivityEntry, ActivityKind, CalendarDay, Incident};

/// Daily point totals over an inclusive date range. The day sequence is
/// generated server-side and left-joined against day-truncated events, so
/// days with no activity appear with a zero total. Day boundaries follow
/// the database time zone.
pub async fn points_by_day(
    pool: &PgPool,
    student_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<CalendarDay>> {
    let days = sqlx::query_as::<_, CalendarDay>(
        r#"
        SELECT g.day::date AS day, COALESCE(SUM(pe.delta), 0)::bigint AS total_delta
        FROM generate_series($2::date, $3::date, '1 day'::interval) AS g(day)
        LEFT JOIN club_pointevent pe
            ON pe.student_id = $1 AND pe.event_time::date = g.day::date
        GROUP BY g.day
        ORDER BY g.day
        "#,
    )
    .bind(student_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    debug!(student_id, "Loaded {} calendar days", days.len());
    Ok(days)
}

#[derive(Debug, FromRow)]
struct ActivityRow {
    kind: String,
    id: i64,
    student_id: i64,
    detail: Option<String>,
    happened_at: DateTime<Utc>,
}

/// Read-time union of point events, redemptions and incidents, newest
/// first, truncated to `limit` entries. No materialized feed table backs
/// this; the merge happens in the query.
pub async fn recent_feed(pool: &PgPool, limit: i64) -> Result<Vec<ActivityEntry>> {
    let rows = sqlx::query_as::<_, ActivityRow>(
        r#"
        SELECT kind, id, student_id, detail, happened_at
        FROM (
            SELECT 'point_event' AS kind, pe.id, pe.student_id,
                   pe.note AS detail, pe.event_time AS happened_at
            FROM club_pointevent pe
            UNION ALL
            SELECT 'redemption' AS kind, r.id, r.student_id,
                   si.name AS detail, r.redeemed_at AS happened_at
            FROM club_redemption r
            JOIN club_storeitem si ON si.id = r.item_id
            UNION ALL
            SELECT 'incident' AS kind, i.id, i.student_id,
                   i.summary AS detail, i.occurred_at AS happened_at
            FROM club_incident i
        ) feed
        ORDER BY happened_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    rows.into_iter()
        .map(|row| {
            let kind = ActivityKind::from_code(&row.kind).ok_or_else(|| {
                DatabaseError::InvalidData(format!("unknown activity kind: {}", row.kind))
            })?;
            Ok(ActivityEntry {
                kind,
                id: row.id,
                student_id: row.student_id,
                detail: row.detail,
                happened_at: row.happened_at,
            })
        })
        .collect()
}

/// Incident history for one student, newest first, for the guardian and
/// staff views
pub async fn list_incidents_for_student(pool: &PgPool, student_id: i64) -> Result<Vec<Incident>> {
    let incidents = sqlx::query_as::<_, Incident>(
        r#"
        SELECT id, student_id, summary, occurred_at, created_by
        FROM club_incident
        WHERE student_id = $1
        ORDER BY occurred_at DESC
        "#,
    )
    .bind(student_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::QueryError)?;

    Ok(incidents)
}
