use serde_json::json;
use sqlx::PgPool;
use tracing::info;

use crate::db::queries::{audit, categories, ledger, students};
use crate::models::{AuditAction, PointCategory};
use super::LedgerError;

/// A staff request to award (positive delta) or deduct (negative delta)
/// points from a student.
#[derive(Debug, Clone)]
pub struct AwardRequest {
    pub student_id: i64,
    pub category_id: i64,
    pub amount: i32,
    pub note: Option<String>,
    pub actor_id: i64,
}

/// Record one point-awarding event for a student.
///
/// Runs as a single transaction: the student and category are validated,
/// the amount is checked against the category's inclusive bounds, and the
/// ledger row plus its audit entry commit together or not at all. Returns
/// the new event id.
#[tracing::instrument(
    skip(pool, request),
    fields(
        student_id = request.student_id,
        category_id = request.category_id,
        amount = request.amount,
        actor_id = request.actor_id,
    )
)]
pub async fn award_points(pool: &PgPool, request: &AwardRequest) -> Result<i64, LedgerError> {
    let mut tx = pool.begin().await?;

    students::get_student(&mut *tx, request.student_id)
        .await?
        .ok_or(LedgerError::StudentNotFound(request.student_id))?;

    let category = categories::get_category(&mut *tx, request.category_id)
        .await?
        .ok_or(LedgerError::CategoryNotFound(request.category_id))?;

    check_amount_bounds(request.amount, &category)?;

    let event_id = ledger::insert_point_event(
        &mut tx,
        request.student_id,
        request.category_id,
        request.amount,
        request.note.as_deref(),
        request.actor_id,
    )
    .await?;

    let meta = json!({
        "event_id": event_id,
        "category_id": request.category_id,
        "amount": request.amount,
        "note": request.note,
    });
    audit::insert_audit_entry(
        &mut tx,
        request.actor_id,
        AuditAction::AwardPoints,
        request.student_id,
        meta,
    )
    .await?;

    tx.commit().await?;

    info!(event_id, "Recorded point event");
    Ok(event_id)
}

/// Inclusive bounds check against the category rule bucket. Bounds are
/// read at insertion time; later bound changes never invalidate history.
fn check_amount_bounds(amount: i32, category: &PointCategory) -> Result<(), LedgerError> {
    if amount < category.min_value || amount > category.max_value {
        return Err(LedgerError::AmountOutOfRange {
            amount,
            min: category.min_value,
            max: category.max_value,
        });
    }
    Ok(())
}
