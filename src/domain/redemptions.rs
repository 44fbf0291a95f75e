use serde_json::json;
use sqlx::PgPool;
use tracing::info;

use crate::db::queries::{audit, store};
use crate::models::{AuditAction, StoreItem};
use super::{balance, LedgerError};

/// A request to redeem one unit of a store item for a student
#[derive(Debug, Clone, Copy)]
pub struct RedeemRequest {
    pub student_id: i64,
    pub item_id: i64,
    pub actor_id: i64,
}

/// Redeem one unit of a store item for a student.
///
/// The concurrency-critical path. The transaction takes two locks, both
/// released at commit or rollback, always student first then item:
/// - the per-student advisory lock serializes one student's redemptions
///   across different items, so two in-flight redemptions cannot jointly
///   overdraw a balance sufficient for only one of them;
/// - the FOR UPDATE row lock on the item serializes redemptions of the
///   same item, so stock is checked and decremented one transaction at a
///   time and never drops below zero.
///
/// Balance is computed inside the transaction, after both locks are held.
/// On success the stock decrement, the redemption row (with the cost
/// snapshotted at lock time) and the audit entry commit as one unit.
/// Returns the new redemption id.
#[tracing::instrument(
    skip(pool, request),
    fields(
        student_id = request.student_id,
        item_id = request.item_id,
        actor_id = request.actor_id,
    )
)]
pub async fn redeem_item(pool: &PgPool, request: &RedeemRequest) -> Result<i64, LedgerError> {
    let mut tx = pool.begin().await?;

    store::lock_student_for_redemption(&mut tx, request.student_id).await?;

    let item = store::lock_store_item(&mut tx, request.item_id)
        .await?
        .ok_or(LedgerError::ItemNotFound(request.item_id))?;

    let current_balance = balance::compute_balance(&mut *tx, request.student_id).await?;
    check_redeemable(&item, current_balance)?;

    store::decrement_stock(&mut tx, request.item_id).await?;

    let redemption_id = store::insert_redemption(
        &mut tx,
        request.student_id,
        request.item_id,
        item.cost,
        request.actor_id,
    )
    .await?;

    let meta = json!({
        "redemption_id": redemption_id,
        "item_id": request.item_id,
        "cost_at_tx": item.cost,
    });
    audit::insert_audit_entry(
        &mut tx,
        request.actor_id,
        AuditAction::RedeemItem,
        request.student_id,
        meta,
    )
    .await?;

    tx.commit().await?;

    info!(redemption_id, "Recorded redemption");
    Ok(redemption_id)
}

/// Stock and balance gate, evaluated with both locks held. Stock is
/// checked before balance so a sold-out item reports OutOfStock even to a
/// student who could not afford it.
fn check_redeemable(item: &StoreItem, balance: i64) -> Result<(), LedgerError> {
    if item.stock <= 0 {
        return Err(LedgerError::OutOfStock { item_id: item.id });
    }
    if balance < i64::from(item.cost) {
        return Err(LedgerError::InsufficientPoints {
            balance,
            cost: item.cost,
        });
    }
    Ok(())
}
