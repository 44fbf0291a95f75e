use sqlx::PgExecutor;

use crate::db::queries::ledger;
use super::LedgerError;

/// Current redeemable point total for a student: sum of all point event
/// deltas minus sum of all redemption costs. Balance is always derived
/// from the ledger, never stored.
///
/// Executor-generic: pass the pool for a standalone read, or the open
/// transaction during redemption so the check sees rows written and locks
/// held by that transaction rather than a stale committed snapshot.
/// A student with no history (or an unknown id) computes to 0.
#[tracing::instrument(skip(executor), fields(student_id = student_id))]
pub async fn compute_balance<'e, E>(executor: E, student_id: i64) -> Result<i64, LedgerError>
where
    E: PgExecutor<'e>,
{
    let balance = ledger::net_balance(executor, student_id).await?;
    Ok(balance)
}
