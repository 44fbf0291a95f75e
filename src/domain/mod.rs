// Domain layer - ledger business logic with no HTTP concerns
// These operations assume the caller was already gated by the external
// capability check (see crate::auth); no role literal appears below here.

pub mod activity;
pub mod awards;
pub mod balance;
pub mod redemptions;

use crate::db::DatabaseError;

/// Errors surfaced by the ledger operations. Every variant is an ordinary,
/// expected outcome of constrained concurrent operation; the failing
/// transaction rolls back in full and the caller decides whether to retry.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Student not found: {0}")]
    StudentNotFound(i64),

    #[error("Point category not found: {0}")]
    CategoryNotFound(i64),

    #[error("Store item not found: {0}")]
    ItemNotFound(i64),

    #[error("Amount {amount} outside category bounds [{min}, {max}]")]
    AmountOutOfRange { amount: i32, min: i32, max: i32 },

    #[error("Store item {item_id} is out of stock")]
    OutOfStock { item_id: i64 },

    #[error("Insufficient points: balance {balance}, cost {cost}")]
    InsufficientPoints { balance: i64, cost: i32 },

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for LedgerError {
    fn from(e: sqlx::Error) -> Self {
        LedgerError::Database(DatabaseError::QueryError(e))
    }
}

// Re-export the domain operations
pub use activity::{points_calendar, recent_activity, ActivityConfig};
pub use awards::{award_points, AwardRequest};
pub use balance::compute_balance;
pub use redemptions::{redeem_item, RedeemRequest};
