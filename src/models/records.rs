use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// club_student table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub grade: i32,
    pub cohort: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// club_pointcategory table. The `[min_value, max_value]` bounds constrain
/// the delta of any single award recorded against the category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PointCategory {
    pub id: i64,
    pub name: String,
    pub min_value: i32,
    pub max_value: i32,
    pub is_active: bool,
}

/// club_pointevent table. Append-only: rows are never updated or deleted;
/// corrections are new offsetting events.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PointEvent {
    pub id: i64,
    pub student_id: i64,
    pub category_id: i64,
    pub delta: i32,
    pub note: Option<String>,
    pub event_time: DateTime<Utc>,
    pub created_by: i64,
}

/// club_storeitem table. `stock` is the only ledger-adjacent field the
/// redemption path mutates, always under a row lock.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoreItem {
    pub id: i64,
    pub name: String,
    pub cost: i32,
    pub stock: i32,
    pub is_active: bool,
}

/// club_redemption table. Append-only. `cost_at_tx` snapshots the item
/// cost at redemption time, decoupled from later price changes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Redemption {
    pub id: i64,
    pub student_id: i64,
    pub item_id: i64,
    pub cost_at_tx: i32,
    pub redeemed_at: DateTime<Utc>,
    pub created_by: i64,
}

/// club_incident table. Not part of the point ledger; surfaces in the
/// activity feed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: i64,
    pub student_id: i64,
    pub summary: String,
    pub occurred_at: DateTime<Utc>,
    pub created_by: i64,
}

/// club_auditlogentry table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLogEntry {
    pub id: i64,
    pub actor_id: i64,
    pub action: String,
    pub target_id: i64,
    pub meta: Value,
    pub created_at: DateTime<Utc>,
}

/// Audit action codes written by the ledger services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    AwardPoints,
    RedeemItem,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::AwardPoints => "award_points",
            AuditAction::RedeemItem => "redeem_item",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_action_codes() {
        assert_eq!(AuditAction::AwardPoints.as_str(), "award_points");
        assert_eq!(AuditAction::RedeemItem.as_str(), "redeem_item");
    }
}
