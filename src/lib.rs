pub mod auth;
pub mod db;
pub mod domain;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use auth::{CapabilityCheck, Identity, Operation, Role};

pub use db::{
    create_pool, get_pool, health_check, init_pool,
    DatabaseError,
};

pub use domain::{
    award_points, compute_balance, points_calendar, recent_activity, redeem_item,
    ActivityConfig, AwardRequest, LedgerError, RedeemRequest,
};

pub use models::{
    ActivityEntry, ActivityKind, AuditAction, AuditLogEntry, CalendarDay, Incident,
    PointCategory, PointEvent, Redemption, StoreItem, Student,
};
