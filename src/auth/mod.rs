// Identity context and the capability-check seam. Authentication (who the
// caller is) and the declarative role policy (what a role may do) live in
// the embedding application; the ledger only carries the types the gate is
// expressed in. No domain operation inspects roles itself.

use serde::{Deserialize, Serialize};

/// Caller role as established by the external authentication layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Guardian,
    Student,
    Anonymous,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Guardian => "guardian",
            Role::Student => "student",
            Role::Anonymous => "anonymous",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(Role::Admin),
            "staff" => Some(Role::Staff),
            "guardian" => Some(Role::Guardian),
            "student" => Some(Role::Student),
            "anonymous" => Some(Role::Anonymous),
            _ => None,
        }
    }
}

/// Acting identity attached to every gated invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub actor_id: i64,
    pub role: Role,
}

/// The operations the policy layer gates before they reach the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AwardPoints,
    RedeemItem,
    ViewBalance,
    ViewCalendar,
    ViewActivityFeed,
    ViewStoreCatalog,
    ViewAuditLog,
}

/// External authorization policy. Implementations answer "may this
/// identity perform this operation against this target entity"; the
/// target is a student id for per-student operations and None for global
/// reads. Callers consult the policy before invoking a domain operation.
pub trait CapabilityCheck {
    fn can_perform(&self, identity: &Identity, operation: Operation, target_id: Option<i64>)
        -> bool;
}
