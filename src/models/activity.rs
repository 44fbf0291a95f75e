use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the points calendar: a calendar day and the sum of point
/// event deltas recorded that day (0 for days with no activity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct CalendarDay {
    pub day: NaiveDate,
    pub total_delta: i64,
}

/// Discriminant for entries in the merged activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PointEvent,
    Redemption,
    Incident,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::PointEvent => "point_event",
            ActivityKind::Redemption => "redemption",
            ActivityKind::Incident => "incident",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "point_event" => Some(ActivityKind::PointEvent),
            "redemption" => Some(ActivityKind::Redemption),
            "incident" => Some(ActivityKind::Incident),
            _ => None,
        }
    }
}

/// One entry of the merged recent-activity feed. `detail` carries the
/// human-readable fragment of the source row: the award note, the redeemed
/// item name, or the incident summary.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub id: i64,
    pub student_id: i64,
    pub detail: Option<String>,
    pub happened_at: DateTime<Utc>,
}
