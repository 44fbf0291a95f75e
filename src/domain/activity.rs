use chrono::NaiveDate;
use sqlx::PgPool;

use crate::db::queries;
use crate::models::{ActivityEntry, CalendarDay};
use super::LedgerError;

const DEFAULT_FEED_LIMIT: i64 = 50;

/// Activity feed configuration
/// Simple struct to hold env vars
#[derive(Debug, Clone)]
pub struct ActivityConfig {
    pub feed_limit: i64,
}

impl ActivityConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            feed_limit: std::env::var("ACTIVITY_FEED_LIMIT")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(DEFAULT_FEED_LIMIT),
        }
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            feed_limit: DEFAULT_FEED_LIMIT,
        }
    }
}

/// Daily point totals for a student over an inclusive date range, one
/// entry per calendar day, zero-activity days included, ascending.
#[tracing::instrument(skip(pool), fields(student_id = student_id))]
pub async fn points_calendar(
    pool: &PgPool,
    student_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<CalendarDay>, LedgerError> {
    let days = queries::activity::points_by_day(pool, student_id, start, end).await?;
    Ok(days)
}

/// Merged recent-activity feed across awards, redemptions and incidents,
/// newest first, truncated to `limit` entries.
#[tracing::instrument(skip(pool))]
pub async fn recent_activity(pool: &PgPool, limit: i64) -> Result<Vec<ActivityEntry>, LedgerError> {
    let entries = queries::activity::recent_feed(pool, limit.max(0)).await?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test body so parallel test threads never race on the env var
    #[test]
    fn test_config_from_env() {
        std::env::remove_var("ACTIVITY_FEED_LIMIT");
        let config = ActivityConfig::from_env();
        assert_eq!(config.feed_limit, 50);

        std::env::set_var("ACTIVITY_FEED_LIMIT", "25");
        let config = ActivityConfig::from_env();
        assert_eq!(config.feed_limit, 25);

        // Unparseable values fall back to the default
        std::env::set_var("ACTIVITY_FEED_LIMIT", "plenty");
        let config = ActivityConfig::from_env();
        assert_eq!(config.feed_limit, 50);

        std::env::remove_var("ACTIVITY_FEED_LIMIT");
    }
}
