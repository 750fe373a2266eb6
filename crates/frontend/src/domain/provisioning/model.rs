use std::time::Duration;

use chrono::Utc;
use contracts::domain::logs::{LogCriteria, LogEntry};
use contracts::enums::{LogLevel, LogService};
use contracts::feed::{Feed, FeedConfig, FeedOrder, RecordSource};
use uuid::Uuid;

use crate::shared::random::pick;

/// The viewer keeps the last 100 lines.
pub const LOG_CAPACITY: usize = 100;
/// One new line every 2 seconds while streaming.
pub const LOG_TICK: Duration = Duration::from_millis(2000);

static LOG_MESSAGES: &[&str] = &[
    "Container deployment initiated",
    "Build pipeline started",
    "EC2 instance provisioned successfully",
    "Pod scaling event triggered",
    "Infrastructure state synchronized",
    "Network configuration updated",
    "Security group rules applied",
    "Load balancer health check passed",
    "Database migration completed",
    "Cache invalidation successful",
    "API gateway endpoint created",
    "Certificate renewal scheduled",
    "Backup process initiated",
    "Resource allocation optimized",
    "Configuration drift detected",
];

/// Mock log source: a random line from a random service, stamped "now" so
/// timestamps are non-decreasing in append order.
pub struct LogGenerator;

impl RecordSource<LogEntry> for LogGenerator {
    fn next_record(&mut self) -> anyhow::Result<LogEntry> {
        Ok(LogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            level: *pick(&LogLevel::all()),
            service: *pick(&LogService::all()),
            message: pick(LOG_MESSAGES).to_string(),
        })
    }
}

/// Fresh provisioning log feed: empty, streaming from the first tick.
pub fn log_feed() -> Feed<LogEntry, LogCriteria> {
    Feed::new(FeedConfig {
        capacity: LOG_CAPACITY,
        interval: LOG_TICK,
        order: FeedOrder::OldestFirst,
        autostart: true,
    })
    .expect("log feed config is valid")
}
