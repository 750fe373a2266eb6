use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{LogLevel, LogService};
use crate::feed::criteria::{text_match, Criteria, DimensionFilter};

/// One provisioning log line.
///
/// Immutable once created; `timestamp` is assigned at generation time and is
/// non-decreasing in append order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub service: LogService,
    pub message: String,
}

/// Filter criteria of the provisioning log feed: free-text search plus one
/// categorical filter per dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogCriteria {
    pub search: String,
    pub level: DimensionFilter<LogLevel>,
    pub service: DimensionFilter<LogService>,
}

impl Criteria<LogEntry> for LogCriteria {
    fn accepts(&self, entry: &LogEntry) -> bool {
        text_match(&[&entry.message, entry.service.display_name()], &self.search)
            && self.level.matches(&entry.level)
            && self.service.matches(&entry.service)
    }

    fn is_default(&self) -> bool {
        self.search.trim().is_empty() && self.level.is_all() && self.service.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, service: LogService, message: &str) -> LogEntry {
        LogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            level,
            service,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_search_covers_message_and_service_name() {
        let kube = entry(LogLevel::Info, LogService::Kubernetes, "Pod scaling event triggered");
        let aws = entry(LogLevel::Info, LogService::Aws, "EC2 instance provisioned");

        let by_message = LogCriteria { search: "POD".to_string(), ..Default::default() };
        assert!(by_message.accepts(&kube));
        assert!(!by_message.accepts(&aws));

        let by_service = LogCriteria { search: "aws".to_string(), ..Default::default() };
        assert!(by_service.accepts(&aws));
        assert!(!by_service.accepts(&kube));
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let entry = entry(LogLevel::Error, LogService::Docker, "Container deployment failed");
        let matching = LogCriteria {
            level: DimensionFilter::only(LogLevel::Error),
            service: DimensionFilter::only(LogService::Docker),
            ..Default::default()
        };
        assert!(matching.accepts(&entry));

        let wrong_level = LogCriteria {
            level: DimensionFilter::only(LogLevel::Debug),
            ..Default::default()
        };
        assert!(!wrong_level.accepts(&entry));
    }
}
