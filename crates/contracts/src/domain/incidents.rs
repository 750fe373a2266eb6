use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{IncidentCategory, IncidentStatus, Severity};

/// One operational incident with its response metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Human-facing ticket id, e.g. "INC-001".
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub category: IncidentCategory,
    pub assignee: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub description: String,
    pub affected_services: Vec<String>,
}

impl Incident {
    /// Move the incident to `status`, stamping `resolved_at` on the
    /// transition into Resolved/Closed and clearing it when reopened.
    pub fn set_status(&mut self, status: IncidentStatus, now: DateTime<Utc>) {
        self.status = status;
        if status.is_active() {
            self.resolved_at = None;
        } else if self.resolved_at.is_none() {
            self.resolved_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(status: IncidentStatus) -> Incident {
        Incident {
            id: "INC-100".to_string(),
            title: "Backup job failed".to_string(),
            severity: Severity::Low,
            status,
            category: IncidentCategory::Infrastructure,
            assignee: "Unassigned".to_string(),
            created_at: Utc::now(),
            resolved_at: None,
            description: String::new(),
            affected_services: vec![],
        }
    }

    #[test]
    fn test_resolving_stamps_resolved_at_once() {
        let mut inc = incident(IncidentStatus::Open);
        let now = Utc::now();
        inc.set_status(IncidentStatus::Resolved, now);
        assert_eq!(inc.resolved_at, Some(now));

        // Closing an already-resolved incident keeps the original stamp.
        let later = now + chrono::Duration::hours(1);
        inc.set_status(IncidentStatus::Closed, later);
        assert_eq!(inc.resolved_at, Some(now));
    }

    #[test]
    fn test_reopening_clears_resolved_at() {
        let mut inc = incident(IncidentStatus::Resolved);
        inc.resolved_at = Some(Utc::now());
        inc.set_status(IncidentStatus::Investigating, Utc::now());
        assert_eq!(inc.resolved_at, None);
        assert!(inc.status.is_active());
    }
}
