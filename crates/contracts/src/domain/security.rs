use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{EventStatus, Severity, ThreatType, VulnerabilityStatus};
use crate::feed::criteria::{text_match, Criteria, DimensionFilter};

/// One detected security event in the live feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: Uuid,
    /// Detection time; the generator backdates this up to one hour, so the
    /// initial batch is sorted once before seeding.
    pub timestamp: DateTime<Utc>,
    pub threat_type: ThreatType,
    pub level: Severity,
    /// Origin address the detection points at.
    pub source: String,
    pub description: String,
    pub status: EventStatus,
}

/// Filter criteria of the security event feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCriteria {
    pub search: String,
    pub level: DimensionFilter<Severity>,
}

impl Criteria<SecurityEvent> for EventCriteria {
    fn accepts(&self, event: &SecurityEvent) -> bool {
        text_match(&[&event.description, &event.source], &self.search)
            && self.level.matches(&event.level)
    }

    fn is_default(&self) -> bool {
        self.search.trim().is_empty() && self.level.is_all()
    }
}

/// A tracked CVE against one deployed component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    pub cve: String,
    pub severity: Severity,
    pub component: String,
    pub description: String,
    pub status: VulnerabilityStatus,
    pub discovered: NaiveDate,
}

/// One point of the 24h threat activity chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}
