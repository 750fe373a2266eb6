use std::time::Duration;

use chrono::{NaiveDate, Utc};
use contracts::domain::security::{EventCriteria, SecurityEvent, TrendPoint, Vulnerability};
use contracts::enums::{EventStatus, Severity, ThreatType, VulnerabilityStatus};
use contracts::feed::{Feed, FeedConfig, FeedOrder, RecordSource};
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::shared::random::{pick, seconds_up_to};

/// The event feed keeps the 20 most recent detections.
pub const EVENT_CAPACITY: usize = 20;
/// One new detection every 5 seconds.
pub const EVENT_TICK: Duration = Duration::from_millis(5000);
/// Size of the batch shown before live detections start arriving.
const INITIAL_EVENTS: usize = 10;

static EVENT_SOURCES: &[&str] = &[
    "192.168.1.45",
    "10.0.0.23",
    "172.16.0.8",
    "203.0.113.42",
    "198.51.100.15",
];

static EVENT_DESCRIPTIONS: &[&str] = &[
    "Suspicious login attempt detected",
    "Unusual network traffic pattern",
    "Unauthorized access attempt blocked",
    "Potential SQL injection detected",
    "Brute force attack in progress",
    "Malicious payload identified",
    "Port scanning activity detected",
    "Certificate validation failed",
];

/// Mock detection source. Timestamps are backdated up to one hour to mimic
/// detections trickling in from distributed sensors, which is why the seed
/// batch is sorted once before the feed goes live.
pub struct EventGenerator;

impl RecordSource<SecurityEvent> for EventGenerator {
    fn next_record(&mut self) -> anyhow::Result<SecurityEvent> {
        Ok(SecurityEvent {
            id: Uuid::new_v4(),
            timestamp: Utc::now() - chrono::Duration::seconds(seconds_up_to(3600)),
            threat_type: *pick(&ThreatType::all()),
            level: *pick(&Severity::all()),
            source: pick(EVENT_SOURCES).to_string(),
            description: pick(EVENT_DESCRIPTIONS).to_string(),
            status: *pick(&EventStatus::all()),
        })
    }
}

/// Security event feed, seeded with an initial batch sorted newest-first.
/// Later appends trust generation order and are prepended without
/// re-sorting.
pub fn event_feed() -> Feed<SecurityEvent, EventCriteria> {
    let mut feed = Feed::new(FeedConfig {
        capacity: EVENT_CAPACITY,
        interval: EVENT_TICK,
        order: FeedOrder::NewestFirst,
        autostart: true,
    })
    .expect("event feed config is valid");

    let mut generator = EventGenerator;
    let mut initial: Vec<SecurityEvent> = (0..INITIAL_EVENTS)
        .filter_map(|_| generator.next_record().ok())
        .collect();
    initial.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.seed(initial);
    feed
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub static VULNERABILITIES: Lazy<Vec<Vulnerability>> = Lazy::new(|| {
    vec![
        Vulnerability {
            id: "1".to_string(),
            cve: "CVE-2024-1234".to_string(),
            severity: Severity::Critical,
            component: "OpenSSL 1.1.1".to_string(),
            description: "Remote code execution vulnerability in SSL/TLS implementation"
                .to_string(),
            status: VulnerabilityStatus::InProgress,
            discovered: date(2024, 1, 15),
        },
        Vulnerability {
            id: "2".to_string(),
            cve: "CVE-2024-5678".to_string(),
            severity: Severity::High,
            component: "Node.js 18.x".to_string(),
            description: "Privilege escalation through improper input validation".to_string(),
            status: VulnerabilityStatus::Open,
            discovered: date(2024, 2, 1),
        },
        Vulnerability {
            id: "3".to_string(),
            cve: "CVE-2024-9012".to_string(),
            severity: Severity::Medium,
            component: "Docker Engine".to_string(),
            description: "Container escape vulnerability in runtime".to_string(),
            status: VulnerabilityStatus::Resolved,
            discovered: date(2024, 1, 20),
        },
        Vulnerability {
            id: "4".to_string(),
            cve: "CVE-2024-3456".to_string(),
            severity: Severity::High,
            component: "PostgreSQL 14".to_string(),
            description: "SQL injection vulnerability in query parser".to_string(),
            status: VulnerabilityStatus::InProgress,
            discovered: date(2024, 2, 10),
        },
        Vulnerability {
            id: "5".to_string(),
            cve: "CVE-2024-7890".to_string(),
            severity: Severity::Low,
            component: "Nginx 1.20".to_string(),
            description: "Information disclosure through error messages".to_string(),
            status: VulnerabilityStatus::Open,
            discovered: date(2024, 2, 5),
        },
    ]
});

pub static THREAT_TREND: Lazy<Vec<TrendPoint>> = Lazy::new(|| {
    [
        ("00:00", 12.0),
        ("04:00", 8.0),
        ("08:00", 15.0),
        ("12:00", 23.0),
        ("16:00", 18.0),
        ("20:00", 14.0),
    ]
    .into_iter()
    .map(|(label, value)| TrendPoint {
        label: label.to_string(),
        value,
    })
    .collect()
});
