use chrono::{Duration, Utc};
use contracts::domain::incidents::Incident;
use contracts::enums::{IncidentCategory, IncidentStatus, Severity};
use once_cell::sync::Lazy;

/// Incident backlog as of app start. Timestamps are relative to load time so
/// the "Created" column always reads like a live system.
pub static INCIDENT_SEED: Lazy<Vec<Incident>> = Lazy::new(|| {
    let now = Utc::now();
    vec![
        Incident {
            id: "INC-001".to_string(),
            title: "Database connection pool exhausted".to_string(),
            severity: Severity::Critical,
            status: IncidentStatus::Investigating,
            category: IncidentCategory::Database,
            assignee: "Sarah Chen".to_string(),
            created_at: now - Duration::minutes(30),
            resolved_at: None,
            description: "Production database connection pool reached maximum capacity causing service degradation"
                .to_string(),
            affected_services: vec![
                "API Gateway".to_string(),
                "User Service".to_string(),
                "Payment Service".to_string(),
            ],
        },
        Incident {
            id: "INC-002".to_string(),
            title: "High CPU usage on web servers".to_string(),
            severity: Severity::High,
            status: IncidentStatus::Open,
            category: IncidentCategory::Performance,
            assignee: "Mike Johnson".to_string(),
            created_at: now - Duration::hours(1),
            resolved_at: None,
            description: "Web server cluster experiencing sustained 85%+ CPU utilization".to_string(),
            affected_services: vec!["Web Frontend".to_string(), "Load Balancer".to_string()],
        },
        Incident {
            id: "INC-003".to_string(),
            title: "SSL certificate expiring soon".to_string(),
            severity: Severity::Medium,
            status: IncidentStatus::Open,
            category: IncidentCategory::Security,
            assignee: "Unassigned".to_string(),
            created_at: now - Duration::hours(2),
            resolved_at: None,
            description: "SSL certificate for api.example.com expires in 7 days".to_string(),
            affected_services: vec!["API Gateway".to_string()],
        },
        Incident {
            id: "INC-004".to_string(),
            title: "Intermittent network latency".to_string(),
            severity: Severity::Medium,
            status: IncidentStatus::Investigating,
            category: IncidentCategory::Network,
            assignee: "Alex Rivera".to_string(),
            created_at: now - Duration::hours(3),
            resolved_at: None,
            description: "Users reporting slow response times from EU region".to_string(),
            affected_services: vec!["CDN".to_string(), "Edge Servers".to_string()],
        },
        Incident {
            id: "INC-005".to_string(),
            title: "Container orchestration failure".to_string(),
            severity: Severity::High,
            status: IncidentStatus::Resolved,
            category: IncidentCategory::Infrastructure,
            assignee: "Sarah Chen".to_string(),
            created_at: now - Duration::hours(4),
            resolved_at: Some(now - Duration::hours(2)),
            description: "Kubernetes pod scheduling failures in production cluster".to_string(),
            affected_services: vec!["Container Platform".to_string(), "Microservices".to_string()],
        },
        Incident {
            id: "INC-006".to_string(),
            title: "Backup job failed".to_string(),
            severity: Severity::Low,
            status: IncidentStatus::Closed,
            category: IncidentCategory::Infrastructure,
            assignee: "Mike Johnson".to_string(),
            created_at: now - Duration::hours(24),
            resolved_at: Some(now - Duration::hours(20)),
            description: "Nightly database backup job failed due to insufficient storage".to_string(),
            affected_services: vec!["Backup System".to_string()],
        },
    ]
});
