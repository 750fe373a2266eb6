use contracts::domain::status::{MetricTone, OverviewMetric, SystemStatus};
use contracts::enums::{SystemHealth, TrendDirection};
use once_cell::sync::Lazy;

pub static OVERVIEW_METRICS: Lazy<Vec<OverviewMetric>> = Lazy::new(|| {
    vec![
        OverviewMetric {
            label: "Active Deployments".to_string(),
            value: "24".to_string(),
            change: "12%".to_string(),
            trend: TrendDirection::Up,
            icon: "check-circle".to_string(),
            tone: MetricTone::Good,
        },
        OverviewMetric {
            label: "Security Events".to_string(),
            value: "3".to_string(),
            change: "67%".to_string(),
            trend: TrendDirection::Down,
            icon: "alert-triangle".to_string(),
            tone: MetricTone::Warning,
        },
        OverviewMetric {
            label: "Active Incidents".to_string(),
            value: "1".to_string(),
            change: "50%".to_string(),
            trend: TrendDirection::Down,
            icon: "x-circle".to_string(),
            tone: MetricTone::Bad,
        },
        OverviewMetric {
            label: "Monthly Cost".to_string(),
            value: "$8,240".to_string(),
            change: "18%".to_string(),
            trend: TrendDirection::Down,
            icon: "dollar".to_string(),
            tone: MetricTone::Good,
        },
    ]
});

pub static SYSTEMS: Lazy<Vec<SystemStatus>> = Lazy::new(|| {
    vec![
        SystemStatus {
            name: "Jenkins CI/CD".to_string(),
            health: SystemHealth::Operational,
            uptime: "99.98%".to_string(),
            last_check: "2 min ago".to_string(),
            icon: "server".to_string(),
        },
        SystemStatus {
            name: "Docker Infrastructure".to_string(),
            health: SystemHealth::Operational,
            uptime: "99.95%".to_string(),
            last_check: "1 min ago".to_string(),
            icon: "database".to_string(),
        },
        SystemStatus {
            name: "Firewall Security".to_string(),
            health: SystemHealth::Operational,
            uptime: "100%".to_string(),
            last_check: "30 sec ago".to_string(),
            icon: "shield".to_string(),
        },
        SystemStatus {
            name: "AWS CloudWatch".to_string(),
            health: SystemHealth::Degraded,
            uptime: "98.12%".to_string(),
            last_check: "5 min ago".to_string(),
            icon: "cloud".to_string(),
        },
    ]
});
