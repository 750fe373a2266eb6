use contracts::domain::costs::{CostPoint, Recommendation, ServiceCost};
use contracts::enums::{CostCategory, ImpactLevel, RecommendationStatus};
use once_cell::sync::Lazy;

use crate::shared::export::CsvExportable;
use crate::shared::number_format::format_percent;

pub const CURRENT_MONTH_COST: f64 = 8240.0;
pub const LAST_MONTH_COST: f64 = 10050.0;
pub const FORECAST_COST: f64 = 7600.0;
pub const BUDGET_LIMIT: f64 = 10000.0;

pub static COST_TREND: Lazy<Vec<CostPoint>> = Lazy::new(|| {
    [
        ("Jan 1", 7200.0),
        ("Jan 8", 7800.0),
        ("Jan 15", 8400.0),
        ("Jan 22", 8100.0),
        ("Jan 29", 8240.0),
        ("Feb 5", 7900.0),
        ("Feb 12", 7600.0),
    ]
    .into_iter()
    .map(|(label, cost)| CostPoint {
        label: label.to_string(),
        cost,
    })
    .collect()
});

pub static SERVICE_COSTS: Lazy<Vec<ServiceCost>> = Lazy::new(|| {
    vec![
        ServiceCost {
            service: "AWS EC2".to_string(),
            category: CostCategory::Compute,
            current_month: 3200.0,
            last_month: 3800.0,
            trend_percent: -15.8,
        },
        ServiceCost {
            service: "AWS RDS".to_string(),
            category: CostCategory::Database,
            current_month: 1800.0,
            last_month: 1650.0,
            trend_percent: 9.1,
        },
        ServiceCost {
            service: "AWS S3".to_string(),
            category: CostCategory::Storage,
            current_month: 890.0,
            last_month: 920.0,
            trend_percent: -3.3,
        },
        ServiceCost {
            service: "CloudFront CDN".to_string(),
            category: CostCategory::Network,
            current_month: 1200.0,
            last_month: 1100.0,
            trend_percent: 9.1,
        },
        ServiceCost {
            service: "Lambda Functions".to_string(),
            category: CostCategory::Compute,
            current_month: 450.0,
            last_month: 380.0,
            trend_percent: 18.4,
        },
        ServiceCost {
            service: "ElastiCache".to_string(),
            category: CostCategory::Database,
            current_month: 700.0,
            last_month: 750.0,
            trend_percent: -6.7,
        },
    ]
});

pub static CATEGORY_BREAKDOWN: Lazy<Vec<CostPoint>> = Lazy::new(|| {
    [
        ("Compute", 3650.0),
        ("Database", 2500.0),
        ("Storage", 890.0),
        ("Network", 1200.0),
    ]
    .into_iter()
    .map(|(label, cost)| CostPoint {
        label: label.to_string(),
        cost,
    })
    .collect()
});

pub static RECOMMENDATIONS: Lazy<Vec<Recommendation>> = Lazy::new(|| {
    vec![
        Recommendation {
            id: "REC-001".to_string(),
            title: "Right-size EC2 instances".to_string(),
            impact: ImpactLevel::High,
            savings: 1200.0,
            description: "3 EC2 instances are over-provisioned with <30% CPU utilization. Downsize to save costs."
                .to_string(),
            status: RecommendationStatus::New,
        },
        Recommendation {
            id: "REC-002".to_string(),
            title: "Enable S3 Intelligent-Tiering".to_string(),
            impact: ImpactLevel::Medium,
            savings: 280.0,
            description: "Move infrequently accessed S3 objects to cheaper storage tiers automatically."
                .to_string(),
            status: RecommendationStatus::InProgress,
        },
        Recommendation {
            id: "REC-003".to_string(),
            title: "Purchase Reserved Instances".to_string(),
            impact: ImpactLevel::High,
            savings: 1800.0,
            description: "Commit to 1-year reserved instances for predictable workloads to save 40%."
                .to_string(),
            status: RecommendationStatus::New,
        },
        Recommendation {
            id: "REC-004".to_string(),
            title: "Delete unused EBS volumes".to_string(),
            impact: ImpactLevel::Low,
            savings: 120.0,
            description: "5 unattached EBS volumes detected that are no longer in use.".to_string(),
            status: RecommendationStatus::Completed,
        },
        Recommendation {
            id: "REC-005".to_string(),
            title: "Optimize Lambda memory allocation".to_string(),
            impact: ImpactLevel::Medium,
            savings: 340.0,
            description: "Lambda functions are over-allocated. Reduce memory to optimal levels."
                .to_string(),
            status: RecommendationStatus::New,
        },
    ]
});

impl CsvExportable for ServiceCost {
    fn headers() -> Vec<&'static str> {
        vec!["Service", "Category", "Current Month", "Last Month", "Trend"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.service.clone(),
            self.category.display_name().to_string(),
            format!("{:.2}", self.current_month),
            format!("{:.2}", self.last_month),
            format_percent(self.trend_percent),
        ]
    }
}
