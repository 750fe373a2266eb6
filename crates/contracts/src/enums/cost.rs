use serde::{Deserialize, Serialize};

/// Billing category a cloud service belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostCategory {
    Compute,
    Database,
    Storage,
    Network,
}

impl CostCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            CostCategory::Compute => "Compute",
            CostCategory::Database => "Database",
            CostCategory::Storage => "Storage",
            CostCategory::Network => "Network",
        }
    }

    pub fn all() -> Vec<CostCategory> {
        vec![
            CostCategory::Compute,
            CostCategory::Database,
            CostCategory::Storage,
            CostCategory::Network,
        ]
    }
}

/// Expected saving impact of an optimization recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            ImpactLevel::High => "HIGH",
            ImpactLevel::Medium => "MEDIUM",
            ImpactLevel::Low => "LOW",
        }
    }
}

/// Progress state of an optimization recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationStatus {
    New,
    InProgress,
    Completed,
}

impl RecommendationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            RecommendationStatus::New => "New",
            RecommendationStatus::InProgress => "In Progress",
            RecommendationStatus::Completed => "Completed",
        }
    }
}
