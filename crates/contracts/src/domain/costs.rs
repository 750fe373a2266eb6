use serde::{Deserialize, Serialize};

use crate::enums::{CostCategory, ImpactLevel, RecommendationStatus};

/// Month-over-month spend of one cloud service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCost {
    pub service: String,
    pub category: CostCategory,
    pub current_month: f64,
    pub last_month: f64,
    /// Percent change vs last month; negative means spend went down.
    pub trend_percent: f64,
}

/// One cost optimization recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Human-facing id, e.g. "REC-001".
    pub id: String,
    pub title: String,
    pub impact: ImpactLevel,
    /// Estimated monthly saving in dollars.
    pub savings: f64,
    pub description: String,
    pub status: RecommendationStatus,
}

/// One point of a cost chart (trend over time or per-category breakdown).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub label: String,
    pub cost: f64,
}

/// Savings still on the table: everything not yet completed.
pub fn potential_savings(recommendations: &[Recommendation]) -> f64 {
    recommendations
        .iter()
        .filter(|rec| rec.status != RecommendationStatus::Completed)
        .map(|rec| rec.savings)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(savings: f64, status: RecommendationStatus) -> Recommendation {
        Recommendation {
            id: "REC-000".to_string(),
            title: String::new(),
            impact: ImpactLevel::Medium,
            savings,
            description: String::new(),
            status,
        }
    }

    #[test]
    fn test_potential_savings_skips_completed() {
        let recs = vec![
            rec(1200.0, RecommendationStatus::New),
            rec(280.0, RecommendationStatus::InProgress),
            rec(120.0, RecommendationStatus::Completed),
        ];
        assert_eq!(potential_savings(&recs), 1480.0);
    }
}
