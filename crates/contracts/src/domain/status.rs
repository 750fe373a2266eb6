use serde::{Deserialize, Serialize};

use crate::enums::{SystemHealth, TrendDirection};

/// Health line of one monitored subsystem on the overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub name: String,
    pub health: SystemHealth,
    pub uptime: String,
    pub last_check: String,
    /// Icon name resolved by the frontend icon lookup.
    pub icon: String,
}

/// Visual tone of an overview metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricTone {
    Good,
    Warning,
    Bad,
    Neutral,
}

/// One headline metric on the overview page. Values are preformatted
/// display strings; this is a snapshot, not a live series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetric {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: TrendDirection,
    pub icon: String,
    pub tone: MetricTone,
}
