use serde::{Deserialize, Serialize};

/// Health of a monitored subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemHealth {
    Operational,
    Degraded,
}

impl SystemHealth {
    pub fn display_name(&self) -> &'static str {
        match self {
            SystemHealth::Operational => "operational",
            SystemHealth::Degraded => "degraded",
        }
    }
}

/// Direction of a period-over-period change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
}
