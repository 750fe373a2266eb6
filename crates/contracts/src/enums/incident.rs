use serde::{Deserialize, Serialize};

/// Lifecycle state of an incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentStatus {
    Open,
    Investigating,
    Resolved,
    Closed,
}

impl IncidentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::Investigating => "investigating",
            IncidentStatus::Resolved => "resolved",
            IncidentStatus::Closed => "closed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::Investigating => "Investigating",
            IncidentStatus::Resolved => "Resolved",
            IncidentStatus::Closed => "Closed",
        }
    }

    pub fn all() -> Vec<IncidentStatus> {
        vec![
            IncidentStatus::Open,
            IncidentStatus::Investigating,
            IncidentStatus::Resolved,
            IncidentStatus::Closed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "open" => Some(IncidentStatus::Open),
            "investigating" => Some(IncidentStatus::Investigating),
            "resolved" => Some(IncidentStatus::Resolved),
            "closed" => Some(IncidentStatus::Closed),
            _ => None,
        }
    }

    /// Open and Investigating incidents still need a response.
    pub fn is_active(&self) -> bool {
        matches!(self, IncidentStatus::Open | IncidentStatus::Investigating)
    }
}

/// Subsystem an incident is filed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentCategory {
    Infrastructure,
    Security,
    Performance,
    Network,
    Database,
}

impl IncidentCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            IncidentCategory::Infrastructure => "Infrastructure",
            IncidentCategory::Security => "Security",
            IncidentCategory::Performance => "Performance",
            IncidentCategory::Network => "Network",
            IncidentCategory::Database => "Database",
        }
    }
}
