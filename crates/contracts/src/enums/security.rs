use serde::{Deserialize, Serialize};

/// Threat severity, shared by security events, vulnerabilities and incidents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn code(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn all() -> Vec<Severity> {
        vec![Severity::Critical, Severity::High, Severity::Medium, Severity::Low]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CRITICAL" => Some(Severity::Critical),
            "HIGH" => Some(Severity::High),
            "MEDIUM" => Some(Severity::Medium),
            "LOW" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Classification of a detected threat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatType {
    Malware,
    DdoS,
    Intrusion,
    DataBreach,
    Phishing,
}

impl ThreatType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ThreatType::Malware => "Malware",
            ThreatType::DdoS => "DDoS",
            ThreatType::Intrusion => "Intrusion",
            ThreatType::DataBreach => "Data Breach",
            ThreatType::Phishing => "Phishing",
        }
    }

    pub fn all() -> Vec<ThreatType> {
        vec![
            ThreatType::Malware,
            ThreatType::DdoS,
            ThreatType::Intrusion,
            ThreatType::DataBreach,
            ThreatType::Phishing,
        ]
    }
}

/// Response state of a security event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    Active,
    Mitigated,
    Investigating,
}

impl EventStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            EventStatus::Active => "Active",
            EventStatus::Mitigated => "Mitigated",
            EventStatus::Investigating => "Investigating",
        }
    }

    pub fn all() -> Vec<EventStatus> {
        vec![EventStatus::Active, EventStatus::Mitigated, EventStatus::Investigating]
    }
}

/// Remediation state of a tracked CVE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VulnerabilityStatus {
    Open,
    InProgress,
    Resolved,
}

impl VulnerabilityStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            VulnerabilityStatus::Open => "Open",
            VulnerabilityStatus::InProgress => "In Progress",
            VulnerabilityStatus::Resolved => "Resolved",
        }
    }
}
