use serde::{Deserialize, Serialize};

/// Severity of a provisioning log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub fn code(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warning",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
        }
    }

    pub fn all() -> Vec<LogLevel> {
        vec![LogLevel::Error, LogLevel::Warn, LogLevel::Info, LogLevel::Debug]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ERROR" => Some(LogLevel::Error),
            "WARN" => Some(LogLevel::Warn),
            "INFO" => Some(LogLevel::Info),
            "DEBUG" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

/// Source system emitting provisioning log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogService {
    Docker,
    Jenkins,
    Aws,
    Kubernetes,
    Terraform,
}

impl LogService {
    pub fn code(&self) -> &'static str {
        match self {
            LogService::Docker => "docker",
            LogService::Jenkins => "jenkins",
            LogService::Aws => "aws",
            LogService::Kubernetes => "kubernetes",
            LogService::Terraform => "terraform",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LogService::Docker => "Docker",
            LogService::Jenkins => "Jenkins",
            LogService::Aws => "AWS",
            LogService::Kubernetes => "Kubernetes",
            LogService::Terraform => "Terraform",
        }
    }

    pub fn all() -> Vec<LogService> {
        vec![
            LogService::Docker,
            LogService::Jenkins,
            LogService::Aws,
            LogService::Kubernetes,
            LogService::Terraform,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "docker" => Some(LogService::Docker),
            "jenkins" => Some(LogService::Jenkins),
            "aws" => Some(LogService::Aws),
            "kubernetes" => Some(LogService::Kubernetes),
            "terraform" => Some(LogService::Terraform),
            _ => None,
        }
    }
}
