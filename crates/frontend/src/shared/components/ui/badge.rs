use contracts::enums::{
    EventStatus, ImpactLevel, IncidentStatus, LogLevel, RecommendationStatus, Severity,
    VulnerabilityStatus,
};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

// Lookup tables from the closed categorical types to badge variants. Kept in
// one place so every page colors the same value the same way.

pub fn severity_variant(level: Severity) -> &'static str {
    match level {
        Severity::Critical => "error",
        Severity::High => "warning",
        Severity::Medium => "primary",
        Severity::Low => "success",
    }
}

pub fn log_level_variant(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warning",
        LogLevel::Info => "primary",
        LogLevel::Debug => "neutral",
    }
}

pub fn event_status_variant(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Active => "error",
        EventStatus::Investigating => "warning",
        EventStatus::Mitigated => "success",
    }
}

pub fn vulnerability_status_variant(status: VulnerabilityStatus) -> &'static str {
    match status {
        VulnerabilityStatus::Open => "error",
        VulnerabilityStatus::InProgress => "warning",
        VulnerabilityStatus::Resolved => "success",
    }
}

pub fn incident_status_variant(status: IncidentStatus) -> &'static str {
    match status {
        IncidentStatus::Open => "error",
        IncidentStatus::Investigating => "warning",
        IncidentStatus::Resolved => "success",
        IncidentStatus::Closed => "neutral",
    }
}

pub fn impact_variant(impact: ImpactLevel) -> &'static str {
    match impact {
        ImpactLevel::High => "success",
        ImpactLevel::Medium => "warning",
        ImpactLevel::Low => "neutral",
    }
}

pub fn recommendation_status_variant(status: RecommendationStatus) -> &'static str {
    match status {
        RecommendationStatus::New => "primary",
        RecommendationStatus::InProgress => "warning",
        RecommendationStatus::Completed => "success",
    }
}
