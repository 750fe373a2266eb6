use contracts::enums::SystemHealth;
use leptos::prelude::*;

use super::model::{OVERVIEW_METRICS, SYSTEMS};
use crate::shared::components::page_frame::PageFrame;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let all_operational = SYSTEMS
        .iter()
        .all(|system| system.health == SystemHealth::Operational);

    let metric_cards = OVERVIEW_METRICS
        .iter()
        .cloned()
        .map(|metric| {
            let value = metric.value.clone();
            let change = metric.change.clone();
            let trend = metric.trend;
            let tone = metric.tone;
            view! {
                <StatCard
                    label=metric.label.clone()
                    icon_name=metric.icon.clone()
                    value=Signal::derive(move || value.clone())
                    change=Signal::derive(move || change.clone())
                    trend=Signal::derive(move || trend)
                    tone=Signal::derive(move || tone)
                    caption="vs last period".to_string()
                />
            }
        })
        .collect_view();

    let system_rows = SYSTEMS
        .iter()
        .cloned()
        .map(|system| {
            let (health_variant, health_icon_class) = match system.health {
                SystemHealth::Operational => ("success", "system-row__icon system-row__icon--ok"),
                SystemHealth::Degraded => ("warning", "system-row__icon system-row__icon--warn"),
            };
            view! {
                <div class="system-row">
                    <div class=health_icon_class>{icon(&system.icon)}</div>
                    <div class="system-row__body">
                        <div class="system-row__top">
                            <span class="system-row__name">{system.name.clone()}</span>
                            <Badge variant=health_variant
                                .to_string()>{system.health.display_name()}</Badge>
                        </div>
                        <div class="system-row__meta">
                            <span>{format!("Uptime: {}", system.uptime)}</span>
                            <span>{system.last_check.clone()}</span>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="overview--page">
            <div class="stat-grid">{metric_cards}</div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"System Status"</h2>
                    {if all_operational {
                        view! { <Badge variant="success".to_string()>"All Systems Operational"</Badge> }
                            .into_any()
                    } else {
                        view! { <Badge variant="warning".to_string()>"Degraded Performance"</Badge> }
                            .into_any()
                    }}
                </div>
                <div class="system-grid">{system_rows}</div>
            </div>
        </PageFrame>
    }
}
