use chrono::Utc;
use contracts::domain::incidents::Incident;
use contracts::domain::status::MetricTone;
use contracts::enums::{IncidentStatus, Severity, TrendDirection};
use leptos::prelude::*;
use thaw::*;

use super::model::INCIDENT_SEED;
use crate::shared::components::page_frame::PageFrame;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::tab_strip::TabStrip;
use crate::shared::components::ui::badge::{incident_status_variant, severity_variant, Badge};
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;

fn static_text(text: &'static str) -> Signal<String> {
    Signal::derive(move || text.to_string())
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "alert-circle",
        Severity::Medium => "alert-triangle",
        Severity::Low => "check-circle",
    }
}

#[component]
pub fn IncidentAlertsPage() -> impl IntoView {
    let incidents = RwSignal::new(INCIDENT_SEED.clone());
    let selected: RwSignal<Option<Incident>> = RwSignal::new(None);
    let active_tab = RwSignal::new("active");

    let active_incidents = Signal::derive(move || {
        incidents
            .get()
            .into_iter()
            .filter(|incident| incident.status.is_active())
            .collect::<Vec<_>>()
    });
    let resolved_incidents = Signal::derive(move || {
        incidents
            .get()
            .into_iter()
            .filter(|incident| !incident.status.is_active())
            .collect::<Vec<_>>()
    });
    let active_count = Signal::derive(move || active_incidents.get().len().to_string());
    let resolved_count = Signal::derive(move || resolved_incidents.get().len().to_string());
    let critical_count = Signal::derive(move || {
        incidents
            .get()
            .iter()
            .filter(|incident| {
                incident.severity == Severity::Critical && incident.status.is_active()
            })
            .count()
            .to_string()
    });

    let change_status = Callback::new(move |(id, code): (String, String)| {
        if let Some(status) = IncidentStatus::from_code(&code) {
            incidents.update(|list| {
                if let Some(incident) = list.iter_mut().find(|incident| incident.id == id) {
                    incident.set_status(status, Utc::now());
                }
            });
        }
    });
    let view_incident = Callback::new(move |incident: Incident| selected.set(Some(incident)));

    view! {
        <PageFrame page_id="incidents--page">
            <div class="stat-grid">
                <StatCard
                    label="Active Incidents".to_string()
                    icon_name="alert-circle".to_string()
                    value=active_count
                    change=static_text("15%")
                    trend=Signal::derive(|| TrendDirection::Down)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="vs last week".to_string()
                />
                <StatCard
                    label="Critical Incidents".to_string()
                    icon_name="alert-triangle".to_string()
                    value=critical_count
                    change=static_text("50%")
                    trend=Signal::derive(|| TrendDirection::Down)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="vs last week".to_string()
                />
                <StatCard
                    label="Avg Resolution Time".to_string()
                    icon_name="clock".to_string()
                    value=static_text("2.4h")
                    change=static_text("22%")
                    trend=Signal::derive(|| TrendDirection::Down)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="vs last week".to_string()
                />
                <StatCard
                    label="Resolved Today".to_string()
                    icon_name="check-circle".to_string()
                    value=resolved_count
                    change=static_text("33%")
                    trend=Signal::derive(|| TrendDirection::Up)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="vs last week".to_string()
                />
            </div>

            <div class="card">
                <div class="card__header">
                    <TabStrip
                        tabs=vec![("active", "Active Incidents"), ("resolved", "Resolved")]
                        active=active_tab
                    />
                    <Button appearance=ButtonAppearance::Primary>"Create Incident"</Button>
                </div>

                <Show when=move || active_tab.get() == "active">
                    <IncidentTable
                        items=active_incidents
                        resolved=false
                        on_view=view_incident
                        on_status_change=change_status
                    />
                </Show>
                <Show when=move || active_tab.get() == "resolved">
                    <IncidentTable items=resolved_incidents resolved=true on_view=view_incident />
                </Show>
            </div>

            {move || {
                selected
                    .get()
                    .map(|incident| {
                        view! {
                            <IncidentDetailsDialog
                                incident=incident
                                on_close=move || selected.set(None)
                            />
                        }
                    })
            }}
        </PageFrame>
    }
}

#[component]
fn IncidentTable(
    #[prop(into)] items: Signal<Vec<Incident>>,
    /// Resolved view swaps the timestamp column and hides the status select.
    resolved: bool,
    on_view: Callback<Incident>,
    #[prop(optional, into)] on_status_change: Option<Callback<(String, String)>>,
) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"ID"</TableHeaderCell>
                    <TableHeaderCell>"Title"</TableHeaderCell>
                    <TableHeaderCell>"Severity"</TableHeaderCell>
                    <TableHeaderCell>"Category"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Assignee"</TableHeaderCell>
                    <TableHeaderCell>
                        {if resolved { "Resolved" } else { "Created" }}
                    </TableHeaderCell>
                    <TableHeaderCell>"Actions"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || items.get()
                    key=|incident| incident.id.clone()
                    children=move |incident| {
                        let severity = incident.severity;
                        let status = incident.status;
                        let created = format_datetime(&incident.created_at);
                        let resolved_at = incident
                            .resolved_at
                            .map(|ts| format_datetime(&ts))
                            .unwrap_or_else(|| "-".to_string());
                        let timestamp = if resolved { resolved_at } else { created };
                        let id_for_change = incident.id.clone();
                        let incident_for_view = incident.clone();
                        let status_code = status.code().to_string();
                        let status_options: Vec<(String, String)> = IncidentStatus::all()
                            .iter()
                            .map(|s| (s.code().to_string(), s.display_name().to_string()))
                            .collect();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <span class="table__mono">{incident.id.clone()}</span>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <span class="table__strong">{incident.title.clone()}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <Badge variant=severity_variant(severity).to_string()>
                                        {icon(severity_icon(severity))}
                                        {severity.code()}
                                    </Badge>
                                </TableCell>
                                <TableCell>
                                    <Badge>{incident.category.display_name()}</Badge>
                                </TableCell>
                                <TableCell>
                                    <Badge variant=incident_status_variant(status).to_string()>
                                        {status.display_name()}
                                    </Badge>
                                </TableCell>
                                <TableCell>
                                    <span class="table__assignee">
                                        {icon("user")}
                                        {incident.assignee.clone()}
                                    </span>
                                </TableCell>
                                <TableCell>
                                    <span class="table__time">{timestamp}</span>
                                </TableCell>
                                <TableCell>
                                    <div class="table__actions">
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| on_view.run(incident_for_view.clone())
                                        >
                                            "View"
                                        </Button>
                                        {(!resolved)
                                            .then(|| {
                                                view! {
                                                    <Select
                                                        value=Signal::derive({
                                                            let code = status_code.clone();
                                                            move || code.clone()
                                                        })
                                                        on_change=Callback::new(move |code: String| {
                                                            if let Some(handler) = on_status_change {
                                                                handler.run((id_for_change.clone(), code));
                                                            }
                                                        })
                                                        options=Signal::derive({
                                                            let options = status_options.clone();
                                                            move || options.clone()
                                                        })
                                                    />
                                                }
                                            })}
                                    </div>
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}

#[component]
fn IncidentDetailsDialog<F>(incident: Incident, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let resolved_at = incident.resolved_at.map(|ts| format_datetime(&ts));
    let created_at = format_datetime(&incident.created_at);

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">
                        <span class="table__mono">{incident.id.clone()}</span>
                        " "
                        {incident.title.clone()}
                    </h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="modal-grid">
                        <div>
                            <p class="modal-field__label">"Severity"</p>
                            <Badge variant=severity_variant(incident.severity).to_string()>
                                {incident.severity.code()}
                            </Badge>
                        </div>
                        <div>
                            <p class="modal-field__label">"Status"</p>
                            <Badge variant=incident_status_variant(incident.status).to_string()>
                                {incident.status.display_name()}
                            </Badge>
                        </div>
                        <div>
                            <p class="modal-field__label">"Category"</p>
                            <Badge>{incident.category.display_name()}</Badge>
                        </div>
                        <div>
                            <p class="modal-field__label">"Assignee"</p>
                            <p class="modal-field__value">{incident.assignee.clone()}</p>
                        </div>
                    </div>

                    <div>
                        <p class="modal-field__label">"Description"</p>
                        <p class="modal-field__value">{incident.description.clone()}</p>
                    </div>

                    <div>
                        <p class="modal-field__label">"Affected Services"</p>
                        <div class="modal-badges">
                            {incident
                                .affected_services
                                .clone()
                                .into_iter()
                                .map(|service| view! { <Badge>{service.clone()}</Badge> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="modal-grid modal-grid--footer">
                        <div>
                            <p class="modal-field__label">"Created At"</p>
                            <p class="modal-field__value">{created_at}</p>
                        </div>
                        {resolved_at
                            .map(|ts| {
                                view! {
                                    <div>
                                        <p class="modal-field__label">"Resolved At"</p>
                                        <p class="modal-field__value">{ts}</p>
                                    </div>
                                }
                            })}
                    </div>
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close()>
                        "Close"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary>"Update Incident"</Button>
                </div>
            </div>
        </div>
    }
}
