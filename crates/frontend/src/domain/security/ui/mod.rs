use contracts::domain::status::MetricTone;
use contracts::enums::{EventStatus, Severity, TrendDirection, VulnerabilityStatus};
use leptos::prelude::*;
use thaw::*;

use super::model::{event_feed, EventGenerator, THREAT_TREND, VULNERABILITIES};
use crate::shared::components::charts::AreaChart;
use crate::shared::components::page_frame::PageFrame;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::tab_strip::TabStrip;
use crate::shared::components::ui::badge::{
    event_status_variant, severity_variant, vulnerability_status_variant, Badge,
};
use crate::shared::date_utils::{format_date, format_time};
use crate::shared::icons::icon;
use crate::shared::live_feed::use_live_feed;

fn static_text(text: &'static str) -> Signal<String> {
    Signal::derive(move || text.to_string())
}

#[component]
pub fn SecurityMonitorPage() -> impl IntoView {
    let feed = use_live_feed(event_feed(), EventGenerator);

    let search = RwSignal::new(String::new());
    let severity_filter = RwSignal::new("ALL".to_string());

    Effect::new(move |_| {
        let query = search.get();
        feed.update(|feed| feed.criteria_mut().search = query);
    });
    Effect::new(move |_| {
        let code = severity_filter.get();
        feed.update(|feed| feed.criteria_mut().level.set(Severity::from_code(&code)));
    });

    let visible = Signal::derive(move || feed.with(|feed| feed.visible()));

    // Headline counts read the whole buffer, not the filtered view.
    let active_count = Signal::derive(move || {
        feed.with(|feed| {
            feed.snapshot()
                .iter()
                .filter(|event| event.status == EventStatus::Active)
                .count()
                .to_string()
        })
    });
    let critical_count = Signal::derive(move || {
        feed.with(|feed| {
            feed.snapshot()
                .iter()
                .filter(|event| event.level == Severity::Critical)
                .count()
                .to_string()
        })
    });
    let open_vulnerabilities = VULNERABILITIES
        .iter()
        .filter(|vuln| vuln.status == VulnerabilityStatus::Open)
        .count()
        .to_string();

    let active_tab = RwSignal::new("events");
    let trend_points: Vec<(String, f64)> = THREAT_TREND
        .iter()
        .map(|point| (point.label.clone(), point.value))
        .collect();

    view! {
        <PageFrame page_id="security--page">
            <div class="stat-grid">
                <StatCard
                    label="Active Threats".to_string()
                    icon_name="alert-triangle".to_string()
                    value=active_count
                    change=static_text("23%")
                    trend=Signal::derive(|| TrendDirection::Down)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="vs last period".to_string()
                />
                <StatCard
                    label="Critical Events".to_string()
                    icon_name="alert-circle".to_string()
                    value=critical_count
                    change=static_text("45%")
                    trend=Signal::derive(|| TrendDirection::Down)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="vs last period".to_string()
                />
                <StatCard
                    label="Open Vulnerabilities".to_string()
                    icon_name="shield".to_string()
                    value=Signal::derive(move || open_vulnerabilities.clone())
                    change=static_text("12%")
                    trend=Signal::derive(|| TrendDirection::Up)
                    tone=Signal::derive(|| MetricTone::Neutral)
                    caption="vs last period".to_string()
                />
                <StatCard
                    label="Security Score".to_string()
                    icon_name="check-circle".to_string()
                    value=static_text("87/100")
                    change=static_text("5 points")
                    trend=Signal::derive(|| TrendDirection::Up)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="vs last period".to_string()
                />
            </div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Threat Activity (24h)"</h2>
                    <div class="card__live-hint">
                        {icon("activity")}
                        <span>"Real-time monitoring"</span>
                    </div>
                </div>
                <AreaChart points=trend_points height=200u32 />
            </div>

            <div class="card">
                <TabStrip
                    tabs=vec![("events", "Security Events"), ("vulnerabilities", "Vulnerabilities")]
                    active=active_tab
                />

                <Show when=move || active_tab.get() == "events">
                    <div class="card__subheader">
                        <p class="card__hint">"Recent security events and threat detections"</p>
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="max-width: 280px;">
                                <Input value=search placeholder="Search events..." />
                            </div>
                            <Select value=severity_filter>
                                <option value="ALL">"All Severities"</option>
                                {Severity::all()
                                    .into_iter()
                                    .map(|level| {
                                        view! {
                                            <option value=level.code()>{level.display_name()}</option>
                                        }
                                    })
                                    .collect_view()}
                            </Select>
                        </Flex>
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Time"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                <TableHeaderCell>"Severity"</TableHeaderCell>
                                <TableHeaderCell>"Source"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|event| event.id
                                children=move |event| {
                                    let time = format_time(&event.timestamp);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <span class="table__time">{time}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Badge>{event.threat_type.display_name()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=severity_variant(event.level)
                                                    .to_string()>{event.level.code()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__mono">{event.source.clone()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {event.description.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=event_status_variant(event.status)
                                                    .to_string()>{event.status.display_name()}</Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>

                <Show when=move || active_tab.get() == "vulnerabilities">
                    <div class="card__subheader">
                        <p class="card__hint">"Known vulnerabilities and CVE tracking"</p>
                        <Button appearance=ButtonAppearance::Secondary>"Scan Now"</Button>
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"CVE ID"</TableHeaderCell>
                                <TableHeaderCell>"Severity"</TableHeaderCell>
                                <TableHeaderCell>"Component"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Discovered"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || VULNERABILITIES.clone()
                                key=|vuln| vuln.id.clone()
                                children=move |vuln| {
                                    let discovered = format_date(&vuln.discovered);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <span class="table__mono">{vuln.cve.clone()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=severity_variant(vuln.severity)
                                                    .to_string()>{vuln.severity.code()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__strong">
                                                    {vuln.component.clone()}
                                                </span>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {vuln.description.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__time">{discovered}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=vulnerability_status_variant(vuln.status)
                                                    .to_string()>{vuln.status.display_name()}</Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </PageFrame>
    }
}
