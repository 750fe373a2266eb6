use contracts::domain::costs::potential_savings;
use contracts::domain::status::MetricTone;
use contracts::enums::{RecommendationStatus, TrendDirection};
use leptos::prelude::*;
use thaw::*;

use super::model::{
    BUDGET_LIMIT, CATEGORY_BREAKDOWN, COST_TREND, CURRENT_MONTH_COST, FORECAST_COST,
    LAST_MONTH_COST, RECOMMENDATIONS, SERVICE_COSTS,
};
use crate::shared::components::charts::{AreaChart, BarChart};
use crate::shared::components::page_frame::PageFrame;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::tab_strip::TabStrip;
use crate::shared::components::ui::badge::{
    impact_variant, recommendation_status_variant, Badge,
};
use crate::shared::export::export_csv;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_percent, format_usd};

fn static_text(text: String) -> Signal<String> {
    Signal::derive(move || text.clone())
}

#[component]
pub fn CostReportsPage() -> impl IntoView {
    let cost_change = (CURRENT_MONTH_COST - LAST_MONTH_COST) / LAST_MONTH_COST * 100.0;
    let budget_utilization = CURRENT_MONTH_COST / BUDGET_LIMIT * 100.0;
    let savings = potential_savings(RECOMMENDATIONS.as_slice());

    let active_tab = RwSignal::new("services");

    let trend_points: Vec<(String, f64)> = COST_TREND
        .iter()
        .map(|point| (point.label.clone(), point.cost))
        .collect();
    let category_points: Vec<(String, f64)> = CATEGORY_BREAKDOWN
        .iter()
        .map(|point| (point.label.clone(), point.cost))
        .collect();

    let export_services = move |_| {
        if let Err(err) = export_csv(SERVICE_COSTS.as_slice(), "service-costs.csv") {
            log::error!("Cost export failed: {}", err);
        }
    };

    view! {
        <PageFrame page_id="costs--page">
            <div class="stat-grid">
                <StatCard
                    label="Current Month Cost".to_string()
                    icon_name="dollar".to_string()
                    value=static_text(format_usd(CURRENT_MONTH_COST))
                    change=static_text(format!("{:.1}%", cost_change.abs()))
                    trend=Signal::derive(|| TrendDirection::Down)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="vs last month".to_string()
                />
                <StatCard
                    label="Forecasted Cost".to_string()
                    icon_name="trending-down".to_string()
                    value=static_text(format_usd(FORECAST_COST))
                    change=static_text("7.8%".to_string())
                    trend=Signal::derive(|| TrendDirection::Down)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="next month".to_string()
                />
                <StatCard
                    label="Potential Savings".to_string()
                    icon_name="lightbulb".to_string()
                    value=static_text(format_usd(savings))
                    change=static_text(format!("{} recommendations", RECOMMENDATIONS.len()))
                    trend=Signal::derive(|| TrendDirection::Up)
                    tone=Signal::derive(|| MetricTone::Warning)
                    caption="".to_string()
                />
                <StatCard
                    label="Budget Utilization".to_string()
                    icon_name="check-circle".to_string()
                    value=static_text(format!("{:.0}%", budget_utilization))
                    change=static_text("Under budget".to_string())
                    trend=Signal::derive(|| TrendDirection::Down)
                    tone=Signal::derive(|| MetricTone::Good)
                    caption="".to_string()
                />
            </div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Cost Trend (Last 30 Days)"</h2>
                    <Badge variant="success".to_string()>"-18% vs last period"</Badge>
                </div>
                <AreaChart points=trend_points height=250u32 />
            </div>

            <div class="card">
                <div class="card__header">
                    <h2 class="card__title">"Cost by Category"</h2>
                </div>
                <BarChart points=category_points height=250u32 />
            </div>

            <div class="card">
                <TabStrip
                    tabs=vec![("services", "Service Costs"), ("recommendations", "Optimization")]
                    active=active_tab
                />

                <Show when=move || active_tab.get() == "services">
                    <div class="card__subheader">
                        <p class="card__hint">"Detailed breakdown by service"</p>
                        <Button appearance=ButtonAppearance::Secondary on_click=export_services>
                            {icon("download")}
                            " Export CSV"
                        </Button>
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Service"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Current Month"</TableHeaderCell>
                                <TableHeaderCell>"Last Month"</TableHeaderCell>
                                <TableHeaderCell>"Trend"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || SERVICE_COSTS.clone()
                                key=|cost| cost.service.clone()
                                children=move |cost| {
                                    let trend_down = cost.trend_percent < 0.0;
                                    let trend_class = if trend_down {
                                        "table__trend table__trend--down"
                                    } else {
                                        "table__trend table__trend--up"
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <span class="table__strong">{cost.service.clone()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Badge>{cost.category.display_name()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__strong">
                                                    {format_usd(cost.current_month)}
                                                </span>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__time">
                                                    {format_usd(cost.last_month)}
                                                </span>
                                            </TableCell>
                                            <TableCell>
                                                <span class=trend_class>
                                                    {icon(
                                                        if trend_down {
                                                            "trending-down"
                                                        } else {
                                                            "trending-up"
                                                        },
                                                    )}
                                                    {format_percent(cost.trend_percent)}
                                                </span>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>

                <Show when=move || active_tab.get() == "recommendations">
                    <div class="card__subheader">
                        <p class="card__hint">"Cost optimization recommendations"</p>
                        <Button appearance=ButtonAppearance::Primary>"Apply All"</Button>
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Recommendation"</TableHeaderCell>
                                <TableHeaderCell>"Impact"</TableHeaderCell>
                                <TableHeaderCell>"Potential Savings"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || RECOMMENDATIONS.clone()
                                key=|rec| rec.id.clone()
                                children=move |rec| {
                                    let savings_label = format!("{}/mo", format_usd(rec.savings));
                                    let action = match rec.status {
                                        RecommendationStatus::New => {
                                            view! {
                                                <Button appearance=ButtonAppearance::Secondary>
                                                    "Apply"
                                                </Button>
                                            }
                                                .into_any()
                                        }
                                        RecommendationStatus::InProgress => {
                                            view! {
                                                <Button appearance=ButtonAppearance::Subtle>"View"</Button>
                                            }
                                                .into_any()
                                        }
                                        RecommendationStatus::Completed => {
                                            view! {
                                                <span class="table__trend table__trend--down">
                                                    {icon("check-circle")}
                                                </span>
                                            }
                                                .into_any()
                                        }
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <span class="table__mono">{rec.id.clone()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__stacked">
                                                    <span class="table__strong">{rec.title.clone()}</span>
                                                    <span class="table__hint">
                                                        {rec.description.clone()}
                                                    </span>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=impact_variant(rec.impact)
                                                    .to_string()>{rec.impact.display_name()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <span class="table__savings">{savings_label}</span>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=recommendation_status_variant(rec.status)
                                                    .to_string()>{rec.status.display_name()}</Badge>
                                            </TableCell>
                                            <TableCell>{action}</TableCell>
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
