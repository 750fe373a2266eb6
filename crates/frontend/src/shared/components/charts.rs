//! Small hand-rolled SVG charts. The data sets on these pages are a handful
//! of points, so a charting dependency would be overkill; both components
//! scale to their container via viewBox.

use leptos::prelude::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_PAD: f64 = 8.0;

fn max_value(points: &[(String, f64)]) -> f64 {
    points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0)
}

/// Filled area chart over evenly spaced points.
#[component]
pub fn AreaChart(
    points: Vec<(String, f64)>,
    #[prop(optional, into)] height: Option<u32>,
) -> impl IntoView {
    let height = height.unwrap_or(200) as f64;
    let max = max_value(&points);
    let step = if points.len() > 1 {
        CHART_WIDTH / (points.len() - 1) as f64
    } else {
        CHART_WIDTH
    };

    let line = points
        .iter()
        .enumerate()
        .map(|(i, (_, value))| {
            let x = i as f64 * step;
            let y = height - CHART_PAD - (value / max) * (height - 2.0 * CHART_PAD);
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ");
    let area = format!("{} {:.1},{:.1} 0,{:.1}", line, CHART_WIDTH, height, height);

    let labels = points
        .iter()
        .map(|(label, _)| view! { <span class="chart__label">{label.clone()}</span> })
        .collect_view();

    view! {
        <div class="chart">
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, height)
                preserveAspectRatio="none"
                class="chart__canvas"
            >
                <polygon points=area class="chart__area" />
                <polyline points=line class="chart__line" fill="none" />
            </svg>
            <div class="chart__labels">{labels}</div>
        </div>
    }
}

/// Vertical bar chart, one bar per point.
#[component]
pub fn BarChart(
    points: Vec<(String, f64)>,
    #[prop(optional, into)] height: Option<u32>,
) -> impl IntoView {
    let height = height.unwrap_or(200) as f64;
    let max = max_value(&points);
    let slot = CHART_WIDTH / points.len().max(1) as f64;
    let bar_width = slot * 0.6;

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, (_, value))| {
            let bar_height = (value / max) * (height - 2.0 * CHART_PAD);
            let x = i as f64 * slot + (slot - bar_width) / 2.0;
            let y = height - CHART_PAD - bar_height;
            view! {
                <rect
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", y)
                    width=format!("{:.1}", bar_width)
                    height=format!("{:.1}", bar_height)
                    rx="3"
                    class="chart__bar"
                />
            }
        })
        .collect_view();

    let labels = points
        .iter()
        .map(|(label, _)| view! { <span class="chart__label">{label.clone()}</span> })
        .collect_view();

    view! {
        <div class="chart">
            <svg viewBox=format!("0 0 {} {}", CHART_WIDTH, height) class="chart__canvas">
                {bars}
            </svg>
            <div class="chart__labels chart__labels--bars">{labels}</div>
        </div>
    }
}
