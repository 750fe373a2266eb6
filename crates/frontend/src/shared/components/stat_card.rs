use contracts::domain::status::MetricTone;
use contracts::enums::TrendDirection;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary display value
    #[prop(into)]
    value: Signal<String>,
    /// Change vs the previous period, e.g. "-23%"
    #[prop(into)]
    change: Signal<String>,
    /// Direction of the change arrow
    #[prop(into)]
    trend: Signal<TrendDirection>,
    /// Visual tone of the icon and the change text
    #[prop(into)]
    tone: Signal<MetricTone>,
    /// Caption after the change, e.g. "vs last period"; omitted when empty
    #[prop(optional, into)]
    caption: String,
) -> impl IntoView {
    let icon_class = move || match tone.get() {
        MetricTone::Good => "stat-card__icon stat-card__icon--success",
        MetricTone::Warning => "stat-card__icon stat-card__icon--warning",
        MetricTone::Bad => "stat-card__icon stat-card__icon--error",
        MetricTone::Neutral => "stat-card__icon",
    };

    let change_view = move || {
        let arrow = match trend.get() {
            TrendDirection::Up => "\u{2191}",
            TrendDirection::Down => "\u{2193}",
        };
        let cls = match tone.get() {
            MetricTone::Good => "stat-card__change stat-card__change--up",
            MetricTone::Bad => "stat-card__change stat-card__change--down",
            _ => "stat-card__change stat-card__change--flat",
        };
        view! { <span class=cls>{format!("{}{}", arrow, change.get())}</span> }
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                <div class="stat-card__footer">
                    {change_view}
                    {(!caption.is_empty())
                        .then(|| view! { <span class="stat-card__caption">{caption.clone()}</span> })}
                </div>
            </div>
            <div class=icon_class>
                {icon(&icon_name)}
            </div>
        </div>
    }
}
