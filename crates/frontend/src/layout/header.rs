use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use thaw::*;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;

/// Top navigation bar: product mark, page links and the environment /
/// time-range selects shared through the global context.
#[component]
pub fn DashboardHeader() -> impl IntoView {
    let ctx = use_global_context();
    let pathname = use_location().pathname;

    let nav_class = move |href: &'static str| {
        if pathname.get() == href {
            "header__nav-link header__nav-link--active"
        } else {
            "header__nav-link"
        }
    };

    view! {
        <header class="header">
            <div class="header__left">
                <div class="header__brand">
                    {icon("activity")}
                    <h1 class="header__title">"DevOps Monitor"</h1>
                </div>
                <nav class="header__nav">
                    <A href="/" attr:class=move || nav_class("/")>"Overview"</A>
                    <A href="/provisioning" attr:class=move || nav_class("/provisioning")>"Provisioning"</A>
                    <A href="/security" attr:class=move || nav_class("/security")>"Security"</A>
                    <A href="/incidents" attr:class=move || nav_class("/incidents")>"Incidents"</A>
                    <A href="/costs" attr:class=move || nav_class("/costs")>"Cost Reports"</A>
                </nav>
            </div>
            <div class="header__right">
                <Select value=ctx.environment>
                    <option value="production">"Production"</option>
                    <option value="staging">"Staging"</option>
                    <option value="development">"Development"</option>
                </Select>
                <Select value=ctx.time_range>
                    <option value="1h">"Last 1 hour"</option>
                    <option value="12h">"Last 12 hours"</option>
                    <option value="24h">"Last 24 hours"</option>
                    <option value="7d">"Last 7 days"</option>
                </Select>
                <button class="header__icon-button" title="Notifications">
                    {icon("bell")}
                </button>
                <button class="header__icon-button" title="Settings">
                    {icon("settings")}
                </button>
            </div>
        </header>
    }
}
