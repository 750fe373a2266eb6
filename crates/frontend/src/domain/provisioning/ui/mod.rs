use contracts::enums::{LogLevel, LogService};
use leptos::prelude::*;
use thaw::*;

use super::model::{log_feed, LogGenerator};
use crate::shared::components::page_frame::PageFrame;
use crate::shared::components::ui::badge::{log_level_variant, Badge};
use crate::shared::date_utils::format_time;
use crate::shared::export::export_json;
use crate::shared::icons::icon;
use crate::shared::live_feed::use_live_feed;

const SCROLL_REGION_ID: &str = "provisioning-log-scroll";

#[component]
pub fn ProvisioningLogsPage() -> impl IntoView {
    let feed = use_live_feed(log_feed(), LogGenerator);

    // UI-side filter state, pushed into the feed criteria by the effects
    // below so the visible view tracks every keystroke.
    let search = RwSignal::new(String::new());
    let level_filter = RwSignal::new("ALL".to_string());
    let service_filter = RwSignal::new("ALL".to_string());

    Effect::new(move |_| {
        let query = search.get();
        feed.update(|feed| feed.criteria_mut().search = query);
    });
    Effect::new(move |_| {
        let code = level_filter.get();
        feed.update(|feed| feed.criteria_mut().level.set(LogLevel::from_code(&code)));
    });
    Effect::new(move |_| {
        let code = service_filter.get();
        feed.update(|feed| feed.criteria_mut().service.set(LogService::from_code(&code)));
    });

    let visible = Signal::derive(move || feed.with(|feed| feed.visible()));
    let total = Signal::derive(move || feed.with(|feed| feed.total_count()));
    let visible_count = Signal::derive(move || feed.with(|feed| feed.visible_count()));
    let is_streaming = Signal::derive(move || feed.with(|feed| feed.is_running()));
    let has_filters = Signal::derive(move || feed.with(|feed| feed.has_active_criteria()));
    let last_updated = Signal::derive(move || {
        feed.with(|feed| {
            feed.newest()
                .map(|entry| format_time(&entry.timestamp))
                .unwrap_or_else(|| "N/A".to_string())
        })
    });

    let toggle_streaming = move |_| {
        feed.update(|feed| {
            if feed.is_running() {
                feed.pause();
            } else {
                feed.resume();
            }
        });
    };

    let clear_filters = move |_| {
        search.set(String::new());
        level_filter.set("ALL".to_string());
        service_filter.set("ALL".to_string());
        feed.update(|feed| feed.clear_criteria());
    };

    let export_logs = move |_| {
        let entries = feed.with_untracked(|feed| feed.visible());
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => {
                if let Err(err) = export_json(&json, "provisioning-logs.json") {
                    log::error!("Log export failed: {}", err);
                }
            }
            Err(err) => log::error!("Log serialization failed: {}", err),
        }
    };

    // Keep the newest line in view while streaming.
    Effect::new(move |_| {
        let _ = visible.get();
        if !feed.with_untracked(|feed| feed.is_running()) {
            return;
        }
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(SCROLL_REGION_ID))
        {
            element.set_scroll_top(element.scroll_height());
        }
    });

    let active_chips = move || {
        let mut chips: Vec<String> = Vec::new();
        let query = search.get();
        if !query.trim().is_empty() {
            chips.push(format!("Search: {}", query.trim()));
        }
        if let Some(level) = LogLevel::from_code(&level_filter.get()) {
            chips.push(format!("Level: {}", level.code()));
        }
        if let Some(service) = LogService::from_code(&service_filter.get()) {
            chips.push(format!("Service: {}", service.display_name()));
        }
        chips
    };

    view! {
        <PageFrame page_id="provisioning--page">
            <div class="card">
                <div class="card__header">
                    <div class="card__header-left">
                        <h2 class="card__title">"Infrastructure Provisioning Logs"</h2>
                        <Show when=move || is_streaming.get()>
                            <div class="card__live-hint">
                                <Spinner />
                                <span>"Live streaming"</span>
                            </div>
                        </Show>
                    </div>
                    <div class="card__header-right">
                        <Button appearance=ButtonAppearance::Secondary on_click=toggle_streaming>
                            {move || {
                                if is_streaming.get() {
                                    view! { {icon("pause")} <span>" Pause"</span> }.into_any()
                                } else {
                                    view! { {icon("play")} <span>" Resume"</span> }.into_any()
                                }
                            }}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=export_logs>
                            {icon("download")}
                            " Export"
                        </Button>
                    </div>
                </div>

                <div class="filter-panel-content">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <Input value=search placeholder="Search logs..." />
                        </div>
                        <Select value=level_filter>
                            <option value="ALL">"All Levels"</option>
                            {LogLevel::all()
                                .into_iter()
                                .map(|level| {
                                    view! { <option value=level.code()>{level.display_name()}</option> }
                                })
                                .collect_view()}
                        </Select>
                        <Select value=service_filter>
                            <option value="ALL">"All Services"</option>
                            {LogService::all()
                                .into_iter()
                                .map(|service| {
                                    view! { <option value=service.code()>{service.display_name()}</option> }
                                })
                                .collect_view()}
                        </Select>
                        <Show when=move || has_filters.get()>
                            <Button appearance=ButtonAppearance::Subtle on_click=clear_filters>
                                {icon("x")}
                                " Clear"
                            </Button>
                        </Show>
                    </Flex>
                </div>

                <Show when=move || has_filters.get()>
                    <div class="filter-chips">
                        <span class="filter-chips__label">"Active filters:"</span>
                        {move || {
                            active_chips()
                                .into_iter()
                                .map(|chip| view! { <Badge>{chip}</Badge> })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <div class="log-viewer" id=SCROLL_REGION_ID>
                    <Show
                        when=move || { visible_count.get() > 0 }
                        fallback=move || {
                            view! {
                                <div class="log-viewer__empty">
                                    {move || {
                                        if total.get() == 0 {
                                            "Waiting for logs..."
                                        } else {
                                            "No logs match your filters"
                                        }
                                    }}
                                </div>
                            }
                        }
                    >
                        <For
                            each=move || visible.get()
                            key=|entry| entry.id
                            children=move |entry| {
                                let time = format_time(&entry.timestamp);
                                let level = entry.level;
                                let service = entry.service;
                                view! {
                                    <div class="log-row">
                                        <span class="log-row__time">{time}</span>
                                        <Badge variant=log_level_variant(level).to_string()>
                                            {level.code()}
                                        </Badge>
                                        <Badge>{service.display_name()}</Badge>
                                        <span class="log-row__message">{entry.message.clone()}</span>
                                    </div>
                                }
                            }
                        />
                    </Show>
                </div>

                <div class="card__footer">
                    <span>
                        {move || format!("Showing {} of {} logs", visible_count.get(), total.get())}
                    </span>
                    <span>{move || format!("Last updated: {}", last_updated.get())}</span>
                </div>
            </div>
        </PageFrame>
    }
}
