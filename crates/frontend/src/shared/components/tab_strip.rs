use leptos::prelude::*;

/// Horizontal tab switcher used at the top of card sections.
///
/// Tabs are static (key, label) pairs; the active key lives in the caller's
/// signal so the caller decides what each tab renders.
#[component]
pub fn TabStrip(
    tabs: Vec<(&'static str, &'static str)>,
    active: RwSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tab-strip">
            {tabs
                .into_iter()
                .map(|(key, label)| {
                    view! {
                        <button
                            class=move || {
                                if active.get() == key {
                                    "tab-strip__tab tab-strip__tab--active"
                                } else {
                                    "tab-strip__tab"
                                }
                            }
                            on:click=move |_| active.set(key)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
