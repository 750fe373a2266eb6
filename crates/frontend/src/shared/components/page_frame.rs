//! PageFrame — standard root wrapper for every routed page.
//!
//! Guarantees a stable `id` on the page's root DOM element, e.g.
//! `"provisioning--page"`, used for DOM inspection and scroll targeting.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{feature}--page`.
    page_id: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div id=page_id class=full_class>
            {children()}
        </div>
    }
}
