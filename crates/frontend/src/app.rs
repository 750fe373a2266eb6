use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use thaw::ConfigProvider;

use crate::domain::costs::ui::CostReportsPage;
use crate::domain::incidents::ui::IncidentAlertsPage;
use crate::domain::overview::ui::OverviewPage;
use crate::domain::provisioning::ui::ProvisioningLogsPage;
use crate::domain::security::ui::SecurityMonitorPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::DashboardHeader;

#[component]
pub fn App() -> impl IntoView {
    // Environment / time-range selection shared by every page via context.
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <Router>
                <div class="app-layout">
                    <DashboardHeader />
                    <main class="app-main">
                        <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                            <Route path=path!("/") view=OverviewPage />
                            <Route path=path!("/provisioning") view=ProvisioningLogsPage />
                            <Route path=path!("/security") view=SecurityMonitorPage />
                            <Route path=path!("/incidents") view=IncidentAlertsPage />
                            <Route path=path!("/costs") view=CostReportsPage />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ConfigProvider>
    }
}
