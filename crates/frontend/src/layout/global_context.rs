use leptos::prelude::*;

/// App-wide display context selected in the header: which environment the
/// dashboard is scoped to and the reporting window. The mock data sources do
/// not branch on these; they are carried so every page reads one shared pair
/// of signals instead of growing its own.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub environment: RwSignal<String>,
    pub time_range: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            environment: RwSignal::new("production".to_string()),
            time_range: RwSignal::new("12h".to_string()),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
