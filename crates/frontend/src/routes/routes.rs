use crate::dashboards::PoolBookingPage;
use leptos::prelude::*;

// Single-page build: the booking dashboard is the whole app, no Router needed
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <PoolBookingPage />
    }
}
