use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use pages::applications::types::{
    Application, ApplicationStatus, ApplicationType, DepartmentFilter, Priority,
};
pub use pages::applications::ApplicationsDashboard;

use pages::placeholder::PlaceholderPage;

pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting approvals dashboard (wasm)");

    // Resolve runtime config early; the dashboard awaits the same cached value.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
    });

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="申請ダッシュボード"/>
        <Router>
            <Routes>
                <Route path="/" view=DashboardRoute/>
                <Route path="/dashboard" view=DashboardRoute/>
                <Route path="/*any" view=PlaceholderPage/>
            </Routes>
        </Router>
    }
}

pub fn view_path(view: &str) -> String {
    format!("/{}", view.trim_start_matches('/'))
}

pub fn detail_path(kind: ApplicationType, id: &str) -> String {
    format!("/{}/{}", kind.as_str(), id)
}

#[component]
fn DashboardRoute() -> impl IntoView {
    let navigate = use_navigate();
    let navigate_detail = navigate.clone();
    let on_navigate = Callback::new(move |view: String| {
        navigate(&view_path(&view), Default::default());
    });
    let on_show_detail = Callback::new(move |(kind, id): (ApplicationType, String)| {
        navigate_detail(&detail_path(kind, &id), Default::default());
    });
    view! { <ApplicationsDashboard on_navigate=on_navigate on_show_detail=on_show_detail/> }
}
