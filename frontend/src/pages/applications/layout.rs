use crate::components::layout::{Sidebar, TopBar};
use crate::pages::applications::{state::DashboardAction, view_model::ApplicationsViewModel};
use leptos::*;

#[component]
pub fn DashboardFrame(vm: ApplicationsViewModel, children: Children) -> impl IntoView {
    let state = vm.state;
    let sidebar_open = Signal::derive(move || state.with(|s| s.is_sidebar_open));

    view! {
        <div class="min-h-screen bg-gray-50 lg:flex">
            <Sidebar
                open=sidebar_open
                on_navigate=Callback::new(move |target: String| vm.handle_navigate(target))
                on_close=Callback::new(move |_: ()| vm.dispatch(DashboardAction::CloseSidebar))
            />
            <div class="flex-1 min-w-0">
                <TopBar
                    title="申請ダッシュボード"
                    on_toggle_sidebar=Callback::new(move |_: ()| vm.dispatch(DashboardAction::ToggleSidebar))
                />
                <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                    {children()}
                </main>
            </div>
        </div>
    }
}
