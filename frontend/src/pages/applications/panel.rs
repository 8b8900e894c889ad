use crate::components::layout::{ErrorMessage, LoadingSpinner};
use crate::pages::applications::{
    components::{ApplicationsList, FilterBar, SummaryCards},
    layout::DashboardFrame,
    state::DashboardAction,
    types::{Application, ApplicationStatus, ApplicationType, DepartmentFilter},
    view_model::ApplicationsViewModel,
};
use leptos::*;

/// Approval dashboard. Navigation and detail views belong to the parent,
/// which is notified through `on_navigate` and `on_show_detail`.
#[component]
pub fn ApplicationsDashboard(
    on_navigate: Callback<String>,
    on_show_detail: Callback<(ApplicationType, String)>,
    #[prop(optional, into)] applications: Option<MaybeSignal<Vec<Application>>>,
) -> impl IntoView {
    let vm = ApplicationsViewModel::new(applications, on_navigate, on_show_detail);
    let state = vm.state;

    let cards = Signal::derive(move || vm.card_configs());
    let visible = Signal::derive(move || vm.visible());
    let departments = Signal::derive(move || vm.departments());
    let search_term = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let department = Signal::derive(move || state.with(|s| s.department_filter.clone()));

    view! {
        <DashboardFrame vm=vm>
            {move || {
                vm.load_error.get().map(|err| {
                    view! {
                        <ErrorMessage message=format!("申請データを取得できませんでした: {}", err) />
                    }
                })
            }}
            <Show when=move || vm.loading.get()>
                <div class="flex items-center gap-2 text-sm text-gray-500">
                    <LoadingSpinner />
                    <span>{"申請データを読み込み中..."}</span>
                </div>
            </Show>
            <SummaryCards
                cards=cards
                selected=vm.selected_card()
                on_select=Callback::new(move |status: ApplicationStatus| vm.dispatch(DashboardAction::SelectCard(status)))
            />
            <FilterBar
                search_term=search_term
                department=department
                departments=departments
                on_search=Callback::new(move |term: String| vm.dispatch(DashboardAction::SetSearchTerm(term)))
                on_department=Callback::new(move |filter: DepartmentFilter| {
                    vm.dispatch(DashboardAction::SetDepartmentFilter(filter))
                })
                on_clear=Callback::new(move |_: ()| vm.dispatch(DashboardAction::ClearFilters))
            />
            <ApplicationsList
                status=vm.selected_card()
                applications=visible
                on_show_detail=Callback::new(move |(kind, id): (ApplicationType, String)| vm.handle_show_detail(kind, id))
            />
        </DashboardFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::applications::sample::sample_applications;
    use crate::test_support::helpers::{noop_navigate, noop_show_detail};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_pending_tab_by_default() {
        let html = render_to_string(|| {
            view! {
                <ApplicationsDashboard
                    on_navigate=noop_navigate()
                    on_show_detail=noop_show_detail()
                    applications=sample_applications()
                />
            }
        });
        assert!(html.contains("申請ダッシュボード"));
        assert!(html.contains("BT-2024-001"));
        assert!(html.contains("EX-2024-001"));
        assert!(!html.contains("BT-2024-002"));
        assert!(!html.contains("EX-2024-002"));
        assert!(html.contains("全部署"));
    }

    #[test]
    fn empty_source_renders_pending_empty_state() {
        let html = render_to_string(|| {
            view! {
                <ApplicationsDashboard
                    on_navigate=noop_navigate()
                    on_show_detail=noop_show_detail()
                    applications={Vec::<Application>::new()}
                />
            }
        });
        assert!(html.contains("承認待ちの申請はありません"));
        assert!(html.contains("0 件"));
    }

    #[test]
    fn repository_source_renders_sample_fallback() {
        let html = render_to_string(|| {
            view! {
                <ApplicationsDashboard
                    on_navigate=noop_navigate()
                    on_show_detail=noop_show_detail()
                />
            }
        });
        assert!(html.contains("大阪支社訪問"));
    }
}
