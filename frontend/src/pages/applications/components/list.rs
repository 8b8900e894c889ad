use crate::components::empty_state::EmptyState;
use crate::pages::applications::{
    types::{Application, ApplicationStatus, ApplicationType},
    utils::{empty_state_message, priority_display, type_label, waiting_urgency, CardIcon},
};
use crate::utils::format::{format_amount, format_date, format_days_waiting};
use leptos::*;

#[component]
pub fn ApplicationsList(
    status: Signal<ApplicationStatus>,
    applications: Signal<Vec<Application>>,
    on_show_detail: Callback<(ApplicationType, String)>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg">
            <Show
                when=move || applications.with(|apps| !apps.is_empty())
                fallback=move || view! {
                    <div class="p-6">
                        {move || {
                            let status = status.get();
                            view! {
                                <EmptyState
                                    message=empty_state_message(status)
                                    icon=CardIcon::for_status(status)
                                />
                            }
                        }}
                    </div>
                }
            >
                <ul class="divide-y divide-gray-200">
                    <For
                        each=move || applications.get()
                        key=|app| app.id.clone()
                        children=move |app: Application| {
                            view! { <ApplicationRow app=app status=status on_show_detail=on_show_detail /> }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn ApplicationRow(
    app: Application,
    status: Signal<ApplicationStatus>,
    on_show_detail: Callback<(ApplicationType, String)>,
) -> impl IntoView {
    let kind = app.kind;
    let id = store_value(app.id.clone());
    let priority = priority_display(&app.priority);
    let urgency = waiting_urgency(app.days_waiting);
    let days_waiting = app.days_waiting;
    let show_detail = move || on_show_detail.call((kind, id.get_value()));

    view! {
        <li
            class="px-6 py-4 hover:bg-gray-50 cursor-pointer"
            data-id=app.id.clone()
            on:click=move |_| show_detail()
        >
            <div class="flex flex-col gap-2 md:flex-row md:items-center md:justify-between">
                <div class="space-y-1">
                    <div class="flex items-center gap-2">
                        <span class="text-xs font-medium px-2 py-0.5 rounded bg-blue-50 text-blue-700">
                            {type_label(&kind)}
                        </span>
                        <span class="text-xs text-gray-500">{app.id.clone()}</span>
                        <span class=format!("text-xs px-2 py-0.5 rounded border {}", priority.class)>
                            {format!("優先度: {}", priority.label)}
                        </span>
                    </div>
                    <p class="text-sm font-semibold text-gray-900">{app.title.clone()}</p>
                    <p class="text-xs text-gray-600">
                        {format!("{} / {}", app.applicant, app.department)}
                    </p>
                </div>
                <div class="flex items-center gap-4 text-sm">
                    <span class="font-semibold text-gray-900">{format_amount(app.amount)}</span>
                    <span class="text-gray-500">{format_date(app.submitted_date)}</span>
                    <Show when=move || status.get() == ApplicationStatus::Pending>
                        <span class=urgency.class()>{format_days_waiting(days_waiting)}</span>
                    </Show>
                    <button
                        type="button"
                        class="text-blue-600 hover:underline"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            show_detail();
                        }
                    >
                        {"詳細"}
                    </button>
                </div>
            </div>
        </li>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::applications::sample::sample_applications;
    use crate::pages::applications::utils::partition_by_status;
    use crate::test_support::helpers::noop_show_detail;
    use crate::test_support::ssr::render_to_string;

    fn render(status: ApplicationStatus, apps: Vec<Application>) -> String {
        render_to_string(move || {
            view! {
                <ApplicationsList
                    status=Signal::derive(move || status)
                    applications=Signal::derive(move || apps.clone())
                    on_show_detail=noop_show_detail()
                />
            }
        })
    }

    #[test]
    fn pending_rows_show_waiting_days() {
        let apps = sample_applications();
        let pending: Vec<_> = partition_by_status(&apps, ApplicationStatus::Pending)
            .into_iter()
            .cloned()
            .collect();
        let html = render(ApplicationStatus::Pending, pending);
        assert!(html.contains("BT-2024-001"));
        assert!(html.contains("EX-2024-001"));
        assert!(html.contains("¥45,000"));
        // SSR escapes '/' in text nodes.
        assert!(html.contains("2024&#x2F;01&#x2F;15"));
        assert!(html.contains("3日経過"));
        assert!(html.contains("4日経過"));
        assert!(html.contains("text-yellow-600"));
        assert!(html.contains("出張申請"));
        assert!(html.contains("優先度: 高"));
    }

    #[test]
    fn other_tabs_hide_waiting_days() {
        let apps = sample_applications();
        let on_hold: Vec<_> = partition_by_status(&apps, ApplicationStatus::OnHold)
            .into_iter()
            .cloned()
            .collect();
        let html = render(ApplicationStatus::OnHold, on_hold);
        assert!(html.contains("BT-2024-002"));
        assert!(!html.contains("日経過"));
    }

    #[test]
    fn empty_list_renders_tab_message() {
        let html = render(ApplicationStatus::OnHold, Vec::new());
        assert!(html.contains("保留中の申請はありません"));
        assert!(html.contains("fas fa-pause-circle"));
        let html = render(ApplicationStatus::Approved, Vec::new());
        assert!(html.contains("承認済みの申請はありません"));
    }
}
