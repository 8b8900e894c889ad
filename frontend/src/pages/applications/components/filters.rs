use crate::pages::applications::types::{DepartmentFilter, ALL_DEPARTMENTS};
use leptos::*;

#[component]
pub fn FilterBar(
    search_term: Signal<String>,
    department: Signal<DepartmentFilter>,
    departments: Signal<Vec<String>>,
    on_search: Callback<String>,
    on_department: Callback<DepartmentFilter>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-4 flex flex-col gap-3 md:flex-row md:items-center">
            <div class="relative flex-1">
                <i class="fas fa-search absolute left-3 top-1/2 -translate-y-1/2 text-gray-400"></i>
                <input
                    type="text"
                    class="w-full border rounded pl-9 pr-3 py-2 text-sm"
                    placeholder="申請ID・件名・申請者で検索"
                    prop:value=move || search_term.get()
                    on:input=move |ev| on_search.call(event_target_value(&ev))
                />
            </div>
            <div class="flex items-center gap-2">
                <select
                    class="border rounded px-2 py-2 text-sm"
                    prop:value=move || department.with(|d| d.as_select_value().to_string())
                    on:change=move |ev| {
                        on_department.call(DepartmentFilter::from_select_value(&event_target_value(&ev)))
                    }
                >
                    <option value=ALL_DEPARTMENTS>{"全部署"}</option>
                    {move || {
                        departments
                            .get()
                            .into_iter()
                            .map(|name| {
                                let label = name.clone();
                                view! { <option value=name>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <button
                    type="button"
                    class="text-sm text-gray-700 underline"
                    on:click=move |_| on_clear.call(())
                >
                    {"クリア"}
                </button>
            </div>
        </div>
    }
}
