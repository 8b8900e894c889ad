use crate::pages::applications::utils::CardIcon;
use leptos::*;

/// Placeholder shown when a status tab has nothing left after filtering.
#[component]
pub fn EmptyState(#[prop(into)] message: String, icon: CardIcon) -> impl IntoView {
    view! {
        <div
            class="flex flex-col items-center gap-3 py-12 px-4 rounded-lg border-2 border-dashed border-gray-200 bg-gray-50"
            data-icon=icon.token()
        >
            <i class=format!("{} text-3xl text-gray-300", icon.fa_class())></i>
            <p class="text-sm font-medium text-gray-500">{message}</p>
        </div>
    }
}
