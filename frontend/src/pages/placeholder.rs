use leptos::*;
use leptos_router::*;

#[component]
pub fn PlaceholderPage() -> impl IntoView {
    let location = use_location();
    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="bg-white shadow rounded-lg p-6 text-center space-y-3">
                <p class="text-sm text-gray-500">{move || location.pathname.get()}</p>
                <p class="text-base font-semibold text-gray-900">{"この画面は準備中です。"}</p>
                <a href="/dashboard" class="text-sm text-blue-600 hover:underline">
                    {"ダッシュボードへ戻る"}
                </a>
            </div>
        </div>
    }
}
