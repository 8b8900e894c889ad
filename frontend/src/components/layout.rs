use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub view: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        view: "dashboard",
        label: "ダッシュボード",
        icon: "fas fa-home",
    },
    NavItem {
        view: "new-business-trip",
        label: "出張申請",
        icon: "fas fa-plane",
    },
    NavItem {
        view: "new-expense",
        label: "経費申請",
        icon: "fas fa-receipt",
    },
    NavItem {
        view: "approvals",
        label: "承認一覧",
        icon: "fas fa-clipboard-check",
    },
    NavItem {
        view: "settings",
        label: "設定",
        icon: "fas fa-cog",
    },
];

const NAV_LINK_CLASS: &str = "w-full flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:text-gray-900 hover:bg-gray-100";

/// Fixed on desktop; slides in on mobile while `open` is true.
#[component]
pub fn Sidebar(
    #[prop(into)] open: MaybeSignal<bool>,
    on_navigate: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || open.get());
    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-30 bg-black/40 lg:hidden"
                on:click=move |_| on_close.call(())
            ></div>
        </Show>
        <aside class=move || {
            format!(
                "fixed inset-y-0 left-0 z-40 w-64 bg-white border-r border-gray-200 transform transition-transform duration-200 lg:translate-x-0 lg:static {}",
                if open.get() { "translate-x-0" } else { "-translate-x-full" },
            )
        }>
            <div class="h-16 flex items-center justify-between px-4 border-b border-gray-200">
                <span class="text-lg font-semibold text-gray-900">"申請・承認"</span>
                <button
                    type="button"
                    class="lg:hidden p-2 rounded-md text-gray-500 hover:bg-gray-100"
                    on:click=move |_| on_close.call(())
                >
                    <span class="sr-only">"メニューを閉じる"</span>
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <nav class="px-3 py-4 space-y-1">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let target = item.view;
                        view! {
                            <button
                                type="button"
                                class=NAV_LINK_CLASS
                                on:click=move |_| on_navigate.call(target.to_string())
                            >
                                <i class=item.icon></i>
                                <span>{item.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[component]
pub fn TopBar(#[prop(into)] title: String, on_toggle_sidebar: Callback<()>) -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="px-4 sm:px-6 lg:px-8 h-16 flex items-center gap-3">
                <button
                    type="button"
                    class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-gray-500 hover:text-gray-900 hover:bg-gray-100"
                    on:click=move |_| on_toggle_sidebar.call(())
                >
                    <span class="sr-only">"メニューを開く"</span>
                    <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
                <h1 class="text-xl font-semibold text-gray-900">{title}</h1>
            </div>
        </header>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-2">
            <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
