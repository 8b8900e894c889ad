use crate::pages::applications::{types::ApplicationStatus, utils::CardConfig};
use leptos::*;

#[component]
pub fn SummaryCards(
    cards: Signal<Vec<CardConfig>>,
    selected: Signal<ApplicationStatus>,
    on_select: Callback<ApplicationStatus>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
            {move || {
                cards
                    .get()
                    .into_iter()
                    .map(|card| view! { <SummaryCard card=card selected=selected on_select=on_select /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn SummaryCard(
    card: CardConfig,
    selected: Signal<ApplicationStatus>,
    on_select: Callback<ApplicationStatus>,
) -> impl IntoView {
    let status = card.status;
    let gradient = card.gradient_class();
    let ring = move || {
        if selected.get() == status {
            "ring-4 ring-offset-2 ring-blue-400 scale-[1.02]"
        } else {
            "hover:shadow-lg"
        }
    };
    view! {
        <button
            type="button"
            data-status=status.as_str()
            aria-pressed=move || (selected.get() == status).to_string()
            class=move || {
                format!(
                    "relative overflow-hidden rounded-2xl p-6 text-left text-white shadow transition-all duration-200 {} {}",
                    gradient,
                    ring(),
                )
            }
            on:click=move |_| on_select.call(status)
        >
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium opacity-90">{card.title}</p>
                    <p class="mt-2 text-3xl font-bold">{format!("{} 件", card.count)}</p>
                </div>
                <i class=format!("{} text-4xl opacity-80", card.icon.fa_class()) data-icon=card.icon.token()></i>
            </div>
        </button>
    }
}
