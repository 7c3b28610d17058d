use leptos::prelude::*;
use saveearth::CardContent;

/// Clickable feature panel: icon, title, short description.
///
/// The whole surface is the hit target; clicking hands the card's own
/// content back to the root so it can open the detail viewer.
#[component]
pub fn Card(
    icon: &'static str,
    content: CardContent,
    on_select: Callback<CardContent>,
) -> impl IntoView {
    view! {
        <div
            class="feature-card bg-white/60 backdrop-blur rounded-2xl p-6 shadow-lg flex flex-col gap-4 cursor-pointer transition duration-200 hover:scale-105 hover:shadow-2xl"
            on:click=move |_| on_select.run(content)
        >
            <div class="p-3 rounded-lg bg-white/40 inline-flex self-start">
                <span class="text-2xl text-emerald-600 animate-spin-slow">{icon}</span>
            </div>
            <div class="font-semibold">{content.title}</div>
            <div class="text-slate-600 text-sm">{content.description}</div>
        </div>
    }
}
