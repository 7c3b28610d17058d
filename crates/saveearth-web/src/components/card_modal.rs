use leptos::prelude::*;
use saveearth::CardContent;

/// Read-only overlay showing the clicked card's content verbatim.
#[component]
pub fn CardModal(content: Signal<Option<CardContent>>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || content.get().is_some()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 backdrop-blur-sm">
                <div class="bg-white rounded-2xl p-8 w-96 shadow-2xl relative">
                    <button
                        class="absolute top-4 right-4 text-slate-500 hover:text-slate-800"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                    <h2 class="text-xl font-bold mb-2">
                        {move || content.get().map(|content| content.title)}
                    </h2>
                    <p class="text-slate-700">
                        {move || content.get().map(|content| content.description)}
                    </p>
                </div>
            </div>
        </Show>
    }
}
