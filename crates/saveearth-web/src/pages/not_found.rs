use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gradient-to-b from-emerald-50 via-sky-50 to-indigo-50 text-slate-900 text-center px-6">
            <h1 class="text-6xl font-extrabold mb-6">"Uh oh!"</h1>
            <p class="text-xl text-slate-700 mb-8">
                "The page you are looking for couldn't be found."
            </p>
            <a
                href="/"
                class="border border-emerald-600 text-emerald-700 hover:bg-emerald-50 px-8 py-3 rounded-xl font-medium transition"
            >
                "Back to the main page"
            </a>
        </div>
    }
}
