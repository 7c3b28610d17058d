use leptos::prelude::*;

/// Page footer: brand block and copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 bg-white/80 border-t border-slate-200 p-6 mt-12">
            <div class="max-w-7xl mx-auto px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <span class="text-3xl">"🌍"</span>
                    <div>
                        <div class="font-semibold">"Save Earth — Save Life"</div>
                        <div class="text-sm text-slate-600">"Products and projects for a greener planet."</div>
                    </div>
                </div>
                <div class="text-sm text-slate-600">
                    "© " {js_sys::Date::new_0().get_full_year()} " Save Earth — Save Life."
                </div>
            </div>
        </footer>
    }
}
