use leptos::html;
use leptos::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use saveearth::{scatter_leaves, scatter_stars, CardContent, Overlay, Stat};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{
    button::{Button, ButtonVariant},
    card::Card,
    card_modal::CardModal,
    donation_modal::DonationModal,
    footer::Footer,
    particles::{LeafField, StarField},
    stats::StatCounter,
};

const STATS: [Stat; 3] = [
    Stat {
        label: "Trees Planted",
        target: 124_587,
    },
    Stat {
        label: "Eco Events",
        target: 842,
    },
    Stat {
        label: "Waste Recycled (%)",
        target: 72,
    },
];

const CARDS: [(&str, CardContent); 3] = [
    (
        "🌳",
        CardContent {
            title: "Join the Community",
            description: "Participate in tree-planting campaigns that transform cities and rural areas.",
        },
    ),
    (
        "🌐",
        CardContent {
            title: "Climate Programs",
            description: "Support renewable energy initiatives and ecosystem restoration.",
        },
    ),
    (
        "💚",
        CardContent {
            title: "Sustainable Lifestyle",
            description: "Small daily habits that make a big difference for our planet.",
        },
    ),
];

/// The landing page. Owns all shared state: the single [`Overlay`] value
/// driving both dialogs, and the particle parameters drawn once at mount.
/// Children only talk back through callbacks.
#[component]
pub fn Home() -> impl IntoView {
    // Decorations are drawn here, once, from a seeded RNG; the field
    // components just render whatever they are handed.
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
    let leaves = scatter_leaves(&mut rng);
    let stars = scatter_stars(&mut rng);

    let overlay = RwSignal::new(Overlay::Closed);
    let features_section = NodeRef::<html::Section>::new();

    let learn_more = Callback::new(move |()| {
        if let Some(section) = features_section.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });
    let support_now = Callback::new(move |()| overlay.set(Overlay::Donation));
    let open_card = Callback::new(move |content| overlay.set(Overlay::Detail(content)));
    let close_overlay = Callback::new(move |()| overlay.update(Overlay::dismiss));

    view! {
        <div class="min-h-screen relative overflow-hidden bg-gradient-to-b from-emerald-50 via-sky-50 to-indigo-50 text-slate-900">
            <LeafField leaves=leaves />
            <StarField stars=stars />

            // Hero Section
            <header class="relative z-10 overflow-hidden">
                <div class="max-w-7xl mx-auto px-6 lg:px-8 py-12 lg:py-20">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
                        <div class="space-y-6">
                            <h1 class="text-5xl md:text-6xl font-extrabold leading-tight">
                                "Save Earth — Save Life"
                            </h1>
                            <p class="text-lg md:text-xl text-slate-700 max-w-xl">
                                "A luxurious, inspiring site to motivate global citizens to act for a greener planet. Plant trees, reduce pollution, support communities."
                            </p>
                            <div class="flex flex-wrap gap-4 mt-6">
                                <Button on_press=support_now>"Support Now"</Button>
                                <Button variant=ButtonVariant::Ghost on_press=learn_more>
                                    "Learn More"
                                </Button>
                            </div>
                        </div>

                        <div class="flex items-center justify-center relative w-full max-w-md">
                            <div class="rounded-3xl shadow-2xl overflow-hidden border border-white/30 bg-gradient-to-br from-white/70 to-emerald-50 p-6">
                                <div
                                    class="w-full h-80 md:h-96 rounded-2xl bg-center bg-cover shadow-lg border border-white/30"
                                    style="background-image: url('/1.jpg')"
                                ></div>
                                <div class="mt-4 flex items-center justify-between">
                                    <div>
                                        <div class="text-lg font-semibold">"Protect Our Blue Marble"</div>
                                        <div class="text-sm text-slate-600">"Join local projects near you."</div>
                                    </div>
                                    <span class="text-3xl text-emerald-600 animate-spin-slow">"✨"</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </header>

            <main class="relative z-10 max-w-7xl mx-auto px-6 lg:px-8 py-16 space-y-16">
                // Stats
                <div class="grid grid-cols-3 gap-4 md:gap-6">
                    {STATS
                        .into_iter()
                        .map(|stat| view! { <StatCounter stat=stat /> })
                        .collect_view()}
                </div>

                // Feature cards
                <section node_ref=features_section class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {CARDS
                        .into_iter()
                        .map(|(icon, content)| {
                            view! { <Card icon=icon content=content on_select=open_card /> }
                        })
                        .collect_view()}
                </section>

                // Call to action
                <section class="rounded-2xl p-8 bg-gradient-to-r from-emerald-50 to-sky-50 shadow-lg flex flex-col md:flex-row items-center justify-between">
                    <div>
                        <h3 class="text-2xl font-bold">"A Better Future Starts Today"</h3>
                        <p class="mt-2 text-slate-700">
                            "Your support directly contributes to real environmental change."
                        </p>
                    </div>
                    <div class="mt-6 md:mt-0">
                        <Button on_press=support_now>"Donate — Support"</Button>
                    </div>
                </section>
            </main>

            <Footer />

            <DonationModal
                open=Signal::derive(move || overlay.with(Overlay::is_donation))
                on_close=close_overlay
            />
            <CardModal
                content=Signal::derive(move || overlay.with(Overlay::detail))
                on_close=close_overlay
            />
        </div>
    }
}
