use leptos::prelude::*;
use saveearth::{Leaf, Star};

/// Falling-leaf decoration layer.
///
/// Absolutely positioned and `pointer-events-none`, so it can never affect
/// layout or steal a click. Each leaf carries its pre-drawn parameters as
/// inline style; the movement itself is the `leaf-fall` keyframes from the
/// page stylesheet, looping forever.
#[component]
pub fn LeafField(leaves: Vec<Leaf>) -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 overflow-hidden" aria-hidden="true">
            {leaves
                .into_iter()
                .map(|leaf| {
                    let style = format!(
                        "width: {size:.1}px; height: {size:.1}px; left: {x:.2}%; top: -10%; \
                         --leaf-rotate: {rotate:.1}deg; \
                         animation: leaf-fall {duration:.2}s linear {delay:.2}s infinite;",
                        size = leaf.size,
                        x = leaf.x,
                        rotate = leaf.rotate,
                        duration = leaf.duration,
                        delay = leaf.delay,
                    );
                    view! { <div class="leaf absolute bg-emerald-400 rounded-full opacity-80" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}

/// Twinkling-star decoration layer; same rules as [`LeafField`], pulsing
/// in place via the `star-twinkle` keyframes.
#[component]
pub fn StarField(stars: Vec<Star>) -> impl IntoView {
    view! {
        <div class="pointer-events-none absolute inset-0 overflow-hidden" aria-hidden="true">
            {stars
                .into_iter()
                .map(|star| {
                    let style = format!(
                        "width: {size:.1}px; height: {size:.1}px; left: {x:.2}%; top: {y:.2}%; \
                         animation: star-twinkle {duration:.2}s ease-in-out {delay:.2}s infinite;",
                        size = star.size,
                        x = star.x,
                        y = star.y,
                        duration = star.duration,
                        delay = star.delay,
                    );
                    view! { <div class="star absolute bg-white rounded-full" style=style></div> }
                })
                .collect_view()}
        </div>
    }
}
