use leptos::prelude::*;
use saveearth::{countup, format_count, CountUp, Stat};

/// Animated counter tile for one statistic.
///
/// A [`CountUp`] ramp ticks at 60 Hz behind a signal holding the value on
/// display. The interval is cleared as soon as the ramp lands on its
/// target, and again on teardown in case the tile goes away mid-ramp; a
/// tick that fires after disposal finds the stored ramp gone and does
/// nothing.
#[component]
pub fn StatCounter(stat: Stat) -> impl IntoView {
    let (shown, set_shown) = signal(0u64);
    let ramp = StoredValue::new(CountUp::with_default_duration(stat.target));
    let pacer = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = pacer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || {
                let Some(value) = ramp.try_update_value(|ramp| ramp.tick()) else {
                    return;
                };
                set_shown.try_set(value);
                if ramp.try_with_value(CountUp::is_done).unwrap_or(true) {
                    stop();
                }
            },
            countup::TICK,
        );
        if let Ok(handle) = handle {
            pacer.set_value(Some(handle));
        }
    });

    on_cleanup(stop);

    view! {
        <div class="bg-white/60 backdrop-blur rounded-2xl p-4 shadow-lg text-center transition duration-200 hover:scale-105">
            <div class="stat-value text-2xl font-bold">{move || format_count(shown.get())}</div>
            <div class="text-sm text-slate-600">{stat.label}</div>
        </div>
    }
}
