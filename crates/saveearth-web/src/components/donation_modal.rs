use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use saveearth::{donation, DonationForm, Notify, SubmitState};

use super::button::Button;

/// Browser-alert notifier, the stand-in for a real post-donation
/// notification channel.
#[derive(Debug, Clone, Copy, Default)]
struct AlertNotify;

impl Notify for AlertNotify {
    fn notify(&self, message: &str) {
        let _ = window().alert_with_message(message);
    }
}

/// Overlay dialog collecting a donation.
///
/// Name and email are uncontrolled `required` inputs; only the amount is
/// mirrored into the [`DonationForm`]. On submit the form flips to its
/// pending state, holds the thank-you panel for [`donation::ACK_DELAY`],
/// then acknowledges: amount cleared, dialog closed, notice raised once.
/// Closing by hand first cancels the held timeout, so a dismissed dialog
/// never comes back to life.
#[component]
pub fn DonationModal(open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(DonationForm::new());
    let hold = StoredValue::new(None::<TimeoutHandle>);

    let clear_hold = move || {
        if let Some(handle) = hold.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    let close = move || {
        clear_hold();
        form.try_update(|form| form.cancel());
        on_close.run(());
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let accepted = form
            .try_update(|form| form.submit().is_ok())
            .unwrap_or(false);
        if !accepted {
            return;
        }
        let handle = set_timeout_with_handle(
            move || {
                hold.try_update_value(|slot| *slot = None);
                form.try_update(|form| form.acknowledge(&AlertNotify));
                on_close.run(());
            },
            donation::ACK_DELAY,
        );
        if let Ok(handle) = handle {
            hold.set_value(Some(handle));
        }
    };

    // The root can take the overlay away (e.g. by opening the other
    // dialog); treat that like a manual close so no timer survives it.
    Effect::new(move |_| {
        if !open.get() {
            clear_hold();
            form.try_update(|form| form.cancel());
        }
    });

    on_cleanup(clear_hold);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 backdrop-blur-sm">
                <div class="bg-white rounded-2xl p-8 w-96 shadow-2xl relative">
                    <button
                        class="absolute top-4 right-4 text-slate-500 hover:text-slate-800"
                        aria-label="Close"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                    <Show
                        when=move || form.with(|form| form.state() == SubmitState::Editing)
                        fallback=|| {
                            view! {
                                <div class="text-center py-10 text-green-600 font-bold text-lg">
                                    "Thank you! 💚"
                                </div>
                            }
                        }
                    >
                        <form class="space-y-4" on:submit=submit>
                            <h2 class="text-xl font-bold">"Support Our Planet 🌍"</h2>
                            <input
                                type="text"
                                required
                                placeholder="Your Name"
                                class="w-full border rounded-xl p-2"
                            />
                            <input
                                type="email"
                                required
                                placeholder="Email"
                                class="w-full border rounded-xl p-2"
                            />
                            <input
                                type="number"
                                required
                                placeholder="Donation Amount"
                                class="w-full border rounded-xl p-2"
                                prop:value=move || form.with(|form| form.amount().to_owned())
                                on:input=move |ev| {
                                    form.try_update(|form| form.set_amount(event_target_value(&ev)));
                                }
                            />
                            <Button>"Donate"</Button>
                        </form>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
