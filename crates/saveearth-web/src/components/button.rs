use leptos::prelude::*;

/// Visual style of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled emerald action button.
    #[default]
    Solid,
    /// Outlined variant for secondary actions.
    Ghost,
}

/// Styled clickable control.
///
/// Stateless; clicks go straight through `on_press`. Inside a form the
/// button keeps the browser's default submit behavior, so form buttons
/// take no `on_press` at all.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let styles = match variant {
        ButtonVariant::Solid => "bg-emerald-600 text-white hover:bg-emerald-700",
        ButtonVariant::Ghost => "border border-emerald-600 text-emerald-700 hover:bg-emerald-50",
    };

    view! {
        <button
            class=format!(
                "px-6 py-3 rounded-xl font-medium transition duration-200 animate-pulse cursor-pointer {styles}"
            )
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
