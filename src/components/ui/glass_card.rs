use leptos::html::Div;
use leptos::prelude::*;

use super::utils::cn;

const GLASS_CARD_BASE: &str = "rounded-xl border bg-white/10 text-card-foreground shadow backdrop-blur-md";

/// Card with a frosted surface. Forwards `card_ref` to its root node so a drag engine can track it.
#[component]
pub fn GlassCard(
    card_ref: NodeRef<Div>,
    #[prop(into)] class: Signal<String>,
    #[prop(into)] style: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            node_ref=card_ref
            class=move || cn([GLASS_CARD_BASE, class.get().as_str()])
            style=move || style.get()
        >
            {children()}
        </div>
    }
}
