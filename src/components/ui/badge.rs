use leptos::prelude::*;

use super::utils::cn;

const BADGE_BASE: &str = "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "border-transparent bg-primary text-primary-foreground shadow",
            BadgeVariant::Secondary => "border-transparent bg-secondary text-secondary-foreground",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=cn([BADGE_BASE, variant.class(), class.as_str()])>{children()}</div> }
}
