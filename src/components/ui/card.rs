use leptos::prelude::*;

use super::utils::cn;

#[component]
pub fn CardHeader(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=cn(["flex flex-col space-y-1.5 p-6", class.as_str()])>{children()}</div> }
}

#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=cn(["p-6 pt-0", class.as_str()])>{children()}</div> }
}
