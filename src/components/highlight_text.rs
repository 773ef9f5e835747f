//! Highlight Text Component
//!
//! Renders a value with the first match of the search query in a `<mark>`.

use leptos::prelude::*;
use showcase_core::highlight;

#[component]
pub fn HighlightText(
    #[prop(into)] text: String,
    #[prop(into)] query: Signal<String>,
) -> impl IntoView {
    move || {
        let q = query.get();
        let parts = highlight(&text, &q);
        if parts.is_match() {
            view! {
                <span>
                    {parts.prefix.to_string()}
                    <mark class="hl">{parts.matched.to_string()}</mark>
                    {parts.suffix.to_string()}
                </span>
            }
            .into_any()
        } else {
            view! { <span>{text.clone()}</span> }.into_any()
        }
    }
}
