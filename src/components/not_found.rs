use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main id="main" class="not-found">
            <h1>"Page not found"</h1>
            <p class="muted">"That route doesn't exist."</p>
            <A href="/showcase">"Back to the showcase"</A>
        </main>
    }
}
