//! Preview Drawer
//!
//! Side panel with a component's details and a highlighted usage snippet.

use leptos::prelude::*;
use leptos::task::spawn_local;

use showcase_core::seed::usage_snippet;
use showcase_core::{CategorySet, ComponentDemo};

use crate::commands::copy_text;
use crate::context::use_app_context;
use crate::markdown::{first_code_block, parse_markdown};

#[component]
pub fn PreviewDrawer(selected: RwSignal<Option<ComponentDemo>>) -> impl IntoView {
    let ctx = use_app_context();
    let close = move || selected.set(None);

    move || {
        selected.get().map(|demo| {
            let snippet = usage_snippet(&demo);
            let html = parse_markdown(&snippet);
            let code = StoredValue::new(first_code_block(&snippet).unwrap_or(snippet));

            let copy = move |_| {
                let text = code.get_value();
                spawn_local(async move {
                    match copy_text(&text).await {
                        Ok(()) => ctx.notify("Snippet copied"),
                        Err(e) => ctx.notify(format!("Copy failed: {}", e)),
                    }
                });
            };

            view! {
                <div class="drawer-backdrop" on:click=move |_| close()></div>
                <aside
                    class="drawer"
                    role="dialog"
                    aria-modal="true"
                    aria-label=format!("{} preview", demo.name)
                    on:keydown=move |ev| {
                        if ev.key() == "Escape" {
                            close();
                        }
                    }
                >
                    <header class="drawer-head">
                        <h2>{demo.name.clone()}</h2>
                        <button class="btn" aria-label="Close preview" on:click=move |_| close()>"×"</button>
                    </header>
                    <p class="muted">{demo.category.label()}</p>
                    {demo.description.clone().map(|d| view! { <p>{d}</p> })}
                    <h3>"Usage"</h3>
                    <div class="snippet" inner_html=html></div>
                    <button class="btn primary" on:click=copy>"Copy snippet"</button>
                </aside>
            }
        })
    }
}
