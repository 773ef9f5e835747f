//! Component Card
//!
//! One gallery entry in grid or list layout, with favorite toggle and tag
//! chips that feed the tag filter.

use leptos::prelude::*;

use showcase_core::{CategorySet, ComponentDemo};

use crate::components::HighlightText;
use crate::context::use_app_context;
use crate::store::{store_toggle_favorite, use_app_store, AppStateStoreFields};

#[component]
pub fn ComponentCard(
    demo: ComponentDemo,
    query: Signal<String>,
    #[prop(into)] selected_tags: Signal<Vec<String>>,
    #[prop(into)] on_tag: Callback<String>,
    #[prop(into)] on_preview: Callback<ComponentDemo>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = StoredValue::new(demo.id.clone());
    let is_favorite = move || id.with_value(|id| store.favorites().read().contains(id));
    let toggle_favorite = move |_| {
        let result = id.with_value(|id| store_toggle_favorite(&store, id));
        if let Err(e) = result {
            ctx.notify(format!("Couldn't save favorites: {}", e));
        }
    };

    let preview = StoredValue::new(demo.clone());
    let name = demo.name.clone();

    view! {
        <article class="card component-card">
            <header class="component-head">
                <h3>
                    <button class="link" on:click=move |_| on_preview.run(preview.get_value())>
                        <HighlightText text=demo.name.clone() query=query />
                    </button>
                </h3>
                {demo.status.map(|s| view! { <span class=format!("status {}", s.as_str().to_lowercase())>{s.as_str()}</span> })}
                <span class="spacer"></span>
                <button
                    class=move || if is_favorite() { "fav on" } else { "fav" }
                    aria-pressed=move || is_favorite().to_string()
                    aria-label=format!("Favorite {}", name)
                    on:click=toggle_favorite
                >
                    {move || if is_favorite() { "★" } else { "☆" }}
                </button>
            </header>
            <p class="muted small">
                {demo.category.label()}
                " · "
                {format!("{:?}", demo.complexity).to_lowercase()}
            </p>
            {demo.description.clone().map(|d| view! { <p class="muted">{d}</p> })}
            <ul class="chips">
                {demo
                    .tags
                    .iter()
                    .cloned()
                    .map(|tag| {
                        let label = tag.clone();
                        let pressed = {
                            let tag = tag.clone();
                            move || selected_tags.with(|s| s.contains(&tag))
                        };
                        view! {
                            <li>
                                <button
                                    class=move || if pressed() { "chip active" } else { "chip" }
                                    on:click=move |_| on_tag.run(tag.clone())
                                >
                                    "#"
                                    <HighlightText text=label query=query />
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
