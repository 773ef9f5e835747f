//! Showcase Home
//!
//! Grid of demo tiles, searchable and filterable by category. The query and
//! category live in the URL.

use leptos::prelude::*;
use leptos_router::components::A;

use showcase_core::seed::{self, REPO_URL};
use showcase_core::view_state::Field;
use showcase_core::{derive_view, CategoryCounts, CategorySet, Tile, TileCategory};

use crate::commands::use_url_view_state;
use crate::components::HighlightText;

#[derive(Clone, PartialEq)]
struct TileView {
    tiles: Vec<Tile>,
    counts: CategoryCounts<TileCategory>,
}

#[component]
fn TileCard(tile: Tile, query: Signal<String>) -> impl IntoView {
    let accent = if tile.category == TileCategory::DataViz { "tile-icon secondary" } else { "tile-icon" };

    view! {
        <A href=tile.href.clone()>
            <article class="card tile">
                <header class="tile-head">
                    <span class=accent aria-hidden="true">{tile.title.chars().next().unwrap_or('•').to_string()}</span>
                    <h3><HighlightText text=tile.title.clone() query=query /></h3>
                    {tile.status.map(|s| view! { <span class=format!("status {}", s.as_str().to_lowercase())>{s.as_str()}</span> })}
                    <span class="spacer"></span>
                    <span class="muted small">{tile.category.label()}</span>
                </header>
                <p class="muted"><HighlightText text=tile.desc.clone() query=query /></p>
                <ul class="chips">
                    {tile.tags.into_iter().map(|t| view! { <li class="chip">{t}</li> }).collect_view()}
                </ul>
            </article>
        </A>
    }
}

#[component]
pub fn ShowcaseHome() -> impl IntoView {
    let tiles = StoredValue::new(seed::tiles());
    let url = use_url_view_state::<TileCategory>();
    let query = Signal::derive(move || url.state.get().query);

    let view_model = Memo::new(move |_| {
        let state = url.state.get();
        tiles.with_value(|all| {
            let derived = derive_view(all, &state);
            TileView {
                tiles: derived.items.into_iter().cloned().collect(),
                counts: derived.counts,
            }
        })
    });

    let category_button = move |category: Option<TileCategory>| {
        let label = category.map(|c| c.label()).unwrap_or("All");
        let active = move || url.state.get().category == category;
        view! {
            <button
                class=move || if active() { "seg active" } else { "seg" }
                aria-pressed=move || active().to_string()
                on:click=move |_| url.update(|s| s.set_category(category))
            >
                {label}
                <span class="count">{move || view_model.with(|v| v.counts.get(category))}</span>
            </button>
        }
    };

    view! {
        <div class="page-head">
            <div>
                <h1>"Showcase"</h1>
                <p class="muted">"A tour of production-ready UI surfaces."</p>
            </div>
            <a class="btn" href=REPO_URL target="_blank" rel="noreferrer">"View Repo"</a>
        </div>

        <div class="toolbar">
            <input
                type="search"
                placeholder="Search demos…"
                aria-label="Search demos"
                prop:value=query
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    url.update(|s| s.set(Field::Query, &value));
                }
            />
            <div class="segmented" role="group" aria-label="Category">
                {category_button(None)}
                {TileCategory::ALL.iter().map(|c| category_button(Some(*c))).collect_view()}
            </div>
        </div>

        <div class="tile-grid">
            {move || {
                let tiles = view_model.with(|v| v.tiles.clone());
                if tiles.is_empty() {
                    view! { <p class="empty">"No demos match."</p> }.into_any()
                } else {
                    tiles.into_iter()
                        .map(|t| view! { <TileCard tile=t query=query /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
