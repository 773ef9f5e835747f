//! Components Gallery
//!
//! Searchable, filterable, sortable component list. Every control writes to
//! the URL; the list is re-derived from the URL on each change.

use leptos::prelude::*;

use showcase_core::view_state::{Field, SortKey, ViewMode};
use showcase_core::{
    derive_view, CategoryCounts, CategorySet, ComponentCategory, ComponentDemo, FetchState,
    RequestTracker,
};

use crate::commands::{list_components, load_into, use_url_view_state};
use crate::components::{ComponentCard, PreviewDrawer};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, PartialEq)]
struct GalleryView {
    items: Vec<ComponentDemo>,
    all_tags: Vec<String>,
    counts: CategoryCounts<ComponentCategory>,
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let url = use_url_view_state::<ComponentCategory>();

    let components = RwSignal::new(FetchState::<Vec<ComponentDemo>>::Idle);
    let tracker = StoredValue::new(RequestTracker::new());
    let load = move || load_into(tracker, components, list_components(String::new(), ctx.api()));
    load();

    let selected = RwSignal::new(None::<ComponentDemo>);
    let favorites_only = RwSignal::new(false);

    let query = Signal::derive(move || url.state.get().query);
    let selected_tags = Signal::derive(move || url.state.get().tags);

    let view_model = Memo::new(move |_| {
        let state = url.state.get();
        components.with(|fetched| {
            fetched.ready().map(|all| {
                let derived = derive_view(all, &state);
                GalleryView {
                    items: derived.items.into_iter().cloned().collect(),
                    all_tags: derived.all_tags,
                    counts: derived.counts,
                }
            })
        })
    });

    let visible = move || {
        let only_favs = favorites_only.get();
        let favorites = store.favorites().get();
        view_model
            .get()
            .map(|v| v.items)
            .unwrap_or_default()
            .into_iter()
            .filter(|c| !only_favs || favorites.contains(&c.id))
            .collect::<Vec<_>>()
    };

    let on_tag = Callback::new(move |tag: String| url.update(|s| s.toggle_tag(&tag)));
    let on_preview = Callback::new(move |demo: ComponentDemo| selected.set(Some(demo)));

    view! {
        <div class="page-head">
            <div>
                <h1>"Components"</h1>
                <p class="muted">"Reusable UI, themed and accessible."</p>
            </div>
            <div class="actions">
                <label class="switch">
                    <input
                        type="checkbox"
                        prop:checked=move || ctx.mock_failure.get()
                        on:change=move |ev| ctx.mock_failure.set(event_target_checked(&ev))
                    />
                    "Simulate API failure"
                </label>
                <button
                    class="btn"
                    disabled=move || components.with(|c| c.is_loading())
                    on:click=move |_| load()
                >
                    "Refresh"
                </button>
            </div>
        </div>

        <div class="toolbar" role="search">
            <input
                type="search"
                placeholder="Search components, categories, tags…"
                aria-label="Search components"
                prop:value=query
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    url.update(|s| s.set(Field::Query, &value));
                }
            />
            <select
                aria-label="Category"
                prop:value=move || url.state.with(|s| s.get(Field::Category))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    url.update(|s| s.set(Field::Category, &value));
                }
            >
                <option value="All">
                    {move || format!("All ({})", view_model.with(|v| v.as_ref().map_or(0, |v| v.counts.all)))}
                </option>
                {ComponentCategory::ALL
                    .iter()
                    .map(|c| {
                        let c = *c;
                        view! {
                            <option value=c.label()>
                                {move || {
                                    let n = view_model.with(|v| v.as_ref().map_or(0, |v| v.counts.get(Some(c))));
                                    format!("{} ({})", c.label(), n)
                                }}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <select
                aria-label="Sort"
                prop:value=move || url.state.with(|s| s.get(Field::Sort))
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    url.update(|s| s.set(Field::Sort, &value));
                }
            >
                {SortKey::ALL
                    .into_iter()
                    .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                    .collect_view()}
            </select>
            <div class="segmented" role="group" aria-label="Layout">
                {[ViewMode::Grid, ViewMode::List]
                    .into_iter()
                    .map(|mode| {
                        let active = move || url.state.with(|s| s.view == mode);
                        view! {
                            <button
                                class=move || if active() { "seg active" } else { "seg" }
                                aria-pressed=move || active().to_string()
                                on:click=move |_| url.update(|s| s.set(Field::View, mode.as_str()))
                            >
                                {mode.as_str()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <label class="switch">
                <input
                    type="checkbox"
                    prop:checked=move || favorites_only.get()
                    on:change=move |ev| favorites_only.set(event_target_checked(&ev))
                />
                {move || format!("Favorites ({})", store.favorites().read().len())}
            </label>
        </div>

        <div class="tag-bar" role="group" aria-label="Tags">
            {move || {
                view_model
                    .with(|v| v.as_ref().map(|v| v.all_tags.clone()).unwrap_or_default())
                    .into_iter()
                    .map(|tag| {
                        let pressed = {
                            let tag = tag.clone();
                            Memo::new(move |_| selected_tags.with(|s| s.contains(&tag)))
                        };
                        let label = format!("#{}", tag);
                        view! {
                            <button
                                class=move || if pressed.get() { "chip active" } else { "chip" }
                                aria-pressed=move || pressed.get().to_string()
                                on:click=move |_| on_tag.run(tag.clone())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <Show when=move || !selected_tags.with(|s| s.is_empty())>
                <button class="btn small" on:click=move |_| url.update(|s| s.clear_tags())>
                    "Clear tags"
                </button>
            </Show>
        </div>

        {move || match components.get() {
            FetchState::Idle | FetchState::Loading => {
                view! { <div class="card skeleton" aria-busy="true">"Loading components…"</div> }.into_any()
            }
            FetchState::Failed(e) => {
                view! {
                    <div class="card error" role="alert">
                        <p>{format!("Couldn't load components: {}", e)}</p>
                        <button class="btn" on:click=move |_| load()>"Retry"</button>
                    </div>
                }
                    .into_any()
            }
            FetchState::Ready(all) => {
                let items = visible();
                let total = all.len();
                let layout = if url.state.with(|s| s.view == ViewMode::List) {
                    "component-list"
                } else {
                    "component-grid"
                };
                view! {
                    <p class="muted small" aria-live="polite">
                        {format!("Showing {} of {}", items.len(), total)}
                    </p>
                    {if items.is_empty() {
                        view! { <p class="empty">"No components match these filters."</p> }.into_any()
                    } else {
                        view! {
                            <div class=layout>
                                {items
                                    .into_iter()
                                    .map(|demo| {
                                        view! {
                                            <ComponentCard
                                                demo=demo
                                                query=query
                                                selected_tags=selected_tags
                                                on_tag=on_tag
                                                on_preview=on_preview
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }}
                }
                    .into_any()
            }
        }}

        <PreviewDrawer selected=selected />
    }
}
