//! Theming Playground
//!
//! Edits the brand CSS variables live. Every accepted change is applied to
//! the document root and persisted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use showcase_core::theme::{ThemeVars, RADIUS_MAX, VAR_PRIMARY, VAR_RADIUS, VAR_SECONDARY};
use showcase_core::ThemeError;

use crate::commands::{copy_text, read_css_var};
use crate::components::ThemeModeToggle;
use crate::context::use_app_context;
use crate::store::{store_reset_theme, store_update_theme, use_app_store, AppStateStoreFields};

type ColorSetter = fn(&mut ThemeVars, &str) -> Result<(), ThemeError>;

#[component]
fn ColorInput(
    label: &'static str,
    id: &'static str,
    read: fn(&ThemeVars) -> String,
    write: ColorSetter,
) -> impl IntoView {
    let store = use_app_store();
    let error = RwSignal::new(None::<String>);
    let draft = RwSignal::new(store.theme().with_untracked(|v| read(v)));

    // Keep the text box in sync with resets and picker changes
    Effect::new(move |_| draft.set(store.theme().with(|v| read(v))));

    let commit = move |value: String| {
        match store_update_theme(&store, |vars| write(vars, &value)) {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(e)),
        }
    };

    view! {
        <div class="field">
            <label for=id>{label}</label>
            <div class="color-row">
                <input
                    type="color"
                    aria-label=format!("{} picker", label)
                    prop:value=move || store.theme().with(|v| read(v)).to_lowercase()
                    on:input=move |ev| commit(event_target_value(&ev))
                />
                <input
                    id=id
                    type="text"
                    aria-invalid=move || error.with(|e| e.is_some()).to_string()
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:change=move |ev| commit(event_target_value(&ev))
                />
            </div>
            <p class="field-error" role="alert">{move || error.get()}</p>
        </div>
    }
}

#[component]
pub fn ThemingPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let css = move || store.theme().with(|v| v.css_block());

    // Computed values as the browser sees them, refreshed after each change
    let live = Memo::new(move |_| {
        store.theme().track();
        [VAR_PRIMARY, VAR_SECONDARY, VAR_RADIUS]
            .into_iter()
            .map(|name| (name, read_css_var(name).unwrap_or_else(|| "unset".to_string())))
            .collect::<Vec<_>>()
    });

    let copy = move |_| {
        let text = css();
        spawn_local(async move {
            match copy_text(&text).await {
                Ok(()) => ctx.notify("CSS variables copied"),
                Err(e) => ctx.notify(format!("Copy failed: {}", e)),
            }
        });
    };

    let reset = move |_| {
        if let Err(e) = store_reset_theme(&store) {
            ctx.notify(format!("Couldn't save theme: {}", e));
        }
    };

    view! {
        <div class="page-head">
            <div>
                <h1>"Theming"</h1>
                <p class="muted">"Tokens and dark / light in one place."</p>
            </div>
            <ThemeModeToggle />
        </div>

        <div class="theming-grid">
            <section class="card" aria-labelledby="tokens-title">
                <h2 id="tokens-title">"Tokens"</h2>
                <ColorInput
                    label="Primary"
                    id="primary"
                    read=|v| v.primary.clone()
                    write=|v, s| v.set_primary(s)
                />
                <ColorInput
                    label="Secondary"
                    id="secondary"
                    read=|v| v.secondary.clone()
                    write=|v, s| v.set_secondary(s)
                />
                <div class="field">
                    <label for="radius">
                        {move || format!("Radius: {}px", store.theme().with(|v| v.radius))}
                    </label>
                    <input
                        id="radius"
                        type="range"
                        min="0"
                        max=RADIUS_MAX.to_string()
                        prop:value=move || store.theme().with(|v| v.radius).to_string()
                        on:input=move |ev| {
                            let radius = event_target_value(&ev).parse::<u8>().unwrap_or(0);
                            if let Err(e) = store_update_theme(&store, |vars| {
                                vars.set_radius(radius);
                                Ok(())
                            }) {
                                ctx.notify(format!("Couldn't save theme: {}", e));
                            }
                        }
                    />
                </div>
                <div class="actions">
                    <button class="btn" on:click=reset>"Reset"</button>
                    <button class="btn primary" on:click=copy>"Copy CSS"</button>
                </div>
            </section>

            <section class="card" aria-labelledby="preview-title">
                <h2 id="preview-title">"Preview"</h2>
                <div class="preview-surface">
                    <button class="btn primary">"Primary action"</button>
                    <button class="btn secondary">"Secondary"</button>
                    <span class="badge">"Badge"</span>
                    <div class="card inset">"Card surface with the current radius."</div>
                </div>
                <pre class="css-block"><code>{css}</code></pre>
                <dl class="summary">
                    {move || {
                        live.get()
                            .into_iter()
                            .map(|(name, value)| {
                                view! {
                                    <div class="summary-row">
                                        <dt><code>{name}</code></dt>
                                        <dd>{value}</dd>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </dl>
            </section>
        </div>
    }
}
