//! Showcase Shell
//!
//! Header, sidebar navigation and the routed content area shared by every
//! showcase screen.

use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_location;

use showcase_core::nav::{selected_route, NAV_ITEMS};
use showcase_core::ThemeMode;

use crate::context::use_app_context;
use crate::store::{store_set_theme_mode, use_app_store, AppStateStoreFields};

/// Light / dark / system switch
#[component]
pub fn ThemeModeToggle() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    view! {
        <div class="segmented" role="group" aria-label="Color mode">
            {ThemeMode::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <button
                            class=move || {
                                if store.theme_mode().get() == mode { "seg active" } else { "seg" }
                            }
                            aria-pressed=move || (store.theme_mode().get() == mode).to_string()
                            on:click=move |_| {
                                if let Err(e) = store_set_theme_mode(&store, mode) {
                                    ctx.notify(e);
                                }
                            }
                        >
                            {mode.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Transient notice in the corner, announced politely
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-region" role="status" aria-live="polite">
            {move || {
                ctx.notice
                    .get()
                    .map(|msg| {
                        view! {
                            <div class="toast">
                                <span>{msg}</span>
                                <button
                                    class="toast-close"
                                    aria-label="Dismiss"
                                    on:click=move |_| ctx.dismiss_notice()
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn ShowcaseShell() -> impl IntoView {
    let location = use_location();
    let selected = Memo::new(move |_| selected_route(&location.pathname.get()));

    view! {
        <a class="skip-link" href="#main">"Skip to content"</a>
        <div class="shell">
            <header class="shell-header">
                <A href="/">"Teams HQ"</A>
                <span class="shell-subtitle">"Showcase"</span>
                <span class="spacer"></span>
                <ThemeModeToggle />
            </header>
            <div class="shell-body">
                <nav class="sidebar" aria-label="Showcase sections">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(route, label)| {
                            view! {
                                <a
                                    href=route
                                    class=move || {
                                        if selected.get() == route { "nav-link active" } else { "nav-link" }
                                    }
                                    aria-current=move || (selected.get() == route).then_some("page")
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <main id="main" class="shell-content" tabindex="-1">
                    <Outlet />
                </main>
            </div>
            <NoticeToast />
        </div>
    }
}
