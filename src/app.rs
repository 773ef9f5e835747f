//! Teams HQ Frontend App
//!
//! Provides the shared context and store, then routes between the landing
//! page and the showcase screens.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use showcase_core::AppConfig;

use crate::commands;
use crate::components::{
    AccessibilityPage, DashboardsPage, FormsPage, GalleryPage, LandingPage, MotionPage, NotFound,
    ShowcaseHome, ShowcaseShell, ThemingPage,
};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx);

    let state = AppState::load();
    // Persisted theme has to reach the document before the first paint
    if let Err(e) = commands::apply_theme_vars(&state.theme) {
        log::warn!("theme vars not applied: {}", e);
    }
    if let Err(e) = commands::apply_theme_mode(state.theme_mode) {
        log::warn!("theme mode not applied: {}", e);
    }
    if let Err(e) = commands::apply_reduce_motion(ctx.reduce_motion.get_untracked()) {
        log::warn!("reduce motion not applied: {}", e);
    }
    provide_context(Store::new(state));

    log::info!(
        "app started (latency {}ms, failure switch {})",
        config.mock_latency_ms,
        config.mock_failure
    );

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
                <ParentRoute path=path!("/showcase") view=ShowcaseShell>
                    <Route path=path!("") view=ShowcaseHome />
                    <Route path=path!("dashboards") view=DashboardsPage />
                    <Route path=path!("components") view=GalleryPage />
                    <Route path=path!("forms") view=FormsPage />
                    <Route path=path!("theming") view=ThemingPage />
                    <Route path=path!("accessibility") view=AccessibilityPage />
                    <Route path=path!("motion") view=MotionPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
