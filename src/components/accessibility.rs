//! Accessibility Playground
//!
//! Landmarks, a polite live region, the reduce-motion attribute and the
//! recent log lines kept by the console logger.

use leptos::prelude::*;

use crate::commands::apply_reduce_motion;
use crate::context::{use_app_context, AppContext};

const ACTIVITY_LINES: usize = 12;

/// Flip the app-wide reduce-motion flag and mirror it on the document root
fn set_reduce_motion(ctx: &AppContext, on: bool) {
    ctx.reduce_motion.set(on);
    if let Err(e) = apply_reduce_motion(on) {
        log::warn!("reduce motion: {}", e);
    }
}

/// Checkbox bound to the shared reduce-motion flag
#[component]
pub fn ReduceMotionSwitch(#[prop(optional)] on_change: Option<Callback<bool>>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <label class="switch">
            <input
                type="checkbox"
                prop:checked=move || ctx.reduce_motion.get()
                on:change=move |ev| {
                    let on = event_target_checked(&ev);
                    set_reduce_motion(&ctx, on);
                    if let Some(cb) = on_change {
                        cb.run(on);
                    }
                }
            />
            "Reduce motion"
        </label>
    }
}

#[component]
pub fn AccessibilityPage() -> impl IntoView {
    let announcement = RwSignal::new(String::new());
    let count = RwSignal::new(0u32);

    // Newest first
    let activity = RwSignal::new(Vec::<String>::new());
    let refresh_activity = move || {
        let mut lines = console_logger::recent();
        lines.reverse();
        lines.truncate(ACTIVITY_LINES);
        activity.set(lines);
    };
    refresh_activity();

    let announce = move |msg: String| {
        log::info!("announce: {}", msg);
        announcement.set(msg);
        refresh_activity();
    };

    view! {
        <div class="page-head">
            <div>
                <h1>"Accessibility"</h1>
                <p class="muted">"Keyboard, landmarks and announcements."</p>
            </div>
            <ReduceMotionSwitch on_change=Callback::new(move |on: bool| {
                announce(if on { "Reduced motion on".to_string() } else { "Reduced motion off".to_string() })
            }) />
        </div>

        <div class="a11y-grid">
            <section class="card" aria-labelledby="landmarks-title">
                <h2 id="landmarks-title">"Landmarks"</h2>
                <p>
                    "This page sits inside a "<code>"banner"</code>", a "<code>"navigation"</code>
                    " and a "<code>"main"</code>" region. Press Tab from the top of the page to reach the skip link."
                </p>
                <ul class="landmark-list">
                    <li><code>"<header>"</code>" site header"</li>
                    <li><code>"<nav>"</code>" showcase sections"</li>
                    <li><code>"<main id=\"main\">"</code>" skip link target"</li>
                </ul>
            </section>

            <section class="card" aria-labelledby="live-title">
                <h2 id="live-title">"Live region"</h2>
                <p class="muted">"Screen readers announce changes without moving focus."</p>
                <div class="actions">
                    <button
                        class="btn primary"
                        on:click=move |_| {
                            count.update(|n| *n += 1);
                            announce(format!("Saved draft {}", count.get_untracked()));
                        }
                    >
                        "Save draft"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| announce("Filters cleared".to_string())
                    >
                        "Clear filters"
                    </button>
                </div>
                <p class="live-region" role="status" aria-live="polite" aria-atomic="true">
                    {move || announcement.get()}
                </p>
            </section>

            <section class="card" aria-labelledby="focus-title">
                <h2 id="focus-title">"Focus"</h2>
                <p class="muted">"Every control shows a visible ring on keyboard focus."</p>
                <div class="actions focus-demo">
                    <button class="btn">"First"</button>
                    <a class="btn" href="#focus-title">"Link"</a>
                    <input type="text" aria-label="Focusable input" placeholder="Type here" />
                    <button class="btn" disabled=true aria-disabled="true">"Disabled"</button>
                </div>
            </section>

            <section class="card" aria-labelledby="activity-title">
                <header class="component-head">
                    <h2 id="activity-title">"Recent activity"</h2>
                    <button class="btn small" on:click=move |_| refresh_activity()>"Refresh"</button>
                </header>
                <Show
                    when=move || activity.with(|lines| !lines.is_empty())
                    fallback=|| view! { <p class="muted">"Nothing logged yet."</p> }
                >
                    <ol class="activity-log">
                        {move || {
                            activity
                                .get()
                                .into_iter()
                                .map(|line| view! { <li><code>{line}</code></li> })
                                .collect_view()
                        }}
                    </ol>
                </Show>
            </section>
        </div>
    }
}
