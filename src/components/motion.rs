//! Motion Playground
//!
//! Micro-interaction, stagger and presence demos. All of them are plain CSS
//! transitions and keyframes, switched off by `data-reduce-motion="true"` on the root.

use leptos::prelude::*;

use crate::components::ReduceMotionSwitch;
use crate::context::use_app_context;

const STAGGER_STEP_MS: usize = 60;
const STAGGER_ITEMS: [&str; 6] = ["Design", "Build", "Review", "Ship", "Measure", "Iterate"];

#[component]
pub fn MotionPage() -> impl IntoView {
    let ctx = use_app_context();
    let presses = RwSignal::new(0u32);
    let shown = RwSignal::new(true);
    // Bumped to replay the stagger animation
    let replay = RwSignal::new(0u32);

    let delay = move |i: usize| {
        if ctx.reduce_motion.get() {
            "0ms".to_string()
        } else {
            format!("{}ms", i * STAGGER_STEP_MS)
        }
    };

    view! {
        <div class="page-head">
            <div>
                <h1>"Motion"</h1>
                <p class="muted">"Small, purposeful transitions."</p>
            </div>
            <ReduceMotionSwitch />
        </div>

        <div class="motion-grid">
            <section class="card" aria-labelledby="micro-title">
                <h2 id="micro-title">"Micro"</h2>
                <button
                    class="btn primary pressable"
                    on:click=move |_| presses.update(|n| *n += 1)
                >
                    {move || format!("Pressed {}×", presses.get())}
                </button>
            </section>

            <section class="card" aria-labelledby="stagger-title">
                <h2 id="stagger-title">"Stagger"</h2>
                <button class="btn" on:click=move |_| replay.update(|n| *n += 1)>"Replay"</button>
                {move || {
                    replay.track();
                    view! {
                        <ul class="stagger">
                            {STAGGER_ITEMS
                                .iter()
                                .enumerate()
                                .map(|(i, item)| {
                                    view! {
                                        <li class="stagger-item" style:animation-delay=move || delay(i)>
                                            {*item}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                }}
            </section>

            <section class="card" aria-labelledby="presence-title">
                <h2 id="presence-title">"Presence"</h2>
                <button
                    class="btn"
                    aria-expanded=move || shown.get().to_string()
                    aria-controls="presence-panel"
                    on:click=move |_| shown.update(|s| *s = !*s)
                >
                    {move || if shown.get() { "Hide" } else { "Show" }}
                </button>
                <div
                    id="presence-panel"
                    class=move || if shown.get() { "presence visible" } else { "presence" }
                    aria-hidden=move || (!shown.get()).to_string()
                >
                    "Fades and slides in, or simply appears with reduced motion."
                </div>
            </section>
        </div>
    }
}
