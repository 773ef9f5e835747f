//! Sparkline Component
//!
//! SVG area chart scaled to its box; geometry comes from the core crate.

use leptos::prelude::*;
use showcase_core::sparkline::spark_path;

const VIEW_WIDTH: f64 = 300.0;

#[component]
pub fn Sparkline(
    values: Vec<f64>,
    #[prop(default = 120.0)] height: f64,
    #[prop(into, default = "var(--brand-secondary)".to_string())] stroke: String,
    #[prop(into, optional)] label: Option<String>,
) -> impl IntoView {
    let path = spark_path(&values, VIEW_WIDTH, height);
    let label = label.unwrap_or_else(|| format!("Trend of {} points", values.len()));

    view! {
        <svg
            class="sparkline"
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, height)
            preserveAspectRatio="none"
            style=format!("height: {}px;", height)
            role="img"
            aria-label=label
        >
            <path d=path.area fill=stroke.clone() fill-opacity="0.15" stroke="none"></path>
            <path
                d=path.line
                fill="none"
                stroke=stroke
                stroke-width="2"
                vector-effect="non-scaling-stroke"
            ></path>
        </svg>
    }
}
