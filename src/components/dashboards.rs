//! Dashboards Page
//!
//! KPI cards fetched per range, sessions/conversions sparklines and the top
//! teams table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use showcase_core::seed::{teams_csv, TOP_TEAMS};
use showcase_core::sparkline::{conversions, sessions};
use showcase_core::{FetchState, Kpi, RequestTracker};

use crate::commands::{copy_text, list_kpis, load_into};
use crate::components::Sparkline;
use crate::context::use_app_context;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Range {
    Today,
    Week,
    Month,
}

impl Range {
    const ALL: [Range; 3] = [Range::Today, Range::Week, Range::Month];

    fn label(&self) -> &'static str {
        match self {
            Range::Today => "Today",
            Range::Week => "7d",
            Range::Month => "30d",
        }
    }
}

#[component]
fn KpiCard(kpi: Kpi) -> impl IntoView {
    let spark: Vec<f64> = sessions().into_iter().rev().take(12).rev().collect();
    let delta = kpi.delta.map(|d| (d >= 0.0, kpi.delta_label().unwrap_or_default()));

    view! {
        <article class="card kpi-card">
            <span class="muted">{kpi.label.clone()}</span>
            <strong class="kpi-value">{kpi.display_value()}</strong>
            {delta.map(|(up, text)| {
                view! { <span class=if up { "delta up" } else { "delta down" }>{text}</span> }
            })}
            <Sparkline values=spark height=90.0 label=format!("{} trend", kpi.label) />
        </article>
    }
}

#[component]
pub fn DashboardsPage() -> impl IntoView {
    let ctx = use_app_context();
    let range = RwSignal::new(Range::Week);
    let kpis = RwSignal::new(FetchState::<Vec<Kpi>>::Idle);
    let tracker = StoredValue::new(RequestTracker::new());

    // The range is part of the request key: switching ranges starts a new
    // generation and drops whatever the previous range returns late.
    let load = move || {
        log::debug!("loading kpis for {}", range.get_untracked().label());
        load_into(tracker, kpis, list_kpis(ctx.api()));
    };
    Effect::new(move |_| {
        range.track();
        load();
    });

    let sessions = sessions();
    let conversions = conversions(&sessions);

    let export = move |_| {
        spawn_local(async move {
            match copy_text(&teams_csv(&TOP_TEAMS)).await {
                Ok(()) => ctx.notify("CSV copied to clipboard"),
                Err(e) => ctx.notify(format!("Export failed: {}", e)),
            }
        });
    };

    view! {
        <div class="page-head">
            <div>
                <h1>"Dashboards"</h1>
                <p class="muted">"Overview metrics with crisp visuals."</p>
            </div>
            <div class="actions">
                <div class="segmented" role="group" aria-label="Range">
                    {Range::ALL
                        .into_iter()
                        .map(|r| {
                            view! {
                                <button
                                    class=move || if range.get() == r { "seg active" } else { "seg" }
                                    aria-pressed=move || (range.get() == r).to_string()
                                    on:click=move |_| range.set(r)
                                >
                                    {r.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="btn"
                    aria-label="Refresh"
                    disabled=move || kpis.with(|k| k.is_loading())
                    on:click=move |_| load()
                >
                    "↻"
                </button>
            </div>
        </div>

        <section class="kpi-grid" aria-label="Key metrics">
            {move || match kpis.get() {
                FetchState::Idle | FetchState::Loading => {
                    (0..3)
                        .map(|_| view! { <div class="card kpi-card skeleton" aria-busy="true"></div> })
                        .collect_view()
                        .into_any()
                }
                FetchState::Failed(e) => {
                    view! {
                        <div class="card error" role="alert">
                            <p>{format!("Couldn't load metrics: {}", e)}</p>
                            <button class="btn" on:click=move |_| load()>"Retry"</button>
                        </div>
                    }
                        .into_any()
                }
                FetchState::Ready(list) => {
                    list.into_iter().map(|k| view! { <KpiCard kpi=k /> }).collect_view().into_any()
                }
            }}
        </section>

        <section class="chart-grid">
            <article class="card">
                <h2>"Sessions"</h2>
                <Sparkline values=sessions height=220.0 label="Sessions over 28 days" />
            </article>
            <article class="card">
                <h2>"Conversions"</h2>
                <Sparkline
                    values=conversions
                    height=220.0
                    stroke="var(--brand-primary)"
                    label="Conversions over 28 days"
                />
            </article>
        </section>

        <section class="card">
            <h2>"Top Teams"</h2>
            <table class="table">
                <thead>
                    <tr>
                        <th scope="col">"Team"</th>
                        <th scope="col" class="num">"Active Users"</th>
                        <th scope="col" class="num">"Conversion %"</th>
                        <th scope="col" class="num">"Δ"</th>
                    </tr>
                </thead>
                <tbody>
                    {TOP_TEAMS
                        .iter()
                        .map(|row| {
                            let up = row.delta >= 0;
                            view! {
                                <tr>
                                    <td>{row.team}</td>
                                    <td class="num">{row.active}</td>
                                    <td class="num">{row.conversion}</td>
                                    <td class=if up { "num delta up" } else { "num delta down" }>
                                        {format!("{} {}%", if up { "▲" } else { "▼" }, row.delta.abs())}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>

        <div class="actions end">
            <button class="btn" on:click=export>"Export CSV"</button>
        </div>
    }
}
