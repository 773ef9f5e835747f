//! Landing Page
//!
//! Marketing hero plus project cards loaded from `/api/projects`.

use leptos::prelude::*;
use leptos_router::components::A;

use showcase_core::{FetchState, Kpi, Project, RequestTracker};

use crate::commands::{list_projects, load_into};
use crate::components::ThemeModeToggle;
use crate::context::use_app_context;

#[component]
fn KpiBadge(kpi: Kpi) -> impl IntoView {
    let delta = kpi.delta.map(|d| (d >= 0.0, kpi.delta_label().unwrap_or_default()));

    view! {
        <div class="kpi-mini">
            <span class="kpi-mini-label">{kpi.label.clone()}</span>
            <strong>{kpi.display_value()}</strong>
            {delta.map(|(up, text)| {
                view! { <span class=if up { "delta up" } else { "delta down" }>{text}</span> }
            })}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let Project { title, description, highlights, badges, repo, url, kpis, components, .. } = project;

    view! {
        <article class="card project-card">
            <h3>{title}</h3>
            <p class="muted">{description}</p>
            <ul class="chips" aria-label="Highlights">
                {highlights.into_iter().map(|h| view! { <li class="chip">{h}</li> }).collect_view()}
            </ul>
            <div class="badges">
                {badges.into_iter().map(|b| view! { <span class="badge">{b}</span> }).collect_view()}
            </div>
            <div class="kpi-row">
                {kpis.into_iter().map(|k| view! { <KpiBadge kpi=k /> }).collect_view()}
            </div>
            <p class="muted small">{format!("Uses {} showcased components", components.len())}</p>
            <div class="actions">
                {url.map(|u| view! { <a class="btn" href=u target="_blank" rel="noreferrer">"Live"</a> })}
                {repo.map(|r| view! { <a class="btn" href=r target="_blank" rel="noreferrer">"Repo"</a> })}
                <A href="/showcase/components">"Components"</A>
            </div>
        </article>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();
    let projects = RwSignal::new(FetchState::<Vec<Project>>::Idle);
    let tracker = StoredValue::new(RequestTracker::new());

    let load = move || load_into(tracker, projects, list_projects(ctx.api()));
    load();

    view! {
        <a class="skip-link" href="#main">"Skip to content"</a>
        <header class="landing-header">
            <strong>"Teams HQ"</strong>
            <span class="spacer"></span>
            <ThemeModeToggle />
        </header>
        <main id="main" class="landing" tabindex="-1">
            <section class="hero">
                <h1>"Production-ready UI, shown not told."</h1>
                <p class="muted">
                    "Dashboards, a component gallery, multi-step forms and theming, "
                    "all driven by URL state you can share."
                </p>
                <div class="actions">
                    <A href="/showcase">"Open the showcase"</A>
                    <A href="/showcase/components">"Browse components"</A>
                </div>
            </section>

            <section class="projects" aria-labelledby="projects-title">
                <h2 id="projects-title">"Projects"</h2>
                {move || match projects.get() {
                    FetchState::Idle | FetchState::Loading => {
                        view! { <div class="card skeleton" aria-busy="true">"Loading projects…"</div> }
                            .into_any()
                    }
                    FetchState::Failed(e) => {
                        view! {
                            <div class="card error" role="alert">
                                <p>{format!("Couldn't load projects: {}", e)}</p>
                                <button class="btn" on:click=move |_| load()>"Retry"</button>
                            </div>
                        }
                            .into_any()
                    }
                    FetchState::Ready(list) => {
                        list.into_iter()
                            .map(|p| view! { <ProjectCard project=p /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </section>
        </main>
    }
}
