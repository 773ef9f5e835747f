//! API Commands
//!
//! Typed wrappers over the in-process mocked API. Each call waits out the
//! configured latency so loading states are visible.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use showcase_core::mock_api::{self, COMPONENTS_PATH, KPIS_PATH, PROJECTS_PATH};
use showcase_core::view_state::encode_query;
use showcase_core::{ComponentDemo, FetchState, Kpi, MockApi, Project, RequestTracker};

/// Per-request knobs, taken from [`AppContext`](crate::context::AppContext)
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiOptions {
    pub latency_ms: u32,
    pub fail: bool,
}

async fn get_json<T: DeserializeOwned>(url: &str, opts: ApiOptions) -> Result<T, String> {
    if opts.latency_ms > 0 {
        TimeoutFuture::new(opts.latency_ms).await;
    }
    let body = MockApi::new()
        .failing(opts.fail)
        .get(url)
        .map_err(|e| e.to_string())?;
    mock_api::decode(&body).map_err(|e| e.to_string())
}

pub async fn list_components(query: String, opts: ApiOptions) -> Result<Vec<ComponentDemo>, String> {
    let url = if query.is_empty() {
        COMPONENTS_PATH.to_string()
    } else {
        let params = [("q".to_string(), query)].into_iter().collect();
        format!("{}?{}", COMPONENTS_PATH, encode_query(&params))
    };
    get_json(&url, opts).await
}

pub async fn list_projects(opts: ApiOptions) -> Result<Vec<Project>, String> {
    get_json(PROJECTS_PATH, opts).await
}

pub async fn list_kpis(opts: ApiOptions) -> Result<Vec<Kpi>, String> {
    get_json(KPIS_PATH, opts).await
}

/// Start a request for `target`. A response is only written if no newer
/// request was started on the same tracker meanwhile.
pub fn load_into<T, Fut>(
    tracker: StoredValue<RequestTracker>,
    target: RwSignal<FetchState<T>>,
    request: Fut,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let ticket = tracker.with_value(|t| t.begin());
    target.set(FetchState::Loading);
    spawn_local(async move {
        let result = request.await;
        if let Some(next) = tracker.with_value(|t| t.resolve(ticket, result)) {
            target.set(next);
        }
    });
}
