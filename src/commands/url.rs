//! URL View State
//!
//! Binds the core view-state store to the router: reads come from the
//! current location, writes replace the history entry.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use showcase_core::{CategorySet, Navigator, ViewState, ViewStateStore};

pub type NavigateFn = Box<dyn Fn(&str, NavigateOptions) + Send + Sync>;

/// [`Navigator`] backed by the router's navigate function
pub struct RouterNavigator<'a>(&'a NavigateFn);

impl Navigator for RouterNavigator<'_> {
    fn replace_query(&self, path: &str, query: &str) {
        let url = if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        };
        (self.0)(
            &url,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    }
}

/// Reactive view state of the current route
pub struct UrlViewState<C: CategorySet + Send + Sync> {
    pub state: Memo<ViewState<C>>,
    path: Memo<String>,
    search: Memo<String>,
    navigate: StoredValue<NavigateFn>,
}

impl<C: CategorySet + Send + Sync> Clone for UrlViewState<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: CategorySet + Send + Sync> Copy for UrlViewState<C> {}

impl<C: CategorySet + Send + Sync> UrlViewState<C> {
    /// Edit through a store built from the current location; each write
    /// navigates to the new query.
    pub fn update(&self, edit: impl FnOnce(&mut ViewStateStore<C, RouterNavigator<'_>>)) {
        let path = self.path.get_untracked();
        let search = self.search.get_untracked();
        self.navigate.with_value(|nav| {
            let mut store = ViewStateStore::from_location(path, &search, RouterNavigator(nav));
            edit(&mut store);
        });
    }
}

/// Must be called inside a routed component
pub fn use_url_view_state<C: CategorySet + Send + Sync>() -> UrlViewState<C> {
    let location = use_location();
    let search = location.search;
    let navigate: NavigateFn = Box::new(use_navigate());
    UrlViewState {
        state: Memo::new(move |_| ViewState::from_query_string(&search.get())),
        path: location.pathname,
        search,
        navigate: StoredValue::new(navigate),
    }
}
