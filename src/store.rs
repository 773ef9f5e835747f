//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Persisted fields
//! are loaded once at startup and written back on every change.

use leptos::prelude::*;
use reactive_stores::Store;

use showcase_core::{FavoriteSet, ThemeError, ThemeMode, ThemeVars};

use crate::commands::{self, LocalStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Starred component ids
    pub favorites: FavoriteSet,
    /// Brand colors and radius
    pub theme: ThemeVars,
    pub theme_mode: ThemeMode,
}

impl AppState {
    /// Read persisted state from local storage
    pub fn load() -> Self {
        Self {
            favorites: FavoriteSet::load(&LocalStore),
            theme: ThemeVars::load(&LocalStore),
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle a favorite and persist the whole set
pub fn store_toggle_favorite(store: &AppStore, id: &str) -> Result<bool, String> {
    store
        .favorites()
        .write()
        .toggle_and_flush(id, &LocalStore)
        .map_err(|e| e.to_string())
}

/// Edit the theme vars; on success apply them to the document and persist.
/// A failed edit leaves the previous values in place.
pub fn store_update_theme(
    store: &AppStore,
    edit: impl FnOnce(&mut ThemeVars) -> Result<(), ThemeError>,
) -> Result<(), String> {
    let mut vars = store.theme().get_untracked();
    edit(&mut vars).map_err(|e| e.to_string())?;
    commands::apply_theme_vars(&vars)?;
    store.theme().set(vars.clone());
    vars.flush(&LocalStore).map_err(|e| e.to_string())
}

pub fn store_reset_theme(store: &AppStore) -> Result<(), String> {
    store_update_theme(store, |vars| {
        *vars = ThemeVars::default();
        Ok(())
    })
}

pub fn store_set_theme_mode(store: &AppStore, mode: ThemeMode) -> Result<(), String> {
    store.theme_mode().set(mode);
    commands::apply_theme_mode(mode)
}
