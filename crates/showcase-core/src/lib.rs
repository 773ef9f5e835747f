//! Showcase Core
//!
//! Browser-independent logic behind the Teams HQ showcase:
//! - model: items, tiles, projects and KPIs
//! - view_state: URL-synchronized filter/sort/view state and its codec
//! - derive: the filter + sort + facet pipeline
//! - highlight: first-match emphasis for search results
//! - favorites / theme: client state persisted through a key-value store
//! - onboarding: the multi-step form model
//! - fetch / mock_api: request supersedence and the mocked HTTP layer
//! - seed / sparkline / nav: static content for the showcase screens

pub mod config;
pub mod derive;
pub mod error;
pub mod favorites;
pub mod fetch;
pub mod highlight;
pub mod mock_api;
pub mod model;
pub mod nav;
pub mod onboarding;
pub mod seed;
pub mod sparkline;
pub mod storage;
pub mod theme;
pub mod view_state;

pub use config::AppConfig;
pub use derive::{derive_view, CategoryCounts, DerivedView};
pub use error::{ApiError, StorageError, ThemeError};
pub use favorites::{FavoriteSet, FAVORITES_KEY};
pub use fetch::{FetchState, RequestTicket, RequestTracker};
pub use highlight::{highlight, Highlight};
pub use mock_api::MockApi;
pub use onboarding::{OnboardingForm, Plan, Step};
pub use model::{
    CategorySet, ComponentCategory, ComponentDemo, Complexity, Kpi, Listing, Project, Status,
    Tile, TileCategory,
};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::{ThemeMode, ThemeVars, THEME_KEY};
pub use view_state::{Field, Navigator, SortKey, ViewMode, ViewState, ViewStateStore};
