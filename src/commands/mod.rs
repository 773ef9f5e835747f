//! Browser Commands
//!
//! Frontend bindings to the browser and the mocked API, organized by domain.
//! Everything here returns `Result<_, String>` for the UI to show.

mod api;
mod clipboard;
mod dom;
mod storage;
mod url;

pub use api::*;
pub use clipboard::*;
pub use dom::*;
pub use storage::*;
pub use url::*;
