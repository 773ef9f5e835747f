//! UI Components
//!
//! Shared widgets plus one page component per showcase route.

mod accessibility;
mod component_card;
mod dashboards;
mod forms;
mod gallery;
mod highlight_text;
mod landing;
mod motion;
mod not_found;
mod preview_drawer;
mod shell;
mod showcase_home;
mod sparkline;
mod theming;

pub use accessibility::{AccessibilityPage, ReduceMotionSwitch};
pub use component_card::ComponentCard;
pub use dashboards::DashboardsPage;
pub use forms::FormsPage;
pub use gallery::GalleryPage;
pub use highlight_text::HighlightText;
pub use landing::LandingPage;
pub use motion::MotionPage;
pub use not_found::NotFound;
pub use preview_drawer::PreviewDrawer;
pub use shell::{NoticeToast, ShowcaseShell, ThemeModeToggle};
pub use showcase_home::ShowcaseHome;
pub use sparkline::Sparkline;
pub use theming::ThemingPage;
