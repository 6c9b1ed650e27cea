/// AppLens GUI -- egui-based desktop dashboard.
///
/// This crate contains all UI code. Business logic lives in `applens-core`.
pub mod app;
pub mod column_filter;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::AppLensApp;
pub use state::{AppState, Preset};
