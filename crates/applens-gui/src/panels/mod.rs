/// Dashboard panels composed by `app.rs`.

pub mod chart_panel;
pub mod filter_panel;
pub mod pivot_panel;
