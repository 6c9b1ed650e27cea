/// UI widgets for AppLens.

pub mod bar_chart;
pub mod box_plot;
pub mod category_list;
pub mod chart_frame;
pub mod histogram;
pub mod scatter_plot;
pub mod share_bar;
pub mod status_bar;
pub mod toolbar;
