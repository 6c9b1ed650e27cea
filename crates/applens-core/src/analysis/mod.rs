/// Chart-data builders -- turn a filtered view into plain structures a
/// presentation layer can draw. Nothing here knows about pixels or widgets.

pub mod box_plot;
pub mod category_totals;
pub mod dashboard;
pub mod histogram;
pub mod scatter;

pub use box_plot::{rating_box_by_type, BoxStats};
pub use category_totals::{installs_by_category, CategoryTotal};
pub use dashboard::DashboardData;
pub use histogram::{rating_histogram, Histogram, HistogramBin, DEFAULT_BINS};
pub use scatter::{scatter, Bounds, Scatter, ScatterPoint, XAxis};
