/// Scatter series of some numeric column against rating.
use crate::engine::FilteredView;
use crate::model::AppRecord;

/// Which column supplies the x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAxis {
    Installs,
    Price,
}

impl XAxis {
    pub fn label(self) -> &'static str {
        match self {
            Self::Installs => "Number of Installs",
            Self::Price => "Price (USD)",
        }
    }

    fn value(self, record: &AppRecord) -> Option<f64> {
        match self {
            Self::Installs => record.installs.map(|n| n as f64),
            Self::Price => Some(record.price),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned extent of a point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub axis: XAxis,
    pub points: Vec<ScatterPoint>,
}

impl Scatter {
    /// Extent of the points, or `None` for an empty series.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.points.first()?;
        let init = Bounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(self.points.iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }
}

/// Pair each row's `axis` value with its rating, in view order.
/// Rows missing either value are left out.
pub fn scatter(view: &FilteredView<'_>, axis: XAxis) -> Scatter {
    let points = view
        .iter()
        .filter_map(|r| {
            let x = axis.value(r)?;
            let y = r.rating?;
            Some(ScatterPoint { x, y })
        })
        .collect();
    Scatter { axis, points }
}
