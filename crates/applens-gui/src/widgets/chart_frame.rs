/// Shared plot scaffolding for the painter-drawn charts.
///
/// `chart_frame` allocates the chart, paints the background, title, grid
/// and tick labels, and hands back a [`PlotArea`] that maps data
/// coordinates to screen positions.
use crate::theme::ChartTheme;
use egui::{Align2, FontId, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};

const MARGIN_LEFT: f32 = 48.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 26.0;
const MARGIN_BOTTOM: f32 = 34.0;

/// Intervals drawn on a linear axis.
const LINEAR_TICKS: usize = 5;

/// One plot axis. A log axis maps `log10(v)`; its minimum is at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub log: bool,
}

impl Axis {
    /// Linear axis over `[min, max]`. A zero-width range is widened so
    /// single-valued data still lands inside the plot.
    pub fn linear(min: f64, max: f64) -> Self {
        let (min, max) = if max > min { (min, max) } else { (min - 0.5, min + 0.5) };
        Self { min, max, log: false }
    }

    /// Log axis snapped out to whole decades.
    pub fn log(min: f64, max: f64) -> Self {
        let lo = min.max(1.0).log10().floor();
        let hi = max.max(1.0).log10().ceil().max(lo + 1.0);
        Self {
            min: 10f64.powf(lo),
            max: 10f64.powf(hi),
            log: true,
        }
    }

    fn transform(&self, v: f64) -> f64 {
        if self.log {
            v.max(self.min).log10()
        } else {
            v
        }
    }

    /// Position of `v` along the axis, 0.0 at `min` and 1.0 at `max`.
    pub fn fraction(&self, v: f64) -> f32 {
        let lo = self.transform(self.min);
        let hi = self.transform(self.max);
        (((self.transform(v) - lo) / (hi - lo)) as f32).clamp(0.0, 1.0)
    }

    /// Inverse of [`fraction`](Self::fraction).
    pub fn value_at(&self, fraction: f32) -> f64 {
        let lo = self.transform(self.min);
        let hi = self.transform(self.max);
        let t = lo + (hi - lo) * fraction.clamp(0.0, 1.0) as f64;
        if self.log {
            10f64.powf(t)
        } else {
            t
        }
    }

    /// Gridline positions: each decade on a log axis, otherwise evenly
    /// spaced including both ends.
    pub fn ticks(&self) -> Vec<f64> {
        if self.log {
            let lo = self.min.log10().round() as i32;
            let hi = self.max.log10().round() as i32;
            (lo..=hi).map(|e| 10f64.powi(e)).collect()
        } else {
            let step = (self.max - self.min) / LINEAR_TICKS as f64;
            (0..=LINEAR_TICKS)
                .map(|i| self.min + step * i as f64)
                .collect()
        }
    }
}

/// Axis annotation for one chart.
pub struct AxisLabels {
    /// Caption under the x axis.
    pub x_caption: &'static str,
    /// Tick formatter for x. `None` leaves x ticks to the caller.
    pub x_ticks: Option<fn(f64) -> String>,
    pub y_ticks: fn(f64) -> String,
}

/// The inner plotting rectangle and its axes.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub rect: Rect,
    pub x: Axis,
    pub y: Axis,
}

impl PlotArea {
    pub fn x_to_screen(&self, x: f64) -> f32 {
        self.rect.left() + self.rect.width() * self.x.fraction(x)
    }

    pub fn y_to_screen(&self, y: f64) -> f32 {
        self.rect.bottom() - self.rect.height() * self.y.fraction(y)
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(self.x_to_screen(x), self.y_to_screen(y))
    }

    pub fn x_from_screen(&self, px: f32) -> f64 {
        self.x.value_at((px - self.rect.left()) / self.rect.width())
    }
}

/// Allocate a chart of the given height across the available width and draw
/// its frame. The returned painter is clipped to the chart.
pub fn chart_frame(
    ui: &mut Ui,
    title: &str,
    height: f32,
    x: Axis,
    y: Axis,
    labels: &AxisLabels,
    theme: &ChartTheme,
) -> (Response, Painter, PlotArea) {
    let (outer, response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(outer);

    painter.rect_filled(outer, 4.0, theme.plot_bg);
    painter.text(
        Pos2::new(outer.left() + 8.0, outer.top() + 12.0),
        Align2::LEFT_CENTER,
        title,
        FontId::proportional(13.0),
        theme.title,
    );

    let rect = Rect::from_min_max(
        Pos2::new(outer.left() + MARGIN_LEFT, outer.top() + MARGIN_TOP),
        Pos2::new(outer.right() - MARGIN_RIGHT, outer.bottom() - MARGIN_BOTTOM),
    );
    let area = PlotArea { rect, x, y };

    let grid = Stroke::new(1.0, theme.grid);
    let tick_font = FontId::proportional(10.0);

    for v in y.ticks() {
        let py = area.y_to_screen(v);
        painter.line_segment([Pos2::new(rect.left(), py), Pos2::new(rect.right(), py)], grid);
        painter.text(
            Pos2::new(rect.left() - 6.0, py),
            Align2::RIGHT_CENTER,
            (labels.y_ticks)(v),
            tick_font.clone(),
            theme.axis_text,
        );
    }

    if let Some(fmt) = labels.x_ticks {
        for v in x.ticks() {
            let px = area.x_to_screen(v);
            painter.line_segment([Pos2::new(px, rect.top()), Pos2::new(px, rect.bottom())], grid);
            painter.text(
                Pos2::new(px, rect.bottom() + 4.0),
                Align2::CENTER_TOP,
                fmt(v),
                tick_font.clone(),
                theme.axis_text,
            );
        }
    }

    painter.text(
        Pos2::new(rect.center().x, outer.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        labels.x_caption,
        FontId::proportional(11.0),
        theme.axis_text,
    );
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, theme.frame), egui::StrokeKind::Inside);

    (response, painter, area)
}

/// Tick label with one decimal place.
pub fn tick_one_decimal(v: f64) -> String {
    format!("{v:.1}")
}

/// Tick label rounded to a whole number.
pub fn tick_whole(v: f64) -> String {
    format!("{v:.0}")
}

/// Centered notice in place of a chart that has nothing to show.
pub fn empty_chart(ui: &mut Ui, title: &str, height: f32, theme: &ChartTheme) {
    let (rect, _) = ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, theme.plot_bg);
    painter.text(
        Pos2::new(rect.left() + 8.0, rect.top() + 12.0),
        Align2::LEFT_CENTER,
        title,
        FontId::proportional(13.0),
        theme.title,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "No values to plot",
        FontId::proportional(12.0),
        theme.axis_text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_fraction_and_inverse() {
        let a = Axis::linear(0.0, 5.0);
        assert_eq!(a.fraction(0.0), 0.0);
        assert_eq!(a.fraction(5.0), 1.0);
        assert_eq!(a.fraction(2.5), 0.5);
        assert_eq!(a.fraction(9.0), 1.0);
        assert!((a.value_at(0.5) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_linear_range_is_widened() {
        let a = Axis::linear(3.0, 3.0);
        assert_eq!((a.min, a.max), (2.5, 3.5));
        assert_eq!(a.fraction(3.0), 0.5);
    }

    #[test]
    fn log_axis_snaps_to_decades() {
        let a = Axis::log(0.0, 5_000.0);
        assert_eq!((a.min, a.max), (1.0, 10_000.0));
        assert_eq!(a.ticks(), [1.0, 10.0, 100.0, 1_000.0, 10_000.0]);
        assert!((a.fraction(100.0) - 0.5).abs() < 1e-6);
        // Zero installs sit on the left edge.
        assert_eq!(a.fraction(0.0), 0.0);
    }

    #[test]
    fn linear_ticks_include_both_ends() {
        let t = Axis::linear(0.0, 5.0).ticks();
        assert_eq!(t.len(), LINEAR_TICKS + 1);
        assert_eq!(t[0], 0.0);
        assert_eq!(*t.last().unwrap(), 5.0);
    }
}
