/// Scatter plot of installs or price against rating.
///
/// Installs span several orders of magnitude, so that axis is drawn on a
/// log scale; price is linear.
use super::chart_frame::{chart_frame, empty_chart, tick_one_decimal, Axis, AxisLabels};
use crate::theme::ChartTheme;
use applens_core::analysis::{Scatter, XAxis};
use applens_core::loader::{RATING_MAX, RATING_MIN};
use applens_core::model::format::{format_compact, format_count, format_price};
use egui::Ui;

/// Pointer must be this close to a point (in screen pixels) to hover it.
const HOVER_RADIUS: f32 = 6.0;
const POINT_RADIUS: f32 = 2.5;

/// Below this maximum price, whole-dollar ticks would repeat.
const CENTS_BELOW: f64 = 10.0;

pub fn scatter_chart(ui: &mut Ui, series: &Scatter, height: f32, theme: &ChartTheme) {
    let title = match series.axis {
        XAxis::Installs => "Installs vs. Rating",
        XAxis::Price => "Price vs. Rating",
    };
    let Some(bounds) = series.bounds() else {
        empty_chart(ui, title, height, theme);
        return;
    };

    let x_axis = match series.axis {
        XAxis::Installs => Axis::log(bounds.min_x, bounds.max_x),
        XAxis::Price => Axis::linear(0.0, bounds.max_x),
    };
    let x_ticks: fn(f64) -> String = match series.axis {
        XAxis::Installs => format_compact,
        XAxis::Price => price_ticks(bounds.max_x),
    };
    let labels = AxisLabels {
        x_caption: series.axis.label(),
        x_ticks: Some(x_ticks),
        y_ticks: tick_one_decimal,
    };
    let (response, painter, area) = chart_frame(
        ui,
        title,
        height,
        x_axis,
        Axis::linear(RATING_MIN, RATING_MAX),
        &labels,
        theme,
    );

    for p in &series.points {
        painter.circle_filled(area.to_screen(p.x, p.y), POINT_RADIUS, theme.point);
    }

    let hovered = response.hover_pos().and_then(|pos| {
        series
            .points
            .iter()
            .map(|p| (p, area.to_screen(p.x, p.y).distance(pos)))
            .filter(|(_, d)| *d <= HOVER_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| *p)
    });

    if let Some(p) = hovered {
        painter.circle_stroke(
            area.to_screen(p.x, p.y),
            POINT_RADIUS + 2.0,
            egui::Stroke::new(1.5, theme.bar_hover),
        );
        let x_text = match series.axis {
            XAxis::Installs => format_count(p.x as u64),
            XAxis::Price => format_price(p.x),
        };
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(format!("{}: {}", series.axis.label(), x_text));
            ui.label(format!("Rating: {:.1}", p.y));
        });
    }
}

fn price_ticks(max_price: f64) -> fn(f64) -> String {
    if max_price < CENTS_BELOW {
        tick_cents
    } else {
        tick_dollars
    }
}

fn tick_dollars(v: f64) -> String {
    format!("${v:.0}")
}

fn tick_cents(v: f64) -> String {
    format!("${v:.2}")
}
