use dioxus::prelude::*;

use crate::util::format::format_usd_compact;

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 300.0;
const PAD_LEFT: f64 = 64.0;
const PAD_RIGHT: f64 = 20.0;
const PAD_TOP: f64 = 24.0;
const PAD_BOTTOM: f64 = 36.0;
const GRID_STEPS: usize = 4;

/// Maps projection values into the SVG viewport. The y-range always includes
/// zero so a negative savings line stays visible below the axis.
struct ChartScale {
    lo: f64,
    hi: f64,
    points: usize,
}

impl ChartScale {
    fn new(series: &[&[f64]], points: usize) -> Self {
        let mut lo = 0.0f64;
        let mut hi = 0.0f64;
        for values in series {
            for value in *values {
                lo = lo.min(*value);
                hi = hi.max(*value);
            }
        }
        if (hi - lo).abs() < f64::EPSILON {
            hi = lo + 1.0;
        }
        Self { lo, hi, points }
    }

    fn x(&self, index: usize) -> f64 {
        let span = VIEW_W - PAD_LEFT - PAD_RIGHT;
        PAD_LEFT + span * index as f64 / (self.points - 1) as f64
    }

    fn y(&self, value: f64) -> f64 {
        let span = VIEW_H - PAD_TOP - PAD_BOTTOM;
        VIEW_H - PAD_BOTTOM - (value - self.lo) / (self.hi - self.lo) * span
    }

    fn polyline(&self, values: &[f64]) -> String {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{:.1},{:.1}", self.x(i), self.y(*v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn area_path(&self, values: &[f64]) -> String {
        let baseline = self.y(0.0);
        let mut d = String::new();
        for (i, v) in values.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{command}{:.1},{:.1} ", self.x(i), self.y(*v)));
        }
        d.push_str(&format!(
            "L{:.1},{baseline:.1} L{PAD_LEFT:.1},{baseline:.1} Z",
            self.x(values.len() - 1)
        ));
        d
    }
}

/// Five-year projection of cumulative savings against implementation cost,
/// rendered as a self-contained SVG.
#[component]
pub fn ProjectionChart(savings: Vec<f64>, cost: Vec<f64>) -> Element {
    let scale = ChartScale::new(&[&savings, &cost], savings.len().max(2));

    let savings_line = scale.polyline(&savings);
    let cost_line = scale.polyline(&cost);
    let savings_area = scale.area_path(&savings);
    let cost_area = scale.area_path(&cost);

    let gridlines: Vec<(f64, f64, String)> = (0..=GRID_STEPS)
        .map(|step| {
            let value = scale.lo + (scale.hi - scale.lo) * step as f64 / GRID_STEPS as f64;
            let y = scale.y(value);
            (y, y + 4.0, format_usd_compact(value))
        })
        .collect();

    let savings_dots: Vec<(f64, f64)> = savings
        .iter()
        .enumerate()
        .map(|(i, v)| (scale.x(i), scale.y(*v)))
        .collect();
    let cost_dots: Vec<(f64, f64)> = cost
        .iter()
        .enumerate()
        .map(|(i, v)| (scale.x(i), scale.y(*v)))
        .collect();
    let year_labels: Vec<(f64, String)> = (0..savings.len())
        .map(|i| (scale.x(i), format!("Year {}", i + 1)))
        .collect();

    let grid_right = VIEW_W - PAD_RIGHT;
    let tick_x = PAD_LEFT - 10.0;
    let year_y = VIEW_H - 10.0;

    rsx! {
        div { class: "chart-wrap",
            div { class: "chart-legend",
                span { class: "legend-item",
                    span { class: "legend-swatch swatch-cyan" }
                    "Cumulative Savings"
                }
                span { class: "legend-item",
                    span { class: "legend-swatch swatch-gold" }
                    "Implementation Cost"
                }
            }
            svg {
                class: "projection-chart",
                view_box: "0 0 {VIEW_W} {VIEW_H}",
                preserve_aspect_ratio: "xMidYMid meet",
                for (line_y, text_y, label) in gridlines {
                    line {
                        x1: "{PAD_LEFT}",
                        y1: "{line_y}",
                        x2: "{grid_right}",
                        y2: "{line_y}",
                        class: "chart-grid",
                    }
                    text { x: "{tick_x}", y: "{text_y}", class: "chart-tick", "{label}" }
                }
                path { d: "{savings_area}", class: "chart-area chart-area-cyan" }
                path { d: "{cost_area}", class: "chart-area chart-area-gold" }
                polyline { points: "{savings_line}", class: "chart-line chart-line-cyan" }
                polyline { points: "{cost_line}", class: "chart-line chart-line-gold" }
                for (cx, cy) in savings_dots {
                    circle { cx: "{cx}", cy: "{cy}", r: "4", class: "chart-dot chart-dot-cyan" }
                }
                for (cx, cy) in cost_dots {
                    circle { cx: "{cx}", cy: "{cy}", r: "4", class: "chart-dot chart-dot-gold" }
                }
                for (x, label) in year_labels {
                    text { x: "{x}", y: "{year_y}", class: "chart-axis", "{label}" }
                }
            }
        }
    }
}
