use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use super::{svg, Chart};

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    title: String,
    slices: Vec<Slice>,
}

const CENTER_X: f64 = 290.0;
const CENTER_Y: f64 = 280.0;
const RADIUS: f64 = 190.0;
const LEGEND_X: f64 = 540.0;
const LEGEND_Y: f64 = 90.0;
const LEGEND_STEP: f64 = 24.0;

impl PieChart {
    /// Slices with a non-positive value are left out.
    pub fn new(title: impl Into<String>, slices: impl IntoIterator<Item = Slice>) -> Self {
        PieChart {
            title: title.into(),
            slices: slices
                .into_iter()
                .filter(|slice| slice.value.is_finite() && slice.value > 0.0)
                .collect(),
        }
    }

    fn total(&self) -> f64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }
}

/// Angle measured clockwise from twelve o'clock.
fn point(angle: f64, radius: f64) -> (f64, f64) {
    (
        CENTER_X + radius * angle.sin(),
        CENTER_Y - radius * angle.cos(),
    )
}

pub(super) fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

impl Chart for PieChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn render_svg(&self) -> String {
        let mut out = svg::open(svg::WIDTH, svg::HEIGHT, &self.title);
        let total = self.total();

        if self.slices.is_empty() {
            out.push_str(&svg::no_data(svg::WIDTH, svg::HEIGHT));
            out.push_str(svg::close());
            return out;
        }

        let mut start = 0.0;
        for (index, slice) in self.slices.iter().enumerate() {
            let share = slice.value / total;
            let end = start + share * TAU;
            let color = svg::color(index);
            let tooltip = format!(
                "{}: {} ({:.1}%)",
                svg::escape(&slice.label),
                format_value(slice.value),
                share * 100.0
            );

            if self.slices.len() == 1 {
                let _ = writeln!(
                    out,
                    r##"<circle cx="{CENTER_X:.2}" cy="{CENTER_Y:.2}" r="{RADIUS:.2}" fill="{color}" stroke="#ffffff" stroke-width="1"><title>{tooltip}</title></circle>"##
                );
            } else {
                let (x0, y0) = point(start, RADIUS);
                let (x1, y1) = point(end, RADIUS);
                let large_arc = if end - start > PI { 1 } else { 0 };
                let _ = writeln!(
                    out,
                    r##"<path d="M {CENTER_X:.2} {CENTER_Y:.2} L {x0:.2} {y0:.2} A {RADIUS:.2} {RADIUS:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z" fill="{color}" stroke="#ffffff" stroke-width="1"><title>{tooltip}</title></path>"##
                );
            }

            let (label_x, label_y) = point(start + share * PI, RADIUS * 0.65);
            let _ = writeln!(
                out,
                r##"<text x="{label_x:.2}" y="{label_y:.2}" font-size="12" text-anchor="middle" dominant-baseline="middle" style="fill: #ffffff">{:.1}%</text>"##,
                share * 100.0
            );

            let legend_y = LEGEND_Y + index as f64 * LEGEND_STEP;
            let _ = writeln!(
                out,
                r#"<rect x="{LEGEND_X:.2}" y="{:.2}" width="14" height="14" fill="{color}"/><text x="{:.2}" y="{:.2}" font-size="13">{}</text>"#,
                legend_y - 11.0,
                LEGEND_X + 20.0,
                legend_y,
                svg::escape(&slice.label)
            );

            start = end;
        }

        out.push_str(svg::close());
        out
    }
}
