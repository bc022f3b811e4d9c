use std::fmt::Write;

use super::{pie::format_value, svg, Chart};

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    title: String,
    x_label: String,
    y_label: String,
    bars: Vec<Bar>,
}

const LEFT: f64 = 90.0;
const RIGHT: f64 = 30.0;
const TOP: f64 = 60.0;
const BOTTOM: f64 = 100.0;
const TICKS: usize = 5;
const MAX_X_LABELS: usize = 20;

impl BarChart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        bars: impl IntoIterator<Item = Bar>,
    ) -> Self {
        BarChart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars: bars.into_iter().collect(),
        }
    }

    fn y_range(&self) -> (f64, f64) {
        let finite = self.bars.iter().map(|bar| bar.value).filter(|v| v.is_finite());
        let (min, max) = finite.fold((0.0_f64, 0.0_f64), |(min, max), v| (min.min(v), max.max(v)));
        if max == min {
            (min, min + 1.0)
        } else {
            (min, max)
        }
    }
}

impl Chart for BarChart {
    fn title(&self) -> &str {
        &self.title
    }

    fn render_svg(&self) -> String {
        let mut out = svg::open(svg::WIDTH, svg::HEIGHT, &self.title);
        let plot_width = svg::WIDTH - LEFT - RIGHT;
        let plot_height = svg::HEIGHT - TOP - BOTTOM;
        let (min, max) = self.y_range();
        let y = |value: f64| TOP + (max - value) / (max - min) * plot_height;

        let _ = writeln!(
            out,
            r##"<rect x="{LEFT:.2}" y="{TOP:.2}" width="{plot_width:.2}" height="{plot_height:.2}" fill="#e5ecf6"/>"##
        );

        for tick in 0..=TICKS {
            let value = min + (max - min) * tick as f64 / TICKS as f64;
            let tick_y = y(value);
            let _ = writeln!(
                out,
                r##"<line x1="{LEFT:.2}" y1="{tick_y:.2}" x2="{:.2}" y2="{tick_y:.2}" stroke="#ffffff" stroke-width="1"/><text x="{:.2}" y="{tick_y:.2}" font-size="12" text-anchor="end" dominant-baseline="middle">{}</text>"##,
                LEFT + plot_width,
                LEFT - 8.0,
                format_value((value * 100.0).round() / 100.0)
            );
        }

        let _ = writeln!(
            out,
            r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="middle">{}</text>"#,
            LEFT + plot_width / 2.0,
            svg::HEIGHT - 12.0,
            svg::escape(&self.x_label)
        );
        let _ = writeln!(
            out,
            r#"<text x="20" y="{0:.2}" font-size="14" text-anchor="middle" transform="rotate(-90 20 {0:.2})">{1}</text>"#,
            TOP + plot_height / 2.0,
            svg::escape(&self.y_label)
        );

        if self.bars.is_empty() {
            out.push_str(&svg::no_data(svg::WIDTH, svg::HEIGHT));
            out.push_str(svg::close());
            return out;
        }

        let band = plot_width / self.bars.len() as f64;
        let label_every = self.bars.len().div_ceil(MAX_X_LABELS);
        let rotate_labels = self.bars.len() > 8;
        let zero_y = y(0.0);

        for (index, bar) in self.bars.iter().enumerate() {
            let value = if bar.value.is_finite() { bar.value } else { 0.0 };
            let bar_x = LEFT + index as f64 * band + band * 0.1;
            let bar_width = band * 0.8;
            let bar_top = y(value.max(0.0));
            let bar_height = (y(value.min(0.0)) - bar_top).max(0.0);
            let label = svg::escape(&bar.label);

            let _ = writeln!(
                out,
                r#"<rect x="{bar_x:.2}" y="{bar_top:.2}" width="{bar_width:.2}" height="{bar_height:.2}" fill="{}"><title>{label}: {}</title></rect>"#,
                svg::color(0),
                format_value(bar.value)
            );

            if index % label_every == 0 {
                let label_x = bar_x + bar_width / 2.0;
                let label_y = TOP + plot_height + 18.0;
                if rotate_labels {
                    let _ = writeln!(
                        out,
                        r#"<text x="{label_x:.2}" y="{label_y:.2}" font-size="11" text-anchor="end" transform="rotate(-45 {label_x:.2} {label_y:.2})">{label}</text>"#
                    );
                } else {
                    let _ = writeln!(
                        out,
                        r#"<text x="{label_x:.2}" y="{label_y:.2}" font-size="12" text-anchor="middle">{label}</text>"#
                    );
                }
            }
        }

        let _ = writeln!(
            out,
            r##"<line x1="{LEFT:.2}" y1="{zero_y:.2}" x2="{:.2}" y2="{zero_y:.2}" stroke="#2a3f5f" stroke-width="1"/>"##,
            LEFT + plot_width
        );

        out.push_str(svg::close());
        out
    }
}
