//! Bar and pie charts.
//!
//! Both charts render into plain strings using block glyphs. The bar chart
//! scales bars against the series maximum and draws either horizontal rows
//! (label gutter + bar + value) or vertical columns (threshold rows with a
//! label/value footer). The pie chart rasterizes a supersampled disc,
//! picking the slice for each cell by its angle and grading edge cells
//! through a coverage ramp.

use std::f64::consts::PI;

use crate::responsive::{Responsive, ResponsiveConfig};
use crate::style::{Color, BLUE, BOLD, CYAN, DIM, GREEN, MAGENTA, RED, YELLOW};
use crate::text::{pad, truncate, visual_width};

/// One labeled value in a chart series.
#[derive(Debug, Clone)]
pub struct ChartEntry {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

/// Rotating default palette for series without explicit colors.
fn palette_color(index: usize) -> Color {
    let palette = [&BLUE, &GREEN, &YELLOW, &RED, &MAGENTA, &CYAN];
    palette[index % palette.len()].clone()
}

// =============================================================================
// Bar chart
// =============================================================================

/// Horizontal or vertical bar chart.
#[derive(Debug)]
pub struct BarChart<'a> {
    ctx: &'a Responsive,
    title: String,
    data: Vec<ChartEntry>,
    width: usize,
    height: usize,
    max_value: f64,
    show_values: bool,
    horizontal: bool,
    responsive: Option<ResponsiveConfig>,
    smart_sizing: bool,
}

impl<'a> BarChart<'a> {
    /// New vertical bar chart at 80% smart width.
    pub fn new(ctx: &'a Responsive, title: impl Into<String>) -> Self {
        BarChart {
            ctx,
            title: title.into(),
            data: Vec::new(),
            width: ctx.smart_width(0.8),
            height: 10,
            max_value: 0.0,
            show_values: true,
            horizontal: false,
            responsive: None,
            smart_sizing: true,
        }
    }

    /// Append a value; `None` takes the next palette color.
    pub fn add_data(mut self, label: impl Into<String>, value: f64, color: Option<Color>) -> Self {
        let color = color.unwrap_or_else(|| palette_color(self.data.len()));
        self.data.push(ChartEntry {
            label: label.into(),
            value,
            color,
        });
        if value > self.max_value {
            self.max_value = value;
        }
        self
    }

    /// Fixed width; disables smart sizing.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self.smart_sizing = false;
        self
    }

    /// Row count for vertical charts.
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Smart responsive width as a fraction of the terminal.
    pub fn with_smart_width(mut self, fraction: f64) -> Self {
        self.width = self.ctx.smart_width(fraction);
        self.smart_sizing = true;
        self
    }

    pub fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Per-tier overrides, re-resolved on every render.
    pub fn with_responsive_config(mut self, config: ResponsiveConfig) -> Self {
        self.responsive = Some(config);
        self.smart_sizing = true;
        self
    }

    /// Render the chart to a string. Empty series render nothing.
    pub fn render(&self) -> String {
        if self.data.is_empty() {
            return String::new();
        }

        let mut width = self.width;
        let mut show_values = self.show_values;

        if self.smart_sizing {
            self.ctx.refresh();
            match self.ctx.resolve(self.responsive.as_ref()) {
                Some(config) => {
                    if let Some(w) = config.width {
                        width = w;
                    }
                    if config.compact {
                        show_values = false;
                    }
                }
                None => width = self.ctx.smart_width(0.8),
            }
        }

        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&BOLD.paint(&self.title));
            out.push_str("\n\n");
        }

        if self.horizontal {
            out.push_str(&self.render_horizontal(width, show_values));
        } else {
            out.push_str(&self.render_vertical(width, show_values));
        }
        out
    }

    /// Render and print.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    /// Render and print with a trailing newline.
    pub fn println(&self) {
        println!("{}", self.render());
    }

    fn render_horizontal(&self, width: usize, show_values: bool) -> String {
        let mut out = String::new();

        let label_width = self
            .data
            .iter()
            .map(|entry| visual_width(&entry.label))
            .max()
            .unwrap_or(0);

        let bar_width = width.saturating_sub(label_width + 10).max(10);

        for entry in &self.data {
            out.push_str(&pad(&entry.label, label_width));
            out.push(' ');

            let fraction = if self.max_value > 0.0 {
                entry.value / self.max_value
            } else {
                0.0
            };
            let filled = (fraction * bar_width as f64) as usize;

            let mut bar = "█".repeat(filled.min(bar_width));
            bar.push_str(&"░".repeat(bar_width - filled.min(bar_width)));
            out.push_str(&entry.color.paint(&bar));

            if show_values {
                out.push_str(&DIM.paint(&format!(" {:.1}", entry.value)));
            }
            out.push('\n');
        }

        out
    }

    fn render_vertical(&self, width: usize, show_values: bool) -> String {
        let mut out = String::new();

        let count = self.data.len();
        let bar_width = (width.saturating_sub(count.saturating_sub(1)) / count).max(1);

        for row in (1..=self.height).rev() {
            let threshold = (row as f64 / self.height as f64) * self.max_value;

            for (i, entry) in self.data.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                if entry.value >= threshold {
                    out.push_str(&entry.color.paint(&"█".repeat(bar_width)));
                } else {
                    out.push_str(&" ".repeat(bar_width));
                }
            }
            out.push('\n');
        }

        for (i, entry) in self.data.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&pad(&truncate(&entry.label, bar_width), bar_width));
        }
        out.push('\n');

        if show_values {
            for (i, entry) in self.data.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let value = format!("{:.1}", entry.value);
                out.push_str(&DIM.paint(&pad(&truncate(&value, bar_width), bar_width)));
            }
            out.push('\n');
        }

        out
    }
}

// =============================================================================
// Pie chart
// =============================================================================

/// Block-glyph pie chart with legend.
#[derive(Debug)]
pub struct PieChart {
    title: String,
    data: Vec<ChartEntry>,
    radius: usize,
    show_percentages: bool,
    show_legend: bool,
}

impl PieChart {
    /// New pie chart with radius 8.
    pub fn new(title: impl Into<String>) -> Self {
        PieChart {
            title: title.into(),
            data: Vec::new(),
            radius: 8,
            show_percentages: true,
            show_legend: true,
        }
    }

    /// Append a slice; `None` takes the next palette color.
    pub fn add_data(mut self, label: impl Into<String>, value: f64, color: Option<Color>) -> Self {
        let color = color.unwrap_or_else(|| palette_color(self.data.len()));
        self.data.push(ChartEntry {
            label: label.into(),
            value,
            color,
        });
        self
    }

    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    pub fn show_percentages(mut self, show: bool) -> Self {
        self.show_percentages = show;
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Render the chart to a string. Empty series render nothing.
    pub fn render(&self) -> String {
        if self.data.is_empty() {
            return String::new();
        }

        let mut out = String::new();
        if !self.title.is_empty() {
            out.push_str(&BOLD.paint(&self.title));
            out.push_str("\n\n");
        }

        let total: f64 = self.data.iter().map(|entry| entry.value).sum();
        let radius = self.radius as f64;
        let size = (radius * 2.2) as usize;

        // Terminal cells are roughly twice as tall as wide.
        let aspect = 0.45;

        for y in 0..size {
            let mut line = String::new();
            for x in 0..(size * 2) {
                let fx = x as f64 / 2.0 - radius;
                let fy = (y as f64 - radius) / aspect;

                // 4x4 supersampling for smooth disc edges.
                let samples = 4;
                let mut coverage = 0.0;
                for sy in 0..samples {
                    for sx in 0..samples {
                        let sample_x = fx + (sx as f64 - 1.5) / samples as f64 * 0.5;
                        let sample_y = fy + (sy as f64 - 1.5) / samples as f64 * 0.5 / aspect;
                        if (sample_x * sample_x + sample_y * sample_y).sqrt() <= radius {
                            coverage += 1.0 / (samples * samples) as f64;
                        }
                    }
                }

                if coverage > 0.1 {
                    let mut angle = fx.atan2(-fy);
                    if angle < 0.0 {
                        angle += 2.0 * PI;
                    }

                    let slice = self.slice_at(angle, total);

                    let glyph = if coverage > 0.9 {
                        "█"
                    } else if coverage > 0.7 {
                        "▉"
                    } else if coverage > 0.5 {
                        "▊"
                    } else if coverage > 0.3 {
                        "▋"
                    } else {
                        " "
                    };

                    match slice {
                        Some(entry) => line.push_str(&entry.color.paint(glyph)),
                        None => line.push_str(glyph),
                    }
                } else {
                    line.push(' ');
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        if self.show_legend {
            out.push_str("\nLegend:\n");
            for entry in &self.data {
                out.push_str(&format!("  {} {}", entry.color.paint("█"), entry.label));
                if self.show_percentages {
                    let percentage = if total > 0.0 {
                        entry.value / total * 100.0
                    } else {
                        0.0
                    };
                    out.push_str(&format!(" ({:.1}%)", percentage));
                }
                out.push('\n');
            }
        }

        out
    }

    /// Render and print.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    /// Render and print with a trailing newline.
    pub fn println(&self) {
        println!("{}", self.render());
    }

    /// The slice owning the given angle (clockwise from twelve o'clock).
    fn slice_at(&self, angle: f64, total: f64) -> Option<&ChartEntry> {
        if total <= 0.0 {
            return None;
        }

        let mut current = 0.0;
        for entry in &self.data {
            let sweep = entry.value / total * 2.0 * PI;
            if angle >= current && angle < current + sweep {
                return Some(entry);
            }
            current += sweep;
        }
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
