//! Column/row table renderer.
//!
//! Columns auto-size to their widest cell (by visual width), then the whole
//! table is clamped to a maximum width by shrinking columns evenly down to
//! a 3-column floor. With smart sizing on (the default) the maximum width
//! and cell padding come from the responsive context and are re-resolved on
//! every render, so a re-render after a terminal resize adapts the layout.

use crate::responsive::{Responsive, ResponsiveConfig};
use crate::style::{Color, BOLD, DIM};
use crate::text::{truncate, visual_width};

use super::{Alignment, BorderStyle, BORDER_DEFAULT};

/// One table column.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    /// Fixed width in columns; 0 means auto.
    pub width: usize,
    pub alignment: Alignment,
    pub color: Option<Color>,
}

/// Column/row table.
#[derive(Debug)]
pub struct Table<'a> {
    ctx: &'a Responsive,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    style: BorderStyle,
    header_color: Option<Color>,
    border_color: Option<Color>,
    show_header: bool,
    show_borders: bool,
    padding: usize,
    auto_resize: bool,
    max_width: usize,
    responsive: Option<ResponsiveConfig>,
    smart_sizing: bool,
}

impl<'a> Table<'a> {
    /// New empty table with smart sizing against the given context.
    pub fn new(ctx: &'a Responsive) -> Self {
        Table {
            ctx,
            columns: Vec::new(),
            rows: Vec::new(),
            style: BORDER_DEFAULT,
            header_color: Some(BOLD.clone()),
            border_color: Some(DIM.clone()),
            show_header: true,
            show_borders: true,
            padding: ctx.smart_padding(),
            auto_resize: true,
            max_width: ctx.smart_width(0.95),
            responsive: None,
            smart_sizing: true,
        }
    }

    pub fn with_style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_header_color(mut self, color: Color) -> Self {
        self.header_color = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    pub fn show_borders(mut self, show: bool) -> Self {
        self.show_borders = show;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn auto_resize(mut self, enable: bool) -> Self {
        self.auto_resize = enable;
        self
    }

    /// Fixed maximum width; disables smart sizing.
    pub fn with_max_width(mut self, width: usize) -> Self {
        if width > 0 {
            self.max_width = width;
            self.smart_sizing = false;
        }
        self
    }

    /// Smart responsive maximum width as a fraction of the terminal.
    pub fn with_smart_width(mut self, fraction: f64) -> Self {
        self.max_width = self.ctx.smart_width(fraction);
        self.smart_sizing = true;
        self
    }

    /// Per-tier overrides, re-resolved on every render.
    pub fn with_responsive_config(mut self, config: ResponsiveConfig) -> Self {
        self.responsive = Some(config);
        self.smart_sizing = true;
        self
    }

    /// Append an auto-sized, left-aligned column.
    pub fn add_column(mut self, header: impl Into<String>) -> Self {
        self.columns.push(Column {
            header: header.into(),
            width: 0,
            alignment: Alignment::Left,
            color: None,
        });
        self
    }

    /// Append a fixed-width column.
    pub fn add_column_with_width(mut self, header: impl Into<String>, width: usize) -> Self {
        self.columns.push(Column {
            header: header.into(),
            width,
            alignment: Alignment::Left,
            color: None,
        });
        self
    }

    /// Append a fully configured column.
    pub fn add_column_with_config(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Append one row. Missing cells render empty; extra cells are ignored.
    pub fn add_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Append several rows.
    pub fn add_rows<I, R, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for row in rows {
            self.rows.push(row.into_iter().map(Into::into).collect());
        }
        self
    }

    pub fn set_column_alignment(mut self, index: usize, alignment: Alignment) -> Self {
        if let Some(column) = self.columns.get_mut(index) {
            column.alignment = alignment;
        }
        self
    }

    pub fn set_column_color(mut self, index: usize, color: Color) -> Self {
        if let Some(column) = self.columns.get_mut(index) {
            column.color = Some(color);
        }
        self
    }

    /// Drop all rows.
    pub fn clear(mut self) -> Self {
        self.rows.clear();
        self
    }

    /// Render the table to a string.
    pub fn render(&self) -> String {
        if self.columns.is_empty() {
            return String::new();
        }

        let mut padding = self.padding;
        let mut max_width = self.max_width;
        let mut show_borders = self.show_borders;

        if self.smart_sizing {
            self.ctx.refresh();
            match self.ctx.resolve(self.responsive.as_ref()) {
                Some(config) => {
                    if let Some(width) = config.width {
                        max_width = width;
                    }
                    if let Some(pad) = config.padding {
                        padding = pad;
                    }
                    if config.compact {
                        padding = padding.min(1);
                        show_borders = false;
                    }
                }
                None => {
                    max_width = self.ctx.smart_width(0.95);
                    padding = self.ctx.smart_padding();
                }
            }
        }

        let widths = self.column_widths(padding, max_width, show_borders);

        let mut out = String::new();

        if show_borders {
            out.push_str(&self.horizontal_border(
                &widths,
                self.style.top_left,
                self.style.top_tee,
                self.style.top_right,
            ));
            out.push('\n');
        }

        if self.show_header {
            out.push_str(&self.header_row(&widths, padding, show_borders));
            out.push('\n');

            if show_borders {
                out.push_str(&self.horizontal_border(
                    &widths,
                    self.style.left_tee,
                    self.style.cross,
                    self.style.right_tee,
                ));
                out.push('\n');
            }
        }

        for row in &self.rows {
            out.push_str(&self.data_row(row, &widths, padding, show_borders));
            out.push('\n');
        }

        if show_borders {
            out.push_str(&self.horizontal_border(
                &widths,
                self.style.bottom_left,
                self.style.bottom_tee,
                self.style.bottom_right,
            ));
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

    /// Final column widths: content-sized, padded, then clamped to the
    /// maximum table width by even shrinking (floor 3).
    fn column_widths(&self, padding: usize, max_width: usize, show_borders: bool) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.width).collect();

        if self.auto_resize {
            for (i, column) in self.columns.iter().enumerate() {
                if widths[i] == 0 {
                    widths[i] = visual_width(&column.header);
                }
            }
            for row in &self.rows {
                for (i, cell) in row.iter().enumerate().take(self.columns.len()) {
                    widths[i] = widths[i].max(visual_width(cell));
                }
            }
            for width in &mut widths {
                *width += padding * 2;
            }

            let mut total: usize = widths.iter().sum();
            if show_borders {
                total += self.columns.len() + 1;
            }
            if total > max_width {
                let excess = total - max_width;
                let per_column = excess / self.columns.len();
                for width in &mut widths {
                    *width = width.saturating_sub(per_column).max(3);
                }
            }
        }

        widths
    }

    fn horizontal_border(
        &self,
        widths: &[usize],
        left: &str,
        junction: &str,
        right: &str,
    ) -> String {
        let mut border = String::from(left);
        for (i, width) in widths.iter().enumerate() {
            border.push_str(&self.style.horizontal.repeat(*width));
            if i < widths.len() - 1 {
                border.push_str(junction);
            }
        }
        border.push_str(right);

        match &self.border_color {
            Some(color) => color.paint(&border),
            None => border,
        }
    }

    fn edge(&self) -> String {
        match &self.border_color {
            Some(color) => color.paint(self.style.vertical),
            None => self.style.vertical.to_string(),
        }
    }

    fn header_row(&self, widths: &[usize], padding: usize, show_borders: bool) -> String {
        let mut row = String::new();
        if show_borders {
            row.push_str(&self.edge());
        }

        for (column, width) in self.columns.iter().zip(widths) {
            let mut cell = format_cell(&column.header, *width, padding, column.alignment);
            if let Some(color) = &self.header_color {
                cell = color.paint(&cell);
            }
            row.push_str(&cell);
            if show_borders {
                row.push_str(&self.edge());
            }
        }
        row
    }

    fn data_row(&self, data: &[String], widths: &[usize], padding: usize, show_borders: bool) -> String {
        let mut row = String::new();
        if show_borders {
            row.push_str(&self.edge());
        }

        for (i, (column, width)) in self.columns.iter().zip(widths).enumerate() {
            let content = data.get(i).map(String::as_str).unwrap_or("");
            let mut cell = format_cell(content, *width, padding, column.alignment);
            if let Some(color) = &column.color {
                cell = color.paint(&cell);
            }
            row.push_str(&cell);
            if show_borders {
                row.push_str(&self.edge());
            }
        }
        row
    }
}

/// Lay one cell out at exactly `width` columns with the given alignment
/// and minimum edge padding.
fn format_cell(content: &str, width: usize, padding: usize, alignment: Alignment) -> String {
    let inner = width.saturating_sub(padding * 2);
    let content = if visual_width(content) > inner {
        truncate(content, inner)
    } else {
        content.to_string()
    };

    let total = width.saturating_sub(visual_width(&content));
    let (left, right) = match alignment {
        Alignment::Left => {
            let left = padding.min(total);
            (left, total - left)
        }
        Alignment::Center => {
            let left = total / 2;
            (left, total - left)
        }
        Alignment::Right => {
            let right = padding.min(total);
            (total - right, right)
        }
    };

    format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
}

// =============================================================================
// Convenience constructors
// =============================================================================

/// Render a table from headers and rows with default styling.
pub fn simple_table(ctx: &Responsive, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new(ctx);
    for header in headers {
        table = table.add_column(*header);
    }
    table.add_rows(rows.iter().map(|r| r.iter().map(String::as_str))).render()
}

/// Render a two-column key/value table.
pub fn key_value_table<'p, I>(ctx: &Responsive, pairs: I) -> String
where
    I: IntoIterator<Item = (&'p str, &'p str)>,
{
    let mut table = Table::new(ctx)
        .add_column("Key")
        .add_column("Value")
        .set_column_color(0, BOLD.clone());
    for (key, value) in pairs {
        table = table.add_row([key, value]);
    }
    table.render()
}

// =============================================================================
// Tests
// =============================================================================
