//! Bordered content panel.
//!
//! A panel holds an ordered list of content lines and renders them inside
//! an optional border with a centered title. Width and height are either
//! fixed or auto-sized from the content; alignment, padding and colors are
//! configurable per instance. All width math runs through the visual-width
//! measurer, so colored and CJK content lines up correctly.

use crate::responsive::Responsive;
use crate::style::{self, Color, BOLD, DIM};
use crate::text::{truncate, visual_width, wrap};

use super::{Alignment, BorderStyle, BORDER_DEFAULT};

/// Bordered content panel with a title.
#[derive(Debug, Clone)]
pub struct Panel {
    content: Vec<String>,
    title: String,
    style: BorderStyle,
    alignment: Alignment,
    padding: usize,
    width: usize,
    height: usize,
    color: Option<Color>,
    border_color: Option<Color>,
    title_color: Option<Color>,
    auto_size: bool,
    show_border: bool,
}

impl Panel {
    /// New empty panel, sized to the terminal width minus a margin until
    /// content or an explicit width decides otherwise.
    pub fn new(ctx: &Responsive) -> Self {
        Panel {
            content: Vec::new(),
            title: String::new(),
            style: BORDER_DEFAULT,
            alignment: Alignment::Left,
            padding: 1,
            width: ctx.terminal().width().saturating_sub(4),
            height: 0,
            color: None,
            border_color: Some(DIM.clone()),
            title_color: Some(BOLD.clone()),
            auto_size: true,
            show_border: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Fixed width in columns; disables auto-sizing.
    pub fn with_width(mut self, width: usize) -> Self {
        if width > 0 {
            self.width = width;
            self.auto_size = false;
        }
        self
    }

    /// Fixed height in rows; disables auto-sizing.
    pub fn with_height(mut self, height: usize) -> Self {
        if height > 0 {
            self.height = height;
            self.auto_size = false;
        }
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn auto_size(mut self, enable: bool) -> Self {
        self.auto_size = enable;
        self
    }

    pub fn show_border(mut self, show: bool) -> Self {
        self.show_border = show;
        self
    }

    /// Append one content line verbatim.
    pub fn add_line(mut self, line: impl Into<String>) -> Self {
        self.content.push(line.into());
        self
    }

    /// Append several content lines verbatim.
    pub fn add_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append text, word-wrapped to the panel's inner width.
    pub fn add_text(mut self, text: &str) -> Self {
        if text.is_empty() {
            self.content.push(String::new());
            return self;
        }

        let available = match self.inner_width() {
            0 => 20,
            w => w,
        };
        self.content.extend(wrap(text, available));
        self
    }

    /// Append an empty line.
    pub fn add_empty_line(mut self) -> Self {
        self.content.push(String::new());
        self
    }

    /// Append a horizontal separator rule.
    pub fn add_separator(mut self) -> Self {
        let available = self.inner_width();
        let mut separator = "─".repeat(available);
        if let Some(color) = &self.border_color {
            separator = color.paint(&separator);
        }
        self.content.push(separator);
        self
    }

    /// Drop all content.
    pub fn clear(mut self) -> Self {
        self.content.clear();
        self
    }

    /// Columns available to content inside padding and borders.
    fn inner_width(&self) -> usize {
        let border = if self.show_border { 2 } else { 0 };
        self.width.saturating_sub(self.padding * 2 + border)
    }

    /// Render the panel to a string.
    pub fn render(&self) -> String {
        let mut panel = self.clone();
        if panel.auto_size {
            panel.calculate_size();
        }

        let mut out = String::new();

        if panel.show_border {
            out.push_str(&panel.render_top_border());
            out.push('\n');
        }

        for line in panel.prepare_content_lines() {
            out.push_str(&panel.render_content_line(&line));
            out.push('\n');
        }

        if panel.show_border {
            out.push_str(&panel.render_bottom_border());
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

    /// Size the panel to its content and title.
    fn calculate_size(&mut self) {
        if self.content.is_empty() {
            self.width = 20;
            self.height = 3;
            return;
        }

        let max_line = self
            .content
            .iter()
            .map(|line| visual_width(line))
            .max()
            .unwrap_or(0);

        let border = if self.show_border { 2 } else { 0 };
        let mut required = max_line + self.padding * 2 + border;

        if !self.title.is_empty() && visual_width(&self.title) + 4 > required {
            required = visual_width(&self.title) + 4;
        }

        self.width = required;
        self.height = self.content.len() + self.padding * 2 + border;
    }

    /// Content lines with vertical padding applied and fixed heights
    /// honored.
    fn prepare_content_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.content.len() + self.padding * 2);

        for _ in 0..self.padding {
            lines.push(String::new());
        }
        lines.extend(self.content.iter().cloned());
        for _ in 0..self.padding {
            lines.push(String::new());
        }

        if !self.auto_size && self.height > 0 {
            let border = if self.show_border { 2 } else { 0 };
            let required = self.height.saturating_sub(border);
            while lines.len() < required {
                lines.push(String::new());
            }
            lines.truncate(required);
        }

        lines
    }

    fn render_top_border(&self) -> String {
        let border_width = self.width.saturating_sub(2);
        let title_width = visual_width(&self.title);

        let border = if self.title.is_empty() {
            format!(
                "{}{}{}",
                self.style.top_left,
                self.style.horizontal.repeat(border_width),
                self.style.top_right
            )
        } else if title_width + 4 >= border_width {
            // Not enough room to center: inline a truncated title.
            let max_title = border_width.saturating_sub(4);
            if max_title > 0 {
                let title = truncate(&self.title, max_title);
                let fill = border_width.saturating_sub(visual_width(&title) + 2);
                format!(
                    "{}─{}─{}{}",
                    self.style.top_left,
                    title,
                    self.style.horizontal.repeat(fill),
                    self.style.top_right
                )
            } else {
                format!(
                    "{}{}{}",
                    self.style.top_left,
                    self.style.horizontal.repeat(border_width),
                    self.style.top_right
                )
            }
        } else {
            let left = (border_width - title_width - 2) / 2;
            let right = border_width - title_width - 2 - left;
            let title = match &self.title_color {
                Some(color) => color.paint(&self.title),
                None => self.title.clone(),
            };
            format!(
                "{}{} {} {}{}",
                self.style.top_left,
                self.style.horizontal.repeat(left),
                title,
                self.style.horizontal.repeat(right),
                self.style.top_right
            )
        };

        match &self.border_color {
            Some(color) => color.paint(&border),
            None => border,
        }
    }

    fn render_bottom_border(&self) -> String {
        let border_width = self.width.saturating_sub(2);
        let border = format!(
            "{}{}{}",
            self.style.bottom_left,
            self.style.horizontal.repeat(border_width),
            self.style.bottom_right
        );

        match &self.border_color {
            Some(color) => color.paint(&border),
            None => border,
        }
    }

    fn render_content_line(&self, line: &str) -> String {
        let available = if self.show_border {
            self.width.saturating_sub(2)
        } else {
            self.width
        };

        let line = if visual_width(line) > available {
            truncate(line, available)
        } else {
            line.to_string()
        };

        let mut aligned = self.align(&line, available);
        if let Some(color) = &self.color {
            aligned = color.paint(&aligned);
        }

        if self.show_border {
            let edge = match &self.border_color {
                Some(color) => color.paint(self.style.vertical),
                None => self.style.vertical.to_string(),
            };
            format!("{}{}{}", edge, aligned, edge)
        } else {
            aligned
        }
    }

    fn align(&self, text: &str, width: usize) -> String {
        let text_width = visual_width(text);
        if text_width >= width {
            return text.to_string();
        }

        let padding = width - text_width;
        match self.alignment {
            Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
            Alignment::Center => {
                let left = padding / 2;
                format!("{}{}{}", " ".repeat(left), text, " ".repeat(padding - left))
            }
            Alignment::Right => format!("{}{}", " ".repeat(padding), text),
        }
    }

    // =========================================================================
    // Convenience constructors
    // =========================================================================

    /// Plain box with a title and wrapped content.
    pub fn simple(ctx: &Responsive, title: &str, content: &str) -> String {
        Panel::new(ctx).with_title(title).add_text(content).render()
    }

    /// Info-styled box.
    pub fn info(ctx: &Responsive, title: &str, content: &str) -> String {
        Panel::new(ctx)
            .with_title(title)
            .with_border_color(style::info())
            .with_title_color(style::info())
            .add_text(content)
            .render()
    }

    /// Warning-styled box.
    pub fn warning(ctx: &Responsive, title: &str, content: &str) -> String {
        Panel::new(ctx)
            .with_title(title)
            .with_border_color(style::warning())
            .with_title_color(style::warning())
            .add_text(content)
            .render()
    }

    /// Error-styled box.
    pub fn error(ctx: &Responsive, title: &str, content: &str) -> String {
        Panel::new(ctx)
            .with_title(title)
            .with_border_color(style::error())
            .with_title_color(style::error())
            .add_text(content)
            .render()
    }

    /// Success-styled box.
    pub fn success(ctx: &Responsive, title: &str, content: &str) -> String {
        Panel::new(ctx)
            .with_title(title)
            .with_border_color(style::success())
            .with_title_color(style::success())
            .add_text(content)
            .render()
    }
}

// =============================================================================
// Tests
// =============================================================================
