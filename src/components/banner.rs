//! Message banners and status lines.
//!
//! A banner is a single message in a border, colored by its kind
//! (success/warning/error/info). Long messages word-wrap into the
//! available inner width; compact overrides collapse to a single truncated
//! line. The one-line status helpers print an icon plus message without
//! any border.

use crate::responsive::{Responsive, ResponsiveConfig};
use crate::style::{self, Color, BOLD, DIM};
use crate::text::{truncate, visual_width, wrap};

/// Border character set for banners, with built-in padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerStyle {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub padding: usize,
}

pub const BANNER_STYLE_DEFAULT: BannerStyle = BannerStyle {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
    padding: 1,
};

pub const BANNER_STYLE_ROUNDED: BannerStyle = BannerStyle {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal: "─",
    vertical: "│",
    padding: 1,
};

pub const BANNER_STYLE_BOLD: BannerStyle = BannerStyle {
    top_left: "┏",
    top_right: "┓",
    bottom_left: "┗",
    bottom_right: "┛",
    horizontal: "━",
    vertical: "┃",
    padding: 1,
};

pub const BANNER_STYLE_DOUBLE: BannerStyle = BannerStyle {
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
    horizontal: "═",
    vertical: "║",
    padding: 1,
};

pub const BANNER_STYLE_SIMPLE: BannerStyle = BannerStyle {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
    padding: 1,
};

/// Semantic banner kind; decides the default colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Warning,
    Error,
    Info,
}

impl BannerKind {
    fn color(self) -> Color {
        match self {
            BannerKind::Success => style::success(),
            BannerKind::Warning => style::warning(),
            BannerKind::Error => style::error(),
            BannerKind::Info => style::info(),
        }
    }
}

/// Bordered message banner.
#[derive(Debug)]
pub struct Banner<'a> {
    ctx: &'a Responsive,
    message: String,
    style: BannerStyle,
    color: Option<Color>,
    border_color: Option<Color>,
    width: usize,
    multiline: bool,
    responsive: Option<ResponsiveConfig>,
    smart_sizing: bool,
}

impl<'a> Banner<'a> {
    /// New banner with kind-appropriate colors and smart width.
    pub fn new(ctx: &'a Responsive, message: impl Into<String>, kind: BannerKind) -> Self {
        let color = kind.color();
        Banner {
            ctx,
            message: message.into(),
            style: BANNER_STYLE_DEFAULT,
            color: Some(color.clone()),
            border_color: Some(color),
            width: ctx.smart_width(0.9),
            multiline: true,
            responsive: None,
            smart_sizing: true,
        }
    }

    /// Banner with explicit colors, bypassing the kind palette.
    pub fn custom(
        ctx: &'a Responsive,
        message: impl Into<String>,
        text_color: Color,
        border_color: Color,
        style: BannerStyle,
    ) -> Self {
        Banner {
            ctx,
            message: message.into(),
            style,
            color: Some(text_color),
            border_color: Some(border_color),
            width: ctx.terminal().width().saturating_sub(4),
            multiline: true,
            responsive: None,
            smart_sizing: false,
        }
    }

    pub fn with_style(mut self, style: BannerStyle) -> Self {
        self.style = style;
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

    /// Fixed width; disables smart sizing.
    pub fn with_width(mut self, width: usize) -> Self {
        if width > 0 {
            self.width = width;
            self.smart_sizing = false;
        }
        self
    }

    /// Smart responsive width as a fraction of the terminal.
    pub fn with_smart_width(mut self, fraction: f64) -> Self {
        self.width = self.ctx.smart_width(fraction);
        self.smart_sizing = true;
        self
    }

    /// Per-tier overrides, re-resolved on every render.
    pub fn with_responsive_config(mut self, config: ResponsiveConfig) -> Self {
        self.responsive = Some(config);
        self.smart_sizing = true;
        self
    }

    /// Wrap long messages over multiple lines (on by default).
    pub fn multiline(mut self, enable: bool) -> Self {
        self.multiline = enable;
        self
    }

    /// Render the banner to a string. Empty messages render nothing.
    pub fn render(&self) -> String {
        if self.message.is_empty() {
            return String::new();
        }

        let mut width = self.width;
        let mut multiline = self.multiline;

        if self.smart_sizing {
            self.ctx.refresh();
            match self.ctx.resolve(self.responsive.as_ref()) {
                Some(config) => {
                    if let Some(w) = config.width {
                        width = w;
                    }
                    if config.compact {
                        multiline = false;
                    }
                }
                None => width = self.ctx.smart_width(0.9),
            }
        }

        let lines = self.prepare_lines(width, multiline);

        // Grow to fit the longest line rather than clipping it.
        let longest = lines.iter().map(|l| visual_width(l)).max().unwrap_or(0);
        let required = longest + 2 * self.style.padding + 2;
        if required > width {
            width = required;
        }

        let mut out = String::new();
        out.push_str(&self.horizontal_border(width, self.style.top_left, self.style.top_right));
        out.push('\n');
        for line in &lines {
            out.push_str(&self.content_line(line, width));
            out.push('\n');
        }
        out.push_str(&self.horizontal_border(width, self.style.bottom_left, self.style.bottom_right));
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

    /// Message lines fitted to the inner width: word-wrapped when
    /// multiline, truncated otherwise.
    fn prepare_lines(&self, width: usize, multiline: bool) -> Vec<String> {
        let available = match width.saturating_sub(2 * self.style.padding + 2) {
            0 => 10,
            w => w,
        };

        if multiline {
            wrap(&self.message, available)
        } else if visual_width(&self.message) > available {
            vec![truncate(&self.message, available)]
        } else {
            vec![self.message.clone()]
        }
    }

    fn horizontal_border(&self, width: usize, left: &str, right: &str) -> String {
        let border = format!(
            "{}{}{}",
            left,
            self.style.horizontal.repeat(width.saturating_sub(2)),
            right
        );
        match &self.border_color {
            Some(color) => color.paint(&border),
            None => border,
        }
    }

    fn content_line(&self, line: &str, width: usize) -> String {
        let available = width.saturating_sub(2);
        let edge = match &self.border_color {
            Some(color) => color.paint(self.style.vertical),
            None => self.style.vertical.to_string(),
        };

        let mut out = String::new();
        out.push_str(&edge);
        out.push_str(&" ".repeat(self.style.padding));

        match &self.color {
            Some(color) => out.push_str(&color.paint(line)),
            None => out.push_str(line),
        }

        let used = 2 * self.style.padding + visual_width(line);
        out.push_str(&" ".repeat(available.saturating_sub(used)));
        out.push_str(&" ".repeat(self.style.padding));
        out.push_str(&edge);
        out
    }
}

// =============================================================================
// One-shot banners and status lines
// =============================================================================

/// Print a success banner.
pub fn success_banner(ctx: &Responsive, message: &str) {
    Banner::new(ctx, message, BannerKind::Success).println();
}

/// Print a warning banner.
pub fn warning_banner(ctx: &Responsive, message: &str) {
    Banner::new(ctx, message, BannerKind::Warning).println();
}

/// Print an error banner.
pub fn error_banner(ctx: &Responsive, message: &str) {
    Banner::new(ctx, message, BannerKind::Error).println();
}

/// Print an info banner.
pub fn info_banner(ctx: &Responsive, message: &str) {
    Banner::new(ctx, message, BannerKind::Info).println();
}

/// Print a one-line success message with icon.
pub fn success_line(message: &str) {
    println!("{}", style::success().paint(&format!("✓ {}", message)));
}

/// Print a one-line warning message with icon.
pub fn warning_line(message: &str) {
    println!("{}", style::warning().paint(&format!("⚠ {}", message)));
}

/// Print a one-line error message with icon.
pub fn error_line(message: &str) {
    println!("{}", style::error().paint(&format!("✗ {}", message)));
}

/// Print a one-line info message with icon.
pub fn info_line(message: &str) {
    println!("{}", style::info().paint(&format!("ℹ {}", message)));
}

/// Print a three-row header rule with a centered title (capped at 80
/// columns).
pub fn header(ctx: &Responsive, title: &str) {
    let width = ctx.terminal().width().min(80);

    let padding = (width.saturating_sub(visual_width(title) + 4)) / 2;
    let rule = "=".repeat(width);

    let mut title_line = format!("={}{}{}", " ".repeat(padding), title, " ".repeat(padding));
    while visual_width(&title_line) < width.saturating_sub(1) {
        title_line.push(' ');
    }
    title_line.push('=');

    println!("{}", BOLD.paint(&rule));
    println!("{}", BOLD.paint(&title_line));
    println!("{}", BOLD.paint(&rule));
}

/// Print a dim horizontal separator (capped at 80 columns).
pub fn separator(ctx: &Responsive) {
    let width = ctx.terminal().width().min(80);
    println!("{}", DIM.paint(&"─".repeat(width)));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responsive::ElementConfig;
    use crate::style::disable_colors;
    use crate::term::Terminal;
    use serial_test::serial;

    fn ctx() -> Responsive {
        Responsive::with_terminal(Terminal::fixed(80, 24, false))
    }

    fn lines(s: &str) -> Vec<&str> {
        s.lines().collect()
    }

    #[test]
    #[serial]
    fn empty_message_renders_nothing() {
        assert_eq!(Banner::new(&ctx(), "", BannerKind::Info).render(), "");
    }

    #[test]
    #[serial]
    fn banner_has_border_and_message() {
        disable_colors();
        let out = Banner::new(&ctx(), "deploy complete", BannerKind::Success).render();
        let rows = lines(&out);
        assert!(rows.len() >= 3);
        assert!(rows[0].starts_with('┌'));
        assert!(rows.last().unwrap().starts_with('└'));
        assert!(out.contains("deploy complete"));
    }

    #[test]
    #[serial]
    fn rows_share_one_width() {
        disable_colors();
        let out = Banner::new(&ctx(), "some message here", BannerKind::Info).render();
        let rows = lines(&out);
        let width = visual_width(rows[0]);
        for row in &rows {
            assert_eq!(visual_width(row), width);
        }
    }

    #[test]
    #[serial]
    fn long_message_wraps() {
        disable_colors();
        let message = "word ".repeat(40);
        let out = Banner::new(&ctx(), message.trim(), BannerKind::Info).render();
        assert!(lines(&out).len() > 3);
    }

    #[test]
    #[serial]
    fn single_line_mode_truncates() {
        disable_colors();
        let message = "word ".repeat(40);
        let out = Banner::new(&ctx(), message.trim(), BannerKind::Info)
            .multiline(false)
            .render();
        let rows = lines(&out);
        assert_eq!(rows.len(), 3);
        assert!(out.contains("..."));
    }

    #[test]
    #[serial]
    fn width_grows_to_fit_unbreakable_word() {
        disable_colors();
        let word = "x".repeat(90); // wider than the smart width at 80 cols
        let out = Banner::new(&ctx(), word.as_str(), BannerKind::Info).render();
        let rows = lines(&out);
        assert_eq!(visual_width(rows[0]), 90 + 2 + 2); // word + padding + borders
    }

    #[test]
    #[serial]
    fn compact_override_forces_single_line() {
        disable_colors();
        let config = ResponsiveConfig {
            xs: Some(ElementConfig {
                compact: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let message = "word ".repeat(40);
        let out = Banner::new(&ctx(), message.trim(), BannerKind::Info)
            .with_responsive_config(config)
            .render();
        assert_eq!(lines(&out).len(), 3);
    }

    #[test]
    #[serial]
    fn width_override_applies() {
        disable_colors();
        let config = ResponsiveConfig {
            xs: Some(ElementConfig {
                width: Some(30),
                ..Default::default()
            }),
            ..Default::default()
        };
        let out = Banner::new(&ctx(), "hi", BannerKind::Info)
            .with_responsive_config(config)
            .render();
        assert_eq!(visual_width(lines(&out)[0]), 30);
    }

    #[test]
    #[serial]
    fn header_is_capped_at_80() {
        // Just ensure it does not panic on narrow terminals.
        let narrow = Responsive::with_terminal(Terminal::fixed(20, 10, false));
        header(&narrow, "a title far wider than the terminal itself");
        separator(&narrow);
    }
}
