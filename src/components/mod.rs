//! Visual components.
//!
//! Every component follows the same pattern: a builder configured with
//! chained `with_*` calls, a pure `render()` producing the final string,
//! and `print`/`println` conveniences. Components that size themselves
//! responsively take a [`Responsive`](crate::responsive::Responsive)
//! context by reference and consult it for smart widths, padding and
//! per-tier overrides.

mod banner;
mod chart;
mod panel;
mod progress;
mod spinner;
mod table;

pub use banner::{
    error_banner, error_line, header, info_banner, info_line, separator, success_banner,
    success_line, warning_banner, warning_line, Banner, BannerKind, BannerStyle,
    BANNER_STYLE_BOLD, BANNER_STYLE_DEFAULT, BANNER_STYLE_DOUBLE, BANNER_STYLE_ROUNDED,
    BANNER_STYLE_SIMPLE,
};
pub use chart::{BarChart, ChartEntry, PieChart};
pub use panel::Panel;
pub use progress::{
    run_with_progress, run_with_progress_styled, MultiBar, ProgressBar, ProgressParts,
    ProgressStyle, PROGRESS_STYLE_ARROW, PROGRESS_STYLE_BLOCK, PROGRESS_STYLE_DEFAULT,
    PROGRESS_STYLE_DOTS, PROGRESS_STYLE_GRADIENT, PROGRESS_STYLE_MODERN,
};
pub use spinner::{
    spin_while, spin_while_styled, Spinner, SpinnerStyle, SPINNER_ARROW, SPINNER_BOUNCE,
    SPINNER_CLOCK, SPINNER_DOTS, SPINNER_EARTH, SPINNER_GROW, SPINNER_LINE, SPINNER_MOON,
    SPINNER_PULSE, SPINNER_RUNNER,
};
pub use table::{key_value_table, simple_table, Column, Table};

// =============================================================================
// Shared component types
// =============================================================================

/// Horizontal alignment of text within a fixed-width cell or line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Box-drawing character set for bordered components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
    pub cross: &'static str,
    pub top_tee: &'static str,
    pub bottom_tee: &'static str,
    pub left_tee: &'static str,
    pub right_tee: &'static str,
}

/// Light single-line borders.
pub const BORDER_DEFAULT: BorderStyle = BorderStyle {
    top_left: "┌",
    top_right: "┐",
    bottom_left: "└",
    bottom_right: "┘",
    horizontal: "─",
    vertical: "│",
    cross: "┼",
    top_tee: "┬",
    bottom_tee: "┴",
    left_tee: "├",
    right_tee: "┤",
};

/// Rounded corners.
pub const BORDER_ROUNDED: BorderStyle = BorderStyle {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal: "─",
    vertical: "│",
    cross: "┼",
    top_tee: "┬",
    bottom_tee: "┴",
    left_tee: "├",
    right_tee: "┤",
};

/// Heavy single-line borders.
pub const BORDER_BOLD: BorderStyle = BorderStyle {
    top_left: "┏",
    top_right: "┓",
    bottom_left: "┗",
    bottom_right: "┛",
    horizontal: "━",
    vertical: "┃",
    cross: "╋",
    top_tee: "┳",
    bottom_tee: "┻",
    left_tee: "┣",
    right_tee: "┫",
};

/// Double-line borders.
pub const BORDER_DOUBLE: BorderStyle = BorderStyle {
    top_left: "╔",
    top_right: "╗",
    bottom_left: "╚",
    bottom_right: "╝",
    horizontal: "═",
    vertical: "║",
    cross: "╬",
    top_tee: "╦",
    bottom_tee: "╩",
    left_tee: "╠",
    right_tee: "╣",
};

/// ASCII-only borders.
pub const BORDER_SIMPLE: BorderStyle = BorderStyle {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
    cross: "+",
    top_tee: "+",
    bottom_tee: "+",
    left_tee: "+",
    right_tee: "+",
};

/// Invisible borders (spacing only).
pub const BORDER_MINIMAL: BorderStyle = BorderStyle {
    top_left: " ",
    top_right: " ",
    bottom_left: " ",
    bottom_right: " ",
    horizontal: " ",
    vertical: " ",
    cross: " ",
    top_tee: " ",
    bottom_tee: " ",
    left_tee: " ",
    right_tee: " ",
};
