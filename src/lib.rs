//! # spark-console
//!
//! Responsive terminal console components for Rust.
//!
//! Colorized text, boxes, tables, banners, progress bars, spinners, charts
//! and line-based prompts, all sized through one responsive layout core:
//!
//! ```text
//! Terminal probe → breakpoint classifier → smart sizing → components
//! ```
//!
//! Terminal widths map to five breakpoints (xs/sm/md/lg/xl); components ask
//! a shared [`Responsive`] context for smart widths, padding, margins and
//! column counts, and measure every content line with the visual-width
//! engine so ANSI color escapes and double-width CJK/emoji glyphs never
//! break alignment.
//!
//! ## Example
//!
//! ```no_run
//! use spark_console::{Panel, Responsive, Table};
//!
//! let ui = Responsive::new();
//!
//! Table::new(&ui)
//!     .add_column("Service")
//!     .add_column("Status")
//!     .add_row(["api", "up"])
//!     .add_row(["worker", "degraded"])
//!     .println();
//!
//! Panel::new(&ui)
//!     .with_title("Deploy")
//!     .add_text("All services rolled out to production.")
//!     .println();
//! ```
//!
//! ## Modules
//!
//! - [`text`] - visual width measurement and pad/truncate/wrap shaping
//! - [`responsive`] - breakpoint classification and smart sizing
//! - [`term`] - terminal probe and ANSI control sequences
//! - [`style`] - color tokens, themes and decorations
//! - [`components`] - panels, tables, banners, progress bars, spinners, charts
//! - [`prompt`] - line-based prompts and autocomplete

pub mod components;
pub mod error;
pub mod prompt;
pub mod responsive;
pub mod style;
pub mod term;
pub mod text;

pub use error::ConsoleError;

pub use text::{char_width, pad, strip_ansi, truncate, visual_width, wrap};

pub use responsive::{
    Breakpoint, BreakpointInfo, ElementConfig, Responsive, ResponsiveConfig,
};

pub use term::Terminal;

pub use style::{
    available_themes, current_theme, disable_colors, enable_colors, gradient, rainbow,
    set_theme, theme_preview, Color, Theme,
};

pub use components::{
    error_banner, error_line, header, info_banner, info_line, key_value_table,
    run_with_progress, separator, simple_table, spin_while, success_banner, success_line,
    warning_banner, warning_line, Alignment, Banner, BannerKind, BannerStyle, BarChart,
    BorderStyle, ChartEntry, Column, MultiBar, Panel, PieChart, ProgressBar, ProgressParts,
    ProgressStyle, Spinner, SpinnerStyle, Table,
};

pub use prompt::{
    ask, ask_choice, ask_confirm, ask_email, ask_multi_choice, ask_number, ask_password,
    ask_required, ask_with_default, ask_with_options, AutoComplete, Confirm, Input, LineSource,
    MultiSelect, Select, StdinSource, Suggestion,
};
