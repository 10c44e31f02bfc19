//! Progress bars.
//!
//! A [`ProgressBar`] renders as `label [████░░░░] 50% (5/10) 1.2/s ETA 4s`,
//! where every segment after the bar is optional and selected through
//! [`ProgressParts`] flags. Mutation (`set`/`add`/`increment`) takes
//! `&self` behind an internal lock, so one bar can be driven from worker
//! threads while another thread renders it (the multi-bar case).

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use bitflags::bitflags;

use crate::responsive::Responsive;
use crate::style::{Color, DIM, GREEN};
use crate::term;

bitflags! {
    /// Optional display segments appended after the bar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ProgressParts: u8 {
        /// Percentage complete.
        const PERCENT = 1 << 0;
        /// Current/total counter.
        const COUNT = 1 << 1;
        /// Items per second.
        const RATE = 1 << 2;
        /// Estimated time to completion.
        const ETA = 1 << 3;
    }
}

impl Default for ProgressParts {
    fn default() -> Self {
        ProgressParts::PERCENT | ProgressParts::COUNT
    }
}

/// Glyph set for the bar body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStyle {
    pub left: &'static str,
    pub right: &'static str,
    pub filled: &'static str,
    pub empty: &'static str,
    /// Leading-edge glyph, drawn at the fill boundary while in progress.
    pub pointer: &'static str,
}

pub const PROGRESS_STYLE_DEFAULT: ProgressStyle = ProgressStyle {
    left: "[",
    right: "]",
    filled: "█",
    empty: "░",
    pointer: "",
};

pub const PROGRESS_STYLE_MODERN: ProgressStyle = ProgressStyle {
    left: "▐",
    right: "▌",
    filled: "▓",
    empty: "░",
    pointer: "",
};

pub const PROGRESS_STYLE_ARROW: ProgressStyle = ProgressStyle {
    left: "(",
    right: ")",
    filled: "=",
    empty: "-",
    pointer: ">",
};

pub const PROGRESS_STYLE_DOTS: ProgressStyle = ProgressStyle {
    left: "[",
    right: "]",
    filled: "●",
    empty: "○",
    pointer: "",
};

pub const PROGRESS_STYLE_BLOCK: ProgressStyle = ProgressStyle {
    left: "▕",
    right: "▏",
    filled: "▉",
    empty: " ",
    pointer: "",
};

pub const PROGRESS_STYLE_GRADIENT: ProgressStyle = ProgressStyle {
    left: "[",
    right: "]",
    filled: "█",
    empty: "▁",
    pointer: "",
};

/// Mutable bar state, shared between driver and renderer threads.
#[derive(Debug)]
struct BarState {
    current: u64,
    total: u64,
    started: Instant,
    finished: bool,
}

/// Terminal progress bar.
#[derive(Debug)]
pub struct ProgressBar {
    width: usize,
    style: ProgressStyle,
    color: Option<Color>,
    bg_color: Option<Color>,
    label: String,
    parts: ProgressParts,
    state: Mutex<BarState>,
}

impl ProgressBar {
    /// New bar sized to the terminal (width - 30, floor 20).
    pub fn new(ctx: &Responsive, total: u64) -> Self {
        let width = ctx.terminal().width().saturating_sub(30).max(20);
        ProgressBar {
            width,
            style: PROGRESS_STYLE_DEFAULT,
            color: Some(GREEN.clone()),
            bg_color: Some(DIM.clone()),
            label: String::new(),
            parts: ProgressParts::default(),
            state: Mutex::new(BarState {
                current: 0,
                total,
                started: Instant::now(),
                finished: false,
            }),
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        if width > 0 {
            self.width = width;
        }
        self
    }

    pub fn with_style(mut self, style: ProgressStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Select the display segments appended after the bar.
    pub fn with_parts(mut self, parts: ProgressParts) -> Self {
        self.parts = parts;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BarState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Set the current value, clamped to `[0, total]`.
    pub fn set(&self, current: u64) {
        let mut state = self.lock();
        state.current = current.min(state.total);
        state.finished = state.current >= state.total;
    }

    /// Advance by `delta`.
    pub fn add(&self, delta: u64) {
        let mut state = self.lock();
        state.current = state.current.saturating_add(delta).min(state.total);
        state.finished = state.current >= state.total;
    }

    /// Advance by one.
    pub fn increment(&self) {
        self.add(1);
    }

    /// Replace the total, re-clamping the current value.
    pub fn set_total(&self, total: u64) {
        let mut state = self.lock();
        state.total = total;
        state.current = state.current.min(total);
        state.finished = state.current >= state.total;
    }

    pub fn current(&self) -> u64 {
        self.lock().current
    }

    pub fn total(&self) -> u64 {
        self.lock().total
    }

    pub fn is_finished(&self) -> bool {
        self.lock().finished
    }

    /// Render the bar and its display segments.
    pub fn render(&self) -> String {
        let state = self.lock();

        let progress = if state.total > 0 {
            (state.current as f64 / state.total as f64).min(1.0)
        } else {
            0.0
        };

        let mut parts: Vec<String> = Vec::new();

        if !self.label.is_empty() {
            parts.push(self.label.clone());
        }

        parts.push(self.build_bar(progress));

        if self.parts.contains(ProgressParts::PERCENT) {
            parts.push(format!("{:3.0}%", progress * 100.0));
        }
        if self.parts.contains(ProgressParts::COUNT) {
            parts.push(format!("({}/{})", state.current, state.total));
        }
        if self.parts.contains(ProgressParts::RATE) {
            let elapsed = state.started.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                parts.push(format!("{:.1}/s", state.current as f64 / elapsed));
            }
        }
        if self.parts.contains(ProgressParts::ETA) && !state.finished {
            if let Some(eta) = eta(&state) {
                parts.push(format!("ETA {}", format_duration(eta)));
            }
        }

        parts.join(" ")
    }

    /// Redraw the bar in place on the current line.
    pub fn print(&self) {
        let rendered = self.render();
        let mut out = io::stdout();
        if self.is_finished() {
            let _ = write!(out, "\r{}\n", rendered);
        } else {
            let _ = write!(out, "\r{}", rendered);
        }
        let _ = out.flush();
    }

    /// Render and print with a trailing newline.
    pub fn println(&self) {
        println!("{}", self.render());
    }

    /// Jump to completion and print the final bar.
    pub fn finish(&self) {
        let total = self.total();
        self.set(total);
        let mut out = io::stdout();
        let _ = write!(out, "\r{}\n", self.render());
        let _ = out.flush();
    }

    /// The bar body between its border glyphs.
    fn build_bar(&self, progress: f64) -> String {
        let filled_len = (self.width as f64 * progress).round() as usize;
        let empty_len = self.width - filled_len.min(self.width);
        let pointer_len = self.style.pointer.chars().count();

        let mut filled = String::new();
        if filled_len > 0 {
            filled.push_str(&self.style.filled.repeat(filled_len.saturating_sub(pointer_len)));
            if !self.style.pointer.is_empty() && progress > 0.0 && progress < 1.0 {
                filled.push_str(self.style.pointer);
            } else {
                filled.push_str(&self.style.filled.repeat(pointer_len.min(filled_len)));
            }
        }

        let mut empty = self.style.empty.repeat(empty_len);

        if let Some(color) = &self.color {
            filled = color.paint(&filled);
        }
        if let Some(color) = &self.bg_color {
            empty = color.paint(&empty);
        }

        format!("{}{}{}{}", self.style.left, filled, empty, self.style.right)
    }
}

/// Remaining time extrapolated from the rate so far.
fn eta(state: &BarState) -> Option<Duration> {
    if state.current == 0 {
        return None;
    }

    let elapsed = state.started.elapsed().as_secs_f64();
    let rate = state.current as f64 / elapsed;
    if rate <= 0.0 {
        return None;
    }

    let remaining = (state.total - state.current) as f64;
    Some(Duration::from_secs_f64(remaining / rate))
}

/// Humanize a duration: `42s`, `3m20s`, `2h5m`.
fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    }
}

// =============================================================================
// MultiBar
// =============================================================================

/// A stack of progress bars redrawn together.
#[derive(Debug, Default)]
pub struct MultiBar<'a> {
    bars: Vec<&'a ProgressBar>,
}

impl<'a> MultiBar<'a> {
    pub fn new() -> Self {
        MultiBar { bars: Vec::new() }
    }

    /// Add a bar to the stack.
    pub fn add_bar(&mut self, bar: &'a ProgressBar) -> &mut Self {
        self.bars.push(bar);
        self
    }

    /// Render all bars, one per line.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self.bars.iter().map(|bar| bar.render()).collect();
        lines.join("\n")
    }

    /// Redraw all bars in place, moving the cursor back up over the stack.
    pub fn print(&self) {
        let output = self.render();
        let lines = output.lines().count();

        if lines > 1 {
            term::move_cursor_up(lines - 1);
        }

        let mut out = io::stdout();
        let _ = write!(out, "\r{}", output);
        let _ = out.flush();
    }

    /// Render and print with a trailing newline.
    pub fn println(&self) {
        println!("{}", self.render());
    }
}

// =============================================================================
// Driving helpers
// =============================================================================

/// Run `work` over each item behind a progress bar.
///
/// Stops at the first error, leaving the bar where it was.
pub fn run_with_progress<T, E>(
    ctx: &Responsive,
    items: &[T],
    label: &str,
    work: impl FnMut(&T) -> Result<(), E>,
) -> Result<(), E> {
    run_with_progress_styled(ctx, items, label, PROGRESS_STYLE_DEFAULT, work)
}

/// [`run_with_progress`] with an explicit bar style.
pub fn run_with_progress_styled<T, E>(
    ctx: &Responsive,
    items: &[T],
    label: &str,
    style: ProgressStyle,
    mut work: impl FnMut(&T) -> Result<(), E>,
) -> Result<(), E> {
    let bar = ProgressBar::new(ctx, items.len() as u64)
        .with_label(label)
        .with_style(style);

    for item in items {
        if let Err(err) = work(item) {
            bar.println();
            return Err(err);
        }
        bar.increment();
        bar.print();
    }

    bar.finish();
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::disable_colors;
    use crate::term::Terminal;
    use serial_test::serial;

    fn ctx() -> Responsive {
        Responsive::with_terminal(Terminal::fixed(80, 24, false))
    }

    fn bar(total: u64) -> ProgressBar {
        ProgressBar::new(&ctx(), total).with_width(10)
    }

    #[test]
    #[serial]
    fn set_clamps_to_total() {
        let bar = bar(10);
        bar.set(25);
        assert_eq!(bar.current(), 10);
        assert!(bar.is_finished());
    }

    #[test]
    #[serial]
    fn increment_advances() {
        let bar = bar(3);
        bar.increment();
        bar.increment();
        assert_eq!(bar.current(), 2);
        assert!(!bar.is_finished());
    }

    #[test]
    #[serial]
    fn set_total_reclamps_current() {
        let bar = bar(10);
        bar.set(8);
        bar.set_total(5);
        assert_eq!(bar.current(), 5);
        assert!(bar.is_finished());
    }

    #[test]
    #[serial]
    fn render_shows_percent_and_count() {
        disable_colors();
        let bar = bar(10);
        bar.set(5);
        let out = bar.render();
        assert!(out.contains("50%"));
        assert!(out.contains("(5/10)"));
    }

    #[test]
    #[serial]
    fn bar_body_has_fixed_width() {
        disable_colors();
        let bar = bar(10);
        for step in [0, 3, 7, 10] {
            bar.set(step);
            let out = bar.render();
            let body: String = out
                .chars()
                .skip_while(|c| *c != '[')
                .take_while(|c| *c != ']')
                .skip(1)
                .collect();
            assert_eq!(body.chars().count(), 10, "at step {}", step);
        }
    }

    #[test]
    #[serial]
    fn zero_total_renders_empty_bar() {
        disable_colors();
        let bar = bar(0);
        let out = bar.render();
        assert!(out.contains("0%"));
    }

    #[test]
    #[serial]
    fn parts_flags_control_segments() {
        disable_colors();
        let bar = ProgressBar::new(&ctx(), 10)
            .with_width(10)
            .with_parts(ProgressParts::PERCENT);
        bar.set(5);
        let out = bar.render();
        assert!(out.contains("50%"));
        assert!(!out.contains("(5/10)"));
    }

    #[test]
    #[serial]
    fn label_leads_the_line() {
        disable_colors();
        let bar = ProgressBar::new(&ctx(), 4).with_width(10).with_label("sync");
        let out = bar.render();
        assert!(out.starts_with("sync "));
    }

    #[test]
    #[serial]
    fn pointer_style_marks_fill_boundary() {
        disable_colors();
        let bar = ProgressBar::new(&ctx(), 10)
            .with_width(10)
            .with_style(PROGRESS_STYLE_ARROW);
        bar.set(5);
        assert!(bar.render().contains('>'));
        bar.set(10);
        assert!(!bar.render().contains('>'));
    }

    #[test]
    #[serial]
    fn concurrent_updates_stay_consistent() {
        use std::thread;

        let bar = bar(1000);
        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..250 {
                        bar.increment();
                    }
                });
            }
            scope.spawn(|| {
                for _ in 0..100 {
                    let _ = bar.render();
                }
            });
        });
        assert_eq!(bar.current(), 1000);
        assert!(bar.is_finished());
    }

    #[test]
    #[serial]
    fn multibar_stacks_renders() {
        disable_colors();
        let a = bar(10);
        let b = bar(10);
        a.set(2);
        b.set(9);
        let mut multi = MultiBar::new();
        multi.add_bar(&a).add_bar(&b);
        let out = multi.render();
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("(2/10)"));
        assert!(out.contains("(9/10)"));
    }

    #[test]
    #[serial]
    fn run_with_progress_stops_on_error() {
        disable_colors();
        let items = [1, 2, 3, 4];
        let mut seen = 0;
        let result: Result<(), &str> = run_with_progress(&ctx(), &items, "work", |n| {
            seen += 1;
            if *n == 3 { Err("boom") } else { Ok(()) }
        });
        assert_eq!(result, Err("boom"));
        assert_eq!(seen, 3);
    }

    #[test]
    fn format_duration_humanizes() {
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration(Duration::from_secs(200)), "3m20s");
        assert_eq!(format_duration(Duration::from_secs(7500)), "2h5m");
    }
}
