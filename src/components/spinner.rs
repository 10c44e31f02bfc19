//! Animated spinners.
//!
//! A spinner owns a background thread that redraws its frame line at the
//! style's interval until stopped. The message can be swapped while the
//! animation runs; stopping clears the line and restores the cursor, and
//! the outcome helpers (`success`/`error`/`warning`/`info`) replace the
//! spinner with an icon line.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use std::fmt;

use crate::style::{self, Color, CYAN};
use crate::term;

/// Frame set and redraw interval for a spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinnerStyle {
    pub frames: &'static [&'static str],
    pub interval: Duration,
}

pub const SPINNER_DOTS: SpinnerStyle = SpinnerStyle {
    frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
    interval: Duration::from_millis(80),
};

pub const SPINNER_LINE: SpinnerStyle = SpinnerStyle {
    frames: &["|", "/", "-", "\\"],
    interval: Duration::from_millis(100),
};

pub const SPINNER_ARROW: SpinnerStyle = SpinnerStyle {
    frames: &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"],
    interval: Duration::from_millis(120),
};

pub const SPINNER_BOUNCE: SpinnerStyle = SpinnerStyle {
    frames: &["⠁", "⠂", "⠄", "⠂"],
    interval: Duration::from_millis(200),
};

pub const SPINNER_CLOCK: SpinnerStyle = SpinnerStyle {
    frames: &["🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚", "🕛"],
    interval: Duration::from_millis(100),
};

pub const SPINNER_EARTH: SpinnerStyle = SpinnerStyle {
    frames: &["🌍", "🌎", "🌏"],
    interval: Duration::from_millis(180),
};

pub const SPINNER_MOON: SpinnerStyle = SpinnerStyle {
    frames: &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘"],
    interval: Duration::from_millis(80),
};

pub const SPINNER_RUNNER: SpinnerStyle = SpinnerStyle {
    frames: &["🚶", "🏃"],
    interval: Duration::from_millis(140),
};

pub const SPINNER_PULSE: SpinnerStyle = SpinnerStyle {
    frames: &["●", "◐", "◑", "◒", "◓", "◔", "◕", "◖", "◗"],
    interval: Duration::from_millis(100),
};

pub const SPINNER_GROW: SpinnerStyle = SpinnerStyle {
    frames: &["▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃"],
    interval: Duration::from_millis(120),
};

/// State shared with the animation thread.
#[derive(Debug)]
struct Shared {
    message: Mutex<String>,
    running: AtomicBool,
}

/// Animated terminal spinner.
#[derive(Debug)]
pub struct Spinner {
    style: SpinnerStyle,
    color: Option<Color>,
    prefix: String,
    suffix: String,
    hide_cursor: bool,
    shared: Arc<Shared>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// New spinner with the dots style.
    pub fn new() -> Self {
        Spinner {
            style: SPINNER_DOTS,
            color: Some(CYAN.clone()),
            prefix: String::new(),
            suffix: String::new(),
            hide_cursor: true,
            shared: Arc::new(Shared {
                message: Mutex::new(String::new()),
                running: AtomicBool::new(false),
            }),
            stop: None,
            handle: None,
        }
    }

    pub fn with_style(mut self, style: SpinnerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        *self.shared.message.lock().unwrap_or_else(|e| e.into_inner()) = message.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Hide the cursor while spinning (on by default).
    pub fn hide_cursor(mut self, hide: bool) -> Self {
        self.hide_cursor = hide;
        self
    }

    /// Start the animation thread. Starting a running spinner is a no-op.
    pub fn start(&mut self) {
        if self.shared.running.swap(true, Ordering::SeqCst) {
            return;
        }

        if self.hide_cursor {
            term::hide_cursor();
        }

        let (tx, rx) = mpsc::channel::<()>();
        self.stop = Some(tx);

        let shared = Arc::clone(&self.shared);
        let style = self.style;
        let color = self.color.clone();
        let prefix = self.prefix.clone();
        let suffix = self.suffix.clone();

        self.handle = Some(thread::spawn(move || {
            let mut frame = 0;
            loop {
                match rx.recv_timeout(style.interval) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                    Err(RecvTimeoutError::Timeout) => {}
                }

                let message = shared
                    .message
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .clone();
                let line = build_output(style.frames[frame], &color, &prefix, &message, &suffix);

                let mut out = io::stdout();
                let _ = term::erase_line(&mut out);
                let _ = write!(out, "{}", line);
                let _ = out.flush();

                frame = (frame + 1) % style.frames.len();
            }
        }));
    }

    /// Stop the animation, clear the line, restore the cursor. Idempotent.
    pub fn stop(&mut self) {
        if !self.shared.running.swap(false, Ordering::SeqCst) {
            return;
        }

        // Dropping the sender also wakes the thread; send is belt-and-braces
        // for the case where the receiver is mid-timeout.
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }

        term::clear_line();
        if self.hide_cursor {
            term::show_cursor();
        }
    }

    /// Stop and print a success icon line.
    pub fn success(&mut self, message: &str) {
        self.stop();
        println!("{}{}", style::success().paint("✓ "), message);
    }

    /// Stop and print an error icon line.
    pub fn error(&mut self, message: &str) {
        self.stop();
        println!("{}{}", style::error().paint("✗ "), message);
    }

    /// Stop and print a warning icon line.
    pub fn warning(&mut self, message: &str) {
        self.stop();
        println!("{}{}", style::warning().paint("⚠ "), message);
    }

    /// Stop and print an info icon line.
    pub fn info(&mut self, message: &str) {
        self.stop();
        println!("{}{}", style::info().paint("ℹ "), message);
    }

    /// Swap the message while the animation runs.
    pub fn update_message(&self, message: impl Into<String>) {
        *self.shared.message.lock().unwrap_or_else(|e| e.into_inner()) = message.into();
    }

    /// Whether the animation thread is running.
    pub fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst)
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Compose one frame line: `prefix frame message suffix`.
fn build_output(
    frame: &str,
    color: &Option<Color>,
    prefix: &str,
    message: &str,
    suffix: &str,
) -> String {
    let mut out = String::new();

    if !prefix.is_empty() {
        out.push_str(prefix);
        out.push(' ');
    }

    match color {
        Some(color) => out.push_str(&color.paint(frame)),
        None => out.push_str(frame),
    }

    if !message.is_empty() {
        out.push(' ');
        out.push_str(message);
    }
    if !suffix.is_empty() {
        out.push(' ');
        out.push_str(suffix);
    }

    out
}

// =============================================================================
// Driving helpers
// =============================================================================

/// Run `work` behind a spinner, reporting the outcome as an icon line.
pub fn spin_while<T, E: fmt::Display>(
    message: &str,
    work: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    spin_while_styled(SPINNER_DOTS, message, work)
}

/// [`spin_while`] with an explicit spinner style.
pub fn spin_while_styled<T, E: fmt::Display>(
    style: SpinnerStyle,
    message: &str,
    work: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let mut spinner = Spinner::new().with_style(style).with_message(message);
    spinner.start();

    match work() {
        Ok(value) => {
            spinner.success("Done!");
            Ok(value)
        }
        Err(err) => {
            spinner.error(&format!("Failed: {}", err));
            Err(err)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stop_lifecycle() {
        let mut spinner = Spinner::new().with_message("working");
        assert!(!spinner.is_running());

        spinner.start();
        assert!(spinner.is_running());

        spinner.stop();
        assert!(!spinner.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut spinner = Spinner::new();
        spinner.start();
        spinner.stop();
        spinner.stop();
        assert!(!spinner.is_running());
    }

    #[test]
    fn start_twice_keeps_one_thread() {
        let mut spinner = Spinner::new();
        spinner.start();
        spinner.start();
        assert!(spinner.is_running());
        spinner.stop();
    }

    #[test]
    fn update_message_while_running() {
        let mut spinner = Spinner::new().with_message("first");
        spinner.start();
        spinner.update_message("second");
        assert_eq!(
            spinner.shared.message.lock().unwrap().as_str(),
            "second"
        );
        spinner.stop();
    }

    #[test]
    fn drop_stops_the_thread() {
        let mut spinner = Spinner::new();
        spinner.start();
        let shared = Arc::clone(&spinner.shared);
        drop(spinner);
        assert!(!shared.running.load(Ordering::SeqCst));
    }

    #[test]
    fn build_output_composition() {
        let line = build_output("*", &None, "pre", "msg", "post");
        assert_eq!(line, "pre * msg post");

        let bare = build_output("*", &None, "", "", "");
        assert_eq!(bare, "*");
    }

    #[test]
    fn spin_while_returns_work_result() {
        let ok: Result<i32, String> = spin_while("ok path", || Ok(7));
        assert_eq!(ok.unwrap(), 7);

        let err: Result<(), String> = spin_while("err path", || Err("nope".to_string()));
        assert!(err.is_err());
    }

    #[test]
    fn styles_have_frames() {
        for style in [
            SPINNER_DOTS,
            SPINNER_LINE,
            SPINNER_ARROW,
            SPINNER_BOUNCE,
            SPINNER_CLOCK,
            SPINNER_EARTH,
            SPINNER_MOON,
            SPINNER_RUNNER,
            SPINNER_PULSE,
            SPINNER_GROW,
        ] {
            assert!(!style.frames.is_empty());
            assert!(style.interval > Duration::ZERO);
        }
    }
}
