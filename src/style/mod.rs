//! Color tokens.
//!
//! A [`Color`] is an immutable value wrapping an ANSI escape prefix.
//! Applying one to text brackets it with the prefix and a reset, unless
//! the color is disabled, in which case application is the identity
//! function.
//!
//! The predefined palette (16 foreground tokens and 7 attribute tokens)
//! shares one process-wide enabled registry: a lock-protected table of
//! per-token flags, initialized from the TTY-ness of stdout on first use.
//! [`disable_colors`] / [`enable_colors`] broadcast to every predefined
//! slot, and any single predefined token can still be forced on or off
//! individually. Ad-hoc colors ([`Color::new`], [`Color::rgb`],
//! [`Color::hex`], [`Color::combine`]) carry a private flag and are never
//! touched by the bulk operations.

mod theme;

pub use theme::{
    available_themes, current_theme, error, info, muted, set_theme, show_all_themes, success,
    theme_preview, warning, Theme, COLORFUL_THEME, DARK_THEME, LIGHT_THEME, MINIMAL_THEME,
    OCEAN_THEME,
};

use std::borrow::Cow;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{OnceLock, RwLock};

use crossterm::tty::IsTty;

use crate::error::ConsoleError;

// =============================================================================
// Escape codes
// =============================================================================

/// Raw SGR escape codes the crate emits.
pub mod codes {
    pub const RESET: &str = "\x1b[0m";

    pub const BLACK: &str = "\x1b[30m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";

    pub const BRIGHT_BLACK: &str = "\x1b[90m";
    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";

    pub const BG_BLACK: &str = "\x1b[40m";
    pub const BG_RED: &str = "\x1b[41m";
    pub const BG_GREEN: &str = "\x1b[42m";
    pub const BG_YELLOW: &str = "\x1b[43m";
    pub const BG_BLUE: &str = "\x1b[44m";
    pub const BG_MAGENTA: &str = "\x1b[45m";
    pub const BG_CYAN: &str = "\x1b[46m";
    pub const BG_WHITE: &str = "\x1b[47m";

    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const UNDERLINE: &str = "\x1b[4m";
    pub const BLINK: &str = "\x1b[5m";
    pub const REVERSE: &str = "\x1b[7m";
    pub const STRIKE: &str = "\x1b[9m";
}

// =============================================================================
// Enabled registry
// =============================================================================

const TOKEN_COUNT: usize = 23;

/// Shared enabled flags for the predefined tokens, keyed by token slot.
/// Initialized lazily so the TTY probe happens on first use, not at load.
fn registry() -> &'static RwLock<[bool; TOKEN_COUNT]> {
    static REGISTRY: OnceLock<RwLock<[bool; TOKEN_COUNT]>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new([io::stdout().is_tty(); TOKEN_COUNT]))
}

fn registry_get(slot: usize) -> bool {
    registry().read().unwrap_or_else(|e| e.into_inner())[slot]
}

fn registry_set(slot: usize, enabled: bool) {
    registry().write().unwrap_or_else(|e| e.into_inner())[slot] = enabled;
}

/// Disable every predefined color token.
///
/// Ad-hoc colors created through [`Color::new`] and friends keep their own
/// flags and are unaffected.
pub fn disable_colors() {
    registry()
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .fill(false);
}

/// Enable every predefined color token.
pub fn enable_colors() {
    registry()
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .fill(true);
}

// =============================================================================
// Color
// =============================================================================

#[derive(Debug)]
enum TokenState {
    /// Predefined token: the enabled flag lives in the shared registry, so
    /// every clone observes bulk and individual toggles.
    Registered(usize),
    /// Ad-hoc color: carries its own flag.
    Fixed(AtomicBool),
}

impl Clone for TokenState {
    fn clone(&self) -> Self {
        match self {
            TokenState::Registered(slot) => TokenState::Registered(*slot),
            TokenState::Fixed(flag) => TokenState::Fixed(AtomicBool::new(flag.load(Ordering::Relaxed))),
        }
    }
}

/// An ANSI color (or attribute) token.
#[derive(Debug, Clone)]
pub struct Color {
    code: Cow<'static, str>,
    state: TokenState,
}

impl Color {
    const fn registered(code: &'static str, slot: usize) -> Self {
        Color {
            code: Cow::Borrowed(code),
            state: TokenState::Registered(slot),
        }
    }

    /// Ad-hoc color from a raw escape prefix.
    ///
    /// Enabled iff stdout is a terminal at construction time.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Color {
            code: code.into(),
            state: TokenState::Fixed(AtomicBool::new(io::stdout().is_tty())),
        }
    }

    /// 24-bit foreground color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::new(format!("\x1b[38;2;{};{};{}m", r, g, b))
    }

    /// Color from a hex literal ("#ff8800" or "ff8800").
    pub fn hex(hex: &str) -> Result<Self, ConsoleError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConsoleError::InvalidColor(hex.to_string()));
        }

        let channel = |range| u8::from_str_radix(&digits[range], 16).unwrap_or(0);
        Ok(Color::rgb(channel(0..2), channel(2..4), channel(4..6)))
    }

    /// Combine several tokens into one (e.g. bold + red).
    pub fn combine(colors: &[&Color]) -> Self {
        let code: String = colors.iter().map(|c| c.code.as_ref()).collect();
        Color::new(code)
    }

    /// Apply the color to text. Identity when disabled.
    pub fn paint(&self, text: &str) -> String {
        if !self.is_enabled() || self.code.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", self.code, text, codes::RESET)
    }

    /// Print the colored text to stdout.
    pub fn print(&self, text: &str) {
        print!("{}", self.paint(text));
    }

    /// Print the colored text to stdout with a trailing newline.
    pub fn println(&self, text: &str) {
        println!("{}", self.paint(text));
    }

    /// Whether applying this color currently has any effect.
    pub fn is_enabled(&self) -> bool {
        match &self.state {
            TokenState::Registered(slot) => registry_get(*slot),
            TokenState::Fixed(flag) => flag.load(Ordering::Relaxed),
        }
    }

    /// Force this token on or off.
    ///
    /// For a predefined token this writes its shared registry slot (all
    /// clones observe the change); for an ad-hoc color only this value's
    /// private flag changes.
    pub fn set_enabled(&self, enabled: bool) {
        match &self.state {
            TokenState::Registered(slot) => registry_set(*slot, enabled),
            TokenState::Fixed(flag) => flag.store(enabled, Ordering::Relaxed),
        }
    }

    /// Force this token on.
    pub fn enable(&self) {
        self.set_enabled(true);
    }

    /// Force this token off.
    pub fn disable(&self) {
        self.set_enabled(false);
    }

    /// The raw escape prefix this token wraps.
    pub fn code(&self) -> &str {
        &self.code
    }
}

// =============================================================================
// Predefined tokens
// =============================================================================

pub static BLACK: Color = Color::registered(codes::BLACK, 0);
pub static RED: Color = Color::registered(codes::RED, 1);
pub static GREEN: Color = Color::registered(codes::GREEN, 2);
pub static YELLOW: Color = Color::registered(codes::YELLOW, 3);
pub static BLUE: Color = Color::registered(codes::BLUE, 4);
pub static MAGENTA: Color = Color::registered(codes::MAGENTA, 5);
pub static CYAN: Color = Color::registered(codes::CYAN, 6);
pub static WHITE: Color = Color::registered(codes::WHITE, 7);

pub static BRIGHT_BLACK: Color = Color::registered(codes::BRIGHT_BLACK, 8);
pub static BRIGHT_RED: Color = Color::registered(codes::BRIGHT_RED, 9);
pub static BRIGHT_GREEN: Color = Color::registered(codes::BRIGHT_GREEN, 10);
pub static BRIGHT_YELLOW: Color = Color::registered(codes::BRIGHT_YELLOW, 11);
pub static BRIGHT_BLUE: Color = Color::registered(codes::BRIGHT_BLUE, 12);
pub static BRIGHT_MAGENTA: Color = Color::registered(codes::BRIGHT_MAGENTA, 13);
pub static BRIGHT_CYAN: Color = Color::registered(codes::BRIGHT_CYAN, 14);
pub static BRIGHT_WHITE: Color = Color::registered(codes::BRIGHT_WHITE, 15);

pub static BOLD: Color = Color::registered(codes::BOLD, 16);
pub static DIM: Color = Color::registered(codes::DIM, 17);
pub static ITALIC: Color = Color::registered(codes::ITALIC, 18);
pub static UNDERLINE: Color = Color::registered(codes::UNDERLINE, 19);
pub static BLINK: Color = Color::registered(codes::BLINK, 20);
pub static REVERSE: Color = Color::registered(codes::REVERSE, 21);
pub static STRIKE: Color = Color::registered(codes::STRIKE, 22);

// =============================================================================
// Decorations
// =============================================================================

/// Alternate two colors across the characters of `text`.
pub fn gradient(text: &str, start: &Color, end: &Color) -> String {
    let mut out = String::new();
    for (i, c) in text.chars().enumerate() {
        let color = if i % 2 == 0 { start } else { end };
        out.push_str(&color.paint(&c.to_string()));
    }
    out
}

/// Cycle the six rainbow colors across the characters of `text`.
pub fn rainbow(text: &str) -> String {
    let palette = [&RED, &YELLOW, &GREEN, &CYAN, &BLUE, &MAGENTA];
    let mut out = String::new();
    for (i, c) in text.chars().enumerate() {
        out.push_str(&palette[i % palette.len()].paint(&c.to_string()));
    }
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn paint_wraps_with_reset() {
        RED.enable();
        assert_eq!(RED.paint("x"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    #[serial]
    fn disabled_token_is_identity() {
        RED.disable();
        assert_eq!(RED.paint("plain"), "plain");
        RED.enable();
    }

    #[test]
    #[serial]
    fn bulk_disable_hits_every_predefined_token() {
        enable_colors();
        disable_colors();
        assert!(!GREEN.is_enabled());
        assert!(!BOLD.is_enabled());
        assert_eq!(BOLD.paint("t"), "t");
        enable_colors();
        assert!(GREEN.is_enabled());
    }

    #[test]
    #[serial]
    fn clones_share_the_registry_slot() {
        enable_colors();
        let clone = CYAN.clone();
        CYAN.disable();
        assert!(!clone.is_enabled());
        enable_colors();
    }

    #[test]
    #[serial]
    fn adhoc_colors_survive_bulk_disable() {
        let custom = Color::rgb(12, 200, 90);
        custom.enable();
        disable_colors();
        assert!(custom.is_enabled());
        assert_eq!(custom.paint("v"), "\x1b[38;2;12;200;90mv\x1b[0m");
        enable_colors();
    }

    #[test]
    fn rgb_code_shape() {
        let c = Color::rgb(255, 128, 0);
        assert_eq!(c.code(), "\x1b[38;2;255;128;0m");
    }

    #[test]
    fn hex_parses_with_and_without_hash() {
        assert_eq!(Color::hex("#ff8800").unwrap().code(), "\x1b[38;2;255;136;0m");
        assert_eq!(Color::hex("00ff00").unwrap().code(), "\x1b[38;2;0;255;0m");
    }

    #[test]
    fn hex_rejects_malformed_literals() {
        assert!(Color::hex("#ff88").is_err());
        assert!(Color::hex("zzzzzz").is_err());
        assert!(Color::hex("#ff88001").is_err());
    }

    #[test]
    #[serial]
    fn combine_concatenates_codes() {
        let c = Color::combine(&[&BOLD, &RED]);
        c.enable();
        assert_eq!(c.paint("x"), "\x1b[1m\x1b[31mx\x1b[0m");
    }

    #[test]
    #[serial]
    fn gradient_alternates() {
        enable_colors();
        let out = gradient("ab", &RED, &BLUE);
        assert_eq!(out, format!("{}{}", RED.paint("a"), BLUE.paint("b")));
    }

    #[test]
    #[serial]
    fn rainbow_cycles_palette() {
        enable_colors();
        let out = rainbow("abcdefg");
        // Seventh character wraps around to red.
        assert!(out.starts_with(&RED.paint("a")));
        assert!(out.ends_with(&RED.paint("g")));
    }

    #[test]
    #[serial]
    fn painted_text_measures_like_plain_text() {
        enable_colors();
        assert_eq!(crate::text::visual_width(&GREEN.paint("hello")), 5);
    }
}
