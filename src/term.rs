//! Terminal probe and ANSI control.
//!
//! The probe is the only platform-dependent piece of the crate: a snapshot
//! of the terminal's column/row count and TTY-ness, taken through crossterm.
//! Everything else here is escape-sequence plumbing: the handful of cursor
//! and erase controls the components need, written to any `Write` target,
//! plus stdout conveniences that swallow I/O errors (display output is
//! best-effort by design).

use std::io::{self, Write};

use crossterm::terminal;
use crossterm::tty::IsTty;

// =============================================================================
// Terminal snapshot
// =============================================================================

/// Immutable snapshot of the terminal taken at probe time.
///
/// Components never query the platform directly; they read a snapshot held
/// by a [`Responsive`](crate::responsive::Responsive) context, which decides
/// when to re-probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    width: usize,
    height: usize,
    tty: bool,
}

impl Terminal {
    /// Fallback used whenever the platform cannot report a size.
    pub const FALLBACK: Terminal = Terminal {
        width: 80,
        height: 24,
        tty: false,
    };

    /// Probe the current terminal.
    ///
    /// Never fails: if the platform query errors (or reports a zero
    /// dimension), the 80x24 non-TTY [`Terminal::FALLBACK`] is returned
    /// instead.
    pub fn detect() -> Self {
        match terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => Terminal {
                width: cols as usize,
                height: rows as usize,
                tty: io::stdout().is_tty(),
            },
            _ => Self::FALLBACK,
        }
    }

    /// Fixed snapshot, for tests and for injecting a known size.
    pub const fn fixed(width: usize, height: usize, tty: bool) -> Self {
        Terminal { width, height, tty }
    }

    /// Terminal width in columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Terminal height in rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether stdout is an interactive terminal.
    pub const fn is_tty(&self) -> bool {
        self.tty
    }
}

// =============================================================================
// ANSI control sequences
// =============================================================================

/// Move cursor up by n rows.
#[inline]
pub fn cursor_up<W: Write>(w: &mut W, n: usize) -> io::Result<()> {
    if n > 0 {
        write!(w, "\x1b[{}A", n)
    } else {
        Ok(())
    }
}

/// Move cursor down by n rows.
#[inline]
pub fn cursor_down<W: Write>(w: &mut W, n: usize) -> io::Result<()> {
    if n > 0 {
        write!(w, "\x1b[{}B", n)
    } else {
        Ok(())
    }
}

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?25l")
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[?25h")
}

/// Clear the current line and return the cursor to column zero.
#[inline]
pub fn erase_line<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[2K\r")
}

/// Clear the screen and home the cursor.
#[inline]
pub fn erase_screen<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "\x1b[2J\x1b[H")
}

// =============================================================================
// Stdout conveniences
// =============================================================================

// The in-place renderers (spinner, progress bars) drive stdout directly and
// treat write failures as "nothing to display" rather than errors.

/// Clear the terminal screen.
pub fn clear() {
    let mut out = io::stdout();
    let _ = erase_screen(&mut out);
    let _ = out.flush();
}

/// Clear the current line.
pub fn clear_line() {
    let mut out = io::stdout();
    let _ = erase_line(&mut out);
    let _ = out.flush();
}

/// Move the cursor up by n lines.
pub fn move_cursor_up(n: usize) {
    let mut out = io::stdout();
    let _ = cursor_up(&mut out, n);
    let _ = out.flush();
}

/// Move the cursor down by n lines.
pub fn move_cursor_down(n: usize) {
    let mut out = io::stdout();
    let _ = cursor_down(&mut out, n);
    let _ = out.flush();
}

/// Hide the terminal cursor.
pub fn hide_cursor() {
    let mut out = io::stdout();
    let _ = cursor_hide(&mut out);
    let _ = out.flush();
}

/// Show the terminal cursor.
pub fn show_cursor() {
    let mut out = io::stdout();
    let _ = cursor_show(&mut out);
    let _ = out.flush();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_cursor_movement() {
        assert_eq!(to_string(|w| cursor_up(w, 5)), "\x1b[5A");
        assert_eq!(to_string(|w| cursor_down(w, 3)), "\x1b[3B");
    }

    #[test]
    fn test_cursor_movement_zero_is_noop() {
        assert_eq!(to_string(|w| cursor_up(w, 0)), "");
        assert_eq!(to_string(|w| cursor_down(w, 0)), "");
    }

    #[test]
    fn test_cursor_visibility() {
        assert_eq!(to_string(cursor_hide), "\x1b[?25l");
        assert_eq!(to_string(cursor_show), "\x1b[?25h");
    }

    #[test]
    fn test_erase() {
        assert_eq!(to_string(erase_line), "\x1b[2K\r");
        assert_eq!(to_string(erase_screen), "\x1b[2J\x1b[H");
    }

    #[test]
    fn test_fixed_snapshot() {
        let term = Terminal::fixed(120, 40, true);
        assert_eq!(term.width(), 120);
        assert_eq!(term.height(), 40);
        assert!(term.is_tty());
    }

    #[test]
    fn test_fallback() {
        assert_eq!(Terminal::FALLBACK.width(), 80);
        assert_eq!(Terminal::FALLBACK.height(), 24);
        assert!(!Terminal::FALLBACK.is_tty());
    }

    #[test]
    fn test_detect_never_panics() {
        // Headless test environments exercise the fallback path.
        let term = Terminal::detect();
        assert!(term.width() > 0);
        assert!(term.height() > 0);
    }
}
