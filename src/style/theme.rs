//! Theme presets and semantic colors.
//!
//! A [`Theme`] bundles the semantic color roles the components draw from.
//! Five presets ship with the crate (dark, light, colorful, minimal,
//! ocean); the process-wide current theme decides what the semantic
//! accessors ([`success`], [`warning`], [`error`], [`info`], [`muted`])
//! return. Until a theme is explicitly selected the accessors answer with
//! the base palette (green/yellow/red/blue/dim), matching what components
//! render out of the box.

use std::sync::{LazyLock, RwLock};

use super::{Color, BLACK, BLUE, BRIGHT_BLACK, BRIGHT_BLUE, BRIGHT_CYAN, BRIGHT_GREEN,
    BRIGHT_MAGENTA, BRIGHT_RED, BRIGHT_WHITE, BRIGHT_YELLOW, CYAN, DIM, GREEN, RED, WHITE,
    YELLOW};
use crate::error::ConsoleError;

// =============================================================================
// Theme
// =============================================================================

/// Named bundle of semantic color roles.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    pub background: Color,
    pub text: Color,
    pub border: Color,
}

pub static DARK_THEME: LazyLock<Theme> = LazyLock::new(|| Theme {
    name: "dark",
    primary: BRIGHT_BLUE.clone(),
    secondary: BRIGHT_CYAN.clone(),
    success: BRIGHT_GREEN.clone(),
    warning: BRIGHT_YELLOW.clone(),
    error: BRIGHT_RED.clone(),
    info: BRIGHT_BLUE.clone(),
    muted: DIM.clone(),
    background: BLACK.clone(),
    text: BRIGHT_WHITE.clone(),
    border: BRIGHT_BLACK.clone(),
});

pub static LIGHT_THEME: LazyLock<Theme> = LazyLock::new(|| Theme {
    name: "light",
    primary: BLUE.clone(),
    secondary: CYAN.clone(),
    success: GREEN.clone(),
    warning: YELLOW.clone(),
    error: RED.clone(),
    info: BLUE.clone(),
    muted: BLACK.clone(),
    background: WHITE.clone(),
    text: BLACK.clone(),
    border: BLACK.clone(),
});

pub static COLORFUL_THEME: LazyLock<Theme> = LazyLock::new(|| Theme {
    name: "colorful",
    primary: BRIGHT_MAGENTA.clone(),
    secondary: BRIGHT_CYAN.clone(),
    success: BRIGHT_GREEN.clone(),
    warning: BRIGHT_YELLOW.clone(),
    error: BRIGHT_RED.clone(),
    info: BRIGHT_BLUE.clone(),
    muted: DIM.clone(),
    background: BLACK.clone(),
    text: BRIGHT_WHITE.clone(),
    border: BRIGHT_MAGENTA.clone(),
});

pub static MINIMAL_THEME: LazyLock<Theme> = LazyLock::new(|| Theme {
    name: "minimal",
    primary: WHITE.clone(),
    secondary: DIM.clone(),
    success: WHITE.clone(),
    warning: WHITE.clone(),
    error: WHITE.clone(),
    info: WHITE.clone(),
    muted: DIM.clone(),
    background: BLACK.clone(),
    text: WHITE.clone(),
    border: DIM.clone(),
});

pub static OCEAN_THEME: LazyLock<Theme> = LazyLock::new(|| Theme {
    name: "ocean",
    primary: Color::rgb(0, 150, 255),
    secondary: Color::rgb(0, 200, 200),
    success: Color::rgb(0, 255, 150),
    warning: Color::rgb(255, 200, 0),
    error: Color::rgb(255, 100, 100),
    info: Color::rgb(100, 200, 255),
    muted: Color::rgb(100, 100, 150),
    background: Color::rgb(5, 25, 50),
    text: Color::rgb(200, 230, 255),
    border: Color::rgb(50, 100, 150),
});

fn preset(name: &str) -> Option<&'static Theme> {
    match name {
        "dark" => Some(&DARK_THEME),
        "light" => Some(&LIGHT_THEME),
        "colorful" => Some(&COLORFUL_THEME),
        "minimal" => Some(&MINIMAL_THEME),
        "ocean" => Some(&OCEAN_THEME),
        _ => None,
    }
}

/// Names of the built-in theme presets.
pub fn available_themes() -> [&'static str; 5] {
    ["dark", "light", "colorful", "minimal", "ocean"]
}

// =============================================================================
// Current theme + semantic palette
// =============================================================================

static CURRENT: LazyLock<RwLock<&'static Theme>> = LazyLock::new(|| RwLock::new(&DARK_THEME));

/// The semantic colors the accessors hand out. Starts as the base palette
/// and is overwritten wholesale when a theme is selected.
struct Semantic {
    success: Color,
    warning: Color,
    error: Color,
    info: Color,
    muted: Color,
}

static SEMANTIC: LazyLock<RwLock<Semantic>> = LazyLock::new(|| {
    RwLock::new(Semantic {
        success: GREEN.clone(),
        warning: YELLOW.clone(),
        error: RED.clone(),
        info: BLUE.clone(),
        muted: DIM.clone(),
    })
});

/// Select the active theme by preset name.
pub fn set_theme(name: &str) -> Result<(), ConsoleError> {
    let theme = preset(name).ok_or_else(|| ConsoleError::UnknownTheme(name.to_string()))?;

    *CURRENT.write().unwrap_or_else(|e| e.into_inner()) = theme;
    *SEMANTIC.write().unwrap_or_else(|e| e.into_inner()) = Semantic {
        success: theme.success.clone(),
        warning: theme.warning.clone(),
        error: theme.error.clone(),
        info: theme.info.clone(),
        muted: theme.muted.clone(),
    };
    Ok(())
}

/// The currently selected theme.
pub fn current_theme() -> &'static Theme {
    *CURRENT.read().unwrap_or_else(|e| e.into_inner())
}

/// Semantic success color (follows the current theme once one is set).
pub fn success() -> Color {
    SEMANTIC.read().unwrap_or_else(|e| e.into_inner()).success.clone()
}

/// Semantic warning color.
pub fn warning() -> Color {
    SEMANTIC.read().unwrap_or_else(|e| e.into_inner()).warning.clone()
}

/// Semantic error color.
pub fn error() -> Color {
    SEMANTIC.read().unwrap_or_else(|e| e.into_inner()).error.clone()
}

/// Semantic info color.
pub fn info() -> Color {
    SEMANTIC.read().unwrap_or_else(|e| e.into_inner()).info.clone()
}

/// Semantic muted color.
pub fn muted() -> Color {
    SEMANTIC.read().unwrap_or_else(|e| e.into_inner()).muted.clone()
}

// =============================================================================
// Previews
// =============================================================================

/// Render a sample line per color role of the named theme.
pub fn theme_preview(name: &str) -> Result<String, ConsoleError> {
    let theme = preset(name).ok_or_else(|| ConsoleError::UnknownTheme(name.to_string()))?;

    let mut out = String::new();
    out.push_str(&format!("Theme: {}\n", super::BOLD.paint(theme.name)));
    for (label, color) in [
        ("Primary:   ", &theme.primary),
        ("Secondary: ", &theme.secondary),
        ("Success:   ", &theme.success),
        ("Warning:   ", &theme.warning),
        ("Error:     ", &theme.error),
        ("Info:      ", &theme.info),
        ("Muted:     ", &theme.muted),
        ("Background:", &theme.background),
        ("Text:      ", &theme.text),
        ("Border:    ", &theme.border),
    ] {
        out.push_str(&format!("{} {}\n", label, color.paint("Sample Text")));
    }
    Ok(out)
}

/// Print previews of every built-in theme.
pub fn show_all_themes() {
    println!("{}", super::BOLD.paint("Available Themes:"));
    println!();
    for name in available_themes() {
        if let Ok(preview) = theme_preview(name) {
            println!("{}", preview);
        }
    }
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
    fn set_theme_switches_current_and_semantics() {
        set_theme("minimal").unwrap();
        assert_eq!(current_theme().name, "minimal");
        assert_eq!(success().code(), WHITE.code());

        set_theme("dark").unwrap();
        assert_eq!(current_theme().name, "dark");
        assert_eq!(success().code(), BRIGHT_GREEN.code());
    }

    #[test]
    fn unknown_theme_is_an_error() {
        assert!(matches!(
            set_theme("solarized"),
            Err(ConsoleError::UnknownTheme(_))
        ));
    }

    #[test]
    fn presets_are_complete() {
        for name in available_themes() {
            assert!(preset(name).is_some());
            assert_eq!(preset(name).unwrap().name, name);
        }
    }

    #[test]
    #[serial]
    fn preview_lists_every_role() {
        let preview = theme_preview("ocean").unwrap();
        for role in ["Primary", "Secondary", "Success", "Warning", "Error", "Info"] {
            assert!(preview.contains(role), "missing role {}", role);
        }
    }

    #[test]
    fn preview_unknown_theme_errors() {
        assert!(theme_preview("nope").is_err());
    }
}
