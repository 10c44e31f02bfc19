//! Line-based interactive prompts.
//!
//! Prompts consume input through the [`LineSource`] abstraction, one line
//! at a time, and never touch raw terminal modes themselves. That keeps
//! the prompt logic (defaults, retries, validation, selection loops) pure
//! of keystroke handling: a fancier line editor can be plugged in by
//! implementing [`LineSource`].
//!
//! The `ask_*` free functions cover the common one-liners; the builder
//! types ([`Input`], [`Confirm`], [`Select`], [`MultiSelect`]) expose the
//! full configuration surface.

mod autocomplete;

pub use autocomplete::{
    ask_with_command_completion, ask_with_file_completion, ask_with_options, AutoComplete,
    Suggestion, BOOLEAN_OPTIONS, COLOR_OPTIONS, PRIORITY_OPTIONS, SIZE_OPTIONS, STATUS_OPTIONS,
};

use std::io::{self, BufRead, Write};

use crate::error::ConsoleError;
use crate::style;
use crate::term;

// =============================================================================
// Line source
// =============================================================================

/// One-line-at-a-time input abstraction for prompts.
pub trait LineSource {
    /// Read one line of input, without trailing whitespace.
    fn read_line(&mut self) -> io::Result<String>;

    /// Read one line of sensitive input.
    ///
    /// Implementations that can mask input (disable echo, draw bullets)
    /// should do so; the default reads a plain line.
    fn read_secret(&mut self) -> io::Result<String> {
        self.read_line()
    }
}

/// Line source backed by stdin.
#[derive(Debug, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim_end().to_string())
    }
}

/// Validation hook: `Err` carries the message shown before re-asking.
pub type Validator = Box<dyn Fn(&str) -> Result<(), String>>;

/// Transform hook applied to accepted input.
pub type Transform = Box<dyn Fn(String) -> String>;

fn flush_prompt(prompt: &str) {
    let mut out = io::stdout();
    let _ = write!(out, "{}", prompt);
    let _ = out.flush();
}

// =============================================================================
// Input
// =============================================================================

/// Free-text input prompt.
pub struct Input {
    label: String,
    placeholder: String,
    default: String,
    required: bool,
    mask: bool,
    validate: Option<Validator>,
    transform: Option<Transform>,
}

impl Input {
    pub fn new(label: impl Into<String>) -> Self {
        Input {
            label: label.into(),
            placeholder: String::new(),
            default: String::new(),
            required: false,
            mask: false,
            validate: None,
            transform: None,
        }
    }

    /// Hint shown when no default is set.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Value used when the user submits an empty line.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Re-ask until a non-empty value is entered.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Route the read through [`LineSource::read_secret`].
    pub fn masked(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    /// Reject values; the error message is printed before re-asking.
    pub fn with_validator(mut self, validate: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    /// Rewrite accepted values (e.g. lowercase, trim).
    pub fn with_transform(mut self, transform: impl Fn(String) -> String + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Ask on stdin.
    pub fn ask(&self) -> Result<String, ConsoleError> {
        self.ask_from(&mut StdinSource)
    }

    /// Ask through an explicit line source.
    pub fn ask_from(&self, source: &mut dyn LineSource) -> Result<String, ConsoleError> {
        loop {
            flush_prompt(&self.build_prompt());

            let raw = if self.mask {
                source.read_secret()?
            } else {
                source.read_line()?
            };

            let mut input = if raw.trim().is_empty() && !self.default.is_empty() {
                self.default.clone()
            } else {
                raw
            };

            if self.required && input.trim().is_empty() {
                style::error().println("This field is required");
                continue;
            }

            if let Some(transform) = &self.transform {
                input = transform(input);
            }

            if let Some(validate) = &self.validate {
                if let Err(message) = validate(&input) {
                    style::error().println(&format!("Validation failed: {}", message));
                    continue;
                }
            }

            return Ok(input);
        }
    }

    fn build_prompt(&self) -> String {
        let mut prompt = format!("{}{}", style::info().paint("? "), self.label);

        if !self.default.is_empty() {
            prompt.push_str(&format!(" ({})", self.default));
        }
        if !self.placeholder.is_empty() && self.default.is_empty() {
            prompt.push_str(&format!(" [{}]", style::muted().paint(&self.placeholder)));
        }
        if self.required {
            prompt.push_str(&style::error().paint(" *"));
        }

        prompt.push_str(": ");
        prompt
    }
}

// =============================================================================
// Confirm
// =============================================================================

/// Yes/no confirmation prompt.
#[derive(Debug, Clone)]
pub struct Confirm {
    label: String,
    default: bool,
}

impl Confirm {
    pub fn new(label: impl Into<String>) -> Self {
        Confirm {
            label: label.into(),
            default: false,
        }
    }

    /// Answer used for an empty line.
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Ask on stdin.
    pub fn ask(&self) -> Result<bool, ConsoleError> {
        self.ask_from(&mut StdinSource)
    }

    /// Ask through an explicit line source.
    pub fn ask_from(&self, source: &mut dyn LineSource) -> Result<bool, ConsoleError> {
        let hint = if self.default { "Y/n" } else { "y/N" };

        loop {
            flush_prompt(&format!(
                "{}{} ({}): ",
                style::info().paint("? "),
                self.label,
                hint
            ));

            let input = source.read_line()?.trim().to_lowercase();
            match input.as_str() {
                "" => return Ok(self.default),
                "y" | "yes" | "true" | "1" => return Ok(true),
                "n" | "no" | "false" | "0" => return Ok(false),
                _ => style::warning().println("Please answer yes or no"),
            }
        }
    }
}

// =============================================================================
// Select
// =============================================================================

/// Numbered single-choice prompt.
#[derive(Debug, Clone)]
pub struct Select {
    label: String,
    options: Vec<String>,
    default: usize,
}

impl Select {
    pub fn new(label: impl Into<String>) -> Self {
        Select {
            label: label.into(),
            options: Vec::new(),
            default: 0,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Index answered for an empty line.
    pub fn with_default(mut self, default: usize) -> Self {
        self.default = default;
        self
    }

    /// Ask on stdin; returns the selected index.
    pub fn ask(&self) -> Result<usize, ConsoleError> {
        self.ask_from(&mut StdinSource)
    }

    /// Ask through an explicit line source; returns the selected index.
    pub fn ask_from(&self, source: &mut dyn LineSource) -> Result<usize, ConsoleError> {
        if self.options.is_empty() {
            return Err(ConsoleError::InvalidInput("no options provided".into()));
        }

        loop {
            println!("{}{}", style::info().paint("? "), self.label);
            for (i, option) in self.options.iter().enumerate() {
                let marker = if i == self.default { ">" } else { " " };
                println!("  {} {}) {}", marker, i + 1, option);
            }
            flush_prompt(&format!("Select (1-{}): ", self.options.len()));

            let input = source.read_line()?;
            let input = input.trim();
            if input.is_empty() {
                return Ok(self.default);
            }

            match input.parse::<usize>() {
                Ok(choice) if (1..=self.options.len()).contains(&choice) => {
                    return Ok(choice - 1);
                }
                _ => style::error().println(&format!(
                    "Invalid selection. Please choose a number between 1 and {}",
                    self.options.len()
                )),
            }
        }
    }
}

// =============================================================================
// MultiSelect
// =============================================================================

/// Numbered multi-choice prompt: toggle by number, empty line confirms,
/// `q` cancels.
#[derive(Debug, Clone)]
pub struct MultiSelect {
    label: String,
    options: Vec<String>,
}

impl MultiSelect {
    pub fn new(label: impl Into<String>) -> Self {
        MultiSelect {
            label: label.into(),
            options: Vec::new(),
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Ask on stdin; returns the selected indices in option order.
    pub fn ask(&self) -> Result<Vec<usize>, ConsoleError> {
        self.ask_from(&mut StdinSource)
    }

    /// Ask through an explicit line source.
    pub fn ask_from(&self, source: &mut dyn LineSource) -> Result<Vec<usize>, ConsoleError> {
        if self.options.is_empty() {
            return Err(ConsoleError::InvalidInput("no options provided".into()));
        }

        let mut selected = vec![false; self.options.len()];

        loop {
            term::clear();

            println!(
                "{}{} (toggle by number, enter to confirm)",
                style::info().paint("? "),
                self.label
            );
            for (i, option) in self.options.iter().enumerate() {
                let marker = if selected[i] {
                    style::success().paint("●")
                } else {
                    "○".to_string()
                };
                println!("  {} {}", marker, option);
            }
            println!();
            println!("Press:");
            println!("  1-{}: Toggle option", self.options.len());
            println!("  Enter: Confirm selection");
            println!("  q: Quit");

            let input = source.read_line()?;
            let input = input.trim();

            if input.is_empty() {
                return Ok(selected
                    .iter()
                    .enumerate()
                    .filter_map(|(i, on)| on.then_some(i))
                    .collect());
            }
            if input == "q" {
                return Err(ConsoleError::InvalidInput("selection cancelled".into()));
            }

            if let Ok(choice) = input.parse::<usize>() {
                if (1..=self.options.len()).contains(&choice) {
                    selected[choice - 1] = !selected[choice - 1];
                }
            }
        }
    }
}

// =============================================================================
// Shorthands
// =============================================================================

/// Ask for a line of text.
pub fn ask(label: &str) -> Result<String, ConsoleError> {
    Input::new(label).ask()
}

/// Ask for a non-empty line of text.
pub fn ask_required(label: &str) -> Result<String, ConsoleError> {
    Input::new(label).required(true).ask()
}

/// Ask with a default used for empty input.
pub fn ask_with_default(label: &str, default: &str) -> Result<String, ConsoleError> {
    Input::new(label).with_default(default).ask()
}

/// Ask for a masked, required value.
pub fn ask_password(label: &str) -> Result<String, ConsoleError> {
    Input::new(label).masked(true).required(true).ask()
}

/// Ask for an email address (validated).
pub fn ask_email(label: &str) -> Result<String, ConsoleError> {
    Input::new(label)
        .required(true)
        .with_validator(validators::email)
        .ask()
}

/// Ask for an integer.
pub fn ask_number(label: &str) -> Result<i64, ConsoleError> {
    let input = Input::new(label)
        .required(true)
        .with_validator(validators::number)
        .ask()?;
    input
        .parse()
        .map_err(|_| ConsoleError::InvalidInput("must be a valid number".into()))
}

/// Ask for yes/no.
pub fn ask_confirm(label: &str) -> Result<bool, ConsoleError> {
    Confirm::new(label).ask()
}

/// Ask for one of the options; returns the selected index.
pub fn ask_choice(label: &str, options: &[&str]) -> Result<usize, ConsoleError> {
    Select::new(label).with_options(options.iter().copied()).ask()
}

/// Ask for any number of the options; returns the selected indices.
pub fn ask_multi_choice(label: &str, options: &[&str]) -> Result<Vec<usize>, ConsoleError> {
    MultiSelect::new(label).with_options(options.iter().copied()).ask()
}

// =============================================================================
// Validators
// =============================================================================

/// Reusable validation functions for [`Input::with_validator`].
pub mod validators {
    /// Require a plausible email shape: `local@domain.tld`.
    pub fn email(input: &str) -> Result<(), String> {
        let Some((local, domain)) = input.split_once('@') else {
            return Err("email must contain @".into());
        };
        if local.is_empty() || domain.is_empty() || input.matches('@').count() != 1 {
            return Err("invalid email format".into());
        }
        if !domain.contains('.') {
            return Err("email domain must contain a dot".into());
        }
        Ok(())
    }

    /// Require at least `min` bytes.
    pub fn min_length(min: usize) -> impl Fn(&str) -> Result<(), String> {
        move |input| {
            if input.len() < min {
                Err(format!("must be at least {} characters", min))
            } else {
                Ok(())
            }
        }
    }

    /// Require at most `max` bytes.
    pub fn max_length(max: usize) -> impl Fn(&str) -> Result<(), String> {
        move |input| {
            if input.len() > max {
                Err(format!("must be no more than {} characters", max))
            } else {
                Ok(())
            }
        }
    }

    /// Require an integer.
    pub fn number(input: &str) -> Result<(), String> {
        input
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| "must be a valid number".to_string())
    }

    /// Require an http(s) URL.
    pub fn url(input: &str) -> Result<(), String> {
        let lower = input.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(())
        } else {
            Err("URL must start with http:// or https://".into())
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted line source for prompt tests.
    struct Script {
        lines: Vec<String>,
        secrets: Vec<String>,
    }

    impl Script {
        fn new<I, S>(lines: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Script {
                lines: lines.into_iter().map(Into::into).collect(),
                secrets: Vec::new(),
            }
        }

        fn with_secrets<I, S>(mut self, secrets: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.secrets = secrets.into_iter().map(Into::into).collect();
            self
        }
    }

    impl LineSource for Script {
        fn read_line(&mut self) -> io::Result<String> {
            if self.lines.is_empty() {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script over"));
            }
            Ok(self.lines.remove(0))
        }

        fn read_secret(&mut self) -> io::Result<String> {
            if self.secrets.is_empty() {
                return self.read_line();
            }
            Ok(self.secrets.remove(0))
        }
    }

    // ── Input ──

    #[test]
    fn input_returns_line() {
        let mut source = Script::new(["hello"]);
        let out = Input::new("Name").ask_from(&mut source).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn input_empty_takes_default() {
        let mut source = Script::new([""]);
        let out = Input::new("Name")
            .with_default("fallback")
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, "fallback");
    }

    #[test]
    fn input_required_reasks_until_nonempty() {
        let mut source = Script::new(["", "  ", "value"]);
        let out = Input::new("Name")
            .required(true)
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, "value");
    }

    #[test]
    fn input_validator_reasks_on_failure() {
        let mut source = Script::new(["bad", "good"]);
        let out = Input::new("Word")
            .with_validator(|s| {
                if s == "good" {
                    Ok(())
                } else {
                    Err("not good".into())
                }
            })
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, "good");
    }

    #[test]
    fn input_transform_applies() {
        let mut source = Script::new(["MiXeD"]);
        let out = Input::new("Word")
            .with_transform(|s| s.to_lowercase())
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, "mixed");
    }

    #[test]
    fn input_masked_uses_secret_channel() {
        let mut source = Script::new(["visible"]).with_secrets(["hidden"]);
        let out = Input::new("Password")
            .masked(true)
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, "hidden");
    }

    #[test]
    fn input_eof_propagates_as_io_error() {
        let mut source = Script::new(Vec::<String>::new());
        assert!(matches!(
            Input::new("Name").ask_from(&mut source),
            Err(ConsoleError::Io(_))
        ));
    }

    // ── Confirm ──

    #[test]
    fn confirm_accepts_yes_variants() {
        for answer in ["y", "yes", "true", "1", "YES"] {
            let mut source = Script::new([answer]);
            assert!(Confirm::new("Go?").ask_from(&mut source).unwrap());
        }
    }

    #[test]
    fn confirm_accepts_no_variants() {
        for answer in ["n", "no", "false", "0"] {
            let mut source = Script::new([answer]);
            assert!(!Confirm::new("Go?").ask_from(&mut source).unwrap());
        }
    }

    #[test]
    fn confirm_empty_takes_default() {
        let mut source = Script::new([""]);
        assert!(Confirm::new("Go?")
            .with_default(true)
            .ask_from(&mut source)
            .unwrap());
    }

    #[test]
    fn confirm_reasks_on_junk() {
        let mut source = Script::new(["maybe", "y"]);
        assert!(Confirm::new("Go?").ask_from(&mut source).unwrap());
    }

    // ── Select ──

    #[test]
    fn select_parses_one_based_choice() {
        let mut source = Script::new(["2"]);
        let out = Select::new("Pick")
            .with_options(["a", "b", "c"])
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, 1);
    }

    #[test]
    fn select_empty_takes_default() {
        let mut source = Script::new([""]);
        let out = Select::new("Pick")
            .with_options(["a", "b"])
            .with_default(1)
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, 1);
    }

    #[test]
    fn select_reasks_on_out_of_range() {
        let mut source = Script::new(["9", "0", "1"]);
        let out = Select::new("Pick")
            .with_options(["a", "b"])
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, 0);
    }

    #[test]
    fn select_without_options_errors() {
        let mut source = Script::new(["1"]);
        assert!(Select::new("Pick").ask_from(&mut source).is_err());
    }

    // ── MultiSelect ──

    #[test]
    fn multi_select_toggles_and_confirms() {
        let mut source = Script::new(["1", "3", ""]);
        let out = MultiSelect::new("Pick")
            .with_options(["a", "b", "c"])
            .ask_from(&mut source)
            .unwrap();
        assert_eq!(out, vec![0, 2]);
    }

    #[test]
    fn multi_select_double_toggle_clears() {
        let mut source = Script::new(["2", "2", ""]);
        let out = MultiSelect::new("Pick")
            .with_options(["a", "b"])
            .ask_from(&mut source)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn multi_select_quit_cancels() {
        let mut source = Script::new(["q"]);
        assert!(matches!(
            MultiSelect::new("Pick")
                .with_options(["a"])
                .ask_from(&mut source),
            Err(ConsoleError::InvalidInput(_))
        ));
    }

    // ── validators ──

    #[test]
    fn email_validator() {
        assert!(validators::email("a@b.co").is_ok());
        assert!(validators::email("missing-at").is_err());
        assert!(validators::email("@no-local.com").is_err());
        assert!(validators::email("x@nodot").is_err());
        assert!(validators::email("two@@ats.com").is_err());
    }

    #[test]
    fn length_validators() {
        assert!(validators::min_length(3)("ab").is_err());
        assert!(validators::min_length(3)("abc").is_ok());
        assert!(validators::max_length(3)("abcd").is_err());
        assert!(validators::max_length(3)("abc").is_ok());
    }

    #[test]
    fn number_validator() {
        assert!(validators::number("42").is_ok());
        assert!(validators::number("-7").is_ok());
        assert!(validators::number("4.2").is_err());
        assert!(validators::number("x").is_err());
    }

    #[test]
    fn url_validator() {
        assert!(validators::url("https://example.com").is_ok());
        assert!(validators::url("HTTP://example.com").is_ok());
        assert!(validators::url("ftp://example.com").is_err());
    }
}
