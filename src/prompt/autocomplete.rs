//! Option-completing input.
//!
//! The matcher is pure: [`AutoComplete::suggestions`] scores every option
//! against the typed input (prefix beats substring beats fuzzy) and returns
//! the ranked candidates. The prompt itself stays line-based: a unique
//! match completes the input, an ambiguous one lists the candidates and
//! asks again, and input matching nothing is accepted verbatim.

use super::{flush_prompt, LineSource, StdinSource, Transform, Validator};
use crate::error::ConsoleError;
use crate::style::{self, BOLD, DIM};

/// One scored completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub score: i64,
    /// Position of the option in the configured option list.
    pub index: usize,
}

/// Input prompt with option completion.
pub struct AutoComplete {
    label: String,
    placeholder: String,
    options: Vec<String>,
    min_length: usize,
    max_results: usize,
    case_sensitive: bool,
    fuzzy: bool,
    required: bool,
    validate: Option<Validator>,
    transform: Option<Transform>,
}

impl AutoComplete {
    pub fn new(label: impl Into<String>) -> Self {
        AutoComplete {
            label: label.into(),
            placeholder: String::new(),
            options: Vec::new(),
            min_length: 1,
            max_results: 10,
            case_sensitive: false,
            fuzzy: false,
            required: false,
            validate: None,
            transform: None,
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

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Minimum typed length before matching kicks in.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Cap on the number of ranked candidates.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }

    /// Subsequence matching instead of prefix/substring.
    pub fn fuzzy_match(mut self, enabled: bool) -> Self {
        self.fuzzy = enabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_validator(mut self, validate: impl Fn(&str) -> Result<(), String> + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }

    pub fn with_transform(mut self, transform: impl Fn(String) -> String + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }

    /// Score and rank the options against `input`, best first.
    ///
    /// Empty when the input is shorter than the minimum length or no
    /// option scores above zero.
    pub fn suggestions(&self, input: &str) -> Vec<Suggestion> {
        if input.len() < self.min_length || self.options.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<Suggestion> = self
            .options
            .iter()
            .enumerate()
            .filter_map(|(index, option)| {
                let score = self.match_score(input, option);
                (score > 0).then(|| Suggestion {
                    value: option.clone(),
                    score,
                    index,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(self.max_results);
        results
    }

    fn match_score(&self, input: &str, option: &str) -> i64 {
        let (input, option) = if self.case_sensitive {
            (input.to_string(), option.to_string())
        } else {
            (input.to_lowercase(), option.to_lowercase())
        };

        if self.fuzzy {
            return fuzzy_score(&input, &option);
        }

        if option.starts_with(&input) {
            return 1000 - option.len() as i64 + input.len() as i64 * 10;
        }
        if let Some(at) = option.find(&input) {
            return 500 - at as i64 + input.len() as i64 * 5;
        }
        0
    }

    /// Ask on stdin.
    pub fn ask(&self) -> Result<String, ConsoleError> {
        self.ask_from(&mut StdinSource)
    }

    /// Ask through an explicit line source.
    ///
    /// A line matching exactly one candidate is completed to it; several
    /// candidates are listed and the prompt re-asks; no candidates accepts
    /// the line verbatim.
    pub fn ask_from(&self, source: &mut dyn LineSource) -> Result<String, ConsoleError> {
        loop {
            flush_prompt(&self.build_prompt());

            let input = source.read_line()?.trim().to_string();

            if input.is_empty() {
                if self.required {
                    return Err(ConsoleError::InvalidInput("this field is required".into()));
                }
                return Ok(String::new());
            }

            let mut value = if self.is_exact_option(&input) {
                input
            } else {
                let suggestions = self.suggestions(&input);
                match suggestions.len() {
                    0 => input,
                    1 => {
                        let completed = suggestions[0].value.clone();
                        println!("  {} {}", style::success().paint("→"), BOLD.paint(&completed));
                        completed
                    }
                    _ => {
                        for suggestion in &suggestions {
                            println!("    {}", DIM.paint(&suggestion.value));
                        }
                        continue;
                    }
                }
            };

            if let Some(transform) = &self.transform {
                value = transform(value);
            }
            if let Some(validate) = &self.validate {
                if let Err(message) = validate(&value) {
                    return Err(ConsoleError::InvalidInput(message));
                }
            }
            return Ok(value);
        }
    }

    fn is_exact_option(&self, input: &str) -> bool {
        self.options.iter().any(|option| {
            if self.case_sensitive {
                option == input
            } else {
                option.eq_ignore_ascii_case(input)
            }
        })
    }

    fn build_prompt(&self) -> String {
        let mut prompt = format!("{}{}", style::info().paint("? "), self.label);

        if !self.placeholder.is_empty() {
            prompt.push_str(&format!(" [{}]", style::muted().paint(&self.placeholder)));
        }
        if self.required {
            prompt.push_str(&style::error().paint(" *"));
        }

        prompt.push_str(": ");
        prompt
    }
}

/// Subsequence score: consecutive hits compound, completing the whole
/// input earns a bonus, and longer options pay a length penalty.
fn fuzzy_score(input: &str, option: &str) -> i64 {
    if input.is_empty() {
        return 0;
    }

    let input_chars: Vec<char> = input.chars().collect();
    let mut score = 0i64;
    let mut next = 0usize;
    let mut run = 0i64;

    for c in option.chars() {
        if next < input_chars.len() && c == input_chars[next] {
            score += 10 + run;
            run += 1;
            next += 1;
        } else {
            run = 0;
        }
    }

    if next == input_chars.len() {
        score += 100;
    }

    score - (option.chars().count() as i64 - input_chars.len() as i64)
}

// =============================================================================
// Option sets and shorthands
// =============================================================================

pub const BOOLEAN_OPTIONS: &[&str] = &["yes", "no", "true", "false", "y", "n"];

pub const COLOR_OPTIONS: &[&str] = &[
    "red", "green", "blue", "yellow", "cyan", "magenta", "white", "black", "gray", "orange",
    "pink", "purple", "brown", "lime", "navy", "teal",
];

pub const SIZE_OPTIONS: &[&str] = &["small", "medium", "large", "xl", "xs", "xxl", "tiny", "huge"];

pub const PRIORITY_OPTIONS: &[&str] = &["low", "medium", "high", "critical", "urgent", "normal"];

pub const STATUS_OPTIONS: &[&str] = &[
    "active", "inactive", "pending", "completed", "failed", "cancelled", "draft", "published",
    "archived", "deleted",
];

/// Fuzzy-completing prompt over a fixed option list.
pub fn ask_with_options(label: &str, options: &[&str]) -> Result<String, ConsoleError> {
    AutoComplete::new(label)
        .with_options(options.iter().copied())
        .with_min_length(0)
        .with_max_results(8)
        .fuzzy_match(true)
        .ask()
}

/// Prompt completing against entries of the current directory.
pub fn ask_with_file_completion(label: &str) -> Result<String, ConsoleError> {
    let entries = match std::fs::read_dir(".") {
        Ok(entries) => entries,
        Err(_) => return super::ask(label),
    };

    let options: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();

    AutoComplete::new(label)
        .with_options(options)
        .fuzzy_match(true)
        .ask()
}

/// Prompt completing against common command names.
pub fn ask_with_command_completion(label: &str) -> Result<String, ConsoleError> {
    let commands = [
        "help", "version", "init", "start", "stop", "restart", "status", "config", "install",
        "uninstall", "update", "list", "show", "create", "delete", "edit", "copy", "move",
        "rename", "search", "find", "replace",
    ];

    AutoComplete::new(label)
        .with_options(commands)
        .fuzzy_match(true)
        .ask()
}

// =============================================================================
// Tests
// =============================================================================
