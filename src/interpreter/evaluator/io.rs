use std::{
    collections::VecDeque,
    io::{self, Write as _},
};

/// ANSI color codes for terminal output.
mod colors {
    pub const RED: &str = "\x1b[1;31m"; // Bold red
    pub const GREEN: &str = "\x1b[1;32m"; // Bold green
    pub const YELLOW: &str = "\x1b[1;33m"; // Bold yellow
    pub const BLUE: &str = "\x1b[1;34m"; // Bold blue
    pub const MAGENTA: &str = "\x1b[1;35m"; // Bold magenta
    pub const CYAN: &str = "\x1b[1;36m"; // Bold cyan
    pub const RESET: &str = "\x1b[0m";
}

/// The console seam the evaluator talks to.
///
/// The evaluator needs exactly two capabilities from its host: a sink for
/// finished lines and a blocking prompt-and-read-line. Everything else
/// about the transport (buffering, terminals, capture) lives behind this
/// trait.
pub trait Console {
    /// Writes one line of program output, with a terminating newline.
    fn print_line(&mut self, text: &str);

    /// Writes `text` without a newline, then blocks until one line of
    /// input arrives. The returned string has its trailing newline
    /// stripped.
    fn prompt(&mut self, text: &str) -> String;
}

/// The real console: stdout for output, stdin for input.
pub struct StdConsole;

impl Console for StdConsole {
    fn print_line(&mut self, text: &str) {
        println!("{text}");
    }

    fn prompt(&mut self, text: &str) -> String {
        print!("{text}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        let _ = io::stdin().read_line(&mut input);
        while input.ends_with('\n') || input.ends_with('\r') {
            input.pop();
        }
        input
    }
}

/// A console that records output and serves scripted input lines.
///
/// Used by the test suite: run a program, then inspect exactly what it
/// printed.
///
/// # Example
/// ```
/// use voidlang::interpreter::evaluator::io::{CaptureConsole, Console};
///
/// let mut console = CaptureConsole::with_input(&["Ada"]);
/// let name = console.prompt("Who? ");
/// console.print_line(&name);
///
/// assert_eq!(console.output(), "Who? Ada\n");
/// ```
#[derive(Debug, Default)]
pub struct CaptureConsole {
    output: String,
    inputs: VecDeque<String>,
}

impl CaptureConsole {
    /// Creates a console with no scripted input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console that will answer `prompt` calls with the given
    /// lines, in order. Further prompts read empty strings.
    #[must_use]
    pub fn with_input(lines: &[&str]) -> Self {
        Self { output: String::new(),
               inputs: lines.iter().map(ToString::to_string).collect(), }
    }

    /// Everything printed so far, prompts included.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl Console for CaptureConsole {
    fn print_line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn prompt(&mut self, text: &str) -> String {
        self.output.push_str(text);
        self.inputs.pop_front().unwrap_or_default()
    }
}

/// The banner tint selected by `using style "Name";`.
///
/// Styles are purely cosmetic: they pick the color of the header and
/// footer lines and nothing else. Unknown names fall back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: &'static str,
}

impl Default for Style {
    fn default() -> Self {
        Self { color: colors::CYAN }
    }
}

impl Style {
    /// Resolves a style name to a banner color, case-insensitively.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        let color = match name.map(str::to_ascii_lowercase).as_deref() {
            Some("red") => colors::RED,
            Some("green") => colors::GREEN,
            Some("yellow") => colors::YELLOW,
            Some("blue") => colors::BLUE,
            Some("magenta") => colors::MAGENTA,
            _ => colors::CYAN,
        };
        Self { color }
    }

    /// Wraps `text` in this style's escape codes.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        format!("{}{text}{}", self.color, colors::RESET)
    }
}

/// Tints a diagnostic line red for the terminal.
///
/// Used by the driver for its single-line error output.
#[must_use]
pub fn paint_error(text: &str) -> String {
    format!("{}{text}{}", colors::RED, colors::RESET)
}
