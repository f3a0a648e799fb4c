//! Styled status lines on stderr.

use console::{Style, Term};

/// Kind of status line, each with its own color.
#[derive(Clone, Copy)]
enum Tone {
    Plain,
    Done,
    Warn,
    Fail,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Done => Style::new().green(),
            Self::Warn => Style::new().yellow(),
            Self::Fail => Style::new().red().bold(),
        }
    }
}

/// Writes command progress and results to stderr.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(Tone::Done, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(Tone::Warn, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(Tone::Fail, msg);
    }

    /// Print a right-aligned, dimmed label followed by its value.
    pub(crate) fn field(&self, label: &str, value: &str) {
        let label = Style::new().dim().apply_to(format!("{label:>11}:"));
        let _ = self.term.write_line(&format!("{label} {value}"));
    }

    // Errors writing to stderr are ignored.
    fn line(&self, tone: Tone, msg: &str) {
        let _ = self.term.write_line(&tone.style().apply_to(msg).to_string());
    }
}
