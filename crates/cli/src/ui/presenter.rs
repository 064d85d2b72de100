//! Reminder rendering and confirmation
//!
//! [`MessagePresenter`] prints a block of reminders and, for hooks that
//! guard an operation, asks whether to continue. The interactive input is
//! opened on the first prompt only and released by [`MessagePresenter::close`]
//! or when the presenter is dropped.

use hookmsg_core::{HookContext, HookKind};
use owo_colors::{OwoColorize, Style};
use regex::{Captures, Regex};
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use crate::ui::icons::{Icons, StatusIcon};

/// Question asked before a guarded operation continues
pub const CONFIRM_QUESTION: &str = "Do you want to continue with this git operation?";

const SEPARATOR: &str = "─";
const SEPARATOR_WIDTH: usize = 50;

/// Leading non-word run followed by a recognized glyph
static DECORATED: LazyLock<Regex> = LazyLock::new(|| {
    let glyphs = Icons::MESSAGE_GLYPHS.concat();
    Regex::new(&format!("^[^0-9A-Za-z_]*[{glyphs}]")).expect("glyph pattern is valid")
});

/// Context placeholders, substituted in a single pass
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(branch|isMainBranch|hasStagedChanges|lastCommitMessage)\}")
        .expect("placeholder pattern is valid")
});

/// Opens the interactive input on demand
pub type InputOpener = Box<dyn FnMut() -> io::Result<Box<dyn BufRead>>>;

fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Substitute placeholders and make sure the message opens with a glyph
///
/// Substituted values are never scanned for placeholders again. Without a
/// context the placeholders are left as written.
pub fn format_message(message: &str, context: Option<&HookContext>, color: bool) -> String {
    let mut formatted = match context {
        Some(ctx) => PLACEHOLDER
            .replace_all(message, |caps: &Captures<'_>| match &caps[1] {
                "branch" => paint(&ctx.branch, Style::new().cyan(), color),
                "isMainBranch" => ctx.is_main_branch.to_string(),
                "hasStagedChanges" => ctx.has_staged_changes.to_string(),
                _ => paint(&ctx.last_commit_message, Style::new().dimmed(), color),
            })
            .into_owned(),
        None => message.to_string(),
    };

    if !DECORATED.is_match(&formatted) {
        formatted = format!("{} {formatted}", Icons::IDEA);
    }

    formatted
}

/// Interpret an answer to the confirmation prompt
///
/// Affirmative iff the first character is `y` or `Y`.
pub fn parse_confirmation(answer: &str) -> bool {
    answer
        .trim_end_matches(['\r', '\n'])
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

fn reminder_title(kind: HookKind) -> &'static str {
    match kind {
        HookKind::PostMerge => "Post-Merge Reminders",
        _ => "Post-Commit Reminders",
    }
}

/// Renders reminders to `W` and reads confirmations from a lazily opened input
pub struct MessagePresenter<W: Write> {
    out: W,
    color: bool,
    input: Option<Box<dyn BufRead>>,
    open_input: InputOpener,
}

impl MessagePresenter<io::Stdout> {
    /// Presenter on the process stdout and stdin
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdout(), color, || {
            Ok(Box::new(io::stdin().lock()) as Box<dyn BufRead>)
        })
    }
}

impl<W: Write> MessagePresenter<W> {
    /// Create a presenter writing to `out`
    ///
    /// `open_input` runs at most once per open/close cycle, on the first prompt.
    pub fn new<F>(out: W, color: bool, open_input: F) -> Self
    where
        F: FnMut() -> io::Result<Box<dyn BufRead>> + 'static,
    {
        Self {
            out,
            color,
            input: None,
            open_input: Box::new(open_input),
        }
    }

    /// Whether output is styled with ANSI colors
    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Whether the interactive input is currently held
    pub fn is_input_open(&self) -> bool {
        self.input.is_some()
    }

    /// Release the interactive input if it was opened
    pub fn close(&mut self) {
        if self.input.take().is_some() {
            tracing::debug!("Closed interactive input");
        }
    }

    /// Show reminders and optionally ask for confirmation
    ///
    /// Returns `false` only when confirmation was required and not given.
    /// Output and input failures are logged; a failed read counts as "no".
    pub fn display_interactive_messages(
        &mut self,
        messages: &[String],
        context: Option<&HookContext>,
        require_confirmation: bool,
        hook_name: Option<&str>,
    ) -> bool {
        if messages.is_empty() {
            return true;
        }

        if let Err(e) = self.display_messages(messages, context, hook_name) {
            tracing::warn!("Failed to write reminders: {e}");
        }

        if !require_confirmation {
            return true;
        }

        let confirmed = self.prompt_confirmation(CONFIRM_QUESTION).unwrap_or_else(|e| {
            tracing::warn!("Could not read confirmation: {e}");
            false
        });

        if !confirmed {
            let line = self.paint(
                &format!("{} Git operation cancelled by user.", StatusIcon::Error.get()),
                Style::new().red(),
            );
            if let Err(e) = writeln!(self.out, "{line}") {
                tracing::warn!("Failed to write cancellation notice: {e}");
            }
            return false;
        }

        true
    }

    /// Print the reminder block
    pub fn display_messages(
        &mut self,
        messages: &[String],
        context: Option<&HookContext>,
        hook_name: Option<&str>,
    ) -> io::Result<()> {
        if messages.is_empty() {
            return Ok(());
        }

        let post_action = hook_name
            .and_then(HookKind::from_name)
            .filter(|kind| kind.is_post_action());

        let rule = SEPARATOR.repeat(SEPARATOR_WIDTH);
        let (header, rule) = match post_action {
            Some(kind) => (
                self.paint(
                    &format!("{} {}", Icons::PARTY, reminder_title(kind)),
                    Style::new().green().bold(),
                ),
                self.paint(&rule, Style::new().green()),
            ),
            None => (
                self.paint(
                    &format!("{} Git Hook Messages", Icons::PUZZLE),
                    Style::new().blue().bold(),
                ),
                self.paint(&rule, Style::new().bright_black()),
            ),
        };

        writeln!(self.out)?;
        writeln!(self.out, "{header}")?;
        writeln!(self.out, "{rule}")?;
        for message in messages {
            writeln!(self.out, "{}", format_message(message, context, self.color))?;
        }
        writeln!(self.out, "{rule}")?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Ask a yes/no question and block for one line of input
    pub fn prompt_confirmation(&mut self, question: &str) -> io::Result<bool> {
        let icon = self.paint(StatusIcon::Question.get(), Style::new().yellow());
        write!(self.out, "{icon} {question} (y/N): ")?;
        self.out.flush()?;

        let answer = self.read_line()?;
        Ok(parse_confirmation(&answer))
    }

    fn read_line(&mut self) -> io::Result<String> {
        let input = match self.input.take() {
            Some(input) => input,
            None => {
                tracing::debug!("Opening interactive input");
                (self.open_input)()?
            }
        };
        let input = self.input.insert(input);

        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(line)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        paint(text, style, self.color)
    }
}

impl<W: Write> Drop for MessagePresenter<W> {
    fn drop(&mut self) {
        self.close();
    }
}
