use std::io::{self, BufRead, Write};

use colored::Colorize;

// =============================================================================
// Line input
// =============================================================================

/// Source of user input, one trimmed line at a time.
pub trait LineInput {
    /// Shows `prompt` and reads one line. `Ok(None)` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Prompts on a writer and reads answers from a buffered reader.
pub struct PromptReader<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        PromptReader { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl PromptReader<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput for PromptReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

// =============================================================================
// Message output
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Heading,
    Info,
    Success,
    Error,
}

/// Destination for user-facing messages.
pub trait MessageSink {
    fn emit(&mut self, severity: Severity, message: &str);

    fn success(&mut self, message: &str) {
        self.emit(Severity::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.emit(Severity::Error, message);
    }

    fn info(&mut self, message: &str) {
        self.emit(Severity::Info, message);
    }
}

/// Writes messages one per line, colored by severity unless disabled.
pub struct ConsoleSink<W> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, use_colors: bool) -> Self {
        ConsoleSink { writer, use_colors }
    }

    pub fn plain(writer: W) -> Self {
        Self::new(writer, false)
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render(&self, severity: Severity, message: &str) -> String {
        if !self.use_colors {
            return message.to_string();
        }
        match severity {
            Severity::Heading => message.bold().to_string(),
            Severity::Info => message.cyan().to_string(),
            Severity::Success => message.green().to_string(),
            Severity::Error => message.red().to_string(),
        }
    }
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(use_colors: bool) -> Self {
        Self::new(io::stdout(), use_colors)
    }
}

impl<W: Write> MessageSink for ConsoleSink<W> {
    fn emit(&mut self, severity: Severity, message: &str) {
        let line = self.render(severity, message);
        if let Err(err) = writeln!(self.writer, "{line}") {
            tracing::warn!(error = %err, "failed to write message");
        }
    }
}

/// Colors are on unless the config turns them off or `NO_COLOR` is set.
pub fn should_use_colors(configured: bool) -> bool {
    configured && std::env::var_os("NO_COLOR").is_none()
}
