use crate::span::Span;

/// A compiler error with optional source location, notes and help.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub message: String,
    /// `None` for errors that have no source position, such as failures
    /// raised by the code generator, which works on the bare AST.
    pub span: Option<Span>,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: String, span: Span) -> Self {
        Self {
            message,
            span: Some(span),
            notes: Vec::new(),
            help: None,
        }
    }

    /// An error not tied to any source location.
    pub fn unlocated(message: String) -> Self {
        Self {
            message,
            span: None,
            notes: Vec::new(),
            help: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    /// Render the diagnostic to stderr using ariadne.
    pub fn render(&self, filename: &str, source: &str) {
        use ariadne::{Color, Label, Report, ReportKind, Source};

        let offset = self.span.map(|s| s.start as usize).unwrap_or(0);
        let mut report =
            Report::build(ReportKind::Error, filename, offset).with_message(&self.message);

        if let Some(span) = self.span {
            report = report.with_label(
                Label::new((filename, span.start as usize..span.end as usize))
                    .with_message(&self.message)
                    .with_color(Color::Red),
            );
        }

        for note in &self.notes {
            report = report.with_note(note);
        }

        if let Some(help) = &self.help {
            report = report.with_help(help);
        }

        if report
            .finish()
            .eprint((filename, Source::from(source)))
            .is_err()
        {
            eprintln!("error: {}", self.message);
        }
    }
}

/// Render a list of diagnostics.
pub fn render_diagnostics(diagnostics: &[Diagnostic], filename: &str, source: &str) {
    for diag in diagnostics {
        diag.render(filename, source);
    }
}
