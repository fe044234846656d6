//! Compile errors and their rendering.

use shape_ir::Span;
use shape_match::NameResolutionError;
use shape_parse::ParseError;
use std::fmt::Write;
use thiserror::Error;

/// Pattern text the grammar rejects.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message} at position {position}")]
pub struct PatternSyntaxError {
    pub message: String,
    /// The full pattern text.
    pub source_text: String,
    /// Byte offset of the failure.
    pub position: usize,
    /// Extent of the offending token.
    pub span: Span,
}

impl PatternSyntaxError {
    pub fn new(source: &str, message: impl Into<String>, span: Span) -> Self {
        PatternSyntaxError {
            message: message.into(),
            source_text: source.to_string(),
            position: span.start as usize,
            span,
        }
    }

    pub(crate) fn from_parse(source: &str, err: ParseError) -> Self {
        PatternSyntaxError::new(source, err.message, err.span)
    }

    /// 1-based line and column (in characters) of the failure.
    pub fn line_col(&self) -> (usize, usize) {
        line_col(&self.source_text, self.position)
    }

    /// The message followed by the offending line with a caret underline.
    pub fn render(&self) -> String {
        render_snippet(&self.source_text, self.span, &self.message)
    }
}

/// Why [`compile`](crate::compile) failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Syntax(#[from] PatternSyntaxError),
    #[error(transparent)]
    NameResolution(#[from] NameResolutionError),
}

impl CompileError {
    /// Source location of the error.
    pub fn span(&self) -> Span {
        match self {
            CompileError::Syntax(err) => err.span,
            CompileError::NameResolution(err) => err.span,
        }
    }

    /// Render against the pattern text that failed to compile.
    pub fn render(&self, source: &str) -> String {
        match self {
            CompileError::Syntax(err) => err.render(),
            CompileError::NameResolution(err) => render_snippet(source, err.span, &err.to_string()),
        }
    }
}

fn line_col(source: &str, position: usize) -> (usize, usize) {
    let before = source.get(..position).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

fn render_snippet(source: &str, span: Span, message: &str) -> String {
    let position = (span.start as usize).min(source.len());
    let (line, col) = line_col(source, position);
    let text = source.lines().nth(line - 1).unwrap_or("");

    let line_end = source[position..]
        .find('\n')
        .map_or(source.len(), |i| position + i);
    let end = (span.end as usize).clamp(position, line_end);
    let width = source.get(position..end).map_or(0, |s| s.chars().count()).max(1);

    let gutter = " ".repeat(line.to_string().len());
    let mut out = String::new();
    let _ = writeln!(out, "error: {message}");
    let _ = writeln!(out, "{gutter}--> {line}:{col}");
    let _ = writeln!(out, "{gutter} |");
    let _ = writeln!(out, "{line} | {text}");
    let _ = writeln!(
        out,
        "{gutter} | {}{}",
        " ".repeat(col - 1),
        "^".repeat(width)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_and_column_are_one_based() {
        let err = PatternSyntaxError::new("[1,\n  *, 2]", "a splat must be the last element", Span::new(7, 8));
        assert_eq!(err.line_col(), (2, 4));
        assert_eq!(err.position, 7);
    }

    #[test]
    fn render_underlines_the_span() {
        let err = PatternSyntaxError::new("[1, *, 2]", "a splat must be the last element", Span::new(5, 6));
        assert_eq!(
            err.render(),
            "error: a splat must be the last element\n --> 1:6\n  |\n1 | [1, *, 2]\n  |      ^\n"
        );
    }

    #[test]
    fn render_at_end_of_input_shows_one_caret() {
        let err = PatternSyntaxError::new("[1", "expected `,` or `]`", Span::point(2));
        assert!(err.render().ends_with("1 | [1\n  |   ^\n"));
    }

    #[test]
    fn display_includes_position() {
        let err = PatternSyntaxError::new("[*, 2]", "a splat must be the last element", Span::new(2, 3));
        assert_eq!(err.to_string(), "a splat must be the last element at position 2");
    }
}
