//! Recursive-descent parser from tokens to [`Node`] trees.
//!
//! Errors accumulate as diagnostics and parsing carries on, so one run
//! reports as many problems as it can. A program with any diagnostic is
//! rejected as a whole.

mod expr;
mod stmt;

use crate::ast::Node;
use crate::diagnostic::Diagnostic;
use crate::lexeme::Lexeme;
use crate::lexer::Comment;
use crate::span::{Span, Spanned};

const MAX_NESTING_DEPTH: u32 = 256;

pub struct Parser {
    tokens: Vec<Spanned<Lexeme>>,
    comments: Vec<Comment>,
    next_comment: usize,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    depth: u32,
    /// Set when the nesting cap is hit; later errors are follow-ons.
    aborted: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned<Lexeme>>) -> Self {
        Self::with_comments(tokens, Vec::new())
    }

    /// Parser that turns statement-position comments into `Comment` nodes.
    ///
    /// The token stream always ends in `Eof`; one is appended if missing.
    pub fn with_comments(mut tokens: Vec<Spanned<Lexeme>>, comments: Vec<Comment>) -> Self {
        if !matches!(tokens.last(), Some(t) if t.node == Lexeme::Eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Spanned::new(Lexeme::Eof, Span::new(end, end)));
        }
        Self {
            tokens,
            comments,
            next_comment: 0,
            pos: 0,
            diagnostics: Vec::new(),
            depth: 0,
            aborted: false,
        }
    }

    pub fn parse_program(mut self) -> Result<Node, Vec<Diagnostic>> {
        let stmts = self.parse_stmts_until(&Lexeme::Eof);
        if !self.diagnostics.is_empty() {
            return Err(self.diagnostics);
        }
        Ok(Node::seq(stmts))
    }

    /// Returns false once the cap is hit; the rest of the input is then
    /// skipped so recursion unwinds immediately.
    fn enter_nesting(&mut self) -> bool {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            self.error_with_help(
                "nesting depth exceeded (maximum 256 levels)",
                "simplify the program by splitting deeply nested expressions into assignments",
            );
            self.aborted = true;
            self.pos = self.tokens.len() - 1;
            return false;
        }
        true
    }

    fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    // ── Comments ──────────────────────────────────────────────────

    /// Move comments that start before the current token into `stmts`.
    fn flush_comments(&mut self, stmts: &mut Vec<Node>) {
        let limit = self.current_span().start;
        while let Some(comment) = self.comments.get(self.next_comment) {
            if comment.span.start >= limit {
                break;
            }
            stmts.push(Node::Comment(comment.text.clone()));
            self.next_comment += 1;
        }
    }

    /// Drop comments that start before the current token.
    fn skip_comments(&mut self) {
        let limit = self.current_span().start;
        while self
            .comments
            .get(self.next_comment)
            .is_some_and(|c| c.span.start < limit)
        {
            self.next_comment += 1;
        }
    }

    // ── Token helpers ─────────────────────────────────────────────

    fn peek(&self) -> &Lexeme {
        &self.tokens[self.pos].node
    }

    fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    fn advance(&mut self) -> &Spanned<Lexeme> {
        let tok = &self.tokens[self.pos];
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn at(&self, token: &Lexeme) -> bool {
        self.peek() == token
    }

    fn eat(&mut self, token: &Lexeme) -> bool {
        if self.at(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Lexeme) -> Span {
        if self.at(token) {
            let span = self.current_span();
            self.advance();
            span
        } else {
            self.error_at_current(&format!(
                "expected {}, found {}",
                token.description(),
                self.peek().description()
            ));
            self.current_span()
        }
    }

    fn expect_ident(&mut self) -> String {
        if let Lexeme::Ident(name) = self.peek() {
            let name = name.clone();
            self.advance();
            name
        } else {
            self.error_at_current(&format!(
                "expected identifier, found {}",
                self.peek().description()
            ));
            String::new()
        }
    }

    // ── Diagnostics ───────────────────────────────────────────────

    fn error_at_current(&mut self, msg: &str) {
        if self.aborted {
            return;
        }
        self.diagnostics
            .push(Diagnostic::error(msg.to_string(), self.current_span()));
    }

    fn error_with_help(&mut self, msg: &str, help: &str) {
        if self.aborted {
            return;
        }
        self.diagnostics.push(
            Diagnostic::error(msg.to_string(), self.current_span()).with_help(help.to_string()),
        );
    }

    fn error_at(&mut self, span: Span, msg: &str, help: &str) {
        if self.aborted {
            return;
        }
        self.diagnostics
            .push(Diagnostic::error(msg.to_string(), span).with_help(help.to_string()));
    }
}
