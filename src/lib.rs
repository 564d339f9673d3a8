pub mod api;
pub mod ast;
pub mod config;
pub mod diagnostic;
pub mod ir;
pub mod syntax;

// Re-exports: `mindcode::X` paths used by the CLI and tests
pub use config::project;
pub use syntax::lexeme;
pub use syntax::lexer;
pub use syntax::parser;
pub use syntax::span;

// Public API: `mindcode::compile()` etc.
pub use api::*;

use diagnostic::{render_diagnostics, Diagnostic};
use lexer::Lexer;
use parser::Parser;

pub(crate) fn parse_source(source: &str, filename: &str) -> Result<ast::Node, Vec<Diagnostic>> {
    parse_source_silent(source, filename).map_err(|errors| {
        render_diagnostics(&errors, filename, source);
        errors
    })
}

/// Parse without rendering diagnostics to stderr.
pub fn parse_source_silent(source: &str, _filename: &str) -> Result<ast::Node, Vec<Diagnostic>> {
    let (tokens, comments, lex_errors) = Lexer::new(source).tokenize();
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }
    Parser::with_comments(tokens, comments).parse_program()
}
