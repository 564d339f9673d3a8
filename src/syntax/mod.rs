pub mod lexeme;
pub mod lexer;
pub mod parser;
pub mod span;
