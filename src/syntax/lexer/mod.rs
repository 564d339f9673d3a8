use crate::diagnostic::Diagnostic;
use crate::lexeme::Lexeme;
use crate::span::{Span, Spanned};

/// A `//` line comment, kept aside so the parser can place it between
/// statements.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    /// Comment text after the `//`, leading whitespace trimmed.
    pub text: String,
    pub span: Span,
}

pub struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    comments: Vec<Comment>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            diagnostics: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> (Vec<Spanned<Lexeme>>, Vec<Comment>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.node == Lexeme::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        (tokens, self.comments, self.diagnostics)
    }

    fn next_token(&mut self) -> Spanned<Lexeme> {
        loop {
            self.skip_whitespace_and_comments();

            if self.pos >= self.source.len() {
                return self.make_token(Lexeme::Eof, self.pos, self.pos);
            }

            let start = self.pos;
            let ch = self.source[self.pos];

            if is_ident_start(ch) {
                return self.scan_ident_or_keyword();
            }

            if ch.is_ascii_digit() {
                return self.scan_number();
            }

            if ch == b'"' {
                if let Some(tok) = self.scan_string() {
                    return tok;
                }
                continue;
            }

            if let Some(tok) = self.scan_symbol(start) {
                return tok;
            }
            // error recorded; keep scanning
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.pos < self.source.len() && self.source[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }

            if self.pos + 1 < self.source.len()
                && self.source[self.pos] == b'/'
                && self.source[self.pos + 1] == b'/'
            {
                let start = self.pos;
                while self.pos < self.source.len() && self.source[self.pos] != b'\n' {
                    self.pos += 1;
                }
                let text = self.text(start + 2, self.pos).trim().to_string();
                self.comments.push(Comment {
                    text,
                    span: Span::new(start as u32, self.pos as u32),
                });
                continue;
            }

            break;
        }
    }

    fn scan_ident_or_keyword(&mut self) -> Spanned<Lexeme> {
        let start = self.pos;
        while self.pos < self.source.len() && is_ident_continue(self.source[self.pos]) {
            self.pos += 1;
        }
        let text = self.text(start, self.pos);
        let token = Lexeme::from_keyword(&text).unwrap_or(Lexeme::Ident(text));
        self.make_token(token, start, self.pos)
    }

    /// Numbers keep their source spelling; Logic parses them itself.
    fn scan_number(&mut self) -> Spanned<Lexeme> {
        let start = self.pos;
        self.skip_digits();
        if self.peek() == Some(b'.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
            self.skip_digits();
        }
        let text = self.text(start, self.pos);
        self.make_token(Lexeme::Number(text), start, self.pos)
    }

    /// Scan a `"..."` literal. `\"` stands for a quote inside the string.
    fn scan_string(&mut self) -> Option<Spanned<Lexeme>> {
        let start = self.pos;
        self.pos += 1; // opening quote
        let mut text = String::new();
        let mut chunk_start = self.pos;
        loop {
            match self.peek() {
                None | Some(b'\n') => {
                    self.diagnostics.push(
                        Diagnostic::error(
                            "unterminated string literal".to_string(),
                            Span::new(start as u32, self.pos as u32),
                        )
                        .with_help("close the string with `\"` on the same line".to_string()),
                    );
                    return None;
                }
                Some(b'"') => {
                    text.push_str(&self.text(chunk_start, self.pos));
                    self.pos += 1;
                    return Some(self.make_token(Lexeme::Str(text), start, self.pos));
                }
                Some(b'\\') if self.peek_at(1) == Some(b'"') => {
                    text.push_str(&self.text(chunk_start, self.pos));
                    text.push('"');
                    self.pos += 2;
                    chunk_start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn scan_symbol(&mut self, start: usize) -> Option<Spanned<Lexeme>> {
        let ch = self.source[self.pos];
        self.pos += 1;

        let token = match ch {
            b'(' => Lexeme::LParen,
            b')' => Lexeme::RParen,
            b'{' => Lexeme::LBrace,
            b'}' => Lexeme::RBrace,
            b'[' => Lexeme::LBracket,
            b']' => Lexeme::RBracket,
            b',' => Lexeme::Comma,
            b';' => Lexeme::Semicolon,
            b'.' => Lexeme::Dot,
            b'@' => Lexeme::At,
            b'+' => Lexeme::Plus,
            b'-' => Lexeme::Minus,
            b'/' => Lexeme::Slash,
            b'%' => Lexeme::Percent,
            b'*' => {
                if self.eat_byte(b'*') {
                    Lexeme::StarStar
                } else {
                    Lexeme::Star
                }
            }
            b'=' => {
                if self.eat_byte(b'=') {
                    if self.eat_byte(b'=') {
                        Lexeme::EqEqEq
                    } else {
                        Lexeme::EqEq
                    }
                } else {
                    Lexeme::Eq
                }
            }
            b'!' => {
                if self.eat_byte(b'=') {
                    Lexeme::BangEq
                } else {
                    Lexeme::Bang
                }
            }
            b'<' => {
                if self.eat_byte(b'=') {
                    Lexeme::LtEq
                } else {
                    Lexeme::Lt
                }
            }
            b'>' => {
                if self.eat_byte(b'=') {
                    Lexeme::GtEq
                } else {
                    Lexeme::Gt
                }
            }
            b'&' if self.eat_byte(b'&') => Lexeme::AmpAmp,
            b'|' if self.eat_byte(b'|') => Lexeme::PipePipe,
            b'&' | b'|' => {
                self.diagnostics.push(
                    Diagnostic::error(
                        format!("unexpected '{}'", ch as char),
                        Span::new(start as u32, self.pos as u32),
                    )
                    .with_help(format!(
                        "Mindcode has no bitwise operators; use `{0}{0}` for the logical form",
                        ch as char
                    )),
                );
                return None;
            }
            _ => {
                // Step over the whole UTF-8 sequence so the span covers one character.
                while self.peek().is_some_and(|b| (b & 0xC0) == 0x80) {
                    self.pos += 1;
                }
                let shown = self.text(start, self.pos);
                self.diagnostics.push(
                    Diagnostic::error(
                        format!("unexpected character '{}'", shown),
                        Span::new(start as u32, self.pos as u32),
                    )
                    .with_help(
                        "this character is not recognized as part of Mindcode syntax".to_string(),
                    ),
                );
                return None;
            }
        };

        Some(self.make_token(token, start, self.pos))
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn eat_byte(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn text(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.source[start..end]).into_owned()
    }

    fn make_token(&self, token: Lexeme, start: usize, end: usize) -> Spanned<Lexeme> {
        Spanned::new(token, Span::new(start as u32, end as u32))
    }
}

fn is_ident_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_ident_continue(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}
