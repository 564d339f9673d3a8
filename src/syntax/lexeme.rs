/// All lexemes in the Mindcode language.
#[derive(Clone, Debug, PartialEq)]
pub enum Lexeme {
    // Keywords
    If,
    Else,
    While,
    Case,
    When,
    True,
    False,
    Null,
    And,
    Or,
    Not,

    // Symbols
    LParen,     // (
    RParen,     // )
    LBrace,     // {
    RBrace,     // }
    LBracket,   // [
    RBracket,   // ]
    Comma,      // ,
    Semicolon,  // ;
    Dot,        // .
    At,         // @
    Eq,         // =
    EqEq,       // ==
    EqEqEq,     // ===
    BangEq,     // !=
    Bang,       // !
    Lt,         // <
    LtEq,       // <=
    Gt,         // >
    GtEq,       // >=
    Plus,       // +
    Minus,      // -
    Star,       // *
    StarStar,   // **
    Slash,      // /
    Percent,    // %
    AmpAmp,     // &&
    PipePipe,   // ||

    // Literals
    /// Numeric literal source text, e.g. `42` or `0.5`.
    Number(String),
    /// String literal contents without the quotes.
    Str(String),
    Ident(String),

    // End of file
    Eof,
}

impl Lexeme {
    /// Try to match an identifier string to a keyword lexeme.
    pub fn from_keyword(s: &str) -> Option<Lexeme> {
        match s {
            "if" => Some(Lexeme::If),
            "else" => Some(Lexeme::Else),
            "while" => Some(Lexeme::While),
            "case" => Some(Lexeme::Case),
            "when" => Some(Lexeme::When),
            "true" => Some(Lexeme::True),
            "false" => Some(Lexeme::False),
            "null" => Some(Lexeme::Null),
            "and" => Some(Lexeme::And),
            "or" => Some(Lexeme::Or),
            "not" => Some(Lexeme::Not),
            _ => None,
        }
    }

    /// Source token of a binary operator lexeme, as stored in the AST.
    pub fn binary_op_token(&self) -> Option<&'static str> {
        let token = match self {
            Lexeme::Or => "or",
            Lexeme::PipePipe => "||",
            Lexeme::And => "and",
            Lexeme::AmpAmp => "&&",
            Lexeme::EqEq => "==",
            Lexeme::BangEq => "!=",
            Lexeme::EqEqEq => "===",
            Lexeme::Lt => "<",
            Lexeme::LtEq => "<=",
            Lexeme::Gt => ">",
            Lexeme::GtEq => ">=",
            Lexeme::Plus => "+",
            Lexeme::Minus => "-",
            Lexeme::Star => "*",
            Lexeme::Slash => "/",
            Lexeme::Percent => "%",
            Lexeme::StarStar => "**",
            _ => return None,
        };
        Some(token)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Lexeme::If => "'if'",
            Lexeme::Else => "'else'",
            Lexeme::While => "'while'",
            Lexeme::Case => "'case'",
            Lexeme::When => "'when'",
            Lexeme::True => "'true'",
            Lexeme::False => "'false'",
            Lexeme::Null => "'null'",
            Lexeme::And => "'and'",
            Lexeme::Or => "'or'",
            Lexeme::Not => "'not'",
            Lexeme::LParen => "'('",
            Lexeme::RParen => "')'",
            Lexeme::LBrace => "'{'",
            Lexeme::RBrace => "'}'",
            Lexeme::LBracket => "'['",
            Lexeme::RBracket => "']'",
            Lexeme::Comma => "','",
            Lexeme::Semicolon => "';'",
            Lexeme::Dot => "'.'",
            Lexeme::At => "'@'",
            Lexeme::Eq => "'='",
            Lexeme::EqEq => "'=='",
            Lexeme::EqEqEq => "'==='",
            Lexeme::BangEq => "'!='",
            Lexeme::Bang => "'!'",
            Lexeme::Lt => "'<'",
            Lexeme::LtEq => "'<='",
            Lexeme::Gt => "'>'",
            Lexeme::GtEq => "'>='",
            Lexeme::Plus => "'+'",
            Lexeme::Minus => "'-'",
            Lexeme::Star => "'*'",
            Lexeme::StarStar => "'**'",
            Lexeme::Slash => "'/'",
            Lexeme::Percent => "'%'",
            Lexeme::AmpAmp => "'&&'",
            Lexeme::PipePipe => "'||'",
            Lexeme::Number(_) => "number literal",
            Lexeme::Str(_) => "string literal",
            Lexeme::Ident(_) => "identifier",
            Lexeme::Eof => "end of file",
        }
    }
}
