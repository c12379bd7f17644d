//! Token kinds and their literal payload.
//!
//! A token is an immutable value object: a kind plus, for kinds that carry
//! one, the exact source slice that produced it. That literal is used both
//! for printing (AST debug strings reuse it verbatim) and for downstream
//! conversion (the parser turns an `Int` token's literal into an `i32`).

use std::fmt;

/// A single lexical token.
///
/// Fixed-text kinds (punctuation, operators, keywords) don't carry a
/// payload — their literal text is implied by the variant and produced by
/// [`Token::literal`]. `Ident`, `Int`, `Str`, and `Illegal` carry the exact
/// source slice that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A character (or sequence) the lexer could not classify.
    Illegal(String),
    /// End of input. Returned forever once reached.
    Eof,

    /// One or more ASCII letters, not a recognized keyword.
    Ident(String),
    /// One or more ASCII digits, as they appeared in the source.
    Int(String),
    /// The contents of a `"..."` literal, with no escape processing.
    Str(String),

    Assign,
    Plus,
    Minus,
    Bang,
    Slash,
    Star,

    Lt,
    Gt,
    Eq,
    NotEq,

    Comma,
    Semicolon,
    Colon,

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// Looks up a bare identifier slice against the keyword table,
    /// returning the matching keyword token or `Ident` for anything else.
    ///
    /// This is the inverse of [`Token::literal`] for keyword tokens: given
    /// the slice the lexer already scanned as an identifier, decide whether
    /// it's actually one of the reserved words.
    pub fn lookup_ident(ident: &str) -> Token {
        match ident {
            "fn" => Token::Function,
            "let" => Token::Let,
            "true" => Token::True,
            "false" => Token::False,
            "if" => Token::If,
            "else" => Token::Else,
            "return" => Token::Return,
            other => Token::Ident(other.to_string()),
        }
    }

    /// The exact source text this token stands for.
    ///
    /// For `Ident`/`Int`/`Str`/`Illegal` this is the carried payload; for
    /// every other kind it's the fixed punctuation or keyword text. AST
    /// nodes reuse this verbatim when producing their canonical debug
    /// string (see `monkey-ast`).
    pub fn literal(&self) -> String {
        match self {
            Token::Illegal(s) => s.clone(),
            Token::Eof => String::new(),
            Token::Ident(s) => s.clone(),
            Token::Int(s) => s.clone(),
            Token::Str(s) => s.clone(),
            Token::Assign => "=".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Bang => "!".to_string(),
            Token::Slash => "/".to_string(),
            Token::Star => "*".to_string(),
            Token::Lt => "<".to_string(),
            Token::Gt => ">".to_string(),
            Token::Eq => "==".to_string(),
            Token::NotEq => "!=".to_string(),
            Token::Comma => ",".to_string(),
            Token::Semicolon => ";".to_string(),
            Token::Colon => ":".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::LBrace => "{".to_string(),
            Token::RBrace => "}".to_string(),
            Token::LBracket => "[".to_string(),
            Token::RBracket => "]".to_string(),
            Token::Function => "fn".to_string(),
            Token::Let => "let".to_string(),
            Token::True => "true".to_string(),
            Token::False => "false".to_string(),
            Token::If => "if".to_string(),
            Token::Else => "else".to_string(),
            Token::Return => "return".to_string(),
        }
    }

    /// A stable, human-readable kind name, independent of any payload.
    ///
    /// Used in parser error messages ("expected next token to be RPAREN,
    /// got LBRACE instead") so the message names the *kind* the parser
    /// expected rather than echoing a literal that may not exist yet.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Illegal(_) => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Ident(_) => "IDENT",
            Token::Int(_) => "INT",
            Token::Str(_) => "STRING",
            Token::Assign => "ASSIGN",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Bang => "BANG",
            Token::Slash => "SLASH",
            Token::Star => "STAR",
            Token::Lt => "LT",
            Token::Gt => "GT",
            Token::Eq => "EQ",
            Token::NotEq => "NOT_EQ",
            Token::Comma => "COMMA",
            Token::Semicolon => "SEMICOLON",
            Token::Colon => "COLON",
            Token::LParen => "LPAREN",
            Token::RParen => "RPAREN",
            Token::LBrace => "LBRACE",
            Token::RBrace => "RBRACE",
            Token::LBracket => "LBRACKET",
            Token::RBracket => "RBRACKET",
            Token::Function => "FUNCTION",
            Token::Let => "LET",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::If => "IF",
            Token::Else => "ELSE",
            Token::Return => "RETURN",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal())
    }
}
