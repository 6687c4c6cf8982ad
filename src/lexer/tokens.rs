use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Include,

    // Reserved
    Using,
    Namespace,
    Std,
    Int,
    String,
    Return,
    If,
    Else,
    Main,

    Identifier,
    Float,
    Number,

    StreamOut,     // <<
    StreamIn,      // >>
    LessEquals,    // <=
    GreaterEquals, // >=
    NotEquals,     // !=
    Equals,        // ==
    Percent,
    Less,
    Greater,
    Assignment, // =
    Plus,
    Dash,
    Star,
    Slash,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Comma,

    StringLiteral,
}

impl TokenKind {
    pub const ALL: [TokenKind; 34] = [
        TokenKind::Include,
        TokenKind::Using,
        TokenKind::Namespace,
        TokenKind::Std,
        TokenKind::Int,
        TokenKind::String,
        TokenKind::Return,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Main,
        TokenKind::Identifier,
        TokenKind::Float,
        TokenKind::Number,
        TokenKind::StreamOut,
        TokenKind::StreamIn,
        TokenKind::LessEquals,
        TokenKind::GreaterEquals,
        TokenKind::NotEquals,
        TokenKind::Equals,
        TokenKind::Percent,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Assignment,
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::StringLiteral,
    ];

    /// Canonical upper-case name, as it appears in the attribute column.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Include => "INCLUDE",
            TokenKind::Using => "USING",
            TokenKind::Namespace => "NAMESPACE",
            TokenKind::Std => "STD",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Main => "MAIN",
            TokenKind::Identifier => "ID",
            TokenKind::Float => "FLOAT",
            TokenKind::Number => "NUMBER",
            TokenKind::StreamOut => "STREAM_OUT_OP",
            TokenKind::StreamIn => "STREAM_IN_OP",
            TokenKind::LessEquals => "LESSEQUAL",
            TokenKind::GreaterEquals => "GREATEREQUAL",
            TokenKind::NotEquals => "NOTEQUAL",
            TokenKind::Equals => "EQUAL",
            TokenKind::Percent => "MODULO",
            TokenKind::Less => "LESSTHAN",
            TokenKind::Greater => "GREATERTHAN",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::StringLiteral => "STRING_LITERAL",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:?})", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
