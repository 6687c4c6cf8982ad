use std::fmt::Display;

use log::debug;

use crate::lexer::tokens::{Token, TokenKind};

/// Attribute shown for identifiers and numeric literals. There is no symbol
/// table behind it.
pub const TABLE_ENTRY_ATTRIBUTE: &str = "pointer to table entry";
pub const NO_ATTRIBUTE: &str = "-";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    Keyword,
    Identifier,
    Number,
    Float,
    StringLiteral,
    Operator,
    Delimiter,
}

impl Category {
    pub fn of(kind: TokenKind) -> Category {
        match kind {
            TokenKind::Include
            | TokenKind::Using
            | TokenKind::Namespace
            | TokenKind::Std
            | TokenKind::Int
            | TokenKind::String
            | TokenKind::Return
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::Main => Category::Keyword,

            TokenKind::Identifier => Category::Identifier,
            TokenKind::Number => Category::Number,
            TokenKind::Float => Category::Float,
            TokenKind::StringLiteral => Category::StringLiteral,

            TokenKind::StreamOut
            | TokenKind::StreamIn
            | TokenKind::LessEquals
            | TokenKind::GreaterEquals
            | TokenKind::NotEquals
            | TokenKind::Equals
            | TokenKind::Percent
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::Assignment
            | TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Star
            | TokenKind::Slash => Category::Operator,

            TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::Semicolon
            | TokenKind::Comma => Category::Delimiter,
        }
    }

    /// Label for the lexical-component column. Rows never show `keyword`:
    /// keyword rows carry the keyword's own lowercase name, see
    /// [`classify_token`].
    pub fn label(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Identifier => "id",
            Category::Number => "num",
            Category::Float => "float",
            Category::StringLiteral => "string_literal",
            Category::Operator => "oprel",
            Category::Delimiter => "delimiter",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One line of the lexical-components table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub lexeme: String,
    pub component: String,
    pub attribute: String,
}

impl Row {
    pub fn cells(&self) -> [&str; 3] {
        [&self.lexeme, &self.component, &self.attribute]
    }
}

pub fn classify_token(token: &Token) -> Row {
    let kind = token.kind;
    let category = Category::of(kind);

    let (component, attribute) = match category {
        Category::Keyword => (kind.name().to_lowercase(), NO_ATTRIBUTE),
        Category::Identifier | Category::Number | Category::Float => {
            (category.label().to_string(), TABLE_ENTRY_ATTRIBUTE)
        }
        Category::StringLiteral => (category.label().to_string(), NO_ATTRIBUTE),
        Category::Operator | Category::Delimiter => (category.label().to_string(), kind.name()),
    };

    Row {
        lexeme: token.value.clone(),
        component,
        attribute: attribute.to_string(),
    }
}

/// Rows come out in token order.
pub fn classify(tokens: &[Token]) -> Vec<Row> {
    let rows: Vec<Row> = tokens.iter().map(classify_token).collect();

    debug!("classified {} tokens", rows.len());
    rows
}
