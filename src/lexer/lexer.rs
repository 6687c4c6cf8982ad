use std::{iter::FusedIterator, rc::Rc};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_PATTERN, MK_TOKEN};

use super::tokens::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct PatternRule {
    pub kind: TokenKind,
    pub regex: Regex,
}

lazy_static! {
    /// Rules are tried top to bottom and the first match wins, so a rule must
    /// come before any rule matching a prefix of its lexemes.
    pub static ref PATTERNS: Vec<PatternRule> = vec![
        MK_PATTERN!(TokenKind::Include, r"#include\s*<\w+>"),

        MK_PATTERN!(TokenKind::Using, r"\busing\b"),
        MK_PATTERN!(TokenKind::Namespace, r"\bnamespace\b"),
        MK_PATTERN!(TokenKind::Std, r"\bstd\b"),
        MK_PATTERN!(TokenKind::Int, r"\bint\b"),
        MK_PATTERN!(TokenKind::String, r"\bstring\b"),
        MK_PATTERN!(TokenKind::Return, r"\breturn\b"),
        MK_PATTERN!(TokenKind::If, r"\bif\b"),
        MK_PATTERN!(TokenKind::Else, r"\belse\b"),
        MK_PATTERN!(TokenKind::Main, r"\bmain\b"),

        MK_PATTERN!(TokenKind::Identifier, r"\b[a-zA-Z_]\w*\b"),

        MK_PATTERN!(TokenKind::Float, r"\d+\.\d+"),
        MK_PATTERN!(TokenKind::Number, r"\d+"),

        MK_PATTERN!(TokenKind::StreamOut, "<<"),
        MK_PATTERN!(TokenKind::StreamIn, ">>"),
        MK_PATTERN!(TokenKind::LessEquals, "<="),
        MK_PATTERN!(TokenKind::GreaterEquals, ">="),
        MK_PATTERN!(TokenKind::NotEquals, "!="),
        MK_PATTERN!(TokenKind::Equals, "=="),
        MK_PATTERN!(TokenKind::Percent, "%"),
        MK_PATTERN!(TokenKind::Less, "<"),
        MK_PATTERN!(TokenKind::Greater, ">"),
        MK_PATTERN!(TokenKind::Assignment, "="),
        MK_PATTERN!(TokenKind::Plus, r"\+"),
        MK_PATTERN!(TokenKind::Dash, "-"),
        MK_PATTERN!(TokenKind::Star, r"\*"),
        MK_PATTERN!(TokenKind::Slash, "/"),

        MK_PATTERN!(TokenKind::OpenParen, r"\("),
        MK_PATTERN!(TokenKind::CloseParen, r"\)"),
        MK_PATTERN!(TokenKind::OpenCurly, r"\{"),
        MK_PATTERN!(TokenKind::CloseCurly, r"\}"),
        MK_PATTERN!(TokenKind::Semicolon, ";"),
        MK_PATTERN!(TokenKind::Comma, ","),

        MK_PATTERN!(TokenKind::StringLiteral, r#""[^"]*""#),
    ];
}

/// Lazy scanner over a borrowed source.
///
/// Yields tokens in source order and stops for good after the first error.
/// Scanning again means building a new `Lexer` over the same text.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    file: Rc<String>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>) -> Lexer<'a> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            failed: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position_at(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    /// Drops whitespace, `//` line comments and `/* */` block comments in
    /// front of the next lexeme.
    fn skip_trivia(&mut self) {
        loop {
            let remaining = self.remainder();
            let trimmed = remaining.trim_start_matches(is_blank);
            self.advance_n(remaining.len() - trimmed.len());

            if trimmed.starts_with("//") {
                match trimmed.find('\n') {
                    Some(newline) => self.advance_n(newline + 1),
                    None => self.advance_n(trimmed.len()),
                }
                continue;
            }

            // The closer is searched from the opener itself, so `/*/` is a
            // complete comment.
            if trimmed.starts_with("/*") {
                match trimmed.find("*/") {
                    Some(close) => self.advance_n(close + 2),
                    None => {
                        debug!(
                            "unterminated block comment at offset {} runs to end of input",
                            self.pos
                        );
                        self.advance_n(trimmed.len());
                    }
                }
                continue;
            }

            break;
        }
    }
}

/// Unicode white space plus the ASCII separators `\x1c`..=`\x1f`.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.skip_trivia();

        if self.at_eof() {
            return None;
        }

        let remaining = self.remainder();

        for pattern in PATTERNS.iter() {
            let Some(found) = pattern.regex.find(remaining) else {
                continue;
            };

            if found.as_str().is_empty() {
                continue;
            }

            let start = self.pos;
            self.advance_n(found.end());

            let token = MK_TOKEN!(
                pattern.kind,
                String::from(found.as_str()),
                Span {
                    start: self.position_at(start),
                    end: self.position_at(self.pos),
                }
            );
            trace!("{} at offset {}", token, start);

            return Some(Ok(token));
        }

        self.failed = true;
        let character = self.at()?;

        Some(Err(Error::new(
            ErrorImpl::UnexpectedCharacter { character },
            self.position_at(self.pos),
        )))
    }
}

impl FusedIterator for Lexer<'_> {}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let tokens = Lexer::new(source, file).collect::<Result<Vec<Token>, Error>>()?;

    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}
