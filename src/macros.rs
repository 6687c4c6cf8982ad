//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored PatternRule from a regex literal

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The matched lexeme
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a PatternRule whose regex only matches at the start of the
/// haystack.
///
/// The pattern is wrapped in `^(?:...)` at compile time, so alternations in
/// `$pattern` stay anchored as a whole.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::LessEquals, "<=")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $pattern:literal) => {
        $crate::lexer::lexer::PatternRule {
            kind: $kind,
            regex: $crate::regex::Regex::new(concat!("^(?:", $pattern, ")"))
                .expect(concat!("invalid token pattern: ", $pattern)),
        }
    };
}
