//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn unexpected(character: char, offset: u32) -> Error {
    Error::new(
        ErrorImpl::UnexpectedCharacter { character },
        Position(offset, Rc::new("test.cpp".to_string())),
    )
}

#[test]
fn test_error_creation() {
    let error = unexpected('@', 10);

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnexpectedCharacter { character: '@' }
    );
}

#[test]
fn test_error_position() {
    let error = unexpected('$', 42);

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.cpp");
}

#[test]
fn test_error_display() {
    let error = unexpected('@', 10);

    assert_eq!(error.to_string(), "unexpected character: '@' at offset 10 in test.cpp");
}

#[test]
fn test_error_tip_none() {
    let error = unexpected('@', 0);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_scope_resolution() {
    let error = unexpected(':', 3);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`::`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_unterminated_string() {
    let error = unexpected('"', 0);

    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_error_tip_include() {
    let error = unexpected('#', 0);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("#include")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
