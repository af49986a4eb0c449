//! Identifier-name validation
//!
//! Decides whether a piece of text can be written as a bare (unquoted)
//! property name. Property-name position accepts reserved words, so only the
//! lexical shape of the text matters.

use oxc_syntax::identifier::{is_identifier_part, is_identifier_start};

/// Returns true if `text` is a legal bare property name.
///
/// The first character must be an identifier-start character (a letter, `_`
/// or `$`, including non-ASCII letters); every following character must be an
/// identifier-part character (which adds digits and combining marks).
pub fn is_valid_property_name(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}
