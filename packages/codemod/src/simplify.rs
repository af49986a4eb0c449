//! Simplification predicate
//!
//! Classifies a property's key and value into tagged views and decides which
//! shorthand rewrite, if any, keeps the program's meaning.

use std::borrow::Cow;

use oxc_ast::ast::{Expression, Function, ObjectProperty, PropertyKey};

use crate::identifier::is_valid_property_name;
use crate::self_reference::is_self_referential;

/// The key of an object property, as far as shorthand rewriting cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key<'s> {
    /// An identifier token: `{ foo: ... }`.
    PlainName(&'s str),
    /// A string or numeric literal used as a name: `{ "foo": ... }`, `{ 1: ... }`.
    QuotedText(Cow<'s, str>),
}

impl<'s> Key<'s> {
    /// Builds the key view, or `None` for shapes that are never rewritten
    /// (computed expressions, private names).
    pub fn from_property_key(key: &'s PropertyKey<'_>) -> Option<Self> {
        match key {
            PropertyKey::StaticIdentifier(ident) => Some(Key::PlainName(ident.name.as_str())),
            PropertyKey::StringLiteral(lit) => Some(Key::QuotedText(Cow::Borrowed(lit.value.as_str()))),
            PropertyKey::NumericLiteral(lit) => Some(Key::QuotedText(match &lit.raw {
                Some(raw) => Cow::Borrowed(raw.as_str()),
                None => Cow::Owned(lit.value.to_string()),
            })),
            _ => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Key::PlainName(name) => *name,
            Key::QuotedText(text) => text.as_ref(),
        }
    }
}

/// The value of an object property, as far as shorthand rewriting cares.
#[derive(Debug, Clone, Copy)]
pub enum Value<'s, 'a> {
    /// A bare identifier reference: `{ foo: foo }`.
    Reference(&'s str),
    /// A plain (non-async, non-generator) function expression.
    FunctionValue(&'s Function<'a>),
}

impl<'s, 'a> Value<'s, 'a> {
    /// Builds the value view, or `None` for any other expression.
    pub fn from_expression(expr: &'s Expression<'a>) -> Option<Self> {
        match expr {
            Expression::Identifier(ident) => Some(Value::Reference(ident.name.as_str())),
            Expression::FunctionExpression(function) if !function.r#async && !function.generator => {
                Some(Value::FunctionValue(function))
            }
            _ => None,
        }
    }
}

/// The rewrite chosen for an eligible property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Simplification {
    /// `{ a: a }` → `{ a }`
    Shorthand,
    /// `{ a: function () {} }` → `{ a() {} }`
    Method,
}

impl Simplification {
    pub fn as_str(self) -> &'static str {
        match self {
            Simplification::Shorthand => "shorthand",
            Simplification::Method => "method",
        }
    }
}

/// Decides which rewrite applies to a property with this key and value.
///
/// A `__proto__` key overrides every row of the table and is never
/// simplified, including `{ __proto__: __proto__ }`.
pub fn simplification(key: &Key<'_>, value: &Value<'_, '_>) -> Option<Simplification> {
    // `__proto__: v` sets the prototype; both shorthand forms define an own property instead.
    if key.text() == "__proto__" {
        return None;
    }

    match (key, value) {
        (Key::PlainName(name), Value::Reference(reference)) if name == reference => {
            Some(Simplification::Shorthand)
        }
        (Key::PlainName(_), Value::FunctionValue(function)) if !is_self_referential(function) => {
            Some(Simplification::Method)
        }
        (Key::QuotedText(text), Value::Reference(reference)) if text == reference => {
            Some(Simplification::Shorthand)
        }
        (Key::QuotedText(text), Value::FunctionValue(function))
            if !is_self_referential(function) && is_valid_property_name(text) =>
        {
            Some(Simplification::Method)
        }
        _ => None,
    }
}

/// Returns true if the property can be rewritten into one of the shorthand forms.
pub fn can_simplify(key: &Key<'_>, value: &Value<'_, '_>) -> bool {
    simplification(key, value).is_some()
}

/// Adapts a tree property to the key/value views and decides its rewrite.
///
/// Flags (method, shorthand, computed, accessor) are the scanner's concern and
/// are not checked here.
pub fn classify_property(property: &ObjectProperty<'_>) -> Option<Simplification> {
    let key = Key::from_property_key(&property.key)?;
    let value = Value::from_expression(&property.value)?;
    simplification(&key, &value)
}
