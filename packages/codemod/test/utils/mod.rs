//! Test Utilities
//!
//! Helpers shared by the object-shorthand integration tests: parsing
//! fixtures and reading property shapes back out of printed output.
#![allow(dead_code)]

use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Source type used for `.js` fixtures.
pub fn js() -> SourceType {
    SourceType::mjs().with_jsx(true)
}

/// What a property looks like after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyShape {
    pub key: String,
    pub quoted: bool,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
    /// Own name of a function-expression value, if any.
    pub function_name: Option<String>,
}

struct ShapeCollector {
    shapes: Vec<PropertyShape>,
}

impl<'a> Visit<'a> for ShapeCollector {
    fn visit_object_property(&mut self, it: &ObjectProperty<'a>) {
        let (key, quoted) = match &it.key {
            PropertyKey::StaticIdentifier(ident) => (ident.name.to_string(), false),
            PropertyKey::StringLiteral(lit) => (lit.value.to_string(), true),
            PropertyKey::NumericLiteral(lit) => (lit.value.to_string(), true),
            _ => ("<computed>".to_string(), false),
        };
        let function_name = match &it.value {
            Expression::FunctionExpression(function) => {
                function.id.as_ref().map(|id| id.name.to_string())
            }
            _ => None,
        };
        self.shapes.push(PropertyShape {
            key,
            quoted,
            method: it.method,
            shorthand: it.shorthand,
            computed: it.computed,
            function_name,
        });
        walk::walk_object_property(self, it);
    }
}

/// Parses `code` and returns every object property in document order.
pub fn property_shapes(code: &str, source_type: SourceType) -> Vec<PropertyShape> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, code, source_type).parse();
    assert!(
        ret.errors.is_empty(),
        "code does not parse: {:?}\n{}",
        ret.errors,
        code
    );

    let mut collector = ShapeCollector { shapes: Vec::new() };
    collector.visit_program(&ret.program);
    collector.shapes
}

/// Finds the shape for `key`, panicking if there is none.
pub fn shape_of<'s>(shapes: &'s [PropertyShape], key: &str) -> &'s PropertyShape {
    shapes
        .iter()
        .find(|shape| shape.key == key)
        .unwrap_or_else(|| panic!("no property `{}` in {:?}", key, shapes))
}

/// Properties of the object literal in a `var o = { ... };` fixture.
pub fn object_properties<'p, 'a>(program: &'p Program<'a>) -> Vec<&'p ObjectProperty<'a>> {
    let Some(Statement::VariableDeclaration(decl)) = program.body.first() else {
        panic!("expected `var o = {{ ... }};`");
    };
    let Some(Expression::ObjectExpression(object)) = &decl.declarations[0].init else {
        panic!("expected an object literal initialiser");
    };
    object
        .properties
        .iter()
        .filter_map(|kind| match kind {
            ObjectPropertyKind::ObjectProperty(prop) => Some(&**prop),
            ObjectPropertyKind::SpreadProperty(_) => None,
        })
        .collect()
}

/// Mutable variant of [`object_properties`].
pub fn object_properties_mut<'p, 'a>(program: &'p mut Program<'a>) -> Vec<&'p mut ObjectProperty<'a>> {
    let Some(Statement::VariableDeclaration(decl)) = program.body.first_mut() else {
        panic!("expected `var o = {{ ... }};`");
    };
    let Some(Expression::ObjectExpression(object)) = &mut decl.declarations[0].init else {
        panic!("expected an object literal initialiser");
    };
    object
        .properties
        .iter_mut()
        .filter_map(|kind| match kind {
            ObjectPropertyKind::ObjectProperty(prop) => Some(&mut **prop),
            ObjectPropertyKind::SpreadProperty(_) => None,
        })
        .collect()
}
