//! Self-reference detection
//!
//! A named function expression binds its own name inside its body. Method
//! shorthand does not, so rewriting `f: function f() { f() }` into `f() { f() }`
//! would leave the inner `f` unresolved. This module finds such functions.

use oxc_ast::ast::{Function, IdentifierReference};
use oxc_ast_visit::Visit;

/// Visitor that records whether any identifier reference carries a given name.
///
/// Nested functions are walked too: a closure can still call the outer name.
pub struct NameReferences<'n> {
    name: &'n str,
    found: bool,
}

impl<'n> NameReferences<'n> {
    pub fn new(name: &'n str) -> Self {
        Self { name, found: false }
    }

    /// Whether a matching reference has been seen so far.
    pub fn found(&self) -> bool {
        self.found
    }
}

impl<'a> Visit<'a> for NameReferences<'_> {
    fn visit_identifier_reference(&mut self, it: &IdentifierReference<'a>) {
        if it.name.as_str() == self.name {
            self.found = true;
        }
    }
}

/// Returns true if `function` has an own name and refers to it from its
/// parameters or body.
pub fn is_self_referential(function: &Function<'_>) -> bool {
    let Some(id) = &function.id else {
        return false;
    };

    let mut references = NameReferences::new(id.name.as_str());
    // Default initialisers are evaluated inside the function's name scope.
    references.visit_formal_parameters(&function.params);
    if let Some(body) = &function.body {
        references.visit_function_body(body);
    }
    references.found()
}
