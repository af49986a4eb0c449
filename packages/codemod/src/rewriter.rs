//! Property rewriter
//!
//! Applies the rewrites decided during scanning. The plan is materialised
//! before any node is touched; the rewriter only mutates properties whose span
//! appears in it.

use std::collections::HashMap;

use oxc_ast::ast::{Expression, ObjectProperty, Program, PropertyKey};
use oxc_ast::AstBuilder;
use oxc_ast_visit::{walk_mut, VisitMut};

use crate::scanner::Candidate;
use crate::simplify::Simplification;
use crate::transform::TransformStats;

/// Rewrites a single property in place.
///
/// Returns false, leaving the property untouched, when its value does not
/// have the shape the simplification expects.
pub fn apply<'a>(
    ast: AstBuilder<'a>,
    property: &mut ObjectProperty<'a>,
    simplification: Simplification,
) -> bool {
    match simplification {
        Simplification::Shorthand => {
            let Expression::Identifier(reference) = &property.value else {
                return false;
            };
            // Key and value now name the same reference.
            property.key = ast.property_key_static_identifier(reference.span, reference.name);
            property.shorthand = true;
        }
        Simplification::Method => {
            let Expression::FunctionExpression(function) = &mut property.value else {
                return false;
            };
            function.id = None;
            if let PropertyKey::StringLiteral(literal) = &property.key {
                let (span, name) = (literal.span, literal.value);
                property.key = ast.property_key_static_identifier(span, name);
            }
            property.method = true;
        }
    }
    true
}

/// Visitor that applies a rewrite plan to a program.
pub struct Rewriter<'a> {
    ast: AstBuilder<'a>,
    plan: HashMap<(u32, u32), Simplification>,
    stats: TransformStats,
}

impl<'a> Rewriter<'a> {
    pub fn new(ast: AstBuilder<'a>, candidates: &[Candidate]) -> Self {
        let plan = candidates
            .iter()
            .map(|c| ((c.span.start, c.span.end), c.simplification))
            .collect();
        Self {
            ast,
            plan,
            stats: TransformStats::default(),
        }
    }

    pub fn rewrite_program(&mut self, program: &mut Program<'a>) {
        self.visit_program(program);
    }

    /// Planned rewrites that were not applied yet.
    pub fn pending(&self) -> usize {
        self.plan.len()
    }

    pub fn into_stats(self) -> TransformStats {
        self.stats
    }
}

impl<'a> VisitMut<'a> for Rewriter<'a> {
    fn visit_object_property(&mut self, it: &mut ObjectProperty<'a>) {
        if let Some(simplification) = self.plan.remove(&(it.span.start, it.span.end)) {
            if apply(self.ast, it, simplification) {
                tracing::debug!(
                    kind = simplification.as_str(),
                    offset = it.span.start,
                    "rewrote property"
                );
                self.stats.record(simplification);
            }
        }

        walk_mut::walk_object_property(self, it);
    }
}
