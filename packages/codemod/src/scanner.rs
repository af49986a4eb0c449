//! Property scanner
//!
//! Walks a program in document order and collects the object properties that
//! are structurally eligible for rewriting, together with the rewrite a
//! selector chose for them. The scan is read-only; mutation happens later in
//! [`crate::rewriter`].

use bitflags::bitflags;
use oxc_ast::ast::{ObjectProperty, Program, PropertyKind};
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;

use crate::simplify::{Key, Simplification};

bitflags! {
    /// Flags that take a property out of consideration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u8 {
        /// Already a method: `{ a() {} }`
        const METHOD = 0b0001;
        /// Already shorthand: `{ a }`
        const SHORTHAND = 0b0010;
        /// Bracketed key: `{ [a]: a }`
        const COMPUTED = 0b0100;
        /// Getter or setter: `{ get a() {} }`
        const ACCESSOR = 0b1000;
    }
}

impl PropertyFlags {
    pub fn of(property: &ObjectProperty<'_>) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::METHOD, property.method);
        flags.set(Self::SHORTHAND, property.shorthand);
        flags.set(Self::COMPUTED, property.computed);
        flags.set(
            Self::ACCESSOR,
            matches!(property.kind, PropertyKind::Get | PropertyKind::Set),
        );
        flags
    }
}

/// A property selected for rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Span of the whole property, used to find it again when rewriting.
    pub span: Span,
    /// Key text as written (unquoted).
    pub name: String,
    pub simplification: Simplification,
}

/// Result of a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Number of structurally eligible properties seen.
    pub visited: usize,
    /// Properties the selector accepted, in document order.
    pub candidates: Vec<Candidate>,
}

struct PropertyScanner<F> {
    select: F,
    report: ScanReport,
}

impl<'a, F> Visit<'a> for PropertyScanner<F>
where
    F: FnMut(&ObjectProperty<'a>) -> Option<Simplification>,
{
    fn visit_object_property(&mut self, it: &ObjectProperty<'a>) {
        if PropertyFlags::of(it).is_empty() {
            self.report.visited += 1;
            if let Some(simplification) = (self.select)(it) {
                let name = Key::from_property_key(&it.key)
                    .map(|key| key.text().to_string())
                    .unwrap_or_default();
                self.report.candidates.push(Candidate {
                    span: it.span,
                    name,
                    simplification,
                });
            }
        }

        walk::walk_object_property(self, it);
    }
}

/// Scans `program` for properties with no disqualifying flags and keeps those
/// for which `select` returns a rewrite.
pub fn scan_properties<'a, F>(program: &Program<'a>, select: F) -> ScanReport
where
    F: FnMut(&ObjectProperty<'a>) -> Option<Simplification>,
{
    let mut scanner = PropertyScanner {
        select,
        report: ScanReport::default(),
    };
    scanner.visit_program(program);
    scanner.report
}

