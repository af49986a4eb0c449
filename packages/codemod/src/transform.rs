//! Transform pipeline
//!
//! Parse → scan → rewrite → print, for one source text. Each call owns its
//! own arena allocator, so independent sources can be transformed on
//! different threads.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_ast::AstBuilder;
use oxc_codegen::Codegen;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use serde::Serialize;

use crate::error::{Result, TransformError};
use crate::options::{PrintOptions, TransformOptions};
use crate::rewriter::Rewriter;
use crate::scanner::scan_properties;
use crate::simplify::{classify_property, Simplification};

/// Counts collected while transforming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformStats {
    /// Properties with no method/shorthand/computed/accessor flag.
    pub visited: usize,
    /// Properties rewritten to `{ a }`.
    pub shorthand: usize,
    /// Properties rewritten to `{ a() {} }`.
    pub methods: usize,
}

impl TransformStats {
    pub fn record(&mut self, simplification: Simplification) {
        match simplification {
            Simplification::Shorthand => self.shorthand += 1,
            Simplification::Method => self.methods += 1,
        }
    }

    pub fn rewritten(&self) -> usize {
        self.shorthand + self.methods
    }

    pub fn merge(&mut self, other: &TransformStats) {
        self.visited += other.visited;
        self.shorthand += other.shorthand;
        self.methods += other.methods;
    }
}

/// Result of transforming one source text.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub code: String,
    /// False when nothing was rewritten; `code` is then the input verbatim.
    pub changed: bool,
    pub stats: TransformStats,
}

/// Picks the parser dialect from a file extension.
pub fn source_type_for_path(path: &Path) -> Option<SourceType> {
    let extension = path.extension()?.to_str()?;
    match extension {
        "js" | "jsx" | "mjs" => Some(SourceType::mjs().with_jsx(true)),
        "cjs" => Some(SourceType::cjs()),
        "ts" | "mts" | "cts" => Some(SourceType::ts()),
        "tsx" => Some(SourceType::tsx()),
        _ => None,
    }
}

/// Rewrites every eligible property of an already parsed program in place.
pub fn simplify_program<'a>(allocator: &'a Allocator, program: &mut Program<'a>) -> TransformStats {
    let report = scan_properties(program, classify_property);

    let mut rewriter = Rewriter::new(AstBuilder::new(allocator), &report.candidates);
    rewriter.rewrite_program(program);
    if rewriter.pending() > 0 {
        tracing::warn!(pending = rewriter.pending(), "planned rewrites were not applied");
    }

    let mut stats = rewriter.into_stats();
    stats.visited = report.visited;
    stats
}

/// Prints a program with the configured quote style.
pub fn print_program(program: &Program<'_>, options: &PrintOptions) -> String {
    Codegen::new()
        .with_options(options.codegen_options())
        .build(program)
        .code
}

/// Transforms a source text parsed as `source_type`.
pub fn transform_source(
    source: &str,
    source_type: SourceType,
    options: &TransformOptions,
) -> Result<TransformOutput> {
    transform_named("<input>", source, source_type, options)
}

/// Transforms the contents of `path`, choosing the dialect from its extension.
pub fn transform_file(
    path: &Path,
    source: &str,
    options: &TransformOptions,
) -> Result<TransformOutput> {
    let display = path.display().to_string();
    let source_type = source_type_for_path(path)
        .ok_or_else(|| TransformError::UnsupportedExtension { path: display.clone() })?;
    transform_named(&display, source, source_type, options)
}

fn transform_named(
    name: &str,
    source: &str,
    source_type: SourceType,
    options: &TransformOptions,
) -> Result<TransformOutput> {
    let allocator = Allocator::default();
    let parse_options = ParseOptions {
        preserve_parens: false,
        ..ParseOptions::default()
    };
    let ret = Parser::new(&allocator, source, source_type)
        .with_options(parse_options)
        .parse();

    if ret.panicked || !ret.errors.is_empty() {
        return Err(TransformError::Parse {
            path: name.to_string(),
            diagnostics: ret.errors.iter().map(|e| e.to_string()).collect(),
        });
    }

    let mut program = ret.program;
    let stats = simplify_program(&allocator, &mut program);
    tracing::debug!(
        path = name,
        visited = stats.visited,
        shorthand = stats.shorthand,
        methods = stats.methods,
        "scanned source"
    );

    if stats.rewritten() == 0 {
        return Ok(TransformOutput {
            code: source.to_string(),
            changed: false,
            stats,
        });
    }

    Ok(TransformOutput {
        code: print_program(&program, &options.print_options),
        changed: true,
        stats,
    })
}
