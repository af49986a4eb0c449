//! File runner
//!
//! Expands the command-line paths into files, transforms them in parallel and
//! summarises what happened to each one.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use glob::Pattern;
use object_shorthand::{transform_file, TransformError, TransformOptions, TransformStats};
use rayon::prelude::*;

use crate::cli::Args;
use crate::config::CodemodConfig;

pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx"];
pub const DEFAULT_IGNORE_PATTERN: &str = "**/node_modules/**";

/// Settings for one run, merged from the config file and the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub transform: TransformOptions,
    pub extensions: Vec<String>,
    pub ignore: Vec<Pattern>,
    pub dry: bool,
    pub print: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            transform: TransformOptions::default(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore: Pattern::new(DEFAULT_IGNORE_PATTERN).into_iter().collect(),
            dry: false,
            print: false,
        }
    }
}

impl RunOptions {
    pub fn resolve(args: &Args, config: Option<CodemodConfig>) -> anyhow::Result<Self> {
        let config = config.unwrap_or_default();
        let mut options = Self::default();

        if let Some(print_options) = config.print_options {
            options.transform.print_options = print_options;
        }
        if let Some(quote) = args.quote {
            options.transform.print_options.quote = quote;
        }

        if let Some(extensions) = args.extensions.clone().or(config.extensions) {
            options.extensions = extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect();
        }

        for raw in config.ignore_pattern.iter().chain(args.ignore_pattern.iter()) {
            let pattern =
                Pattern::new(raw).with_context(|| format!("invalid ignore pattern `{}`", raw))?;
            options.ignore.push(pattern);
        }

        options.dry = args.dry;
        options.print = args.print;
        Ok(options)
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|allowed| allowed == e))
    }

    fn is_ignored(&self, relative: &Path) -> bool {
        self.ignore.iter().any(|pattern| pattern.matches_path(relative))
    }
}

/// Expands `paths` into the sorted list of files to transform.
///
/// Files named explicitly are always included; files found inside
/// directories must match an extension and no ignore pattern.
pub fn collect_files(paths: &[PathBuf], options: &RunOptions) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            // Route folders such as `app/[id]` must not be read as glob classes.
            let base = Pattern::escape(&path.to_string_lossy());
            let pattern = Path::new(&base).join("**").join("*");
            let pattern = pattern.to_string_lossy();
            let entries = glob::glob(&pattern)
                .with_context(|| format!("invalid directory pattern {}", pattern))?;
            for entry in entries {
                let entry = entry.context("failed to walk directory")?;
                if !entry.is_file() || !options.accepts_extension(&entry) {
                    continue;
                }
                let relative = entry.strip_prefix(path).unwrap_or(&entry);
                if options.is_ignored(relative) {
                    tracing::debug!(path = %entry.display(), "ignored");
                    continue;
                }
                files.push(entry);
            }
        } else {
            bail!("path does not exist: {}", path.display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Ok(TransformStats),
    Unmodified,
    Skipped(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    /// Transformed source, kept only when printing was requested.
    pub output: Option<String>,
}

/// Reads, transforms and (unless dry) writes back a single file.
pub fn process_file(path: &Path, options: &RunOptions) -> FileReport {
    let (outcome, output) = match try_process_file(path, options) {
        Ok(result) => result,
        Err(err) => (FileOutcome::Error(format!("{:#}", err)), None),
    };

    match &outcome {
        FileOutcome::Ok(stats) => tracing::info!(
            path = %path.display(),
            shorthand = stats.shorthand,
            methods = stats.methods,
            "transformed"
        ),
        FileOutcome::Unmodified => tracing::debug!(path = %path.display(), "unmodified"),
        FileOutcome::Skipped(reason) => tracing::info!(path = %path.display(), reason = %reason, "skipped"),
        FileOutcome::Error(message) => tracing::warn!(path = %path.display(), message = %message, "failed"),
    }

    FileReport {
        path: path.to_path_buf(),
        outcome,
        output,
    }
}

fn try_process_file(
    path: &Path,
    options: &RunOptions,
) -> anyhow::Result<(FileOutcome, Option<String>)> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let output = match transform_file(path, &source, &options.transform) {
        Ok(output) => output,
        Err(err @ TransformError::UnsupportedExtension { .. }) => {
            return Ok((FileOutcome::Skipped(err.to_string()), None));
        }
        Err(err) => return Err(err.into()),
    };

    if !output.changed {
        return Ok((FileOutcome::Unmodified, None));
    }

    if !options.dry {
        fs::write(path, &output.code)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let printed = options.print.then_some(output.code);
    Ok((FileOutcome::Ok(output.stats), printed))
}

/// Totals over a run.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub reports: Vec<FileReport>,
    pub ok: usize,
    pub unmodified: usize,
    pub skipped: usize,
    pub errors: usize,
    pub stats: TransformStats,
}

impl Summary {
    pub fn from_reports(reports: Vec<FileReport>) -> Self {
        let mut summary = Summary::default();
        for report in &reports {
            match &report.outcome {
                FileOutcome::Ok(stats) => {
                    summary.ok += 1;
                    summary.stats.merge(stats);
                }
                FileOutcome::Unmodified => summary.unmodified += 1,
                FileOutcome::Skipped(_) => summary.skipped += 1,
                FileOutcome::Error(_) => summary.errors += 1,
            }
        }
        summary.reports = reports;
        summary
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn results_line(&self) -> String {
        format!(
            "Results: {} errors, {} unmodified, {} skipped, {} ok ({} shorthand properties, {} methods)",
            self.errors,
            self.unmodified,
            self.skipped,
            self.ok,
            self.stats.shorthand,
            self.stats.methods
        )
    }
}

/// Transforms every file, in parallel, and collects the reports in input order.
pub fn run(files: &[PathBuf], options: &RunOptions) -> Summary {
    let reports = files
        .par_iter()
        .map(|path| process_file(path, options))
        .collect();
    Summary::from_reports(reports)
}

/// Transforms source read from stdin; `filename` only selects the dialect.
pub fn transform_stdin(filename: &str, options: &RunOptions) -> anyhow::Result<String> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    let output = transform_file(Path::new(filename), &source, &options.transform)?;
    Ok(output.code)
}

/// Runs the whole command line; returns the process exit code.
pub fn run_cli(args: Args) -> anyhow::Result<i32> {
    let config = args.config.as_deref().map(CodemodConfig::load).transpose()?;
    let options = RunOptions::resolve(&args, config)?;

    if args.reads_stdin() {
        print!("{}", transform_stdin(&args.stdin_filename, &options)?);
        return Ok(0);
    }

    let files = collect_files(&args.paths, &options)?;
    tracing::info!(files = files.len(), dry = options.dry, "processing");

    let summary = match args.cpus {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("failed to start worker pool")?
            .install(|| run(&files, &options)),
        None => run(&files, &options),
    };

    for report in &summary.reports {
        match &report.outcome {
            FileOutcome::Error(message) => eprintln!(" ERR {} {}", report.path.display(), message),
            FileOutcome::Skipped(reason) => eprintln!("SKIP {} {}", report.path.display(), reason),
            _ => {}
        }
        if let Some(output) = &report.output {
            println!("{}", output);
        }
    }
    eprintln!("{}", summary.results_line());

    Ok(if summary.has_errors() { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use object_shorthand::QuoteStyle;
    use tempfile::TempDir;

    fn write(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("object-shorthand").chain(argv.iter().copied()))
            .unwrap()
    }

    mod options {
        use super::*;

        #[test]
        fn should_prefer_flags_over_config() {
            let config = CodemodConfig::from_json(
                r#"{"printOptions": {"quote": "double"}, "extensions": ["ts"]}"#,
            )
            .unwrap();
            let options =
                RunOptions::resolve(&args(&["--quote", "single", "src"]), Some(config)).unwrap();
            assert_eq!(options.transform.print_options.quote, QuoteStyle::Single);
            assert_eq!(options.extensions, vec!["ts".to_string()]);
        }

        #[test]
        fn should_use_config_quote_without_flag() {
            let config =
                CodemodConfig::from_json(r#"{"printOptions": {"quote": "double"}}"#).unwrap();
            let options = RunOptions::resolve(&args(&["src"]), Some(config)).unwrap();
            assert_eq!(options.transform.print_options.quote, QuoteStyle::Double);
            assert_eq!(options.extensions.len(), DEFAULT_EXTENSIONS.len());
        }

        #[test]
        fn should_strip_leading_dots_from_extensions() {
            let options = RunOptions::resolve(&args(&["--extensions", ".js,.mjs", "src"]), None)
                .unwrap();
            assert_eq!(options.extensions, vec!["js".to_string(), "mjs".to_string()]);
        }

        #[test]
        fn should_reject_invalid_ignore_pattern() {
            let err = RunOptions::resolve(&args(&["--ignore-pattern", "[", "src"]), None)
                .unwrap_err();
            assert!(err.to_string().contains("invalid ignore pattern"));
        }
    }

    mod discovery {
        use super::*;

        #[test]
        fn should_walk_directories_with_filters() {
            let dir = TempDir::new().unwrap();
            let a = write(&dir, "src/a.js", "var o = {a: a};");
            let b = write(&dir, "src/nested/b.ts", "const o = {b: b};");
            write(&dir, "src/readme.md", "# docs");
            write(&dir, "node_modules/pkg/index.js", "var o = {c: c};");
            write(&dir, "dist/out.js", "var o = {d: d};");

            let options =
                RunOptions::resolve(&args(&["--ignore-pattern", "dist/**", "x"]), None).unwrap();
            let files = collect_files(&[dir.path().to_path_buf()], &options).unwrap();

            assert_eq!(files, vec![a, b]);
        }

        #[test]
        fn should_walk_directories_with_glob_metacharacters() {
            let dir = TempDir::new().unwrap();
            let page = write(&dir, "app/[id]/page.js", "var o = {a: a};");
            let layout = write(&dir, "app/[id]/[...slug]/layout.tsx", "const o = {b: b};");

            let files =
                collect_files(&[dir.path().join("app").join("[id]")], &RunOptions::default())
                    .unwrap();

            assert_eq!(files, vec![layout, page]);
        }

        #[test]
        fn should_keep_explicit_files_regardless_of_extension() {
            let dir = TempDir::new().unwrap();
            let md = write(&dir, "notes.md", "# notes");
            let files = collect_files(&[md.clone()], &RunOptions::default()).unwrap();
            assert_eq!(files, vec![md]);
        }

        #[test]
        fn should_fail_on_missing_path() {
            let dir = TempDir::new().unwrap();
            let missing = dir.path().join("missing.js");
            assert!(collect_files(&[missing], &RunOptions::default()).is_err());
        }
    }

    mod processing {
        use super::*;

        #[test]
        fn should_rewrite_file_in_place() {
            let dir = TempDir::new().unwrap();
            let path = write(&dir, "a.js", "var o = {a: a, b: function () { return 1; }};");

            let report = process_file(&path, &RunOptions::default());
            assert_eq!(
                report.outcome,
                FileOutcome::Ok(TransformStats {
                    visited: 2,
                    shorthand: 1,
                    methods: 1
                })
            );
            let written = fs::read_to_string(&path).unwrap();
            assert!(!written.contains("function"), "{}", written);
            assert!(report.output.is_none());
        }

        #[test]
        fn should_not_write_in_dry_mode() {
            let dir = TempDir::new().unwrap();
            let source = "var o = {a: a};";
            let path = write(&dir, "a.js", source);
            let options = RunOptions {
                dry: true,
                print: true,
                ..RunOptions::default()
            };

            let report = process_file(&path, &options);
            assert!(matches!(report.outcome, FileOutcome::Ok(_)));
            assert_eq!(fs::read_to_string(&path).unwrap(), source);
            assert!(report.output.is_some_and(|code| !code.contains(':')));
        }

        #[test]
        fn should_classify_outcomes() {
            let dir = TempDir::new().unwrap();
            let files = vec![
                write(&dir, "ok.js", "var o = {a: a};"),
                write(&dir, "same.js", "var o = {a: b};"),
                write(&dir, "notes.md", "# notes"),
                write(&dir, "broken.js", "var o = {a: };"),
            ];

            let summary = run(&files, &RunOptions::default());
            assert_eq!(summary.ok, 1);
            assert_eq!(summary.unmodified, 1);
            assert_eq!(summary.skipped, 1);
            assert_eq!(summary.errors, 1);
            assert!(summary.has_errors());
            assert_eq!(summary.stats.shorthand, 1);
            assert_eq!(
                summary.results_line(),
                "Results: 1 errors, 1 unmodified, 1 skipped, 1 ok (1 shorthand properties, 0 methods)"
            );

            let FileOutcome::Error(message) = &summary.reports[3].outcome else {
                panic!("broken.js should fail");
            };
            assert!(message.contains("failed to parse"), "{}", message);
        }
    }
}
