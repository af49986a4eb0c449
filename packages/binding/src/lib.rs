#![deny(clippy::all)]

use napi::{Error, Status};
use napi_derive::napi;
use object_shorthand::{transform_file, QuoteStyle, TransformError};
use std::path::Path;

const DEFAULT_FILENAME: &str = "input.js";

#[napi(object)]
#[derive(Default)]
pub struct TransformOptions {
    /// `"single"` (default) or `"double"`.
    pub quote: Option<String>,
}

#[napi(object)]
pub struct TransformResult {
    pub code: String,
    pub changed: bool,
    pub shorthand: u32,
    pub methods: u32,
}

fn to_napi_error(err: TransformError) -> Error {
    match err {
        TransformError::InvalidQuoteStyle(_) => Error::new(Status::InvalidArg, err.to_string()),
        other => Error::from_reason(other.to_string()),
    }
}

fn resolve_options(
    options: &TransformOptions,
) -> napi::Result<object_shorthand::TransformOptions> {
    let quote = match options.quote.as_deref() {
        Some(raw) => raw.parse::<QuoteStyle>().map_err(to_napi_error)?,
        None => QuoteStyle::default(),
    };
    Ok(object_shorthand::TransformOptions::with_quote(quote))
}

fn run(
    source: &str,
    filename: &str,
    options: &object_shorthand::TransformOptions,
) -> napi::Result<TransformResult> {
    let output = transform_file(Path::new(filename), source, options).map_err(to_napi_error)?;
    Ok(TransformResult {
        code: output.code,
        changed: output.changed,
        shorthand: output.stats.shorthand as u32,
        methods: output.stats.methods as u32,
    })
}

/// Transform a single source. The filename only selects the dialect.
#[napi]
pub fn transform(
    source: String,
    filename: Option<String>,
    options: Option<TransformOptions>,
) -> napi::Result<TransformResult> {
    let options = resolve_options(&options.unwrap_or_default())?;
    run(&source, filename.as_deref().unwrap_or(DEFAULT_FILENAME), &options)
}

/// Reusable transformer holding resolved options.
#[napi]
pub struct Transformer {
    options: object_shorthand::TransformOptions,
}

#[napi]
impl Transformer {
    #[napi(constructor)]
    pub fn new(options: Option<TransformOptions>) -> napi::Result<Self> {
        Ok(Transformer {
            options: resolve_options(&options.unwrap_or_default())?,
        })
    }

    #[napi]
    pub fn transform(
        &self,
        source: String,
        filename: Option<String>,
    ) -> napi::Result<TransformResult> {
        run(&source, filename.as_deref().unwrap_or(DEFAULT_FILENAME), &self.options)
    }
}
