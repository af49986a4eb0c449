//! Transform options
//!
//! Only the printer reads these; the rewrite decisions are independent of them.

use std::fmt;
use std::str::FromStr;

use oxc_codegen::CodegenOptions;
use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// Quote character used when printing string literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl FromStr for QuoteStyle {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(QuoteStyle::Single),
            "double" => Ok(QuoteStyle::Double),
            other => Err(TransformError::InvalidQuoteStyle(other.to_string())),
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteStyle::Single => write!(f, "single"),
            QuoteStyle::Double => write!(f, "double"),
        }
    }
}

/// Options handed to the printer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOptions {
    #[serde(default)]
    pub quote: QuoteStyle,
}

impl PrintOptions {
    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            single_quote: self.quote == QuoteStyle::Single,
            ..CodegenOptions::default()
        }
    }
}

/// Options for a whole transform run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOptions {
    #[serde(default)]
    pub print_options: PrintOptions,
}

impl TransformOptions {
    pub fn with_quote(quote: QuoteStyle) -> Self {
        Self {
            print_options: PrintOptions { quote },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_single_quotes() {
        let options = TransformOptions::default();
        assert_eq!(options.print_options.quote, QuoteStyle::Single);
        assert!(options.print_options.codegen_options().single_quote);
    }

    #[test]
    fn should_parse_quote_styles() {
        assert_eq!("single".parse::<QuoteStyle>().unwrap(), QuoteStyle::Single);
        assert_eq!("double".parse::<QuoteStyle>().unwrap(), QuoteStyle::Double);
        assert!(matches!(
            "backtick".parse::<QuoteStyle>(),
            Err(TransformError::InvalidQuoteStyle(s)) if s == "backtick"
        ));
    }

    #[test]
    fn should_display_quote_styles() {
        assert_eq!(QuoteStyle::Double.to_string(), "double");
        assert_eq!(QuoteStyle::Single.to_string(), "single");
    }

    #[test]
    fn should_request_double_quotes_from_codegen() {
        let options = TransformOptions::with_quote(QuoteStyle::Double);
        assert!(!options.print_options.codegen_options().single_quote);
    }
}
