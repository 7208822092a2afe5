//! # `prefix_calc`
//!
//! `prefix_calc` reads arithmetic written in prefix notation, such as
//! `* + 1 2 3`, into a binary expression tree. The tree can be rendered back
//! as prefix, postfix or fully parenthesized infix text, and evaluated.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use crate::{
    error::{EvalWarning, ParseError},
    interpreter::{
        parser::core::ParseOptions,
        render::Notation,
        tree::ExpressionTree,
    },
    util::num::format_real,
};

/// Defines the structure of a parsed expression.
///
/// This module declares the `Node` enum, a numeric leaf or an operator with
/// two children, and the `BinaryOperator` it carries.
///
/// # Responsibilities
/// - Makes inconsistent nodes unrepresentable: a leaf has no children and an
///   operator always has both.
/// - Gives every node the text it contributes to a rendering.
pub mod ast;
/// Provides the error and warning types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines the fatal parse errors, each carrying the token position.
/// - Defines the non-fatal warnings raised during evaluation.
pub mod error;
/// Orchestrates lexing, tree construction, rendering and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, the recursive-descent builder, the traversals
///   and the evaluator.
/// - Provides the [`ExpressionTree`] entry points.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// Everything the calculator reports about one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The prefix rendering, ending in a newline.
    pub prefix:   String,
    /// The postfix rendering, ending in a newline.
    pub postfix:  String,
    /// The parenthesized infix rendering, ending in a newline.
    pub infix:    String,
    /// The value of the expression, `0.0` for blank input.
    pub value:    f64,
    /// Warnings raised while evaluating.
    pub warnings: Vec<EvalWarning>,
}

impl Report {
    /// Gets the rendering for `notation`.
    #[must_use]
    pub fn rendering(&self, notation: Notation) -> &str {
        match notation {
            Notation::Prefix => &self.prefix,
            Notation::Postfix => &self.postfix,
            Notation::Infix => &self.infix,
        }
    }

    /// The three renderings under their headings, each section followed by a
    /// blank line.
    #[must_use]
    pub fn renderings(&self) -> String {
        Notation::ALL.iter()
                     .map(|&notation| {
                         format!("Input as {}:\n{}\n", notation.describe(), self.rendering(notation))
                     })
                     .collect()
    }

    /// The closing `Value:` line, without a newline.
    #[must_use]
    pub fn value_line(&self) -> String {
        format!("Value:  {}", format_real(self.value))
    }

    /// Emits every evaluation warning as a `tracing` warning event.
    ///
    /// [`get_result`] leaves this to the caller, so warnings can be shown
    /// where they belong in the output: after the renderings, before the
    /// value.
    pub fn log_warnings(&self) {
        self.warnings.iter().for_each(EvalWarning::log);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.renderings(), self.value_line())
    }
}

/// Parses `source`, then renders and evaluates the resulting tree.
///
/// Evaluation warnings are kept in the returned [`Report`] and not logged;
/// call [`Report::log_warnings`] to emit them.
///
/// # Errors
/// Returns a [`ParseError`] if `source` is not a complete prefix expression
/// under `options`.
///
/// # Examples
/// ```
/// use prefix_calc::{get_result, interpreter::parser::core::ParseOptions};
///
/// let report = get_result("+ 3 4", &ParseOptions::default()).unwrap();
/// assert_eq!(report.infix, "( 3.0 + 4.0 ) \n");
/// assert_eq!(report.value, 7.0);
///
/// // The second operand is missing.
/// assert!(get_result("+ 3", &ParseOptions::default()).is_err());
/// ```
pub fn get_result(source: &str, options: &ParseOptions) -> Result<Report, ParseError> {
    let tree = ExpressionTree::parse(source, options)?;

    let evaluation = tree.evaluate_with_warnings();

    Ok(Report { prefix:   tree.prefix(),
                postfix:  tree.postfix(),
                infix:    tree.infix(),
                value:    evaluation.value,
                warnings: evaluation.warnings, })
}
