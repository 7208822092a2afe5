/// Parsing errors.
///
/// Defines the fatal errors that can occur while lexing prefix input and
/// building an expression tree from it. A parse error aborts construction as
/// a whole; no partial tree is ever returned.
pub mod parse_error;
/// Evaluation warnings.
///
/// Evaluation never fails. Conditions worth reporting, such as an operator
/// character outside the supported set, are collected as warnings while the
/// computation carries on.
pub mod eval_warning;

pub use eval_warning::EvalWarning;
pub use parse_error::ParseError;
