/// Numeric formatting helpers.
///
/// This module decides how a floating-point operand is spelled in every
/// rendering, so that prefix, postfix and infix output agree on the text of
/// each leaf.
pub mod num;
