/// Recursive-descent construction of expression trees.
///
/// Reads one prefix expression from a token source and builds the
/// corresponding [`Node`](crate::ast::Node) tree, left operand before right.
pub mod core;

/// The token source abstraction consumed by the parser.
///
/// Declares the [`TokenSource`](source::TokenSource) trait and the
/// [`Word`](source::Word) tokens it yields.
pub mod source;
