/// The evaluator module computes the value of an expression tree.
///
/// Evaluation is a post-order traversal: both operands are evaluated before
/// their operator is applied. It never fails; an unrecognized operator is
/// reported as a warning and treated as addition.
pub mod evaluator;
/// The lexer module splits prefix input into tokens.
///
/// Tokens are blank-delimited runs of characters. The lexer also provides
/// [`Scanner`](lexer::Scanner), the in-memory token source the parser reads
/// from.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Declares the token source interface the parser consumes.
/// - Builds a tree by recursive descent over prefix tokens.
/// - Reports malformed input with the position of the offending token.
pub mod parser;
/// Textual renderings of an expression tree.
///
/// Prefix, postfix and fully parenthesized infix forms, written to any
/// [`std::fmt::Write`] sink.
pub mod render;
/// The expression tree itself.
///
/// Defines [`ExpressionTree`](tree::ExpressionTree), which owns the root node
/// and provides the entry points for building a tree.
pub mod tree;
