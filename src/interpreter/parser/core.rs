use tracing::{debug, warn};

use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::parser::source::{TokenSource, Word},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Default limit on how deeply an expression may nest.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Highest depth limit that is ever enforced, whatever
/// [`ParseOptions::max_depth`] asks for. Building, rendering, evaluating and
/// dropping a tree all recurse once per level, so this keeps them within a
/// main-thread stack.
pub const MAX_DEPTH_CEILING: usize = 4096;

/// Controls how strictly prefix input is read.
///
/// The default is lenient: an operator token contributes only its first
/// character, and tokens left over after a complete expression are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject multi-character operator tokens and trailing tokens.
    pub strict:    bool,
    /// Deepest nesting accepted, counting the root as level 1. Values above
    /// [`MAX_DEPTH_CEILING`] are treated as the ceiling.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { strict:    false,
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

impl ParseOptions {
    /// Lenient options with the default depth limit.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict options with the default depth limit.
    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true,
               ..Self::default() }
    }

    /// Replaces the depth limit, clamped to [`MAX_DEPTH_CEILING`].
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::interpreter::parser::core::{MAX_DEPTH_CEILING, ParseOptions};
    ///
    /// assert_eq!(ParseOptions::default().with_max_depth(64).max_depth, 64);
    /// assert_eq!(ParseOptions::default().with_max_depth(usize::MAX).max_depth,
    ///            MAX_DEPTH_CEILING);
    /// ```
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }.clamped()
    }

    const fn clamped(self) -> Self {
        Self { max_depth: self.effective_max_depth(),
               ..self }
    }

    /// The depth limit actually enforced.
    #[must_use]
    pub const fn effective_max_depth(&self) -> usize {
        if self.max_depth > MAX_DEPTH_CEILING {
            MAX_DEPTH_CEILING
        } else {
            self.max_depth
        }
    }
}

/// Builds an expression tree from a prefix token stream.
///
/// Returns `Ok(None)` when the stream holds no tokens at all, which is how
/// blank input yields an empty tree. Otherwise exactly one complete
/// expression is read; what happens to any tokens after it depends on
/// [`ParseOptions::strict`].
///
/// Grammar: `expression := number | operator expression expression`
///
/// # Parameters
/// - `tokens`: Token source positioned at the start of the expression.
/// - `options`: Strictness and depth limit.
///
/// # Returns
/// The root node, or `None` for blank input.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream ends before both operands of some
///   operator have been read.
/// - `EmptyOperator` if an operator token has no characters.
/// - `UnexpectedToken` for a multi-character operator in strict mode.
/// - `UnexpectedTrailingTokens` for leftover tokens in strict mode.
/// - `TooDeep` if nesting exceeds the effective depth limit.
///
/// ## Example
/// ```
/// use prefix_calc::{
///     ast::{BinaryOperator, Node},
///     interpreter::{
///         lexer::Scanner,
///         parser::core::{ParseOptions, build},
///     },
/// };
///
/// let mut tokens = Scanner::new("* + 1 2 3").unwrap();
/// let root = build(&mut tokens, &ParseOptions::default()).unwrap();
///
/// let expected = Node::internal(BinaryOperator::Mul,
///                               Node::internal(BinaryOperator::Add,
///                                              Node::Leaf(1.0),
///                                              Node::Leaf(2.0)),
///                               Node::Leaf(3.0));
/// assert_eq!(root, Some(expected));
/// ```
pub fn build<'src, S>(tokens: &mut S, options: &ParseOptions) -> ParseResult<Option<Node>>
    where S: TokenSource<'src> + ?Sized
{
    let position = tokens.position();
    let root = if let Some(value) = take_number(tokens) {
        check_depth(1, position, options)?;
        Node::Leaf(value)
    } else {
        match tokens.next_word() {
            Some(word) => parse_operation(tokens, word, 1, options)?,
            None => return Ok(None),
        }
    };

    if let Some(extra) = tokens.next_word() {
        if options.strict {
            return Err(ParseError::UnexpectedTrailingTokens { token:    extra.text.to_string(),
                                                              position: extra.position, });
        }
        warn!(token = extra.text,
              position = extra.position,
              "ignoring tokens after a complete expression");
    }

    debug!(nodes = root.node_count(), depth = root.depth(), "built expression tree");
    Ok(Some(root))
}

/// Parses one operand or operation at nesting level `depth`.
///
/// Grammar: `expression := number | operator expression expression`
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if the stream is exhausted, and propagates
/// every error of [`parse_operation`].
fn parse_expression<'src, S>(tokens: &mut S, depth: usize, options: &ParseOptions)
                             -> ParseResult<Node>
    where S: TokenSource<'src> + ?Sized
{
    let position = tokens.position();
    if let Some(value) = take_number(tokens) {
        check_depth(depth, position, options)?;
        return Ok(Node::Leaf(value));
    }

    match tokens.next_word() {
        Some(word) => parse_operation(tokens, word, depth, options),
        None => Err(ParseError::UnexpectedEndOfInput { position }),
    }
}

/// Parses the two operands of the operator token `word`, left first.
///
/// The left operand consumes exactly the tokens of its own subtree, so the
/// right operand starts at whatever token follows it.
fn parse_operation<'src, S>(tokens: &mut S,
                            word: Word<'src>,
                            depth: usize,
                            options: &ParseOptions)
                            -> ParseResult<Node>
    where S: TokenSource<'src> + ?Sized
{
    check_depth(depth, word.position, options)?;
    let op = parse_operator(word, options)?;

    let left = parse_expression(tokens, depth + 1, options)?;
    let right = parse_expression(tokens, depth + 1, options)?;

    Ok(Node::internal(op, left, right))
}

/// Takes the operator from the first character of `word`.
///
/// # Errors
/// - `EmptyOperator` if `word` has no characters.
/// - `UnexpectedToken` if `word` is longer than one character in strict mode.
fn parse_operator(word: Word<'_>, options: &ParseOptions) -> ParseResult<BinaryOperator> {
    let mut chars = word.text.chars();
    let Some(symbol) = chars.next() else {
        return Err(ParseError::EmptyOperator { position: word.position });
    };

    if chars.next().is_some() {
        if options.strict {
            return Err(ParseError::UnexpectedToken { token:    word.text.to_string(),
                                                     position: word.position, });
        }
        debug!(token = word.text,
               position = word.position,
               operator = %symbol,
               "operator token truncated to its first character");
    }

    Ok(BinaryOperator::from(symbol))
}

/// Consumes the next token if it reads as a number.
fn take_number<'src, S>(tokens: &mut S) -> Option<f64>
    where S: TokenSource<'src> + ?Sized
{
    let value = tokens.peek_number()?;
    tokens.next_word();
    Some(value)
}

const fn check_depth(depth: usize, position: usize, options: &ParseOptions) -> ParseResult<()> {
    let limit = options.effective_max_depth();
    if depth > limit {
        return Err(ParseError::TooDeep { limit, position });
    }
    Ok(())
}
