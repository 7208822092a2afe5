use std::str::FromStr;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Scanner,
        parser::{
            core::{ParseOptions, ParseResult, build},
            source::TokenSource,
        },
    },
};

/// A binary expression tree built from a prefix expression.
///
/// The tree owns its root exclusively and is read-only once built: rendering
/// and evaluation are pure queries. A tree built from blank input is empty;
/// it renders as a blank line and evaluates to `0.0`.
///
/// ## Example
/// ```
/// use prefix_calc::interpreter::tree::ExpressionTree;
///
/// let tree: ExpressionTree = "* + 1 2 3".parse().unwrap();
///
/// assert_eq!(tree.node_count(), 5);
/// assert_eq!(tree.depth(), 3);
/// assert_eq!(tree.evaluate(), 9.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionTree {
    root: Option<Node>,
}

impl ExpressionTree {
    /// Builds a tree from `tokens` with lenient [`ParseOptions`].
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the tokens do not form a complete prefix
    /// expression.
    pub fn new<'src, S>(tokens: &mut S) -> ParseResult<Self>
        where S: TokenSource<'src> + ?Sized
    {
        Self::with_options(tokens, &ParseOptions::default())
    }

    /// Builds a tree from `tokens` with the given options.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the tokens do not form a complete prefix
    /// expression, or break a rule `options` enforces.
    pub fn with_options<'src, S>(tokens: &mut S, options: &ParseOptions) -> ParseResult<Self>
        where S: TokenSource<'src> + ?Sized
    {
        Ok(Self { root: build(tokens, options)? })
    }

    /// Lexes and builds a tree from prefix text.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if lexing or construction fails.
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::{
    ///     error::ParseError,
    ///     interpreter::{parser::core::ParseOptions, tree::ExpressionTree},
    /// };
    ///
    /// let err = ExpressionTree::parse("+ 1 2 3", &ParseOptions::strict()).unwrap_err();
    /// assert!(matches!(err, ParseError::UnexpectedTrailingTokens { position: 3, .. }));
    /// ```
    pub fn parse(source: &str, options: &ParseOptions) -> ParseResult<Self> {
        let mut scanner = Scanner::new(source)?;
        Self::with_options(&mut scanner, options)
    }

    /// Wraps an already built node.
    #[must_use]
    pub const fn from_root(root: Node) -> Self {
        Self { root: Some(root) }
    }

    /// The tree with no nodes.
    #[must_use]
    pub const fn empty() -> Self {
        Self { root: None }
    }

    /// The root node, or `None` for an empty tree.
    #[must_use]
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Nesting depth, 0 for an empty tree.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::depth)
    }

    /// Total number of nodes, 0 for an empty tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, Node::node_count)
    }

    /// Gives up the root node.
    #[must_use]
    pub fn into_root(self) -> Option<Node> {
        self.root
    }
}

impl From<Node> for ExpressionTree {
    fn from(root: Node) -> Self {
        Self::from_root(root)
    }
}

impl FromStr for ExpressionTree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, &ParseOptions::default())
    }
}
