use std::fmt;

use crate::util::num::write_real;

/// Represents the operator held by an internal node.
///
/// Only the first character of an operator token is significant. Characters
/// outside the supported set are kept as [`BinaryOperator::Unrecognized`] so
/// the tree can still be rendered exactly as it was written; evaluation treats
/// them as addition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Any other character.
    Unrecognized(char),
}

impl BinaryOperator {
    /// Gets the character this operator was built from.
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from('^').symbol(), '^');
    /// assert_eq!(BinaryOperator::from('%').symbol(), '%');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
            Self::Unrecognized(c) => c,
        }
    }

    /// Returns `true` unless the operator is [`BinaryOperator::Unrecognized`].
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<char> for BinaryOperator {
    fn from(c: char) -> Self {
        match c {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            '^' => Self::Pow,
            other => Self::Unrecognized(other),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of a binary expression tree.
///
/// A node is either a numeric leaf or an operator with exactly two children.
/// Children are owned by their parent, so a tree can neither share subtrees
/// nor contain cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric operand.
    Leaf(f64),
    /// An operator applied to two sub-expressions.
    Internal {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates an internal node from an operator and its two operands.
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::ast::{BinaryOperator, Node};
    ///
    /// let node = Node::internal(BinaryOperator::Add, Node::Leaf(3.0), Node::Leaf(4.0));
    ///
    /// assert_eq!(node.to_string(), "+");
    /// assert!(!node.is_leaf());
    /// ```
    #[must_use]
    pub fn internal(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Internal { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns `true` if the node is a [`Node::Leaf`].
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Number of nodes on the longest path from this node down to a leaf,
    /// counting both ends. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Total number of nodes in the subtree rooted here.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Internal { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Writes the node's own text: its operator, or its value for a leaf.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(value) => write_real(f, *value),
            Self::Internal { op, .. } => write!(f, "{op}"),
        }
    }
}
