use std::fmt::{self, Write};

use crate::{ast::Node, interpreter::tree::ExpressionTree};

/// The textual forms an expression tree can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// Operators before their operands (pre-order).
    Prefix,
    /// Operators after their operands (post-order).
    Postfix,
    /// Operators between their operands, every operation parenthesized
    /// (in-order).
    Infix,
}

impl Notation {
    /// All notations, in the order the calculator prints them.
    pub const ALL: [Self; 3] = [Self::Prefix, Self::Postfix, Self::Infix];

    /// Human readable name used in report headings.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Prefix => "prefix expression",
            Self::Postfix => "postfix expression",
            Self::Infix => "parenthesized infix expression",
        }
    }
}

/// A lazily formatted rendering of a tree, returned by
/// [`ExpressionTree::render`].
///
/// Every token is followed by one space and the whole rendering ends with a
/// newline, so an empty tree renders as `"\n"`.
#[derive(Debug, Clone, Copy)]
pub struct Rendering<'a> {
    tree:     &'a ExpressionTree,
    notation: Notation,
}

impl fmt::Display for Rendering<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.notation {
            Notation::Prefix => self.tree.write_prefix(f),
            Notation::Postfix => self.tree.write_postfix(f),
            Notation::Infix => self.tree.write_infix(f),
        }
    }
}

impl ExpressionTree {
    /// Renders the tree in `notation`.
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::interpreter::{render::Notation, tree::ExpressionTree};
    ///
    /// let tree: ExpressionTree = "* + 1 2 3".parse().unwrap();
    ///
    /// assert_eq!(tree.render(Notation::Prefix).to_string(), "* + 1.0 2.0 3.0 \n");
    /// assert_eq!(tree.render(Notation::Postfix).to_string(), "1.0 2.0 + 3.0 * \n");
    /// assert_eq!(tree.render(Notation::Infix).to_string(), "( ( 1.0 + 2.0 ) * 3.0 ) \n");
    /// ```
    #[must_use]
    pub const fn render(&self, notation: Notation) -> Rendering<'_> {
        Rendering { tree: self,
                    notation }
    }

    /// The prefix rendering as a string.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.render(Notation::Prefix).to_string()
    }

    /// The postfix rendering as a string.
    #[must_use]
    pub fn postfix(&self) -> String {
        self.render(Notation::Postfix).to_string()
    }

    /// The parenthesized infix rendering as a string.
    #[must_use]
    pub fn infix(&self) -> String {
        self.render(Notation::Infix).to_string()
    }

    /// Writes the pre-order traversal: each node, then its left subtree, then
    /// its right subtree.
    ///
    /// # Errors
    /// Propagates any error from `out`.
    pub fn write_prefix<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        if let Some(root) = self.root() {
            prefix(root, out)?;
        }
        out.write_char('\n')
    }

    /// Writes the post-order traversal: left subtree, right subtree, then the
    /// node itself.
    ///
    /// # Errors
    /// Propagates any error from `out`.
    pub fn write_postfix<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        if let Some(root) = self.root() {
            postfix(root, out)?;
        }
        out.write_char('\n')
    }

    /// Writes the in-order traversal, wrapping every internal node in
    /// parentheses. Leaves are never parenthesized.
    ///
    /// # Errors
    /// Propagates any error from `out`.
    pub fn write_infix<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        if let Some(root) = self.root() {
            infix(root, out)?;
        }
        out.write_char('\n')
    }
}

fn prefix<W: Write + ?Sized>(node: &Node, out: &mut W) -> fmt::Result {
    write!(out, "{node} ")?;
    if let Node::Internal { left, right, .. } = node {
        prefix(left, out)?;
        prefix(right, out)?;
    }
    Ok(())
}

fn postfix<W: Write + ?Sized>(node: &Node, out: &mut W) -> fmt::Result {
    if let Node::Internal { left, right, .. } = node {
        postfix(left, out)?;
        postfix(right, out)?;
    }
    write!(out, "{node} ")
}

fn infix<W: Write + ?Sized>(node: &Node, out: &mut W) -> fmt::Result {
    match node {
        Node::Leaf(_) => write!(out, "{node} "),
        Node::Internal { op, left, right } => {
            out.write_str("( ")?;
            infix(left, out)?;
            write!(out, "{op} ")?;
            infix(right, out)?;
            out.write_str(") ")
        },
    }
}
