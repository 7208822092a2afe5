use crate::{
    ast::{BinaryOperator, Node},
    error::EvalWarning,
    interpreter::tree::ExpressionTree,
};

/// The outcome of evaluating a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed value.
    pub value:    f64,
    /// Non-fatal conditions met along the way, in post-order.
    pub warnings: Vec<EvalWarning>,
}

impl Evaluation {
    /// Emits every warning as a `tracing` warning event.
    pub fn log_warnings(&self) {
        self.warnings.iter().for_each(EvalWarning::log);
    }
}

impl BinaryOperator {
    /// Applies the operator to two operands.
    ///
    /// Division follows IEEE-754, so dividing by zero yields an infinity or
    /// `NaN` rather than failing. An unrecognized operator adds its operands.
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 3.0), 8.0);
    /// assert_eq!(BinaryOperator::Div.apply(10.0, 0.0), f64::INFINITY);
    /// assert_eq!(BinaryOperator::Unrecognized('%').apply(5.0, 2.0), 7.0);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
            Self::Add | Self::Unrecognized(_) => left + right,
        }
    }
}

impl ExpressionTree {
    /// Evaluates the tree.
    ///
    /// Any warnings are emitted through `tracing` and evaluation carries on;
    /// use [`ExpressionTree::evaluate_with_warnings`] to inspect them instead.
    /// An empty tree evaluates to `0.0`, which callers can only tell apart
    /// from a leaf holding `0.0` by checking [`ExpressionTree::is_empty`].
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::interpreter::tree::ExpressionTree;
    ///
    /// let tree: ExpressionTree = "- ^ 2 10 24".parse().unwrap();
    /// assert_eq!(tree.evaluate(), 1000.0);
    ///
    /// let empty: ExpressionTree = "   ".parse().unwrap();
    /// assert_eq!(empty.evaluate(), 0.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        let evaluation = self.evaluate_with_warnings();
        evaluation.log_warnings();
        evaluation.value
    }

    /// Evaluates the tree and returns the value together with any warnings.
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::{error::EvalWarning, interpreter::tree::ExpressionTree};
    ///
    /// let tree: ExpressionTree = "% 5 2".parse().unwrap();
    /// let evaluation = tree.evaluate_with_warnings();
    ///
    /// assert_eq!(evaluation.value, 7.0);
    /// assert_eq!(evaluation.warnings,
    ///            vec![EvalWarning::UnrecognizedOperator { operator: '%' }]);
    /// ```
    #[must_use]
    pub fn evaluate_with_warnings(&self) -> Evaluation {
        let mut evaluator = Evaluator::default();
        let value = self.root().map_or(0.0, |root| evaluator.eval(root));
        Evaluation { value,
                     warnings: evaluator.warnings }
    }
}

/// Collects warnings during a single post-order evaluation.
#[derive(Default)]
struct Evaluator {
    warnings: Vec<EvalWarning>,
}

impl Evaluator {
    fn eval(&mut self, node: &Node) -> f64 {
        match node {
            Node::Leaf(value) => *value,
            Node::Internal { op, left, right } => {
                let left = self.eval(left);
                let right = self.eval(right);
                if let BinaryOperator::Unrecognized(operator) = *op {
                    self.warnings
                        .push(EvalWarning::UnrecognizedOperator { operator });
                }
                op.apply(left, right)
            },
        }
    }
}
