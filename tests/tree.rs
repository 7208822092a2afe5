use std::collections::VecDeque;

use pretty_assertions::assert_eq;
use prefix_calc::{
    ast::{BinaryOperator, Node},
    error::{EvalWarning, ParseError},
    interpreter::{
        lexer::Scanner,
        parser::{
            core::ParseOptions,
            source::{TokenSource, Word},
        },
        render::Notation,
        tree::ExpressionTree,
    },
};

/// A token source that hands out owned-by-the-test tokens one at a time,
/// without ever lexing a string.
struct Queue<'src> {
    words:    VecDeque<&'src str>,
    consumed: usize,
}

impl<'src> Queue<'src> {
    fn new(words: &[&'src str]) -> Self {
        Self { words:    words.iter().copied().collect(),
               consumed: 0, }
    }
}

impl<'src> TokenSource<'src> for Queue<'src> {
    fn peek_number(&mut self) -> Option<f64> {
        self.words.front()?.parse().ok()
    }

    fn next_word(&mut self) -> Option<Word<'src>> {
        let text = self.words.pop_front()?;
        let word = Word { text,
                          position: self.consumed };
        self.consumed += 1;
        Some(word)
    }

    fn position(&self) -> usize {
        self.consumed
    }
}

fn leaf(value: f64) -> Node {
    Node::Leaf(value)
}

#[test]
fn builds_from_any_token_source() {
    let mut tokens = Queue::new(&["*", "+", "1", "2", "3"]);
    let tree = ExpressionTree::new(&mut tokens).unwrap();

    let expected = Node::internal(BinaryOperator::Mul,
                                  Node::internal(BinaryOperator::Add, leaf(1.0), leaf(2.0)),
                                  leaf(3.0));
    assert_eq!(tree.root(), Some(&expected));
    assert_eq!(tokens.position(), 5);
}

#[test]
fn left_operand_is_built_before_the_right() {
    let tree: ExpressionTree = "- 10 4".parse().unwrap();

    assert_eq!(tree.into_root(),
               Some(Node::internal(BinaryOperator::Sub, leaf(10.0), leaf(4.0))));
}

#[test]
fn exhausted_source_gives_an_empty_tree() {
    let tree = ExpressionTree::new(&mut Queue::new(&[])).unwrap();

    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.node_count(), 0);
    assert_eq!(tree, ExpressionTree::empty());
    assert_eq!(tree, ExpressionTree::default());
}

#[test]
fn empty_operator_token_is_malformed() {
    let mut tokens: Scanner = ["+", "", "1", "2"].into_iter().collect();
    let e = ExpressionTree::new(&mut tokens).unwrap_err();

    assert_eq!(e, ParseError::EmptyOperator { position: 1 });
    assert!(e.is_malformed());
    assert_eq!(e.position(), 1);
}

#[test]
fn end_of_input_reports_where_the_operand_was_expected() {
    let e = ExpressionTree::new(&mut Queue::new(&["/", "1"])).unwrap_err();

    assert_eq!(e, ParseError::UnexpectedEndOfInput { position: 2 });
}

#[test]
fn construction_fails_as_a_whole() {
    let result = "+ * 1 2".parse::<ExpressionTree>();

    assert!(result.is_err());
}

#[test]
fn scanner_reports_what_is_left() {
    let mut scanner = Scanner::new("+ 1 2 extra tokens").unwrap();
    let tree = ExpressionTree::with_options(&mut scanner, &ParseOptions::lenient()).unwrap();

    assert_eq!(tree.node_count(), 3);
    assert_eq!(scanner.len(), 5);
    assert_eq!(scanner.remaining()
                      .iter()
                      .map(|w| w.text)
                      .collect::<Vec<_>>(),
               vec!["tokens"]);
}

#[test]
fn blank_scanner_is_empty() {
    let scanner = Scanner::new(" \t\r\n ").unwrap();

    assert!(scanner.is_empty());
    assert!(scanner.remaining().is_empty());
}

#[test]
fn numbers_are_never_operators() {
    let tree: ExpressionTree = "+ inf -1.5e2".parse().unwrap();

    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.prefix(), "+ inf -150.0 \n");
    assert_eq!(tree.evaluate(), f64::INFINITY);
}

#[test]
fn renders_hand_built_trees() {
    let tree = ExpressionTree::from(Node::internal(BinaryOperator::Pow,
                                                   leaf(2.0),
                                                   Node::internal(BinaryOperator::Div,
                                                                  leaf(1.0),
                                                                  leaf(2.0))));

    assert_eq!(tree.prefix(), "^ 2.0 / 1.0 2.0 \n");
    assert_eq!(tree.postfix(), "2.0 1.0 2.0 / ^ \n");
    assert_eq!(tree.infix(), "( 2.0 ^ ( 1.0 / 2.0 ) ) \n");
    assert!((tree.evaluate() - 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn renders_into_any_writer() {
    let tree: ExpressionTree = "+ 3 4".parse().unwrap();
    let mut out = String::from("> ");

    tree.write_infix(&mut out).unwrap();
    tree.write_postfix(&mut out).unwrap();

    assert_eq!(out, "> ( 3.0 + 4.0 ) \n3.0 4.0 + \n");
}

#[test]
fn empty_tree_renders_blank_lines() {
    let tree = ExpressionTree::empty();

    for notation in Notation::ALL {
        assert_eq!(tree.render(notation).to_string(), "\n");
    }
}

#[test]
fn leaf_only_tree_is_never_parenthesized() {
    let tree = ExpressionTree::from_root(leaf(-0.5));

    assert_eq!(tree.infix(), "-0.5 \n");
    assert_eq!(tree.depth(), 1);
}

#[test]
fn evaluation_reports_warnings_without_aborting() {
    let tree = ExpressionTree::from_root(Node::internal(BinaryOperator::Mul,
                                                        Node::internal(BinaryOperator::from('?'),
                                                                       leaf(1.0),
                                                                       leaf(2.0)),
                                                        leaf(4.0)));
    let evaluation = tree.evaluate_with_warnings();

    assert_eq!(evaluation.value, 12.0);
    assert_eq!(evaluation.warnings,
               vec![EvalWarning::UnrecognizedOperator { operator: '?' }]);
    assert_eq!(tree.evaluate(), 12.0);
}

#[test]
fn empty_tree_evaluates_to_zero() {
    let evaluation = ExpressionTree::empty().evaluate_with_warnings();

    assert_eq!(evaluation.value, 0.0);
    assert!(evaluation.warnings.is_empty());
}

#[test]
fn operators_round_trip_through_their_symbol() {
    for symbol in ['+', '-', '*', '/', '^', '%', 'x'] {
        let op = BinaryOperator::from(symbol);
        assert_eq!(op.symbol(), symbol);
        assert_eq!(op.to_string(), symbol.to_string());
        assert_eq!(op.is_recognized(), "+-*/^".contains(symbol));
    }
}

#[test]
fn trees_can_move_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ExpressionTree>();

    let tree: ExpressionTree = "* 6 7".parse().unwrap();
    let value = std::thread::spawn(move || tree.evaluate()).join().unwrap();

    assert_eq!(value, 42.0);
}
