/// A single token handed out by a [`TokenSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'src> {
    /// The token text, without surrounding blanks.
    pub text:     &'src str,
    /// Index of the token in its stream, counted from zero.
    pub position: usize,
}

impl Word<'_> {
    /// Reads the token as a floating-point literal.
    ///
    /// Accepts everything `f64`'s [`FromStr`](std::str::FromStr) accepts,
    /// including exponents, a leading sign, `inf` and `NaN`.
    ///
    /// ## Example
    /// ```
    /// use prefix_calc::interpreter::parser::source::Word;
    ///
    /// let number = Word { text: "-2.5e1", position: 0 };
    /// let operator = Word { text: "-", position: 1 };
    ///
    /// assert_eq!(number.as_number(), Some(-25.0));
    /// assert_eq!(operator.as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        self.text.parse().ok()
    }
}

/// The stream of tokens the tree builder consumes.
///
/// This is the only interface construction depends on; where the tokens come
/// from (a command-line argument, a line of standard input, a file) is up to
/// the implementor.
pub trait TokenSource<'src> {
    /// Returns the value of the next token if it is a floating-point literal,
    /// without consuming it. Returns `None` for any other token and at the
    /// end of the stream.
    fn peek_number(&mut self) -> Option<f64>;

    /// Consumes the next token and returns it as text, numeric or not.
    /// Returns `None` once the stream is exhausted.
    fn next_word(&mut self) -> Option<Word<'src>>;

    /// Number of tokens consumed so far.
    fn position(&self) -> usize;
}
