use logos::Logos;
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::parser::source::{TokenSource, Word},
};

/// Represents a lexical token in prefix input.
///
/// Prefix input has no punctuation of its own: tokens are maximal runs of
/// non-whitespace characters. Whitespace is any Unicode white space, so
/// `U+3000` separates tokens just like a space. Whether a token is an
/// operand or an operator is decided later by the parser, which asks the
/// token source whether the token reads as a number.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Token<'src> {
    /// A whitespace-delimited run of characters, such as `3.5`, `+` or `abc`.
    #[regex(r"\S+", |lex| lex.slice())]
    Word(&'src str),
}

/// A token source over an in-memory sequence of tokens.
///
/// `Scanner::new` lexes a whole input string up front; the parser then walks
/// the collected tokens with a cursor. A scanner can also be collected from
/// any iterator of pre-split tokens.
///
/// ## Example
/// ```
/// use prefix_calc::interpreter::{lexer::Scanner, parser::source::TokenSource};
///
/// let mut scanner = Scanner::new("  + 3\t4 ").unwrap();
///
/// assert_eq!(scanner.len(), 3);
/// assert_eq!(scanner.peek_number(), None);
/// assert_eq!(scanner.next_word().map(|w| w.text), Some("+"));
/// assert_eq!(scanner.peek_number(), Some(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scanner<'src> {
    words:  Vec<Word<'src>>,
    cursor: usize,
}

impl<'src> Scanner<'src> {
    /// Lexes `source` into blank-delimited tokens.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] if the lexer rejects part of
    /// the input.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut words = Vec::new();
        let mut lexer = Token::lexer(source);

        while let Some(token) = lexer.next() {
            let position = words.len();
            match token {
                Ok(Token::Word(text)) => words.push(Word { text, position }),
                Err(()) => {
                    return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                             position });
                },
            }
        }

        trace!(tokens = words.len(), "lexed input");
        Ok(Self { words, cursor: 0 })
    }

    /// Total number of tokens, consumed or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the input held no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The tokens not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> &[Word<'src>] {
        &self.words[self.cursor..]
    }
}

impl<'src> FromIterator<&'src str> for Scanner<'src> {
    fn from_iter<I: IntoIterator<Item = &'src str>>(iter: I) -> Self {
        let words = iter.into_iter()
                        .enumerate()
                        .map(|(position, text)| Word { text, position })
                        .collect();
        Self { words, cursor: 0 }
    }
}

impl<'src> TokenSource<'src> for Scanner<'src> {
    fn peek_number(&mut self) -> Option<f64> {
        self.words.get(self.cursor).and_then(Word::as_number)
    }

    fn next_word(&mut self) -> Option<Word<'src>> {
        let word = self.words.get(self.cursor).copied()?;
        self.cursor += 1;
        trace!(token = word.text, position = word.position, "consumed token");
        Some(word)
    }

    fn position(&self) -> usize {
        self.cursor
    }
}
