use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// A token together with the position it starts at.
pub type Spanned = (Token, Position);

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keywords take priority over identifiers of the same spelling.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hi there"`. Holds the unescaped text.
    #[token("\"", lex_string)]
    Text(String),
    /// Identifier tokens; variable names such as `a`, `total2` or `café`.
    /// A letter in any script, followed by letters and numeric characters.
    #[regex(r"\p{L}[\p{L}\p{N}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `hello`
    #[token("hello")]
    Hello,
    /// `goodbye`
    #[token("goodbye")]
    Goodbye,
    /// `please`
    #[token("please")]
    Please,
    /// `thankyou`
    #[token("thankyou")]
    Thankyou,
    /// `call`
    #[token("call")]
    Call,
    /// `say`
    #[token("say")]
    Say,
    /// `perchance`
    #[token("perchance")]
    Perchance,
    /// `naturally`
    #[token("naturally")]
    Naturally,
    /// `whilst`
    #[token("whilst")]
    Whilst,
    /// `is`
    #[token("is")]
    Is,
    /// `isnt`
    #[token("isnt")]
    Isnt,
    /// Spaces, tabs, feeds and newlines.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
    /// End of input. Never matched by a pattern; produced by [`Lexer`] once
    /// the source is exhausted.
    Eof,
}

impl Token {
    /// Describes the token for error messages, e.g. `'thankyou'` or
    /// `end of input`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Eof => "end of input".to_string(),
            Self::Integer(n) => format!("integer {n}"),
            Self::Text(_) => format!("string {self}"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            _ => format!("'{self}'"),
        }
    }
}

impl std::fmt::Display for Token {
    /// Writes the token back in its source spelling.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Self::Integer(n) => return write!(f, "{n}"),
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Text(text) => {
                write!(f, "\"")?;
                for c in text.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                return write!(f, "\"");
            },
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Hello => "hello",
            Self::Goodbye => "goodbye",
            Self::Please => "please",
            Self::Thankyou => "thankyou",
            Self::Call => "call",
            Self::Say => "say",
            Self::Perchance => "perchance",
            Self::Naturally => "naturally",
            Self::Whilst => "whilst",
            Self::Is => "is",
            Self::Isnt => "isnt",
            Self::Ignored => " ",
            Self::Eof => "",
        };
        write!(f, "{keyword}")
    }
}

/// A location in the source text. Both fields are 1-based; the column
/// counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The line number.
    pub line:   usize,
    /// The column within the line.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A pull-style tokenizer over a source string.
///
/// Each call to [`Lexer::next_token`] yields the next token. Once the input
/// is exhausted, every further call yields [`Token::Eof`].
///
/// # Example
/// ```
/// use polite::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("say 1");
///
/// assert_eq!(lexer.next_token().unwrap().0, Token::Say);
/// assert_eq!(lexer.next_token().unwrap().0, Token::Integer(1));
/// assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
/// assert_eq!(lexer.next_token().unwrap().0, Token::Eof);
/// ```
pub struct Lexer<'src> {
    inner:      logos::Lexer<'src, Token>,
    /// Line of the byte offset `scanned`.
    line:       usize,
    /// Byte offset where `line` starts.
    line_start: usize,
    /// Byte offset up to which newlines have been counted.
    scanned:    usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:      Token::lexer(source),
               line:       1,
               line_start: 0,
               scanned:    0, }
    }

    /// Returns the next token and the position it starts at.
    ///
    /// # Errors
    /// Returns a [`LexError`] for a character that cannot start a token, an
    /// unterminated string literal, or an integer literal that does not fit
    /// into an `i64`.
    pub fn next_token(&mut self) -> LexResult<Spanned> {
        match self.inner.next() {
            None => {
                let end = self.inner.source().len();
                Ok((Token::Eof, self.position_at(end)))
            },
            Some(Ok(token)) => {
                let start = self.inner.span().start;
                Ok((token, self.position_at(start)))
            },
            Some(Err(())) => Err(self.classify_error()),
        }
    }

    /// Translates a byte offset into a line and column.
    ///
    /// Offsets must be requested in non-decreasing order.
    fn position_at(&mut self, offset: usize) -> Position {
        let source = self.inner.source();
        for (index, c) in source[self.scanned..offset].char_indices() {
            if c == '\n' {
                self.line += 1;
                self.line_start = self.scanned + index + 1;
            }
        }
        self.scanned = offset;

        Position { line:   self.line,
                   column: source[self.line_start..offset].chars().count() + 1, }
    }

    /// Works out which lexical error the slice logos rejected stands for.
    fn classify_error(&mut self) -> LexError {
        let slice = self.inner.slice();
        let start = self.inner.span().start;
        let first = slice.chars().next().unwrap_or('\0');
        let position = self.position_at(start);

        if first == '"' {
            LexError::UnterminatedString { position }
        } else if first.is_ascii_digit() {
            LexError::IntegerOutOfRange { literal: slice.to_string(),
                                          position }
        } else {
            LexError::UnexpectedCharacter { character: first,
                                            position }
        }
    }
}

/// Tokenizes the whole source.
///
/// The returned vector always ends with exactly one [`Token::Eof`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use polite::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("hello goodbye").unwrap()
///                                                   .into_iter()
///                                                   .map(|(token, _)| token)
///                                                   .collect();
///
/// assert_eq!(tokens, vec![Token::Hello, Token::Goodbye, Token::Eof]);
/// assert!(tokenize("<").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Spanned>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let spanned = lexer.next_token()?;
        let done = spanned.0 == Token::Eof;
        tokens.push(spanned);
        if done {
            return Ok(tokens);
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Reads the body of a string literal after its opening quote.
///
/// Consumes input up to and including the next unescaped `"`. The escapes
/// `\"`, `\\`, `\n` and `\t` are translated; any other backslash pair is
/// kept as written.
///
/// # Returns
/// - `Some(String)`: The unescaped text.
/// - `None`: If the input ends before the closing quote. The rest of the
///   input is consumed so the error slice starts at the opening quote.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let remainder = lex.remainder();
    let mut text = String::new();
    let mut chars = remainder.char_indices();

    while let Some((index, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(index + 1);
                return Some(text);
            },
            '\\' => match chars.next() {
                Some((_, '"')) => text.push('"'),
                Some((_, '\\')) => text.push('\\'),
                Some((_, 'n')) => text.push('\n'),
                Some((_, 't')) => text.push('\t'),
                Some((_, other)) => {
                    text.push('\\');
                    text.push(other);
                },
                None => break,
            },
            _ => text.push(c),
        }
    }

    lex.bump(remainder.len());
    None
}
