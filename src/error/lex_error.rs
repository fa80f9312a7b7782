use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing.
pub enum LexError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  Position,
    },
    /// A string literal was opened but the input ended before its closing
    /// quote.
    UnterminatedString {
        /// Where the opening quote was found.
        position: Position,
    },
    /// An integer literal does not fit into a 64 bit signed integer.
    IntegerOutOfRange {
        /// The digits as written in the source.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Returns the name of the error variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            Self::UnterminatedString { .. } => "UnterminatedString",
            Self::IntegerOutOfRange { .. } => "IntegerOutOfRange",
        }
    }

    /// Returns the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedString { position }
            | Self::IntegerOutOfRange { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error on {position}: Impolite character '{}'.",
                                                                        character.escape_default()),
            Self::UnterminatedString { position } => {
                write!(f, "Error on {position}: String literal is never closed.")
            },
            Self::IntegerOutOfRange { literal, position } => write!(f,
                                                                    "Error on {position}: Integer literal {literal} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
