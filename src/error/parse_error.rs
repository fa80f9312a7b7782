use crate::interpreter::lexer::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The next token does not match what the grammar requires.
    UnexpectedToken {
        /// A description of what was expected, e.g. `'thankyou'`.
        expected: String,
        /// The token actually found, or `end of input`.
        found:    String,
        /// Where the offending token starts.
        position: Position,
    },
    /// Expressions or statement bodies are nested deeper than the parser
    /// allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:    usize,
        /// Where the nesting went past the limit.
        position: Position,
    },
}

impl ParseError {
    /// Returns the name of the error variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { .. } => "UnexpectedToken",
            Self::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    /// Returns the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. } | Self::NestingTooDeep { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error on {position}: Impolite syntax, expected {expected} but found {found}."),
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error on {position}: Too much nesting, at most {limit} levels are allowed."),
        }
    }
}

impl std::error::Error for ParseError {}
