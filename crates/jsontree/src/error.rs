use thiserror::Error;

/// A rejected parse: the failure class plus where the input went wrong.
///
/// Produced only by [`parse`](crate::parse); the first grammar violation
/// aborts the whole parse, so there is never more than one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    /// Which grammar rule rejected the input.
    pub kind: ErrorKind,
    /// 1-based line of the offending position.
    pub line: usize,
    /// 1-based column of the offending position, counted in characters.
    pub column: usize,
}

/// The distinct failure classes of the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A byte that no grammar rule can begin with.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    /// A keyword (`null`, `true`, `false`) that is misspelled or truncated.
    #[error("malformed literal, expected `{0}`")]
    InvalidLiteral(&'static str),
    /// No digit where the number grammar requires one.
    #[error("malformed number")]
    InvalidNumber,
    /// A number whose magnitude overflows to infinity.
    #[error("number out of range")]
    NumberOutOfRange,
    /// End of input before a string's closing quote.
    #[error("unterminated string")]
    UnterminatedString,
    /// A backslash followed by anything outside the eight escape codes.
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(char),
    /// A raw byte below 0x20 inside a string.
    #[error("unescaped control character 0x{0:02X}")]
    ControlCharacter(u8),
    /// An object key not followed by `:`.
    #[error("expected `:` after object key")]
    ExpectedColon,
    /// An array element not followed by `,` or `]`.
    #[error("missing `,` or `]` in array")]
    UnclosedArray,
    /// An object member not followed by `,` or `}`.
    #[error("missing `,` or `}}` in object")]
    UnclosedObject,
    /// Non-whitespace input after the top-level value.
    #[error("unexpected trailing characters")]
    TrailingCharacters,
    /// Input ended where a value was required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}
