use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, NetErr>;

/// Everything that can stop a run before or during training.
///
/// Numeric fields that fail to parse are not represented here unless the
/// loader runs in `ParseMode::Strict`; the default lenient mode reads them
/// as `0.0`.
#[derive(Debug)]
pub enum NetErr {
    /// The input stream could not be opened or read.
    Io(io::Error),
    /// The CSV text is structurally broken (stray or unterminated quote).
    Csv { line: usize, reason: &'static str },
    /// A record's field count differs from the first record's.
    FieldCount {
        line: usize,
        got: usize,
        expected: usize,
    },
    /// A record is too short to hold a label, a height and a weight.
    MissingColumn { line: usize, got: usize },
    /// A numeric field failed to parse while loading in strict mode.
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },
    /// The JSON run configuration could not be decoded.
    Config(serde_json::Error),
    /// The run configuration decoded but holds an unusable value.
    InvalidConfig(String),
}

impl Display for NetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetErr::Io(e) => write!(f, "failed to read input: {e}"),
            NetErr::Csv { line, reason } => write!(f, "record on line {line}: {reason}"),
            NetErr::FieldCount {
                line,
                got,
                expected,
            } => write!(
                f,
                "record on line {line}: wrong number of fields, got {got} and expected {expected}"
            ),
            NetErr::MissingColumn { line, got } => write!(
                f,
                "record on line {line}: expected at least 3 fields (label, height, weight), got {got}"
            ),
            NetErr::InvalidNumber {
                line,
                column,
                value,
            } => write!(
                f,
                "record on line {line}: column {column} value '{value}' is not a valid number"
            ),
            NetErr::Config(e) => write!(f, "invalid run configuration: {e}"),
            NetErr::InvalidConfig(reason) => write!(f, "invalid run configuration: {reason}"),
        }
    }
}

impl Error for NetErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetErr::Io(e) => Some(e),
            NetErr::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NetErr {
    fn from(e: io::Error) -> Self {
        NetErr::Io(e)
    }
}

impl From<serde_json::Error> for NetErr {
    fn from(e: serde_json::Error) -> Self {
        NetErr::Config(e)
    }
}
