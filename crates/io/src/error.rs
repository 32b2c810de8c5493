use std::fmt;

#[derive(Debug)]
pub enum LoadError {
    /// File read error.
    Io { path: String, message: String },
    /// CSV-level parse error.
    Csv { path: String, message: String },
    /// Registry row with fewer than the six positional columns.
    ShortRow { path: String, line: usize, found: usize },
    /// Required template column missing from the header.
    MissingColumn { path: String, column: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {path}: {message}"),
            Self::Csv { path, message } => write!(f, "{path}: {message}"),
            Self::ShortRow { path, line, found } => {
                write!(f, "{path}: line {line}: expected 6 columns, found {found}")
            }
            Self::MissingColumn { path, column } => {
                write!(f, "{path}: missing column '{column}'")
            }
        }
    }
}

impl std::error::Error for LoadError {}
