use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LionError {
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
    #[error("expected word of type {expected}, found {found}")]
    Type { expected: String, found: String },
    #[error("unrecognised word {0}")]
    UnknownWord(String),
    #[error("definition error: {0}")]
    Definition(String),
    #[error("{0}")]
    Domain(String),
    #[error("cannot access {path}: {message}")]
    Io { path: String, message: String },
    #[error("evaluation nested deeper than {0} levels")]
    DepthExceeded(usize),
    #[error("Bye")]
    Exit,
}

/// Coarse category of a [`LionError`], for hosts that branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Type,
    Lookup,
    Definition,
    Domain,
    Io,
    Limit,
    Exit,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Syntax => "syntax",
            Self::Type => "type",
            Self::Lookup => "lookup",
            Self::Definition => "definition",
            Self::Domain => "domain",
            Self::Io => "io",
            Self::Limit => "limit",
            Self::Exit => "exit",
        };
        f.write_str(name)
    }
}

impl LionError {
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Type { .. } => ErrorKind::Type,
            Self::UnknownWord(_) => ErrorKind::Lookup,
            Self::Definition(_) => ErrorKind::Definition,
            Self::Domain(_) => ErrorKind::Domain,
            Self::Io { .. } => ErrorKind::Io,
            Self::DepthExceeded(_) => ErrorKind::Limit,
            Self::Exit => ErrorKind::Exit,
        }
    }
}
