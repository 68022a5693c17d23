use thiserror::Error;

/// Root cause of a parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// Version or constraint text that does not follow the expected grammar
    #[error("invalid version string")]
    InvalidVersion,

    /// Prerelease or build identifier that does not follow the identifier grammar
    #[error("invalid identifier string")]
    InvalidIdentifier,
}

/// Error returned by every version, label and constraint constructor
///
/// Each layer that fails wraps the inner error with its own operation name and
/// the exact text it was given, so the chain reads from the outermost call down
/// to the [`ErrorKind`] that started it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{op}] parsing '{input}': {cause}")]
pub struct ParseError {
    op: &'static str,
    input: String,
    #[source]
    cause: Cause,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum Cause {
    #[error(transparent)]
    Kind(ErrorKind),

    #[error(transparent)]
    Nested(Box<ParseError>),
}

impl ParseError {
    pub(crate) fn new(op: &'static str, input: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            op,
            input: input.into(),
            cause: Cause::Kind(kind),
        }
    }

    pub(crate) fn wrap(op: &'static str, input: impl Into<String>, inner: ParseError) -> Self {
        Self {
            op,
            input: input.into(),
            cause: Cause::Nested(Box::new(inner)),
        }
    }

    /// Name of the operation that failed
    pub fn op(&self) -> &'static str {
        self.op
    }

    /// Raw text handed to the failing operation
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The wrapped error reported by an inner operation, if any
    pub fn cause(&self) -> Option<&ParseError> {
        match &self.cause {
            Cause::Kind(_) => None,
            Cause::Nested(inner) => Some(inner),
        }
    }

    /// Innermost error kind of the chain
    pub fn kind(&self) -> ErrorKind {
        match &self.cause {
            Cause::Kind(kind) => *kind,
            Cause::Nested(inner) => inner.kind(),
        }
    }
}
