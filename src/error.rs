/// Every error regline can produce. Displayed as one-line user-facing messages.
#[derive(Debug)]
pub enum RegError {
    InvalidPattern {
        pattern: String,
        reason: String,
    },
    InvalidTemplate {
        token: String,
        reason: String,
    },
    /// No captured text for `group` at filtered line `line`.
    /// `available` is how many occurrences that group has (0 if the group doesn't exist).
    IndexOutOfRange {
        line: usize,
        group: usize,
        available: usize,
    },
    Io {
        context: &'static str,
        source: std::io::Error,
    },
}

impl std::fmt::Display for RegError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern \"{pattern}\": {reason}")
            }
            Self::InvalidTemplate { token, reason } => {
                write!(f, "invalid template token \"{token}\": {reason}")
            }
            Self::IndexOutOfRange {
                line,
                group,
                available,
            } => write!(
                f,
                "line {line}: no capture for group {group} ({available} captured)"
            ),
            Self::Io { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl std::error::Error for RegError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl RegError {
    /// Process exit status for this error. 1 is reserved for usage errors.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 2,
            Self::InvalidPattern { .. } | Self::InvalidTemplate { .. } => 3,
            Self::IndexOutOfRange { .. } => 4,
        }
    }
}
