use std::fmt;

/// Failure reported by a [`super::LogSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    GroupNotFound(String),
    StreamNotFound { group: String, stream: String },
    Unavailable(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::GroupNotFound(group) => write!(f, "Log group not found: {}", group),
            SourceError::StreamNotFound { group, stream } => {
                write!(f, "Log stream not found: {}/{}", group, stream)
            }
            SourceError::Unavailable(msg) => write!(f, "Log source unavailable: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// Failure reported by a [`super::TabHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    Rejected(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Rejected(msg) => write!(f, "Tab host rejected tab: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

/// Why a log view could not be opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    Source(SourceError),
    Host(HostError),
    /// The build task died before producing a view.
    Worker(String),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::Source(e) => write!(f, "{}", e),
            ViewError::Host(e) => write!(f, "{}", e),
            ViewError::Worker(msg) => write!(f, "View construction failed: {}", msg),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::Source(e) => Some(e),
            ViewError::Host(e) => Some(e),
            ViewError::Worker(_) => None,
        }
    }
}

impl From<SourceError> for ViewError {
    fn from(e: SourceError) -> Self {
        ViewError::Source(e)
    }
}

impl From<HostError> for ViewError {
    fn from(e: HostError) -> Self {
        ViewError::Host(e)
    }
}
