use std::fmt;

#[derive(Debug)]
pub enum PageError {
    /// A required view element is absent (fatal at initialization)
    MissingElement { id: String, context: String },

    /// Page layout YAML could not be parsed
    Layout { context: String, source: serde_yaml::Error },

    /// Event script YAML could not be parsed
    Script { context: String, source: serde_yaml::Error },

    /// Reading or writing a file failed
    Io { path: String, source: std::io::Error },

    /// YAML serialization of page state failed (snapshots, layout dumps)
    Yaml { context: String, source: serde_yaml::Error },

    /// JSON serialization failed (snapshots, traces)
    Json { context: String, source: serde_json::Error },

    /// A date argument was not in YYYY-MM-DD form
    InvalidDate(String),
}

impl PageError {
    pub fn missing(id: &str, context: impl Into<String>) -> Self {
        PageError::MissingElement {
            id: id.to_string(),
            context: context.into(),
        }
    }
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::MissingElement { id, context } => {
                write!(f, "Element '{}' not found: {}", id, context)
            }
            PageError::Layout { context, source } => {
                write!(f, "Invalid page layout ({}): {}", context, source)
            }
            PageError::Script { context, source } => {
                write!(f, "Invalid event script ({}): {}", context, source)
            }
            PageError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            PageError::Yaml { context, source } => {
                write!(f, "YAML error ({}): {}", context, source)
            }
            PageError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            PageError::InvalidDate(raw) => {
                write!(f, "Invalid date '{}': expected YYYY-MM-DD", raw)
            }
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageError::Layout { source, .. } => Some(source),
            PageError::Script { source, .. } => Some(source),
            PageError::Io { source, .. } => Some(source),
            PageError::Yaml { source, .. } => Some(source),
            PageError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
