use std::path::{Path, PathBuf};

/// Errors raised while building list files. Every variant aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// An index list or annotation file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The annotation file is not well-formed VOC XML.
    #[error("Malformed annotation {}: {message}", path.display())]
    MalformedAnnotation { path: PathBuf, message: String },
    /// A `<name>` value outside the class vocabulary.
    #[error("Unknown class name '{name}'{}", format_context(.path))]
    UnknownClass { name: String, path: Option<PathBuf> },
    /// The output list file could not be created or written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ListError>;

fn format_context(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

impl ListError {
    pub(crate) fn missing_file(path: &Path, source: std::io::Error) -> Self {
        Self::MissingFile {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach the annotation path to an unknown-class error raised by the resolver.
    pub(crate) fn with_path(self, path: &Path) -> Self {
        match self {
            Self::UnknownClass { name, path: None } => Self::UnknownClass {
                name,
                path: Some(path.to_path_buf()),
            },
            other => other,
        }
    }
}
