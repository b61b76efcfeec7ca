use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RefitError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", .0.display())]
    Utf8(PathBuf),
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("invalid table {}: {message}", .path.display())]
    Table { path: PathBuf, message: String },
}

impl RefitError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}
