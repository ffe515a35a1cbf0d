use thiserror::Error;

/// Main error type for my_python_project operations
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Command(String),
}

impl ProjectError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn command<S: Into<String>>(msg: S) -> Self {
        Self::Command(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Process exit code reported for this error.
    ///
    /// Every failure is fatal to the single command being run, so all
    /// variants share the same code.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for my_python_project operations
pub type Result<T> = std::result::Result<T, ProjectError>;
