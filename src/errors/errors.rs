use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

#[derive(Debug)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InputAccess { .. } => "InputAccess",
            ErrorImpl::StdinRead { .. } => "StdinRead",
            ErrorImpl::Terminal { .. } => "Terminal",
            ErrorImpl::OutputWrite { .. } => "OutputWrite",
            ErrorImpl::Serialize { .. } => "Serialize",
            ErrorImpl::InvalidChoice { .. } => "InvalidChoice",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InputAccess { path, source } => ErrorTip::Suggestion(format!(
                "Could not open `{}`: {}",
                path.display(),
                source
            )),
            ErrorImpl::StdinRead { source } => {
                ErrorTip::Suggestion(format!("Could not read code from stdin: {}", source))
            }
            ErrorImpl::Terminal { .. } => ErrorTip::None,
            ErrorImpl::OutputWrite { path, source } => ErrorTip::Suggestion(format!(
                "Could not create `{}`: {}, does the directory exist?",
                path.display(),
                source
            )),
            ErrorImpl::Serialize { .. } => ErrorTip::None,
            ErrorImpl::InvalidChoice { choice } => ErrorTip::Suggestion(format!(
                "Invalid choice `{}`, expected 1 or 2",
                choice
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.internal_error)
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("could not open file {path:?}")]
    InputAccess { path: PathBuf, source: io::Error },
    #[error("could not read from stdin")]
    StdinRead { source: io::Error },
    #[error("could not write to the terminal")]
    Terminal { source: io::Error },
    #[error("could not create {path:?}")]
    OutputWrite { path: PathBuf, source: io::Error },
    #[error("could not serialize tokens")]
    Serialize { source: serde_json::Error },
    #[error("invalid choice {choice:?}")]
    InvalidChoice { choice: String },
}
