//! Error taxonomy shared by tools and services.
//!
//! Services report failures as [`ToolError`]; the lifecycle classifies them:
//!
//! - [`ToolError::Message`]: one named failure, logged as a single line.
//! - [`ToolError::Validation`]: an itemized report, logged once as an
//!   aggregate and then item by item.
//! - [`ToolError::Other`]: anything else, logged generically.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::core::messages::MsgType;
use crate::core::validation::{ValidationItem, ValidationReport};

pub type ToolResult<T> = Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Message(#[from] MessageError),
    #[error("validation failed with {} item(s)", .0.len())]
    Validation(ValidationReport),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ToolError {
    /// Shorthand for a message error without a source.
    pub fn message<S: AsRef<str>>(kind: MsgType, args: &[S]) -> Self {
        ToolError::Message(MessageError::new(kind, args))
    }

    /// Message error whose single argument is a path.
    pub fn for_path(kind: MsgType, path: &Path) -> Self {
        Self::message(kind, &[path.display().to_string()])
    }
}

impl From<ValidationReport> for ToolError {
    fn from(report: ValidationReport) -> Self {
        ToolError::Validation(report)
    }
}

impl From<ValidationItem> for ToolError {
    fn from(item: ValidationItem) -> Self {
        ToolError::Validation(std::iter::once(item).collect())
    }
}

/// A known, named failure: message code plus arguments.
#[derive(Debug)]
pub struct MessageError {
    kind: MsgType,
    args: Vec<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl MessageError {
    pub fn new<S: AsRef<str>>(kind: MsgType, args: &[S]) -> Self {
        Self {
            kind,
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
            source: None,
        }
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> MsgType {
        self.kind
    }

    /// Rendered text without the code prefix.
    pub fn text(&self) -> String {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        self.kind.render(&args)
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.text())?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MessageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

/// Read a file, mapping I/O failure to [`MsgType::FileReadFailed`].
pub fn read_to_string(path: &Path) -> ToolResult<String> {
    std::fs::read_to_string(path).map_err(|err| {
        MessageError::new(MsgType::FileReadFailed, &[path.display().to_string()])
            .with_source(err)
            .into()
    })
}

/// Like [`read_to_string`], but a file that is not valid UTF-8 yields
/// `Ok(None)` instead of an error.
pub fn read_text(path: &Path) -> ToolResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::InvalidData => Ok(None),
        Err(err) => Err(
            MessageError::new(MsgType::FileReadFailed, &[path.display().to_string()])
                .with_source(err)
                .into(),
        ),
    }
}

/// Write a file (creating parent directories), mapping failure to
/// [`MsgType::FileWriteFailed`].
pub fn write_string(path: &Path, contents: &str) -> ToolResult<()> {
    let wrap = |err: std::io::Error| -> ToolError {
        MessageError::new(MsgType::FileWriteFailed, &[path.display().to_string()])
            .with_source(err)
            .into()
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, contents).map_err(wrap)
}
