//! Itemized validation failures.

use std::fmt;

use crate::core::messages::MsgType;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationItem {
    /// Code of the failed check, when the producer used a named message.
    pub code: Option<MsgType>,
    pub message: String,
}

impl ValidationItem {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Build an item from a message code and its arguments.
    pub fn coded(code: MsgType, args: &[&str]) -> Self {
        Self {
            code: Some(code),
            message: code.render(args),
        }
    }
}

impl fmt::Display for ValidationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "[{code}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Ordered collection of validation failures.
///
/// Items keep insertion order; callers drain the report when logging it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    items: Vec<ValidationItem>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ValidationItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationItem> {
        self.items.iter()
    }

    /// `Ok(())` when nothing was recorded, otherwise the report itself.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationItem;
    type IntoIter = std::vec::IntoIter<ValidationItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ValidationItem> for ValidationReport {
    fn from_iter<T: IntoIterator<Item = ValidationItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
