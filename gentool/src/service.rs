//! Content-service contract.
//!
//! A content service is the strategy a concrete tool plugs into the shared
//! lifecycle. Tools never look inside it: they hand it arguments through
//! [`ContentService::initialize`], run [`ContentService::process`], and, for
//! plain-content inputs, read [`PlainContentService::content`].
//!
//! Both calls report `Ok(false)` for an ordinary "did not work" and an
//! [`ToolError`](crate::error::ToolError) for a classified failure.

use std::path::{Path, PathBuf};

use crate::core::mapping::MappingInput;
use crate::core::types::ResolvedPaths;
use crate::error::ToolResult;

pub trait ContentService {
    /// What `initialize` receives (resolved paths, an input file, a mapping, ...).
    type Args: ?Sized;

    fn initialize(&mut self, args: &Self::Args) -> ToolResult<bool>;

    fn process(&mut self) -> ToolResult<bool>;
}

/// Service driven by [`IoTool`](crate::lifecycle::IoTool).
pub trait IoService: ContentService<Args = ResolvedPaths> {}

impl<T: ContentService<Args = ResolvedPaths> + ?Sized> IoService for T {}

/// Service driven by [`InputTool`](crate::tools::InputTool): one input file,
/// no output path.
pub trait InputService: ContentService<Args = Path> {}

impl<T: ContentService<Args = Path> + ?Sized> InputService for T {}

/// Service that reads one input file and exposes its text.
pub trait PlainContentService: ContentService<Args = Path> {
    /// Loaded text, if `process` produced any.
    fn content(&self) -> Option<String>;
}

/// Service driven by the map-transform tool.
pub trait MapTransformService: ContentService<Args = MappingInput> {}

impl<T: ContentService<Args = MappingInput> + ?Sized> MapTransformService for T {}

/// Target file plus the definition file that drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDefinition {
    pub target: PathBuf,
    pub definition: PathBuf,
}

/// Service driven by the tag-setter tool.
pub trait DefinitionService: ContentService<Args = TargetDefinition> {}

impl<T: ContentService<Args = TargetDefinition> + ?Sized> DefinitionService for T {}
