//! Test-only helpers: scripted services, a recording log, and temp layouts.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::error::ToolResult;
use crate::io::config::ToolConfig;
use crate::io::measure::{Level, MeasureLog};
use crate::io::paths::PathResolver;
use crate::service::{ContentService, PlainContentService};

/// One recorded measurement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub tool: String,
    pub level: Level,
    pub message: String,
}

/// [`MeasureLog`] that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingLog {
    lines: RefCell<Vec<LogLine>>,
}

impl RecordingLog {
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.borrow().clone()
    }

    /// Messages at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|line| line.level == level)
            .map(|line| line.message.clone())
            .collect()
    }

    pub fn count(&self, level: Level) -> usize {
        self.messages(level).len()
    }

    /// Whether any line at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }
}

impl MeasureLog for RecordingLog {
    fn record(&self, tool: &str, level: Level, message: &str) {
        self.lines.borrow_mut().push(LogLine {
            tool: tool.to_string(),
            level,
            message: message.to_string(),
        });
    }
}

/// Content service that replays scripted results and records its inputs.
///
/// Each scripted result is returned once; later calls return `Ok(false)`.
pub struct ScriptedService<A> {
    initialize_result: Option<ToolResult<bool>>,
    process_result: Option<ToolResult<bool>>,
    initialized_with: Option<A>,
    process_calls: usize,
}

impl<A> ScriptedService<A> {
    pub fn new(initialize: ToolResult<bool>, process: ToolResult<bool>) -> Self {
        Self {
            initialize_result: Some(initialize),
            process_result: Some(process),
            initialized_with: None,
            process_calls: 0,
        }
    }

    pub fn initialized_with(&self) -> Option<&A> {
        self.initialized_with.as_ref()
    }

    pub fn process_calls(&self) -> usize {
        self.process_calls
    }
}

impl<A: Clone> ContentService for ScriptedService<A> {
    type Args = A;

    fn initialize(&mut self, args: &A) -> ToolResult<bool> {
        self.initialized_with = Some(args.clone());
        self.initialize_result.take().unwrap_or(Ok(false))
    }

    fn process(&mut self) -> ToolResult<bool> {
        self.process_calls += 1;
        self.process_result.take().unwrap_or(Ok(false))
    }
}

/// Plain-content service with scripted results and content.
pub struct ScriptedPlainService {
    inner: ScriptedService<PathBuf>,
    content: Option<String>,
    content_reads: RefCell<usize>,
}

impl ScriptedPlainService {
    pub fn new(
        initialize: ToolResult<bool>,
        process: ToolResult<bool>,
        content: Option<&str>,
    ) -> Self {
        Self {
            inner: ScriptedService::new(initialize, process),
            content: content.map(str::to_string),
            content_reads: RefCell::new(0),
        }
    }

    /// Service whose load succeeds with `content`.
    pub fn with_content(content: &str) -> Self {
        Self::new(Ok(true), Ok(true), Some(content))
    }

    pub fn initialized_with(&self) -> Option<&Path> {
        self.inner.initialized_with().map(PathBuf::as_path)
    }

    pub fn process_calls(&self) -> usize {
        self.inner.process_calls()
    }

    pub fn content_reads(&self) -> usize {
        *self.content_reads.borrow()
    }
}

impl ContentService for ScriptedPlainService {
    type Args = Path;

    fn initialize(&mut self, args: &Path) -> ToolResult<bool> {
        self.inner.initialize(&args.to_path_buf())
    }

    fn process(&mut self) -> ToolResult<bool> {
        self.inner.process()
    }
}

impl PlainContentService for ScriptedPlainService {
    fn content(&self) -> Option<String> {
        *self.content_reads.borrow_mut() += 1;
        self.content.clone()
    }
}

/// Temp directory with a primary (`work/io`) and secondary (`resources/io`)
/// tier. Only the secondary tier exists until [`Layout::create_primary`].
pub struct Layout {
    temp: TempDir,
    resolver: PathResolver,
}

impl Layout {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let config = ToolConfig {
            primary_base: temp.path().join("work/io"),
            secondary_base: temp.path().join("resources/io"),
            ..ToolConfig::default()
        };
        fs::create_dir_all(&config.secondary_base).context("create secondary tier")?;
        Ok(Self {
            temp,
            resolver: PathResolver::new(config),
        })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn primary(&self) -> PathBuf {
        self.resolver.primary_base_path().to_path_buf()
    }

    pub fn secondary(&self) -> PathBuf {
        self.resolver.secondary_base_path().to_path_buf()
    }

    pub fn create_primary(&self) -> Result<()> {
        fs::create_dir_all(self.primary()).context("create primary tier")
    }

    /// Write `contents` to `relative` under the primary tier.
    pub fn write_primary(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        write_file(&self.primary().join(relative), contents)
    }

    /// Write `contents` to `relative` under the secondary tier.
    pub fn write_secondary(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        write_file(&self.secondary().join(relative), contents)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path.to_path_buf())
}
