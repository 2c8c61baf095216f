//! File-backed mapping substitution.
//!
//! Replaces every mapping key with its value in each text file under the
//! target (a single file or a directory tree). All keys are matched in one
//! pass, longest key first, so a replacement is never rewritten by another
//! key.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use regex::Regex;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::core::mapping::MappingInput;
use crate::core::messages::MsgType;
use crate::core::validation::{ValidationItem, ValidationReport};
use crate::error::{MessageError, ToolError, ToolResult, read_text, write_string};
use crate::service::ContentService;

#[derive(Debug, Default)]
pub struct FileMapTransformService {
    target: Option<PathBuf>,
    mapping: HashMap<String, String>,
    changed_files: Vec<PathBuf>,
}

impl FileMapTransformService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files rewritten by the last `process()`.
    pub fn changed_files(&self) -> &[PathBuf] {
        &self.changed_files
    }

    fn pattern(&self) -> ToolResult<Option<Regex>> {
        if self.mapping.is_empty() {
            return Ok(None);
        }
        let mut keys: Vec<&str> = self.mapping.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&alternation).map_err(|err| {
            let msg = MessageError::new::<&str>(MsgType::PatternBuildFailed, &[]);
            ToolError::from(msg.with_source(err))
        })?;
        Ok(Some(regex))
    }

    fn validate(&self) -> ToolResult<()> {
        let report: ValidationReport = self
            .mapping
            .iter()
            .filter(|(key, _)| key.is_empty())
            .map(|(_, value)| ValidationItem::coded(MsgType::EmptyMappingKey, &[value.as_str()]))
            .collect();
        report.into_result()?;
        Ok(())
    }
}

impl ContentService for FileMapTransformService {
    type Args = MappingInput;

    fn initialize(&mut self, input: &MappingInput) -> ToolResult<bool> {
        let Some(target) = input.target_path.as_deref() else {
            return Ok(false);
        };
        if !target.exists() {
            return Err(ToolError::for_path(MsgType::TargetNotFound, target));
        }
        self.target = Some(target.to_path_buf());
        self.mapping = input.mapping.clone();
        self.changed_files.clear();
        Ok(true)
    }

    #[instrument(skip_all, fields(keys = self.mapping.len()))]
    fn process(&mut self) -> ToolResult<bool> {
        let target = self.target.clone().ok_or_else(|| {
            ToolError::message(MsgType::ServiceNotInitialized, &["map transform service"])
        })?;
        self.validate()?;
        let Some(pattern) = self.pattern()? else {
            debug!("empty mapping, nothing to replace");
            return Ok(true);
        };

        // Every file is read and rewritten in memory before any write, so a
        // read failure leaves the target untouched.
        let mut rewrites = Vec::new();
        for file in text_files(&target)? {
            let Some(text) = read_text(&file)? else {
                debug!(path = %file.display(), "skipping non-UTF-8 file");
                continue;
            };
            let replaced = pattern.replace_all(&text, |caps: &regex::Captures<'_>| {
                self.mapping
                    .get(&caps[0])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            });
            if replaced != text {
                rewrites.push((file, replaced.into_owned()));
            }
        }

        for (file, text) in rewrites {
            write_string(&file, &text)?;
            debug!(path = %file.display(), "rewrote file");
            self.changed_files.push(file);
        }

        info!(
            target = %target.display(),
            changed = self.changed_files.len(),
            "mapping applied"
        );
        Ok(true)
    }
}

fn text_files(target: &Path) -> ToolResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(target).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk {}", target.display()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
