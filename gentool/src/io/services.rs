//! Built-in file services.
//!
//! These are the simple services the binary wires into the shared tools.
//! Generators with real transformation logic implement the same traits.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::core::messages::MsgType;
use crate::core::types::ResolvedPaths;
use crate::core::validation::{ValidationItem, ValidationReport};
use crate::error::{ToolError, ToolResult, read_to_string, write_string};
use crate::service::{ContentService, PlainContentService};

/// Reads a single input file and exposes its text.
#[derive(Debug, Default)]
pub struct PlainFileInputService {
    input: Option<PathBuf>,
    content: Option<String>,
}

impl PlainFileInputService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentService for PlainFileInputService {
    type Args = Path;

    fn initialize(&mut self, input: &Path) -> ToolResult<bool> {
        if !input.is_file() {
            return Err(ToolError::for_path(MsgType::InputFileNotFound, input));
        }
        self.input = Some(input.to_path_buf());
        self.content = None;
        Ok(true)
    }

    #[instrument(skip_all)]
    fn process(&mut self) -> ToolResult<bool> {
        let input = self.input.as_deref().ok_or_else(|| {
            ToolError::message(MsgType::ServiceNotInitialized, &["plain input service"])
        })?;
        let text = read_to_string(input)?;
        debug!(path = %input.display(), bytes = text.len(), "read plain content");
        self.content = Some(text);
        Ok(true)
    }
}

impl PlainContentService for PlainFileInputService {
    fn content(&self) -> Option<String> {
        self.content.clone()
    }
}

/// One input to one output: copies the input text unchanged.
#[derive(Debug, Default)]
pub struct CopyService {
    paths: Option<ResolvedPaths>,
}

impl CopyService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentService for CopyService {
    type Args = ResolvedPaths;

    fn initialize(&mut self, paths: &ResolvedPaths) -> ToolResult<bool> {
        if !paths.input.is_file() {
            return Err(ToolError::for_path(MsgType::InputFileNotFound, &paths.input));
        }
        self.paths = Some(paths.clone());
        Ok(true)
    }

    #[instrument(skip_all)]
    fn process(&mut self) -> ToolResult<bool> {
        let paths = self
            .paths
            .as_ref()
            .ok_or_else(|| ToolError::message(MsgType::ServiceNotInitialized, &["copy service"]))?;
        let text = read_to_string(&paths.input)?;
        write_string(&paths.output, &text)?;
        debug!(
            input = %paths.input.display(),
            output = %paths.output.display(),
            bytes = text.len(),
            "copied input to output"
        );
        Ok(true)
    }
}

/// Input plus template to one output.
///
/// Checks that the template is present and non-empty, then writes the input
/// through unchanged. Template expansion belongs to concrete generators.
#[derive(Debug, Default)]
pub struct TemplateCheckService {
    paths: Option<ResolvedPaths>,
}

impl TemplateCheckService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentService for TemplateCheckService {
    type Args = ResolvedPaths;

    fn initialize(&mut self, paths: &ResolvedPaths) -> ToolResult<bool> {
        if !paths.input.is_file() {
            return Err(ToolError::for_path(MsgType::InputFileNotFound, &paths.input));
        }
        let Some(template) = paths.template.as_deref() else {
            return Ok(false);
        };
        if !template.is_file() {
            return Err(ToolError::for_path(MsgType::TemplateFileNotFound, template));
        }
        self.paths = Some(paths.clone());
        Ok(true)
    }

    #[instrument(skip_all)]
    fn process(&mut self) -> ToolResult<bool> {
        let paths = self.paths.as_ref().ok_or_else(|| {
            ToolError::message(MsgType::ServiceNotInitialized, &["template check service"])
        })?;
        // Checked in initialize.
        let Some(template) = paths.template.as_deref() else {
            return Ok(false);
        };

        let mut report = ValidationReport::new();
        let template_text = read_to_string(template)?;
        if template_text.trim().is_empty() {
            report.push(ValidationItem::coded(
                MsgType::EmptyTemplate,
                &[template.display().to_string().as_str()],
            ));
        }
        report.into_result()?;

        let text = read_to_string(&paths.input)?;
        write_string(&paths.output, &text)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Arity;
    use crate::test_support::Layout;
    use std::fs;

    #[test]
    fn plain_input_reads_file() {
        let layout = Layout::new().expect("layout");
        let input = layout.write_secondary("input.txt", "src/Foo.java\n").expect("write");
        let mut service = PlainFileInputService::new();

        assert!(service.initialize(&input).expect("init"));
        assert!(service.process().expect("process"));
        assert_eq!(service.content().as_deref(), Some("src/Foo.java\n"));
    }

    #[test]
    fn plain_input_missing_file_is_message_error() {
        let layout = Layout::new().expect("layout");
        let mut service = PlainFileInputService::new();
        let err = service
            .initialize(&layout.secondary().join("input.txt"))
            .unwrap_err();
        match err {
            ToolError::Message(msg) => assert_eq!(msg.kind(), MsgType::InputFileNotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn process_before_initialize_is_message_error() {
        let err = CopyService::new().process().unwrap_err();
        assert!(matches!(err, ToolError::Message(msg) if msg.kind() == MsgType::ServiceNotInitialized));
    }

    #[test]
    fn copy_writes_output() {
        let layout = Layout::new().expect("layout");
        layout.write_secondary("input.txt", "private String name;\n").expect("write");
        let paths = layout.resolver().resolve(Arity::One2One, "SimpleOne2OneTool");
        let mut service = CopyService::new();

        assert!(service.initialize(&paths).expect("init"));
        assert!(service.process().expect("process"));
        assert_eq!(
            fs::read_to_string(&paths.output).expect("read"),
            "private String name;\n"
        );
    }

    #[test]
    fn template_check_requires_template_file() {
        let layout = Layout::new().expect("layout");
        layout.write_secondary("input.txt", "x").expect("write");
        let paths = layout.resolver().resolve(Arity::Two2One, "SimpleTwo2OneTool");

        let err = TemplateCheckService::new().initialize(&paths).unwrap_err();
        assert!(matches!(err, ToolError::Message(msg) if msg.kind() == MsgType::TemplateFileNotFound));
    }

    #[test]
    fn template_check_declines_without_template_path() {
        let layout = Layout::new().expect("layout");
        layout.write_secondary("input.txt", "x").expect("write");
        let paths = layout.resolver().resolve(Arity::One2One, "SimpleTwo2OneTool");

        assert!(!TemplateCheckService::new().initialize(&paths).expect("init"));
    }

    #[test]
    fn empty_template_is_a_validation_error() {
        let layout = Layout::new().expect("layout");
        layout.write_secondary("input.txt", "x").expect("write");
        layout
            .write_secondary("template/SimpleTwo2OneTool.yml", "  \n")
            .expect("write");
        let paths = layout.resolver().resolve(Arity::Two2One, "SimpleTwo2OneTool");
        let mut service = TemplateCheckService::new();

        assert!(service.initialize(&paths).expect("init"));
        match service.process().unwrap_err() {
            ToolError::Validation(report) => {
                assert_eq!(report.len(), 1);
                assert!(report.iter().all(|i| i.code == Some(MsgType::EmptyTemplate)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!paths.output.exists());
    }

    #[test]
    fn template_check_passes_input_through() {
        let layout = Layout::new().expect("layout");
        layout.write_secondary("input.txt", "body").expect("write");
        layout
            .write_secondary("template/SimpleTwo2OneTool.yml", "key: value\n")
            .expect("write");
        let paths = layout.resolver().resolve(Arity::Two2One, "SimpleTwo2OneTool");
        let mut service = TemplateCheckService::new();

        assert!(service.initialize(&paths).expect("init"));
        assert!(service.process().expect("process"));
        assert_eq!(fs::read_to_string(&paths.output).expect("read"), "body");
    }
}
