//! Tag-setter tool.
//!
//! The input file names the target (its trimmed text). The definition file is
//! always the secondary-tier template named after the tool.

use std::path::{Path, PathBuf};

use crate::core::messages::MsgType;
use crate::core::types::{Failure, ToolOutcome};
use crate::error::ToolResult;
use crate::io::measure::{MeasureLog, MeasureScope, TracingLog};
use crate::io::paths::PathResolver;
use crate::lifecycle::report_error;
use crate::plain_content::PlainContentLoader;
use crate::service::{DefinitionService, PlainContentService, TargetDefinition};

pub const TAG_SETTER_TOOL: &str = "TagSetterTool";

static TRACING_LOG: TracingLog = TracingLog;

pub struct TagSetterTool<'a, P, D> {
    name: String,
    loader: PlainContentLoader<P>,
    service: D,
    resolver: &'a PathResolver,
    log: &'a dyn MeasureLog,
    target: Option<PathBuf>,
    outcome: Option<ToolOutcome>,
}

impl<'a, P: PlainContentService, D: DefinitionService> TagSetterTool<'a, P, D> {
    pub fn new(input_service: P, service: D, resolver: &'a PathResolver) -> Self {
        Self::named(TAG_SETTER_TOOL, input_service, service, resolver)
    }

    /// Same tool under another name, which also renames the definition file.
    pub fn named(
        name: impl Into<String>,
        input_service: P,
        service: D,
        resolver: &'a PathResolver,
    ) -> Self {
        Self {
            name: name.into(),
            loader: PlainContentLoader::new(input_service),
            service,
            resolver,
            log: &TRACING_LOG,
            target: None,
            outcome: None,
        }
    }

    pub fn with_log(mut self, log: &'a dyn MeasureLog) -> Self {
        self.log = log;
        self
    }

    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    pub fn definition_path(&self) -> PathBuf {
        self.resolver.secondary_template_path(&self.name)
    }

    pub fn service(&self) -> &D {
        &self.service
    }

    pub fn outcome(&self) -> Option<&ToolOutcome> {
        self.outcome.as_ref()
    }

    pub fn execute(&mut self) -> bool {
        let name = self.name.clone();
        let scope = MeasureScope::start(&name, self.log);

        let outcome = match self.set_tags(&scope) {
            Ok(outcome) => outcome,
            Err(err) => ToolOutcome::failed(report_error(&scope, err)),
        };
        let success = outcome.success;
        self.outcome = Some(outcome);
        scope.end();
        success
    }

    fn set_tags(&mut self, scope: &MeasureScope<'_>) -> ToolResult<ToolOutcome> {
        let input_path = self.resolver.input_path();
        if !self.loader.load_plain_content(&input_path)? {
            scope.warn(&MsgType::TargetLoadFailed.line(&[]));
            return Ok(ToolOutcome::failed(Failure::Declined));
        }
        let Some(content) = self.loader.content() else {
            scope.warn(&MsgType::TargetContentMissing.line(&[]));
            return Ok(ToolOutcome::failed(Failure::Declined));
        };

        let args = TargetDefinition {
            target: PathBuf::from(content.trim()),
            definition: self.definition_path(),
        };
        self.target = Some(args.target.clone());

        if !self.service.initialize(&args)? || !self.service.process()? {
            scope.warn(&MsgType::ProcessFailed.line(&[]));
            return Ok(ToolOutcome::failed(Failure::Declined));
        }

        scope.info(&MsgType::TagSetSucceeded.line(&[]));
        Ok(ToolOutcome::succeeded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;
    use crate::io::measure::Level;
    use crate::test_support::{Layout, RecordingLog, ScriptedPlainService, ScriptedService};

    type Definer = ScriptedService<TargetDefinition>;

    fn ok_definer() -> Definer {
        ScriptedService::new(Ok(true), Ok(true))
    }

    #[test]
    fn passes_trimmed_target_and_secondary_definition() {
        let layout = Layout::new().expect("layout");
        layout.create_primary().expect("primary");
        layout
            .write_primary("template/TagSetterTool.yml", "ignored: true\n")
            .expect("write");
        let log = RecordingLog::default();
        let mut tool = TagSetterTool::new(
            ScriptedPlainService::with_content("  src/Foo.java \n"),
            ok_definer(),
            layout.resolver(),
        )
        .with_log(&log);

        assert!(tool.execute());
        let seen = tool.service().initialized_with().expect("args");
        assert_eq!(seen.target, PathBuf::from("src/Foo.java"));
        assert_eq!(
            seen.definition,
            layout.secondary().join("template/TagSetterTool.yml")
        );
        assert_eq!(tool.target(), Some(Path::new("src/Foo.java")));
        assert!(log.contains(Level::Info, "GEN13005"));
    }

    #[test]
    fn load_failure_warns() {
        let layout = Layout::new().expect("layout");
        let log = RecordingLog::default();
        let mut tool = TagSetterTool::new(
            ScriptedPlainService::new(Ok(false), Ok(true), Some("x")),
            ok_definer(),
            layout.resolver(),
        )
        .with_log(&log);

        assert!(!tool.execute());
        assert!(log.contains(Level::Warn, "GEN13004"));
        assert!(tool.service().initialized_with().is_none());
    }

    #[test]
    fn missing_content_has_its_own_warning() {
        let layout = Layout::new().expect("layout");
        let log = RecordingLog::default();
        let mut tool = TagSetterTool::new(
            ScriptedPlainService::new(Ok(true), Ok(true), None),
            ok_definer(),
            layout.resolver(),
        )
        .with_log(&log);

        assert!(!tool.execute());
        assert!(log.contains(Level::Warn, "GEN13009"));
        assert!(!log.contains(Level::Warn, "GEN13004"));
        assert_eq!(tool.target(), None);
    }

    #[test]
    fn declined_service_is_reported() {
        let layout = Layout::new().expect("layout");
        let log = RecordingLog::default();
        let mut tool = TagSetterTool::new(
            ScriptedPlainService::with_content("src/Foo.java"),
            ScriptedService::new(Ok(true), Ok(false)),
            layout.resolver(),
        )
        .with_log(&log);

        assert!(!tool.execute());
        assert!(log.contains(Level::Warn, "GEN09000"));
        assert!(!log.contains(Level::Info, "GEN13005"));
    }

    #[test]
    fn service_error_is_contained() {
        let layout = Layout::new().expect("layout");
        let log = RecordingLog::default();
        let mut tool = TagSetterTool::new(
            ScriptedPlainService::with_content("src/Foo.java"),
            ScriptedService::new(
                Err(ToolError::message(MsgType::TargetNotFound, &["src/Foo.java"])),
                Ok(true),
            ),
            layout.resolver(),
        )
        .with_log(&log);

        assert!(!tool.execute());
        assert!(log.contains(Level::Error, "GEN07002"));
        assert_eq!(
            tool.outcome(),
            Some(&ToolOutcome::failed(Failure::Message(MsgType::TargetNotFound)))
        );
    }

    #[test]
    fn renamed_tool_uses_its_own_definition() {
        let layout = Layout::new().expect("layout");
        let log = RecordingLog::default();
        let tool = TagSetterTool::named(
            "AnnotationTool",
            ScriptedPlainService::with_content("x"),
            ok_definer(),
            layout.resolver(),
        )
        .with_log(&log);

        assert_eq!(
            tool.definition_path(),
            layout.secondary().join("template/AnnotationTool.yml")
        );
    }
}
