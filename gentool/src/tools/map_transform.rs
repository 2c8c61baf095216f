//! Mapping-substitution tool.
//!
//! Reads the resolved input file as plain content, parses it as a
//! [`MappingInput`] (target path on line 0, `key,value` lines after), and hands
//! the result to a [`MapTransformService`].

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::core::mapping::MappingInput;
use crate::core::messages::MsgType;
use crate::core::types::{Failure, ToolOutcome};
use crate::error::ToolResult;
use crate::io::measure::{MeasureLog, MeasureScope, TracingLog};
use crate::io::paths::PathResolver;
use crate::lifecycle::report_error;
use crate::plain_content::PlainContentLoader;
use crate::service::{MapTransformService, PlainContentService};

pub const MAP_TRANSFORM_TOOL: &str = "MapTransformTool";

static TRACING_LOG: TracingLog = TracingLog;

pub struct MapTransformTool<'a, P, M> {
    name: String,
    loader: PlainContentLoader<P>,
    service: M,
    resolver: &'a PathResolver,
    log: &'a dyn MeasureLog,
    input: MappingInput,
    outcome: Option<ToolOutcome>,
}

impl<'a, P: PlainContentService, M: MapTransformService> MapTransformTool<'a, P, M> {
    pub fn new(input_service: P, service: M, resolver: &'a PathResolver) -> Self {
        Self {
            name: MAP_TRANSFORM_TOOL.to_string(),
            loader: PlainContentLoader::new(input_service),
            service,
            resolver,
            log: &TRACING_LOG,
            input: MappingInput::default(),
            outcome: None,
        }
    }

    pub fn with_log(mut self, log: &'a dyn MeasureLog) -> Self {
        self.log = log;
        self
    }

    pub fn target_path(&self) -> Option<&Path> {
        self.input.target_path.as_deref()
    }

    pub fn mapping(&self) -> &HashMap<String, String> {
        &self.input.mapping
    }

    pub fn service(&self) -> &M {
        &self.service
    }

    pub fn outcome(&self) -> Option<&ToolOutcome> {
        self.outcome.as_ref()
    }

    /// Load the mapping and apply it. Always returns a boolean.
    pub fn execute(&mut self) -> bool {
        let name = self.name.clone();
        let scope = MeasureScope::start(&name, self.log);

        let outcome = match self.transform(&scope) {
            Ok(outcome) => outcome,
            Err(err) => ToolOutcome::failed(report_error(&scope, err)),
        };
        let success = outcome.success;
        self.outcome = Some(outcome);
        scope.end();
        success
    }

    fn transform(&mut self, scope: &MeasureScope<'_>) -> ToolResult<ToolOutcome> {
        let input_path = self.resolver.input_path();
        if !self.from_input_file(&input_path)? {
            scope.warn(&MsgType::MappingInputInvalid.line(&[]));
            return Ok(ToolOutcome::failed(Failure::Declined));
        }

        if !self.service.initialize(&self.input)? || !self.service.process()? {
            scope.warn(&MsgType::ProcessFailed.line(&[]));
            return Ok(ToolOutcome::failed(Failure::Declined));
        }

        scope.info(&MsgType::MapTransformSucceeded.line(&[]));
        Ok(ToolOutcome::succeeded())
    }

    /// Load `input_path` and parse it into the target path and mapping.
    fn from_input_file(&mut self, input_path: &Path) -> ToolResult<bool> {
        if !self.loader.load_plain_content(input_path)? {
            return Ok(false);
        }
        let Some(content) = self.loader.content() else {
            return Ok(false);
        };
        let parsed = self.input.from_content(content);
        debug!(
            parsed,
            entries = self.input.mapping.len(),
            "mapping input parsed"
        );
        Ok(parsed)
    }
}
