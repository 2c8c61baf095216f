//! Input-only tool: hands the resolved input path to a service that works on
//! that file alone.

use crate::core::messages::MsgType;
use crate::core::types::{Failure, ToolOutcome};
use crate::error::ToolResult;
use crate::io::measure::{MeasureLog, MeasureScope, TracingLog};
use crate::io::paths::PathResolver;
use crate::lifecycle::report_error;
use crate::service::InputService;

static TRACING_LOG: TracingLog = TracingLog;

pub struct InputTool<'a, S> {
    name: String,
    service: S,
    resolver: &'a PathResolver,
    log: &'a dyn MeasureLog,
    outcome: Option<ToolOutcome>,
}

impl<'a, S: InputService> InputTool<'a, S> {
    pub fn new(name: impl Into<String>, service: S, resolver: &'a PathResolver) -> Self {
        Self {
            name: name.into(),
            service,
            resolver,
            log: &TRACING_LOG,
            outcome: None,
        }
    }

    pub fn with_log(mut self, log: &'a dyn MeasureLog) -> Self {
        self.log = log;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn outcome(&self) -> Option<&ToolOutcome> {
        self.outcome.as_ref()
    }

    /// Initialize the service with the input path, then process.
    pub fn execute(&mut self) -> bool {
        let name = self.name.clone();
        let scope = MeasureScope::start(&name, self.log);

        let outcome = match self.process_input(&scope) {
            Ok(outcome) => outcome,
            Err(err) => ToolOutcome::failed(report_error(&scope, err)),
        };
        let success = outcome.success;
        self.outcome = Some(outcome);
        scope.end();
        success
    }

    fn process_input(&mut self, scope: &MeasureScope<'_>) -> ToolResult<ToolOutcome> {
        let input_path = self.resolver.input_path();
        if !self.service.initialize(&input_path)? {
            scope.warn(&MsgType::InputInitializeFailed.line(&[]));
            return Ok(ToolOutcome::failed(Failure::InitializeFailed));
        }
        if !self.service.process()? {
            scope.warn(&MsgType::ProcessFailed.line(&[]));
            return Ok(ToolOutcome::failed(Failure::Declined));
        }
        scope.info(&MsgType::InputProcessSucceeded.line(&[]));
        Ok(ToolOutcome::succeeded())
    }
}
