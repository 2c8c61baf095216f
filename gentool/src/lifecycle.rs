//! Shared `initialize` → `execute` lifecycle for I/O tools.
//!
//! [`IoTool`] owns a service and a tool name. `initialize()` resolves the
//! path set for the tool's [`Arity`] and hands it to the service;
//! `execute()` runs `process()` inside a [`MeasureScope`] and turns every
//! outcome, including errors, into a boolean. Nothing escapes `execute()`.

use tracing::debug;

use crate::core::messages::MsgType;
use crate::core::types::{Arity, Failure, ToolOutcome, ToolState};
use crate::error::ToolError;
use crate::io::measure::{Level, MeasureLog, MeasureScope, TracingLog};
use crate::io::paths::PathResolver;
use crate::service::IoService;

static TRACING_LOG: TracingLog = TracingLog;

pub struct IoTool<'a, S> {
    name: String,
    arity: Arity,
    service: S,
    resolver: &'a PathResolver,
    log: &'a dyn MeasureLog,
    state: ToolState,
    outcome: Option<ToolOutcome>,
}

impl<'a, S: IoService> IoTool<'a, S> {
    /// `name` doubles as the template stem for [`Arity::Two2One`] tools.
    pub fn new(name: impl Into<String>, arity: Arity, service: S, resolver: &'a PathResolver) -> Self {
        Self {
            name: name.into(),
            arity,
            service,
            resolver,
            log: &TRACING_LOG,
            state: ToolState::Uninitialized,
            outcome: None,
        }
    }

    pub fn with_log(mut self, log: &'a dyn MeasureLog) -> Self {
        self.log = log;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    /// Outcome of the last `initialize()`/`execute()` that failed or finished.
    pub fn outcome(&self) -> Option<&ToolOutcome> {
        self.outcome.as_ref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Resolve paths and initialize the service.
    ///
    /// A tool in a terminal state (including a failed `initialize()`) is not
    /// re-initialized; its state and outcome stay as they are.
    pub fn initialize(&mut self) -> bool {
        if self.state.is_terminal() {
            self.log
                .record(&self.name, Level::Error, &MsgType::AlreadyExecuted.line(&[]));
            return false;
        }

        let paths = self.resolver.resolve(self.arity, &self.name);
        let initialized = match self.service.initialize(&paths) {
            Ok(true) => true,
            Ok(false) => {
                self.log
                    .record(&self.name, Level::Error, &MsgType::InitializeFailed.line(&[]));
                false
            }
            Err(err) => {
                self.report_initialize_error(err);
                false
            }
        };

        if initialized {
            debug!(tool = %self.name, "initialized");
            self.state = ToolState::Initialized;
            self.outcome = None;
        } else {
            self.state = ToolState::Failed;
            self.outcome = Some(ToolOutcome::failed(Failure::InitializeFailed));
        }
        initialized
    }

    /// Run `process()` and report the result. Always returns a boolean.
    pub fn execute(&mut self) -> bool {
        let scope = MeasureScope::start(&self.name, self.log);

        match self.state {
            ToolState::Initialized => {}
            ToolState::Uninitialized => {
                scope.error(&MsgType::NotInitialized.line(&[]));
                self.state = ToolState::Failed;
                self.outcome = Some(ToolOutcome::failed(Failure::NotInitialized));
                return false;
            }
            ToolState::Failed if self.outcome_is(&Failure::InitializeFailed) => {
                scope.error(&MsgType::NotInitialized.line(&[]));
                return false;
            }
            ToolState::Succeeded | ToolState::Failed => {
                scope.error(&MsgType::AlreadyExecuted.line(&[]));
                return false;
            }
        }

        let outcome = match self.service.process() {
            Ok(true) => {
                scope.info(&MsgType::ProcessSucceeded.line(&[]));
                ToolOutcome::succeeded()
            }
            Ok(false) => {
                scope.warn(&MsgType::ProcessFailed.line(&[]));
                ToolOutcome::failed(Failure::Declined)
            }
            Err(err) => ToolOutcome::failed(report_error(&scope, err)),
        };

        let success = outcome.success;
        self.state = if success {
            ToolState::Succeeded
        } else {
            ToolState::Failed
        };
        self.outcome = Some(outcome);
        scope.end();
        success
    }

    /// `initialize()` followed by `execute()`.
    pub fn run(&mut self) -> bool {
        self.initialize();
        self.execute()
    }

    /// One `LOG15001` line, then one line per validation item.
    fn report_initialize_error(&self, err: ToolError) {
        let text = err.to_string();
        self.log.record(
            &self.name,
            Level::Error,
            &MsgType::InitializeAborted.line(&[text.as_str()]),
        );
        if let ToolError::Validation(report) = err {
            for item in report {
                self.log.record(&self.name, Level::Error, &item.to_string());
            }
        }
    }

    fn outcome_is(&self, failure: &Failure) -> bool {
        self.outcome
            .as_ref()
            .and_then(|outcome| outcome.failure.as_ref())
            .is_some_and(|f| f == failure)
    }
}

/// Log a classified error inside `scope` and return its [`Failure`].
///
/// Message errors produce one line; validation errors produce one aggregate
/// line followed by one line per item, in report order.
pub fn report_error(scope: &MeasureScope<'_>, err: ToolError) -> Failure {
    match err {
        ToolError::Message(msg) => {
            scope.error(&MsgType::ProcessAborted.line(&[msg.to_string().as_str()]));
            Failure::Message(msg.kind())
        }
        ToolError::Validation(report) => {
            let count = report.len();
            scope.error(&MsgType::ProcessRejected.line(&[count.to_string().as_str()]));
            for item in report {
                scope.error(&item.to_string());
            }
            Failure::Validation(count)
        }
        ToolError::Other(err) => {
            let text = format!("{err:#}");
            scope.error(&MsgType::ProcessUnexpected.line(&[text.as_str()]));
            Failure::Unclassified(text)
        }
    }
}
