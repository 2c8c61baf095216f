//! Plain-content loading: `initialize → process → content`.

use std::path::Path;

use tracing::debug;

use crate::error::ToolResult;
use crate::service::PlainContentService;

pub struct PlainContentLoader<S> {
    service: S,
    content: Option<String>,
}

impl<S: PlainContentService> PlainContentLoader<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            content: None,
        }
    }

    /// Run the service against `input_path` and keep its content.
    ///
    /// `initialize` and `process` are both invoked; the result is their AND.
    /// Content is only read when both succeed. A successful load may still
    /// leave [`content`](Self::content) empty; callers that need text treat
    /// that as its own failure.
    pub fn load_plain_content(&mut self, input_path: &Path) -> ToolResult<bool> {
        let mut loaded = true;
        loaded &= self.service.initialize(input_path)?;
        loaded &= self.service.process()?;
        if loaded {
            self.content = self.service.content();
        }
        debug!(
            path = %input_path.display(),
            loaded,
            has_content = self.content.is_some(),
            "plain content loaded"
        );
        Ok(loaded)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
