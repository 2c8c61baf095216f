//! Two-tier path resolution for tool artifacts.
//!
//! Every artifact is resolved independently: the primary-tier candidate wins
//! if it exists on disk right now, otherwise the secondary candidate is
//! returned whether or not it exists. Nothing is cached.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::types::{Arity, ResolvedPaths};
use crate::io::config::ToolConfig;

#[derive(Debug, Clone)]
pub struct PathResolver {
    config: ToolConfig,
}

impl PathResolver {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn primary_base_path(&self) -> &Path {
        &self.config.primary_base
    }

    pub fn secondary_base_path(&self) -> &Path {
        &self.config.secondary_base
    }

    /// Primary base directory if it exists, else the secondary one.
    pub fn base_path(&self) -> PathBuf {
        if self.config.primary_base.exists() {
            return self.config.primary_base.clone();
        }
        self.config.secondary_base.clone()
    }

    pub fn input_path(&self) -> PathBuf {
        self.pick(Path::new(&self.config.input_file))
    }

    pub fn output_path(&self) -> PathBuf {
        self.pick(Path::new(&self.config.output_file))
    }

    /// `<base>/<template_dir>/<tool_name>.<ext>`, primary tier first.
    pub fn template_path(&self, tool_name: &str) -> PathBuf {
        self.pick(&self.template_relative(tool_name))
    }

    /// Template path under the secondary tier only.
    pub fn secondary_template_path(&self, tool_name: &str) -> PathBuf {
        self.config
            .secondary_base
            .join(self.template_relative(tool_name))
    }

    /// Resolve the path set a tool of `arity` hands to its service.
    pub fn resolve(&self, arity: Arity, tool_name: &str) -> ResolvedPaths {
        let template = match arity {
            Arity::One2One => None,
            Arity::Two2One => Some(self.template_path(tool_name)),
        };
        let paths = ResolvedPaths {
            base: self.base_path(),
            input: self.input_path(),
            output: self.output_path(),
            template,
        };
        debug!(tool = tool_name, ?paths, "resolved paths");
        paths
    }

    fn template_relative(&self, tool_name: &str) -> PathBuf {
        Path::new(&self.config.template_dir).join(format!(
            "{tool_name}.{}",
            self.config.template_extension
        ))
    }

    fn pick(&self, relative: &Path) -> PathBuf {
        let primary = self.config.primary_base.join(relative);
        if primary.exists() {
            return primary;
        }
        self.config.secondary_base.join(relative)
    }
}
