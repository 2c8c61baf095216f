//! Tool configuration stored in `gentool.toml`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where tools look for their input, output, and template files.
///
/// Missing fields default to the conventional `work/io` layout with
/// `src/main/resources/tool/io` as the fallback tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    /// Preferred base directory, used whenever it exists.
    pub primary_base: PathBuf,

    /// Fallback base directory.
    pub secondary_base: PathBuf,

    pub input_file: String,
    pub output_file: String,

    /// Directory (relative to a base) holding `<ToolName>.<ext>` templates.
    pub template_dir: String,

    /// Template extension, without the leading dot.
    pub template_extension: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            primary_base: PathBuf::from("work/io"),
            secondary_base: PathBuf::from("src/main/resources/tool/io"),
            input_file: "input.txt".to_string(),
            output_file: "output.txt".to_string(),
            template_dir: "template".to_string(),
            template_extension: "yml".to_string(),
        }
    }
}

impl ToolConfig {
    pub fn validate(&self) -> Result<()> {
        if self.primary_base.as_os_str().is_empty() {
            return Err(anyhow!("primary_base must not be empty"));
        }
        if self.secondary_base.as_os_str().is_empty() {
            return Err(anyhow!("secondary_base must not be empty"));
        }
        ensure_plain_name("input_file", &self.input_file)?;
        ensure_plain_name("output_file", &self.output_file)?;
        if self.template_dir.trim().is_empty() {
            return Err(anyhow!("template_dir must not be empty"));
        }
        if self.template_extension.is_empty() || self.template_extension.starts_with('.') {
            return Err(anyhow!(
                "template_extension must be non-empty without a leading '.' (got '{}')",
                self.template_extension
            ));
        }
        Ok(())
    }
}

fn ensure_plain_name(field: &str, value: &str) -> Result<()> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(anyhow!("{field} must be a plain file name (got '{value}')")),
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ToolConfig::default()`.
pub fn load_config(path: &Path) -> Result<ToolConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = ToolConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ToolConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &ToolConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ToolConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("gentool.toml");
        let cfg = ToolConfig {
            primary_base: PathBuf::from("io/primary"),
            ..ToolConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("gentool.toml");
        fs::write(&path, "input_file = \"in.txt\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.input_file, "in.txt");
        assert_eq!(cfg.output_file, "output.txt");
        assert_eq!(cfg.primary_base, PathBuf::from("work/io"));
    }

    #[test]
    fn rejects_nested_file_name() {
        let cfg = ToolConfig {
            output_file: "../out.txt".to_string(),
            ..ToolConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("output_file"));
    }

    #[test]
    fn rejects_dotted_extension() {
        let cfg = ToolConfig {
            template_extension: ".yml".to_string(),
            ..ToolConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
