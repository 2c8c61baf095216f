//! Shared-skeleton code-generation tools.
//!
//! Resolves `input.txt`, `output.txt` and templates across the `work/io` and
//! resource tiers, then runs one of the built-in tools against them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use gentool::core::types::Arity;
use gentool::exit_codes;
use gentool::io::config::{ToolConfig, load_config, write_config};
use gentool::io::map_transform::FileMapTransformService;
use gentool::io::paths::PathResolver;
use gentool::io::services::{CopyService, PlainFileInputService, TemplateCheckService};
use gentool::lifecycle::IoTool;
use gentool::logging;
use gentool::tools::{InputTool, MapTransformTool};

const DEFAULT_CONFIG: &str = "gentool.toml";
const SIMPLE_INPUT: &str = "SimpleInputTool";
const SIMPLE_ONE2ONE: &str = "SimpleOne2OneTool";
const SIMPLE_TWO2ONE: &str = "SimpleTwo2OneTool";

#[derive(Parser)]
#[command(
    name = "gentool",
    version,
    about = "Run file-generation tools against a two-tier io directory"
)]
struct Cli {
    /// Tool configuration file (defaults apply when it is missing).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the resolved input file through the input-only tool.
    ReadInput,
    /// Copy the resolved input file to the output file.
    #[command(name = "one2one")]
    One2One,
    /// Check the tool template and write the input to the output file.
    #[command(name = "two2one")]
    Two2One,
    /// Apply the `key,value` mapping in the input file to its target path.
    MapTransform,
    /// Print the resolved path set as JSON.
    Paths {
        /// Include the template path for this tool name.
        #[arg(long)]
        tool: Option<String>,
    },
    /// Write the default configuration file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(true) => exit_codes::OK,
        Ok(false) => exit_codes::FAILED,
        Err(err) => {
            eprintln!("{err:#}");
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

/// Returns the tool's verdict; `Err` only for setup failures.
fn run(cli: Cli) -> Result<bool> {
    let resolver = || -> Result<PathResolver> { Ok(PathResolver::new(load_config(&cli.config)?)) };
    match cli.command {
        Command::ReadInput => Ok(InputTool::new(
            SIMPLE_INPUT,
            PlainFileInputService::new(),
            &resolver()?,
        )
        .execute()),
        Command::One2One => Ok(IoTool::new(
            SIMPLE_ONE2ONE,
            Arity::One2One,
            CopyService::new(),
            &resolver()?,
        )
        .run()),
        Command::Two2One => Ok(IoTool::new(
            SIMPLE_TWO2ONE,
            Arity::Two2One,
            TemplateCheckService::new(),
            &resolver()?,
        )
        .run()),
        Command::MapTransform => Ok(MapTransformTool::new(
            PlainFileInputService::new(),
            FileMapTransformService::new(),
            &resolver()?,
        )
        .execute()),
        Command::Paths { tool } => cmd_paths(&resolver()?, tool.as_deref()),
        Command::InitConfig { force } => cmd_init_config(&cli.config, force),
    }
}

fn cmd_init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        info!(path = %path.display(), "config exists, leaving it unchanged");
        return Ok(true);
    }
    write_config(path, &ToolConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote default config");
    Ok(true)
}

fn cmd_paths(resolver: &PathResolver, tool: Option<&str>) -> Result<bool> {
    let paths = match tool {
        Some(name) => resolver.resolve(Arity::Two2One, name),
        None => resolver.resolve(Arity::One2One, SIMPLE_ONE2ONE),
    };
    let payload = serde_json::to_string_pretty(&paths).context("serialize paths")?;
    println!("{payload}");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_config_path() {
        let cli = Cli::parse_from(["gentool", "one2one"]);
        assert!(matches!(cli.command, Command::One2One));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG));
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["gentool", "two2one", "--config", "alt.toml"]);
        assert!(matches!(cli.command, Command::Two2One));
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }

    #[test]
    fn parse_read_input() {
        let cli = Cli::parse_from(["gentool", "read-input"]);
        assert!(matches!(cli.command, Command::ReadInput));
    }

    #[test]
    fn parse_map_transform() {
        let cli = Cli::parse_from(["gentool", "map-transform"]);
        assert!(matches!(cli.command, Command::MapTransform));
    }

    #[test]
    fn parse_paths_with_tool() {
        let cli = Cli::parse_from(["gentool", "paths", "--tool", "FieldCreationTool"]);
        match cli.command {
            Command::Paths { tool } => assert_eq!(tool.as_deref(), Some("FieldCreationTool")),
            _ => panic!("expected paths"),
        }
    }

    #[test]
    fn parse_init_config_force() {
        let cli = Cli::parse_from(["gentool", "init-config", "--force"]);
        assert!(matches!(cli.command, Command::InitConfig { force: true }));
    }

    #[test]
    fn init_config_keeps_existing_file_without_force() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("gentool.toml");
        std::fs::write(&path, "input_file = \"in.txt\"\n").expect("write");

        assert!(cmd_init_config(&path, false).expect("init"));
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "input_file = \"in.txt\"\n"
        );

        assert!(cmd_init_config(&path, true).expect("init"));
        assert_eq!(load_config(&path).expect("load"), ToolConfig::default());
    }
}
