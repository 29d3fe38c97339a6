mod executor;
mod locator;
mod maven;

use clap::Parser;
use executor::{CommandExecutor, ExecutionStatus, ExecutorConfig};
use locator::{ChainResolver, EnvToolResolver, StaticToolPaths, ToolLocator, TomlToolRegistry};
use maven::MavenInfo;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, debug, info};
use tracing_subscriber::fmt;

/// Arguments used when none are given on the command line
const DEFAULT_ARGS: &str = "--version";

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "buildscan-agent")]
#[command(about = "Locate a build tool, run it and report its output")]
struct Args {
    /// Logical tool name (default: BUILDSCAN_TOOL or "maven")
    #[arg(long)]
    tool: Option<String>,

    /// Installation directory for a tool, e.g. maven=/opt/maven (repeatable)
    #[arg(long, value_name = "NAME=DIR", value_parser = parse_tool_path)]
    tool_path: Vec<(String, PathBuf)>,

    /// Path to tools.toml registry (default: BUILDSCAN_TOOLS_TOML or ~/.buildscan/tools.toml)
    #[arg(long)]
    tools_toml: Option<PathBuf>,

    /// OS identifier used to pick the executable name
    #[arg(long)]
    os_name: Option<String>,

    /// Print a JSON report instead of the raw output
    #[arg(long)]
    json: bool,

    /// Run `--version` and print only the detected Maven version
    #[arg(long, conflicts_with = "args")]
    probe: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Arguments passed to the tool, joined with single spaces (use `--` before them)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn parse_tool_path(value: &str) -> Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((name, dir)) if !name.is_empty() && !dir.is_empty() => {
            Ok((name.to_string(), PathBuf::from(dir)))
        }
        _ => Err(format!("expected NAME=DIR, got '{value}'")),
    }
}

/// Joined tool arguments, `DEFAULT_ARGS` when none were given
fn command_from_args(args: &[String]) -> String {
    if args.is_empty() {
        DEFAULT_ARGS.to_string()
    } else {
        args.join(" ")
    }
}

/// Process exit status: 0 when the tool succeeded, 1 otherwise
fn exit_status(successful: bool) -> u8 {
    if successful { 0 } else { 1 }
}

/// JSON report printed with --probe --json
#[derive(Debug, Serialize)]
struct ProbeReport {
    tool: String,
    maven: Option<MavenInfo>,
}

/// JSON report printed with --json
#[derive(Debug, Serialize)]
struct Report {
    tool: String,
    executable: Option<PathBuf>,
    command: String,
    successful: bool,
    status: ExecutionStatus,
    output: String,
    maven: Option<MavenInfo>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Static entries first, then tools.toml, then `<TOOL>_HOME`
fn build_resolver(
    config: &ExecutorConfig,
    tool_paths: &[(String, PathBuf)],
) -> Result<ChainResolver, locator::RegistryError> {
    let mut statics = StaticToolPaths::new();
    for (name, dir) in tool_paths {
        statics.insert(name.clone(), dir.clone());
    }

    let mut chain = ChainResolver::new();
    if !statics.is_empty() {
        chain = chain.push(statics);
    }

    let registry = TomlToolRegistry::load(&config.tools_toml_path)?;

    Ok(chain.push(registry).push(EnvToolResolver::new()))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = ExecutorConfig::from_env();
    if let Some(tool) = args.tool {
        config.tool = tool;
    }
    if let Some(os_name) = args.os_name {
        config.os_name = os_name;
    }
    if let Some(path) = args.tools_toml {
        config.tools_toml_path = path;
    }

    info!(
        tool = %config.tool,
        os_name = %config.os_name,
        tools_toml = %config.tools_toml_path.display(),
        "Configuration loaded"
    );

    let resolver = build_resolver(&config, &args.tool_path)?;
    let locator = ToolLocator::with_os(resolver, config.os_name.clone());
    let executor = CommandExecutor::new(config.tool.clone(), locator);

    if args.probe {
        let info = maven::probe(&executor)?;
        let successful = info.is_some();

        if args.json {
            let report = ProbeReport {
                tool: config.tool,
                maven: info,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            match info {
                Some(info) => println!("{}", info.version),
                None => eprintln!("{}: version could not be determined", config.tool),
            }
        }
        return Ok(ExitCode::from(exit_status(successful)));
    }

    let command = command_from_args(&args.args);
    debug!(command = %command, "running tool");

    let mut result = executor.execute(&command)?;
    let successful = result.is_successful();
    let status = result.status();
    let output = result.output()?.to_string();

    if args.json {
        let report = Report {
            executable: executor.locator().resolve(&config.tool),
            maven: if config.tool == "maven" {
                MavenInfo::parse(&output)
            } else {
                None
            },
            tool: config.tool,
            command,
            successful,
            status,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{output}");
        match status {
            ExecutionStatus::Succeeded => {}
            ExecutionStatus::ToolMissing => {
                eprintln!("{}: tool cannot be found", config.tool);
            }
            ExecutionStatus::Failed { exit_code } => match exit_code {
                Some(code) => eprintln!("{}: exited with code {code}", config.tool),
                None => eprintln!("{}: terminated by signal", config.tool),
            },
        }
    }

    Ok(ExitCode::from(exit_status(successful)))
}
