//! Command-line arguments and dispatch for the `harness-cfg` binary.
//!
//! Argument parsing uses the `clap` crate with its "derive" feature for a
//! declarative, type-safe command structure. Dispatch is deliberately
//! thin: every command maps onto one library call, prints to stdout, and
//! reports problems through stderr plus the exit status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::config::HarnessConfig;
use crate::export;
use crate::utils::title_case;
use crate::value::Value;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "harness-cfg",
    version,
    about = "Configuration reader and validator for the container test matrix."
)]
pub struct HarnessArgs {
    /// Path to the configuration file.
    #[arg(required = true, value_name = "CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the configuration against the harness schema.
    Validate {
        /// Also report lines the reader could not place.
        #[arg(long)]
        strict: bool,
    },
    /// List enabled platform names, one per line.
    Platforms,
    /// List enabled test suite names, one per line.
    TestSuites,
    /// List the architectures of one platform, one per line.
    PlatformArchs {
        /// The platform name as declared in the configuration.
        #[arg(required = true)]
        platform: String,
    },
    /// Print the Zig target mapped for a platform/architecture pair.
    ZigTarget {
        #[arg(required = true)]
        platform: String,
        #[arg(required = true)]
        arch: String,
    },
    /// Look up a value by dotted path; mappings and sequences print as JSON.
    ConfigValue {
        #[arg(required = true, value_name = "DOTTED.PATH")]
        path: String,
    },
    /// Print a human-readable digest of the configuration.
    Summary,
}

/// Load the configuration and run one command against it.
pub fn run(args: &HarnessArgs) -> ExitCode {
    let config = match HarnessConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    dispatch(&config, &args.command)
}

fn dispatch(config: &HarnessConfig, command: &Command) -> ExitCode {
    match command {
        Command::Validate { strict } => validate(config, *strict),
        Command::Platforms => {
            for name in config.enabled_platforms() {
                println!("{}", name);
            }
            ExitCode::SUCCESS
        }
        Command::TestSuites => {
            for name in config.enabled_test_suites() {
                println!("{}", name);
            }
            ExitCode::SUCCESS
        }
        Command::PlatformArchs { platform } => {
            for arch in config.platform_architectures(platform) {
                println!("{}", arch);
            }
            ExitCode::SUCCESS
        }
        Command::ZigTarget { platform, arch } => match config.zig_target(platform, arch) {
            Some(target) if !target.is_empty() => {
                println!("{}", target);
                ExitCode::SUCCESS
            }
            // silent failure: scripts probe for optional targets
            _ => ExitCode::FAILURE,
        },
        Command::ConfigValue { path } => config_value(config, path),
        Command::Summary => {
            summary(config);
            ExitCode::SUCCESS
        }
    }
}

fn validate(config: &HarnessConfig, strict: bool) -> ExitCode {
    if strict {
        for warning in config.warnings() {
            eprintln!(
                "Warning: line {}: unrecognized structure: {}",
                warning.line, warning.text
            );
        }
    }
    let errors = config.validate();
    if errors.is_empty() {
        println!("Configuration is valid");
        ExitCode::SUCCESS
    } else {
        for error in &errors {
            eprintln!("Error: {}", error);
        }
        ExitCode::FAILURE
    }
}

fn config_value(config: &HarnessConfig, path: &str) -> ExitCode {
    // a found null and an absent path both fail here; only the library
    // keeps the distinction
    match config.get(path) {
        None => ExitCode::FAILURE,
        Some(value @ (Value::Map(_) | Value::Seq(_))) => {
            println!("{}", export::to_json(value));
            ExitCode::SUCCESS
        }
        Some(scalar) => match scalar_text(scalar) {
            Some(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            None => ExitCode::FAILURE,
        },
    }
}

/// Plain rendering for scalar values; `None` for null and containers.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Bool(b) => Some(b.to_string()),
        Value::Int(n) => Some(n.to_string()),
        Value::Float(x) => Some(x.to_string()),
        Value::Str(s) => Some(s.clone()),
        _ => None,
    }
}

fn summary(config: &HarnessConfig) {
    println!("Configuration Summary:");
    println!("Enabled Platforms:");
    for platform in config.enabled_platforms() {
        println!("  - {}", platform);
        for arch in config.platform_architectures(&platform) {
            let target = config.zig_target(&platform, &arch).unwrap_or("unknown");
            println!("    - {} ({})", arch, target);
        }
    }

    println!("\nEnabled Test Suites:");
    for suite in config.enabled_test_suites() {
        let timeout = config
            .get(&format!("test_suites.{}.timeout", suite))
            .and_then(scalar_text);
        match timeout {
            Some(t) => println!("  - {} (timeout: {}s)", suite, t),
            None => println!("  - {} (timeout: unknown)", suite),
        }
    }

    println!("\nGlobal Timeouts:");
    for name in ["global", "build", "test", "cleanup"] {
        let value = config.get(&format!("timeouts.{}", name)).and_then(scalar_text);
        match value {
            Some(v) => println!("  - {}: {}s", title_case(name), v),
            None => println!("  - {}: unknown", title_case(name)),
        }
    }
}
