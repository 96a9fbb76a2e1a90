//! Report what this llvm-facade build was compiled against.
//!
//! `llvm-facade-info` prints the selected release, its cfg predicates and the
//! capability table; `llvm-facade-info check 14.0.6` tells whether a release
//! string names a supported LLVM.

use clap::{Parser, Subcommand};
use llvm_facade::{active_predicates, Capability, FacadeResult, LlvmVersion, ACTIVE, MINIMUM};
use log::{debug, LevelFilter};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "llvm-facade-info", version, about = "Inspect the LLVM release selected for llvm-facade")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the selected release, predicates and capabilities
    Info,
    /// Check whether VERSION is a supported LLVM release
    Check {
        /// Release string such as `14`, `14.0` or `14.0.6`
        version: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    match cli.command.unwrap_or(Command::Info) {
        Command::Info => {
            print_info();
            ExitCode::SUCCESS
        }
        Command::Check { version } => match check(&version) {
            Ok(report) => {
                println!("{report}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn print_info() {
    println!("LLVM {} (gate {}, feature `{}`)", ACTIVE, ACTIVE.gate(), ACTIVE.feature());
    println!("minimum supported: LLVM {MINIMUM}");

    println!("predicates:");
    for predicate in active_predicates() {
        println!("  {predicate}");
    }

    println!("capabilities:");
    for capability in Capability::ALL {
        let mark = if capability.is_available() { "yes" } else { "no" };
        println!("  {:<30} {mark}", capability.name());
    }

    #[cfg(llvm_at_least_16_0)]
    {
        let (major, minor, patch) = llvm_facade::linked_release();
        println!("linked library: LLVM {major}.{minor}.{patch}");
    }
}

fn check(text: &str) -> FacadeResult<String> {
    debug!("checking release string {text:?}");
    let version = text.parse::<LlvmVersion>()?;
    let relation = if version == ACTIVE {
        "selected"
    } else {
        "supported"
    };
    Ok(format!("LLVM {version}: {relation} (feature `{}`)", version.feature()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use llvm_facade::{FacadeError, GateError};

    #[test]
    fn no_subcommand_means_info() {
        let cli = Cli::try_parse_from(["llvm-facade-info"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn check_takes_a_version() {
        let cli = Cli::try_parse_from(["llvm-facade-info", "-v", "check", "15.0.7"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Command::Check { version }) => assert_eq!(version, "15.0.7"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn check_reports_supported_releases() {
        assert!(check("13").unwrap().starts_with("LLVM 13.0:"));
        assert!(check(&ACTIVE.to_string()).unwrap().contains("selected"));
        assert!(matches!(
            check("10.0"),
            Err(FacadeError::Version(GateError::BelowMinimum { .. }))
        ));
        assert!(matches!(
            check("not-a-version"),
            Err(FacadeError::Version(GateError::Malformed(_)))
        ));
        let err = check("10.0").unwrap_err();
        assert!(err.to_string().contains("11.0 or newer"), "{err}");
    }
}
