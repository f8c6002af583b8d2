//! `logme` - manage a project's `logme.ini` logging configuration.
//!
//! # Usage
//!
//! ```text
//! logme init    [-p PATH] [-mk] [-lvl LEVEL] [-f FORMATTER] [-lp LOG_PATH] [-o]
//! logme add     <NAME> [-p PATH] [-lvl LEVEL] [-f FORMATTER] [-lp LOG_PATH]
//! logme remove  <NAME> [-p PATH]
//! logme upgrade [-p PATH]
//! logme -v
//! ```
//!
//! `-mk`, `-lvl` and `-lp` are accepted as written above and also in their
//! long forms `--make-dir`, `--level` and `--log-path`.
//!
//! # Environment variables
//!
//! | Variable             | Default | Description                          |
//! |----------------------|---------|--------------------------------------|
//! | `LOGME_PROJECT_ROOT` | `.`     | Project root used when `-p` is absent |
//! | `RUST_LOG`           | `warn`  | Diagnostic log filter (stderr)        |

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use logme_cli::application::{
    add_section, initialize, remove_section, upgrade_config, InitOptions,
};
use logme_cli::TOOL_VERSION;
use logme_core::{LevelValue, LoggerOverrides};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Manage per-project logging configuration stored in logme.ini.
#[derive(Debug, Parser)]
#[command(name = "logme", disable_version_flag = true, arg_required_else_help = true)]
struct Cli {
    /// Print the version and exit.
    #[arg(short = 'v', long = "version")]
    version: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create logme.ini with the default colors and logme sections.
    Init {
        #[command(flatten)]
        root: RootArgs,

        /// Create the project root if it does not exist (also `-mk`).
        #[arg(long = "make-dir")]
        make_dir: bool,

        #[command(flatten)]
        logger: LoggerArgs,

        /// Overwrite an existing logme.ini.
        #[arg(short = 'o', long = "override")]
        override_existing: bool,
    },

    /// Add a logger section copied from the logme master section.
    Add {
        /// Name of the logger section.
        name: String,

        #[command(flatten)]
        root: RootArgs,

        #[command(flatten)]
        logger: LoggerArgs,
    },

    /// Remove a logger section.
    Remove {
        /// Name of the logger section.
        name: String,

        #[command(flatten)]
        root: RootArgs,
    },

    /// Rewrite an older logme.ini in the current format.
    Upgrade {
        #[command(flatten)]
        root: RootArgs,
    },
}

#[derive(Debug, Args)]
struct RootArgs {
    /// Project root containing logme.ini.
    #[arg(
        short = 'p',
        long = "project-root",
        env = "LOGME_PROJECT_ROOT",
        default_value = "."
    )]
    project_root: PathBuf,
}

#[derive(Debug, Args)]
struct LoggerArgs {
    /// Logging level: a standard name in any case, or a number (also `-lvl`).
    #[arg(long = "level")]
    level: Option<LevelValue>,

    /// Log record format string.
    #[arg(short = 'f', long = "formatter")]
    formatter: Option<String>,

    /// Log file path; also enables the file handler (also `-lp`).
    #[arg(long = "log-path")]
    log_path: Option<PathBuf>,
}

impl From<LoggerArgs> for LoggerOverrides {
    fn from(args: LoggerArgs) -> Self {
        LoggerOverrides {
            level: args.level,
            formatter: args.formatter,
            log_path: args.log_path,
        }
    }
}

/// Single-dash multi-letter flags and the long flags they stand for.
const LEGACY_FLAGS: [(&str, &str); 3] = [
    ("-mk", "--make-dir"),
    ("-lvl", "--level"),
    ("-lp", "--log-path"),
];

/// Flags whose next argument is a value, after expansion.
const VALUE_FLAGS: [&str; 6] = [
    "-p",
    "--project-root",
    "-f",
    "--formatter",
    "--level",
    "--log-path",
];

/// Rewrites `-mk`, `-lvl` and `-lp` (and `-lvl=INFO`, `-lp=PATH`) to their
/// long forms so `clap` can parse them.  The value following a value-taking
/// flag is never rewritten, and neither is anything after `--`.
fn expand_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut expanded = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--" {
            expanded.push(arg);
            expanded.extend(args.by_ref());
            break;
        }
        let arg = expand_flag(arg);
        let takes_value = arg.to_str().is_some_and(|a| VALUE_FLAGS.contains(&a));
        expanded.push(arg);
        if takes_value {
            expanded.extend(args.next());
        }
    }
    expanded
}

fn expand_flag(arg: OsString) -> OsString {
    let replacement = arg.to_str().and_then(|text| {
        let (flag, value) = match text.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (text, None),
        };
        let (_, long) = LEGACY_FLAGS.iter().find(|(legacy, _)| *legacy == flag)?;
        Some(match value {
            Some(value) => OsString::from(format!("{long}={value}")),
            None => OsString::from(*long),
        })
    });
    replacement.unwrap_or(arg)
}

// ── Command dispatch ──────────────────────────────────────────────────────────

/// Runs the parsed command and returns the line to print on success.
fn run(cli: Cli) -> anyhow::Result<String> {
    if cli.version {
        return Ok(format!("version {TOOL_VERSION}"));
    }
    let command = cli
        .command
        .context("no command given; run 'logme --help' for usage")?;

    let message = match command {
        Command::Init {
            root,
            make_dir,
            logger,
            override_existing,
        } => {
            let options = InitOptions {
                make_dir,
                override_existing,
                overrides: logger.into(),
            };
            let report = initialize(&root.project_root, &options)?;
            let verb = if report.replaced { "overwritten" } else { "created" };
            format!("logme.ini {verb} at {}", report.path.display())
        }
        Command::Add { name, root, logger } => {
            let report = add_section(&root.project_root, &name, &logger.into())?;
            let verb = if report.replaced { "reset to defaults in" } else { "added to" };
            format!("'{}' logger config {verb} {}", report.name, report.path.display())
        }
        Command::Remove { name, root } => {
            let report = remove_section(&root.project_root, &name)?;
            format!("'{}' logger config removed from {}", report.name, report.path.display())
        }
        Command::Upgrade { root } => upgrade_config(&root.project_root)?.message(),
    };
    Ok(message)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout carries only the command's result.
    // `RUST_LOG` overrides the default `warn` filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(expand_legacy_flags(std::env::args_os()));
    match run(cli) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        // Store errors already embed their cause, so only the outer
        // message is printed.
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
