//! maccompat - macOS upgrade compatibility gate CLI
//!
//! Answers one question per invocation: is this machine supported by the
//! given macOS release?
//!
//! ## Commands
//!
//! - `check <release>`: evaluate the gate, print the evidence trail, and
//!   exit 0 (supported) or 1 (not supported)
//! - `releases`: list the releases the gate knows about
//!
//! Fact-gathering or version-parse failures exit 2, so callers can tell
//! "not supported" from "could not decide".

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};

use maccompat_core::system::DEFAULT_COMMAND_TIMEOUT;
use maccompat_core::{
    deployment_tool_installed, evaluate, ConditionalItemsStore, EvidenceReporter,
    HostFactsProvider, Release, SystemFactsProvider,
};

const EXIT_SUPPORTED: i32 = 0;
const EXIT_UNSUPPORTED: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "maccompat")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "macOS upgrade compatibility gate", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate whether this machine supports a target release
    Check {
        /// Target release (mountain-lion, mavericks, yosemite, high-sierra)
        #[arg(value_parser = parse_release)]
        release: Release,

        /// Suppress the evidence trail; exit code only
        #[arg(long)]
        quiet: bool,

        /// Merge the verdict into the deployment tool's conditional items
        /// (skipped when the deployment tool is not installed)
        #[arg(long)]
        conditional_items: bool,

        /// Conditional-items store path, bypassing preference discovery
        #[arg(long, value_name = "PATH")]
        conditional_items_path: Option<PathBuf>,
    },

    /// List the releases this gate knows about
    Releases,
}

fn parse_release(s: &str) -> std::result::Result<Release, String> {
    s.parse()
}

/// Per-run configuration, resolved once from the CLI flags and never
/// mutated afterwards.
struct GateConfig {
    quiet: bool,
    persist: bool,
    store_path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    maccompat_core::init_tracing(cli.json, level);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Check {
            release,
            quiet,
            conditional_items,
            conditional_items_path,
        } => {
            let config = GateConfig {
                quiet,
                persist: conditional_items && deployment_tool_installed(DEFAULT_COMMAND_TIMEOUT),
                store_path: conditional_items_path,
            };
            let provider = SystemFactsProvider::new();
            cmd_check(&provider, release, &config)
        }
        Commands::Releases => cmd_releases(),
    }
}

fn cmd_releases() -> Result<i32> {
    for release in Release::ALL {
        println!("{:<14} {}", release.slug(), release.display_name());
    }
    Ok(EXIT_SUPPORTED)
}

fn cmd_check(
    provider: &dyn HostFactsProvider,
    release: Release,
    config: &GateConfig,
) -> Result<i32> {
    let facts = provider.current().context("gather host facts")?;
    let verdict = evaluate(&release.rule_set(), &facts);

    EvidenceReporter::new(config.quiet).print(&verdict);
    info!(
        event = "gate.evaluated",
        release = %release,
        supported = verdict.supported,
    );

    if config.persist {
        let store = match &config.store_path {
            Some(path) => ConditionalItemsStore::new(path.clone()),
            None => ConditionalItemsStore::discover(DEFAULT_COMMAND_TIMEOUT),
        };
        // A failed write is surfaced but never changes the verdict or the
        // exit code.
        if let Err(err) = store.merge_flag(release.conditional_item_key(), verdict.supported) {
            warn!(event = "conditional.write_failed", error = %err);
            eprintln!("warning: {err}");
        }
    }

    Ok(if verdict.supported {
        EXIT_SUPPORTED
    } else {
        EXIT_UNSUPPORTED
    })
}
