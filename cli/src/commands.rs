pub mod bench;
pub mod generate;
pub mod ranges;

use clap::{Args, Parser, Subcommand};
use scattr_common::config::{CipherWidth, Config, DEFAULT_EXCLUDES, DEFAULT_TARGET};

#[derive(Parser)]
#[command(name = "scattr")]
#[command(version, about = "Enumerate IPv4 space in a shuffled, exclusion-aware order.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Show range diagnostics and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every address of the target, one per line, in shuffled order
    #[command(alias = "g")]
    Generate {
        #[command(flatten)]
        scan: ScanArgs,
        /// Stop after this many addresses
        #[arg(short = 'n', long)]
        limit: Option<u64>,
    },
    /// Show the ranges left once excludes are removed
    #[command(alias = "r")]
    Ranges {
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Measure how fast addresses can be generated
    #[command(alias = "b")]
    Bench {
        #[command(flatten)]
        scan: ScanArgs,
        /// Stop after this many addresses
        #[arg(short = 'n', long)]
        limit: Option<u64>,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ScanArgs {
    /// Network to enumerate, in CIDR notation
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Network to leave out (repeatable, or comma separated). Defaults to the RFC 1918 ranges
    #[arg(short = 'e', long = "exclude", value_name = "CIDR", value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// Exclude nothing, not even the private ranges
    #[arg(long, conflicts_with = "excludes")]
    pub no_excludes: bool,

    /// Seed for a reproducible order
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Use the historical 16-bit cipher. Ranges above 65536 addresses may repeat values
    #[arg(long)]
    pub legacy_cipher: bool,
}

impl ScanArgs {
    pub fn to_config(&self, verbose: bool) -> Config {
        let excludes: Vec<String> = if self.no_excludes {
            Vec::new()
        } else if self.excludes.is_empty() {
            DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect()
        } else {
            self.excludes.clone()
        };

        let cipher = if self.legacy_cipher {
            CipherWidth::Legacy16
        } else {
            CipherWidth::Adaptive
        };

        Config {
            target: self.target.clone(),
            excludes,
            seed: self.seed,
            verbose,
            cipher,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
