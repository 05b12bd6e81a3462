use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tflow_security::MaskingProfile;

#[derive(Parser)]
#[command(name = "tflow")]
#[command(about = "Shrink prompts before they reach an LLM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, env = "TFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Optimize a prompt and report the savings
    Optimize(OptimizeArgs),

    /// Mask secrets only, leaving everything else untouched
    Mask {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Secret rule set (default from config)
        #[arg(long, value_enum)]
        profile: Option<ProfileArg>,
    },

    /// Print the tokens produced by one counting method
    Tokens {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// word, approximate, character, sentence or subword
        #[arg(long, short)]
        method: String,
    },

    /// Show tokens saved per day
    Savings,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct OptimizeArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Secret rule set (default from config)
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Do not record tokens saved
    #[arg(long)]
    pub no_ledger: bool,

    /// Copy the optimized text to the clipboard
    #[arg(long)]
    pub copy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    Standard,
    Conservative,
}

impl From<ProfileArg> for MaskingProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Standard => MaskingProfile::Standard,
            ProfileArg::Conservative => MaskingProfile::Conservative,
        }
    }
}
