use boost_desk::pricing::{CreditTier, TankClass};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boost-desk", version, about = "Boosting order desk")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the order desk server (default)
    Start,

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Price an order without submitting it
    Quote {
        #[command(subcommand)]
        service: QuoteCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

#[derive(Subcommand, Debug, Clone)]
pub enum QuoteCommands {
    /// Credit farming quote
    CreditFarm {
        /// WN8 tier: under-2500 or over-2500
        #[arg(short, long)]
        tier: CreditTier,

        /// Amount in millions of credits
        #[arg(short, long, allow_negative_numbers = true)]
        amount: f64,

        /// Booster must not use the customer's Silver Boosters
        #[arg(short, long)]
        exclude_own_boosters: bool,
    },

    /// Powerleveling quote
    Powerleveling {
        /// Tank class: lt, mt, ht, td or spg
        #[arg(long)]
        class: TankClass,
    },
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
