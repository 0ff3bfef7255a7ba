//! CLI argument parsing using clap

use clap::{ArgAction, ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for user-validator commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// user-validator CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "user-validator")]
#[command(about = "Validate email, username and password input against configurable rules")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./user-validator.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available user-validator subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an email address
    Email {
        /// Email to validate
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Validate a username
    Username {
        /// Username to validate
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Validate a password
    Password {
        /// Password to validate
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Username the password must differ from
        #[arg(long)]
        username: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Validate several fields, stopping at the first rejected one
    #[command(group(
        ArgGroup::new("fields")
            .required(true)
            .multiple(true)
            .args(["email", "username", "password"])
    ))]
    Check {
        /// Email to validate
        #[arg(long, allow_hyphen_values = true)]
        email: Option<String>,

        /// Username to validate
        #[arg(long, allow_hyphen_values = true)]
        username: Option<String>,

        /// Password to validate (checked against --username)
        #[arg(long, allow_hyphen_values = true)]
        password: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Write a default user-validator.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Config {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
