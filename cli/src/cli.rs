//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// thiol - structural type identities for shader interface declarations
#[derive(Parser, Debug)]
#[command(name = "thiol", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every declaration in one or more files
    Check(CheckArgs),
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check (`-` reads from stdin)
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Print every declaration with its identity and canonical shape
    #[arg(long)]
    pub dump_type_context: bool,

    /// Maximum nesting of generic instantiations
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Only report errors through the exit status
    #[arg(short, long)]
    pub quiet: bool,
}
