// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rill")]
#[command(about = "Deployment orchestrator for DSL-defined data pipeline streams")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of human-friendly output
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress progress messages
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new rill.yml configuration file
    Init {
        /// Release backend authority (host:port)
        #[arg(short, long)]
        backend: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Deploy a defined stream
    Deploy {
        /// Stream name
        stream: String,

        /// Deployment properties as key=value pairs
        #[arg(short, long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },

    /// Update a deployed stream to a new release
    Update {
        /// Stream name
        stream: String,

        /// Release properties as key=value pairs (reserved keys included)
        #[arg(short, long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },

    /// Roll a stream back to a prior release version
    Rollback {
        /// Stream name
        stream: String,

        /// Release version to restore
        version: i32,
    },

    /// Print the rendered manifest for a release version
    Manifest {
        /// Stream name
        stream: String,

        /// Release version
        version: i32,
    },

    /// Show release history for a stream, newest first
    History {
        /// Stream name
        stream: String,
    },

    /// List configured target platforms
    Platforms,

    /// Show aggregated deployment info for a stream
    Info {
        /// Stream name
        stream: String,
    },
}
