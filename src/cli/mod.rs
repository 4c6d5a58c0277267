pub mod completions;
pub mod sync;

use clap::{Parser, Subcommand};

/// assetsync - Sync exported images into Xcode asset catalogs
#[derive(Parser, Debug)]
#[command(name = "assetsync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log every entry decision
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy new and changed images into catalogs and update manifests
    Sync(sync::SyncArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
