//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use online_xboxlive::TargetPlatform;

/// Inspector for the Xbox Live online platform build module
#[derive(Parser)]
#[command(name = "oxl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the editor plugin description
    Describe(DescribeArgs),

    /// Show the link order contributed to each target platform
    Linkplan(LinkplanArgs),

    /// Show the platforms and modules of a target declaration
    Targets(TargetsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct LinkplanArgs {
    /// Restrict to one platform (defaults to every platform of the target)
    #[arg(long)]
    pub platform: Option<TargetPlatform>,

    /// Override the GDK services toolset version (e.g. 142)
    #[arg(long)]
    pub toolset: Option<u32>,

    /// Target declaration file (defaults to the built-in Xbox Live target)
    #[arg(long)]
    pub spec: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct TargetsArgs {
    /// Target declaration file (defaults to the built-in Xbox Live target)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
