mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "overlap",
    version,
    about = "Find groups of overlapping rectangles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a rectangle document and print every overlap group
    Solve(SolveArgs),
    /// Load a rectangle document and print the rectangles
    List(InputArgs),
    /// Create the default configuration file
    Init,
}

/// Options shared by commands that read a rectangle document.
#[derive(Args)]
pub struct InputArgs {
    /// JSON document with a "rects" array
    pub file: PathBuf,
    /// Ignore rectangles past this count (overrides the config file)
    #[arg(long)]
    pub max_rects: Option<usize>,
    /// Read configuration from this file instead of ~/.config/overlap/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args)]
pub struct SolveArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(&args),
        Commands::List(args) => commands::list::execute(&args),
        Commands::Init => commands::init::execute(),
    }
}
