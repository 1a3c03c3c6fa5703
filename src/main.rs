//! SiteBlocks - color and grid layout tooling for a content-driven site
//!
//! Resolves design-system color selections, computes honeycomb and
//! tilted-square grid layouts, and renders page documents from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use siteblocks::cli::{
    ConfigArgs, ExitCode, HoneycombArgs, PaletteArgs, RenderArgs, ResolveArgs, TiltedArgs,
};
use siteblocks::constants::APP_BINARY_NAME;

/// SiteBlocks - color and grid layout tooling
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a color selection to a CSS color
    Resolve(ResolveArgs),
    /// Show the design-system palette
    Palette(PaletteArgs),
    /// Compute a honeycomb grid layout
    Honeycomb(HoneycombArgs),
    /// Compute a tilted-square grid layout
    Tilted(TiltedArgs),
    /// Render a page's block colors and grid layouts
    Render(RenderArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Resolve(args) => args.execute(),
        Command::Palette(args) => args.execute(),
        Command::Honeycomb(args) => args.execute(),
        Command::Tilted(args) => args.execute(),
        Command::Render(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err.message);
        std::process::exit(err.exit_code.code());
    }
    std::process::exit(ExitCode::Success.code());
}
