//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set a configuration value
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set a configuration value
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Dotted key, e.g. `honeycomb.max_items_per_row`
    key: String,

    /// New value (empty string clears `paths.content_dir`)
    value: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let mut config = Config::load().unwrap_or_default();

        config
            .set_value(&self.key, &self.value)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Set {} = {}", self.key, self.value);
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("SiteBlocks Configuration");
    println!("========================");
    println!();

    println!("Paths:");
    if let Some(content_dir) = &config.paths.content_dir {
        println!("  Content Directory: {}", content_dir.display());
    } else {
        println!("  Content Directory: (not configured)");
    }
    println!();

    println!("Honeycomb:");
    println!("  Max Items Per Row: {}", config.honeycomb.max_items_per_row);
    println!();

    println!("Tilted Square:");
    println!("  Items Per Row: {}", config.tilted_square.items_per_row);
    println!("  Size: {}px", config.tilted_square.size_px);
    println!("  Gap: {}px", config.tilted_square.gap_px);
    println!();

    println!("Server:");
    println!("  Address: {}:{}", config.server.host, config.server.port);
    println!();
}
