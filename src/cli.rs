use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{serve, show_profile};

#[derive(Parser)]
#[command(name = "energy-saver")]
#[command(about = "Development forecast service for the Energy Saver screen")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve `GET /predict` from a forecast profile
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:5000")]
        bind_address: String,

        /// YAML forecast profile
        ///
        /// Example:
        ///   mode: valid            # valid | malformed | missing | server_error
        ///   prediction: [0.5, 0.7, 0.9]
        ///
        /// Without a profile the built-in 24 hour forecast is served.
        #[arg(short, long, env = "FORECAST_PROFILE")]
        profile: Option<PathBuf>,
    },
    /// Print a profile and what the forecast screen would show for it
    ShowProfile {
        /// YAML forecast profile
        #[arg(short, long, env = "FORECAST_PROFILE")]
        profile: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, profile } => {
                serve(&bind_address, profile.as_deref()).await?;
            }
            Commands::ShowProfile { profile } => {
                show_profile(profile.as_deref())?;
            }
        }
        Ok(())
    }
}
