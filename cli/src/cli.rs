// Clap definitions in derive style

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "musica", version, about)]
pub struct Cli {
  /// Seed file to load instead of the one configured in musica.toml
  #[arg(short, long, global = true, env = "MUSICA_SEED")]
  pub seed: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
  /// Print album/song counts and star averages per artist
  Summary {
    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
  },

  /// Check credentials against the users in the seed
  Login {
    #[arg(value_name = "LOGIN")]
    login: String,

    #[arg(value_name = "PASSWORD")]
    password: String,
  },

  /// Inspect or change musica.toml
  Config {
    #[command(subcommand)]
    action: ConfigAction,
  },
}

#[derive(Subcommand)]
pub enum ConfigAction {
  /// Print the current configuration as JSON
  Show,

  /// Store a new default seed file
  SetSeed {
    #[arg(value_name = "PATH")]
    path: PathBuf,
  },
}
