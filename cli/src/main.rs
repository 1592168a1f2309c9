mod cli;
mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use musica_config::LogConfig;
use musica_core::services::CatalogService;
use musica_seed::{CatalogConfig, TomlCatalogSource};

use crate::cli::{Cli, Command, ConfigAction};
use crate::config::ConfigDto;

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  init_tracing();

  match cli.command {
    Command::Summary { json } => {
      let service = open_catalog(cli.seed)?;
      let report = service.report();

      if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
      } else {
        print!("{}", report::TextReport(&report));
      }
    }
    Command::Login { login, password } => {
      let service = open_catalog(cli.seed)?;

      match service.catalog().authenticate(&login, &password) {
        Some(user) => println!("login ok: {} ({})", user.login(), user.id()),
        None => bail!("invalid credentials for {login:?}"),
      }
    }
    Command::Config { action: ConfigAction::Show } => {
      let dto = ConfigDto::from((CatalogConfig::load()?, LogConfig::load()?));
      println!("{}", serde_json::to_string_pretty(&dto)?);
    }
    Command::Config { action: ConfigAction::SetSeed { path } } => {
      CatalogConfig { seed_file: path.clone() }.save()?;
      info!(path = %path.display(), "default seed file updated");
    }
  }

  Ok(())
}

/// `RUST_LOG` manda; si no está, se usa la sección `[logging]`.
fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    let directive = LogConfig::load().map(|c| c.filter).unwrap_or_else(|_| LogConfig::default().filter);
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
  });

  // stderr para no mezclar logs con la salida JSON.
  tracing_subscriber::registry().with(fmt::layer().with_target(true).with_writer(std::io::stderr)).with(filter).init();
}

fn open_catalog(seed: Option<PathBuf>) -> anyhow::Result<CatalogService<TomlCatalogSource>> {
  let source = match seed {
    Some(path) => TomlCatalogSource::new(path),
    None => TomlCatalogSource::from_config().context("reading [catalog] from musica.toml")?,
  };
  let path = source.path().to_path_buf();

  CatalogService::load(source).with_context(|| format!("loading catalog from {}", path.display()))
}
