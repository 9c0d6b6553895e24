use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use spexport::{
    browser::SystemBrowser,
    config::{self, Config},
    error, export, output, success,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

/// Reads SPOTIFY_ID and SPOTIFY_SECRET from the environment, authorizes in the
/// browser and prints every playlist of the user as JSON on stdout.
#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {}

async fn run_export() -> spexport::Result<()> {
    let config = Config::from_env()?;
    let playlists = export::run(&config, &SystemBrowser).await?;
    output::write_json(&playlists, std::io::stdout().lock())?;
    success!("Exported {} playlists", playlists.len());
    Ok(())
}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();
    config::load_env();

    if let Err(e) = run_export().await {
        error!("{}", e);
    }
}
