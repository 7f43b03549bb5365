//! Command line entry point.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use osu_recent::commands::{self, Target};
use osu_recent::database::Database;
use osu_recent::difficulty::OsuCalculator;
use osu_recent::logic::OutcomeEngine;
use osu_recent::models::Settings;
use osu_recent::network::{HttpChartSource, OsuApi};
use osu_recent::views::{render_profile, render_summary};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "osu-recent", about = "Show the most recent osu! play of a user")]
struct Cli {
    /// Path to the TOML settings file.
    #[arg(long, default_value = "osu-recent.toml")]
    config: PathBuf,

    /// osu! OAuth client id (overrides the settings file).
    #[arg(long, env = "OSU_CLIENT_ID")]
    client_id: Option<String>,

    #[arg(long, env = "OSU_CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Link a chat user id to an osu! username.
    Link { key: u64, username: String },
    /// Remove the link of a chat user id.
    Unlink { key: u64 },
    /// Show the osu! profile of a username, a `<@id>` mention, or the caller.
    Profile {
        #[arg(long = "as", default_value_t = 0)]
        caller: u64,
        target: Option<String>,
    },
    /// Show the most recent play of a username, a `<@id>` mention, or the caller.
    Recent {
        /// Chat user id of the caller.
        #[arg(long = "as", default_value_t = 0)]
        caller: u64,
        target: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("loading {:?}", cli.config))?;

    let db = Database::new(&settings.database.path)
        .await
        .context("opening link database")?;

    match cli.command {
        Command::Link { key, username } => {
            let api = api_client(cli.client_id, cli.client_secret, &settings)?;
            let user = commands::link(&api, &db, key, &username).await?;
            println!("Linked {} to osu! account '{}'.", key, user.username);
        }
        Command::Unlink { key } => {
            if db.unlink(key).await? {
                println!("Unlinked {}.", key);
            } else {
                println!("{} was not linked.", key);
            }
        }
        Command::Profile { caller, target } => {
            let api = api_client(cli.client_id, cli.client_secret, &settings)?;
            let target = Target::parse(target.as_deref());
            let user = commands::profile(&api, &db, caller, &target).await?;

            print!("{}", render_profile(&user));
        }
        Command::Recent { caller, target } => {
            let api = api_client(cli.client_id, cli.client_secret, &settings)?;
            let source = HttpChartSource::new(&settings.chart.base_url)?;
            let engine = OutcomeEngine::new(source, OsuCalculator).with_timeout(settings.chart.timeout());

            log::info!("MAIN: Fetching recent play ({:?})", target);
            let target = Target::parse(target.as_deref());
            let play = commands::recent(&api, &engine, &db, caller, &target).await?;

            if let Some(kind) = play.outcome.degraded() {
                log::info!("MAIN: Outcome computed without full chart data ({})", kind);
            }

            print!("{}", render_summary(&play.user, &play.score, &play.outcome));
        }
    }

    Ok(())
}

/// Command line and environment credentials win over the settings file.
fn api_client(
    client_id: Option<String>,
    client_secret: Option<String>,
    settings: &Settings,
) -> Result<OsuApi> {
    let client_id = client_id
        .or_else(|| settings.api.client_id.clone())
        .context("missing osu! client id (--client-id, OSU_CLIENT_ID or api.client_id)")?;
    let client_secret = client_secret
        .or_else(|| settings.api.client_secret.clone())
        .context("missing osu! client secret (--client-secret, OSU_CLIENT_SECRET or api.client_secret)")?;

    Ok(OsuApi::new(&settings.api.base_url, client_id, client_secret)?)
}
