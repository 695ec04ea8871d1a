mod config;

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use platform_i18n::{Catalog, Translator};
use platform_obs::{ObsConfig, init_tracing};
use products_activity::{
    ActivityFeed, FeedView, Greeting, JsonFileFetcher, SiteUrls, Viewer, render,
};
use tracing::{info, warn};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "activity-feed", version, about = "Home page activity feed")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an activity dump as a feed.
    Render(RenderCommand),
    /// Print a home page greeting.
    Greet {
        #[arg(long, help = "First name to address")]
        name: Option<String>,
    },
    /// Dump the active message catalog as JSON.
    Catalog {
        #[arg(long, value_name = "FILE", help = "Destination file path")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct RenderCommand {
    #[arg(long, value_name = "FILE", help = "JSON array of activity entries")]
    file: PathBuf,
    #[arg(long, help = "Id of the user viewing the feed")]
    viewer: Option<i64>,
    #[arg(long, help = "Emit the feed view as JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;
    init_tracing(ObsConfig::new("activity-feed").with_filter(config.log_filter.clone()))?;
    let cli = Cli::parse();
    let catalog = load_catalog(&config)?;

    match cli.command {
        Command::Render(cmd) => run_render(cmd, &config, catalog).await,
        Command::Greet { name } => {
            greet(&catalog, name.as_deref());
            Ok(())
        }
        Command::Catalog { output } => dump_catalog(&catalog, output),
    }
}

fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::load(path).context("failed to load message catalog"),
        None => Ok(Catalog::english()),
    }
}

async fn run_render(cmd: RenderCommand, config: &AppConfig, catalog: Catalog) -> Result<()> {
    let viewer = Viewer::new(config.viewer_id(cmd.viewer)?);
    let mut feed = ActivityFeed::new(
        JsonFileFetcher::new(&cmd.file),
        viewer,
        Arc::new(catalog),
        Arc::new(SiteUrls::new(config.site_url.clone())),
    );
    feed.activate().await;

    let view = feed.render(Utc::now());
    match &view {
        FeedView::Items { items } => info!(items = items.len(), "activity feed rendered"),
        FeedView::Failed { code, .. } => warn!(code = *code, "activity feed failed to load"),
        _ => {}
    }

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::to_text(&view));
    }
    Ok(())
}

fn greet(catalog: &dyn Translator, name: Option<&str>) {
    let mut greeting = Greeting::new(catalog);
    println!("{}", greeting.say_hello(name));
    println!("{}", greeting.encourage_curiosity());
}

fn dump_catalog(catalog: &Catalog, output: Option<PathBuf>) -> Result<()> {
    let body = serde_json::to_string_pretty(&catalog.to_file())?;
    match output {
        Some(path) => {
            std::fs::write(&path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), locale = catalog.locale(), "catalog written");
        }
        None => println!("{body}"),
    }
    Ok(())
}
