//! # Movie Details CLI
//!
//! Opens the details screen for one movie and prints it as text.
//!
//! 1. Loads [`TmdbConfig`] from `.env` and the environment, then applies flags.
//! 2. Opens a [`MovieDetailsScreen`], which starts the fetch.
//! 3. Prints the loading state, waits for the fetch, prints the result.
//! 4. Presses "Go back".

use async_resource::tracing::setup_tracing;
use clap::Parser;
use movie_details::clients::TmdbClient;
use movie_details::config::TmdbConfig;
use movie_details::screen::{MovieDetailsScreen, Render, Router};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "movie-details", about = "Show the details screen for a movie")]
struct Args {
    /// Movie identifier
    id: String,

    /// API base URL (defaults to TMDB_BASE_URL or the public TMDB endpoint)
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token for the API
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    let mut config = TmdbConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(api_key) = args.api_key.filter(|key| !key.is_empty()) {
        config = config.with_api_key(api_key);
    }
    if let Some(seconds) = args.timeout {
        config = config.with_timeout(seconds);
    }
    info!(base_url = %config.base_url, authenticated = config.api_key.is_some(), "Configured");

    let client = TmdbClient::new(config.clone()).map_err(|e| e.to_string())?;
    let router = Router::new("/");
    let route = format!("/movies/{}", args.id);
    router.push(route.clone());

    let span = tracing::info_span!("movie_screen", %route);
    let render = async {
        let screen = MovieDetailsScreen::open(
            Arc::new(client),
            args.id.clone(),
            config.image_base_url.clone(),
            router.clone(),
        );
        if screen.render().is_loading() {
            println!("Loading movie...");
        }

        let render = screen.render_settled().await;
        screen.go_back();
        render
    }
    .instrument(span)
    .await;

    info!(route = ?router.current(), "Navigated back");

    match render {
        Render::Details(view) => {
            println!("{view}");
            Ok(())
        }
        Render::Failed(message) => {
            error!(error = %message, "Could not load movie");
            Err(message)
        }
        Render::Loading => Err("Movie is still loading".to_string()),
    }
}
