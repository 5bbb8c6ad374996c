/* src/site/src/main.rs */

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fearless_axum::IntoAxumRouter;
use fearless_axum::fearless_core::{
  Content, SessionRegistry, SiteServer, Translations, default_strategies, site_pages,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::{DEFAULT_CONFIG_FILE, SiteConfig, load_site_config};

#[derive(Parser)]
#[command(name = "fearless-site", version, about = "Fearless Gaming website server")]
struct Cli {
  /// Path to site.toml
  #[arg(short, long, env = "FEARLESS_CONFIG")]
  config: Option<PathBuf>,

  /// Listen port, overriding the config file
  #[arg(short, long, env = "PORT")]
  port: Option<u16>,
}

fn init_tracing(config: &SiteConfig) {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
  tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_router(config: &SiteConfig, sessions: Arc<SessionRegistry>) -> Result<axum::Router> {
  let content = Content::fearless().context("failed to load site content")?;
  let translations = Translations::embedded().context("failed to load translations")?;
  let pages = site_pages().context("failed to compile page templates")?;

  let router = SiteServer::new(content, translations)
    .pages(pages)
    .detail_miss(config.site.detail_miss)
    .resolve_strategies(default_strategies())
    .sessions(sessions)
    .into_axum_router()
    .context("failed to assemble site")?;

  let public = &config.site.public_dir;
  Ok(
    router
      .nest_service("/images", ServeDir::new(public.join("images")))
      .nest_service("/static", ServeDir::new(public.join("static")))
      .layer(TraceLayer::new_for_http()),
  )
}

/// Periodically drop idle sessions that have no open pages.
fn spawn_session_pruner(sessions: Arc<SessionRegistry>, config: &SiteConfig) {
  let idle = config.session.idle_timeout();
  let mut ticker = tokio::time::interval(config.session.prune_interval());
  tokio::spawn(async move {
    loop {
      ticker.tick().await;
      let pruned = sessions.prune(idle);
      if pruned > 0 {
        tracing::debug!(pruned, remaining = sessions.len(), "idle sessions pruned");
      }
    }
  });
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %err, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let (path, explicit) = match cli.config {
    Some(path) => (path, true),
    None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
  };
  let mut config = load_site_config(&path, explicit)?;
  if let Some(port) = cli.port {
    config.server.port = port;
    config.validate()?;
  }
  init_tracing(&config);

  let sessions = Arc::new(SessionRegistry::new());
  let router = build_router(&config, Arc::clone(&sessions))?;
  spawn_session_pruner(sessions, &config);

  let addr = config.bind_addr();
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  let local_addr = listener.local_addr()?;
  tracing::info!(
    %local_addr,
    public_dir = %config.site.public_dir.display(),
    detail_miss = ?config.site.detail_miss,
    "Fearless Gaming site running"
  );
  axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
  Ok(())
}
