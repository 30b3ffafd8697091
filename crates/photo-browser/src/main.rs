//! Photo browser - headless photo-browsing client
//!
//! Fetches the photo list from JSONPlaceholder, then drives a pool of
//! reusable list cells through pages of Picsum thumbnails against the
//! image cache loader.

mod cell;
mod error;
mod types;

use crate::cell::Gallery;
use crate::error::Result;
use crate::types::BrowserConfig;
use image_loader::{HttpTransport, ImageCompletion, ImageLoader, LoaderConfig};
use jsonplaceholder_api::PhotoApiClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

/// How long one page may keep loading before the browser moves on
const PAGE_DEADLINE: Duration = Duration::from_secs(10);
/// How many pages the browse session walks through
const PAGES_TO_BROWSE: usize = 2;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("photo_browser=info".parse()?);

    // Use JSON format for structured log collection when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting photo browser...");

    // Load configuration from environment
    let config = load_config();
    info!("Photo limit: {}", config.photo_limit);
    info!("Visible rows: {}", config.visible_rows);
    info!(
        "Cache ceilings: {} entries / {} MB",
        config.cache_max_entries,
        config.cache_max_bytes / (1024 * 1024)
    );

    // Fetch the photo list
    let api = PhotoApiClient::new();
    let photos = match api.fetch_photos(config.photo_limit).await {
        Ok(photos) => photos,
        Err(e) => {
            warn!(error = %e, "Photo list fetch failed: {}", e.user_message());
            return Err(e.into());
        }
    };
    info!("Fetched {} photos", photos.len());

    // Create the loader and its completion channel; this task is the
    // single consumer that drains completions
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel();
    let transport = Arc::new(HttpTransport::new(
        config.connect_timeout,
        config.request_deadline,
    ));
    let loader = ImageLoader::new(
        transport,
        LoaderConfig {
            max_cache_entries: config.cache_max_entries,
            max_cache_bytes: config.cache_max_bytes,
            connect_timeout: config.connect_timeout,
            request_deadline: config.request_deadline,
        },
        completion_tx,
    );

    // Browse: bind pages of photos onto the same cell pool, reusing cells
    // the way a scrolled list view recycles its rows
    let mut gallery = Gallery::new(config.visible_rows);

    for (page_index, page) in photos
        .chunks(config.visible_rows)
        .take(PAGES_TO_BROWSE)
        .enumerate()
    {
        info!("Showing page {} ({} photos)", page_index + 1, page.len());
        gallery.show_page(page, &loader);
        drain_page(&mut gallery, &mut completion_rx).await;

        for (row, cell) in gallery.cells().iter().enumerate() {
            info!(
                row,
                loaded = cell.image().is_some(),
                url = cell.current_url().unwrap_or("-"),
                title = cell.title(),
                "Row state"
            );
        }
    }

    let stats = loader.stats();
    info!(
        entries = stats.cache.entries,
        total_bytes = stats.cache.total_bytes,
        hits = stats.cache.hits,
        misses = stats.cache.misses,
        in_flight = stats.in_flight,
        "Image cache statistics"
    );

    Ok(())
}

/// Drain completions until every configured cell has its result or the
/// page deadline passes
async fn drain_page(gallery: &mut Gallery, rx: &mut mpsc::UnboundedReceiver<ImageCompletion>) {
    let deadline = tokio::time::Instant::now() + PAGE_DEADLINE;

    while gallery.pending() > 0 {
        let completion = tokio::select! {
            completion = rx.recv() => completion,
            _ = tokio::time::sleep_until(deadline) => {
                warn!(pending = gallery.pending(), "Page load deadline passed");
                return;
            }
        };

        let Some(completion) = completion else {
            return;
        };

        if gallery.apply(&completion) == 0 {
            debug!(url = %completion.url, "Discarded stale completion");
        }
    }
}

fn load_config() -> BrowserConfig {
    let defaults = BrowserConfig::default();

    let photo_limit = std::env::var("PHOTO_LIMIT")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(defaults.photo_limit);

    let visible_rows = std::env::var("VISIBLE_ROWS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(defaults.visible_rows)
        .max(1);

    let cache_max_entries = std::env::var("CACHE_MAX_ENTRIES")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(defaults.cache_max_entries);

    let cache_max_bytes = std::env::var("CACHE_MAX_BYTES")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(defaults.cache_max_bytes);

    let connect_timeout = std::env::var("CONNECT_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(defaults.connect_timeout);

    let request_deadline = std::env::var("REQUEST_DEADLINE_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(defaults.request_deadline);

    BrowserConfig {
        photo_limit,
        visible_rows,
        cache_max_entries,
        cache_max_bytes,
        connect_timeout,
        request_deadline,
    }
}
