//! The image cache loader
//!
//! Owns the decoded-image cache and the registry of in-flight fetches.
//! Both live behind one mutex: the cache-then-registry sequence in `load`
//! must be atomic for duplicate-request coalescing to hold. The lock is
//! only ever held across map operations, never across awaits.

use crate::decode::decode_image;
use crate::error::{LoadError, Result};
use crate::transport::Transport;
use crate::types::{ImageCompletion, LoaderConfig, LoaderStats};
use memory_image_cache::{DecodedImage, ImageCache};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};
use url::Url;

/// An active fetch: the handle to abort it, plus how many `load` calls are
/// waiting on its result
struct InFlightFetch {
    abort: AbortHandle,
    waiters: usize,
}

struct LoaderState {
    cache: ImageCache,
    in_flight: HashMap<String, InFlightFetch>,
}

/// Loads remote images through a [`Transport`], caching decoded results.
///
/// Completions are delivered over the mpsc channel supplied at
/// construction; the receiving half is the designated delivery context and
/// should be drained by exactly one consumer. Cache hits go through the
/// same channel as network results, so callers observe a uniform,
/// never-reentrant completion order.
///
/// At most one fetch is in flight per URL: a `load` for a URL that is
/// already being fetched joins the outstanding fetch instead of issuing a
/// second request, and each joined caller still receives its own
/// completion. Fetches run as tasks on the ambient tokio runtime.
pub struct ImageLoader {
    state: Arc<Mutex<LoaderState>>,
    transport: Arc<dyn Transport>,
    completions: mpsc::UnboundedSender<ImageCompletion>,
}

impl ImageLoader {
    /// Create a loader that delivers completions on `completions`
    pub fn new(
        transport: Arc<dyn Transport>,
        config: LoaderConfig,
        completions: mpsc::UnboundedSender<ImageCompletion>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(LoaderState {
                cache: ImageCache::new(config.max_cache_entries, config.max_cache_bytes),
                in_flight: HashMap::new(),
            })),
            transport,
            completions,
        }
    }

    /// Request the image behind `url`.
    ///
    /// Exactly one completion per call arrives on the channel, carrying
    /// `None` when the URL is malformed or the fetch/decode fails. A
    /// cancelled fetch is the one exception: it emits no completion.
    /// Never blocks and never returns an error.
    pub fn load(&self, url: &str) {
        debug!(url = %url, "Image load requested");

        let Ok(mut state) = self.state.lock() else {
            return;
        };

        if let Some(image) = state.cache.get(url) {
            drop(state);
            debug!(url = %url, "Serving image from cache");
            self.send_completion(url, Some(image));
            return;
        }

        let parsed = match parse_image_url(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                drop(state);
                debug!(url = %url, error = %e, "Rejecting image load");
                self.send_completion(url, None);
                return;
            }
        };

        if let Some(fetch) = state.in_flight.get_mut(url) {
            fetch.waiters += 1;
            debug!(url = %url, waiters = fetch.waiters, "Joined in-flight fetch");
            return;
        }

        // The registry entry is inserted while the lock is still held, so
        // the spawned task cannot observe (and remove) a missing entry.
        let task = tokio::spawn(run_fetch(
            Arc::clone(&self.state),
            Arc::clone(&self.transport),
            self.completions.clone(),
            url.to_string(),
            parsed,
        ));
        state.in_flight.insert(
            url.to_string(),
            InFlightFetch {
                abort: task.abort_handle(),
                waiters: 1,
            },
        );
        debug!(url = %url, "Started image fetch");
    }

    /// Cancel the in-flight fetch for `url`, if any.
    ///
    /// Idempotent: a no-op when no fetch is registered, including when the
    /// fetch already completed. Cached entries are unaffected.
    pub fn cancel(&self, url: &str) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        if let Some(fetch) = state.in_flight.remove(url) {
            fetch.abort.abort();
            debug!(url = %url, "Cancelled image fetch");
        }
    }

    /// Empty the cache. In-flight fetches are not affected and still
    /// complete normally.
    pub fn clear(&self) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        state.cache.clear();
        info!("Image cache cleared");
    }

    /// Current cache statistics and in-flight count
    pub fn stats(&self) -> LoaderStats {
        match self.state.lock() {
            Ok(state) => LoaderStats {
                cache: state.cache.stats(),
                in_flight: state.in_flight.len(),
            },
            Err(_) => LoaderStats::default(),
        }
    }

    fn send_completion(&self, url: &str, image: Option<Arc<DecodedImage>>) {
        let _ = self.completions.send(ImageCompletion {
            url: url.to_string(),
            image,
        });
    }
}

/// Parse and validate a URL the transport can service
fn parse_image_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|_| LoadError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(LoadError::InvalidUrl(url.to_string())),
    }
}

/// Drive one fetch to completion: fetch, decode, cache, then notify every
/// waiter registered for the URL.
async fn run_fetch(
    state: Arc<Mutex<LoaderState>>,
    transport: Arc<dyn Transport>,
    completions: mpsc::UnboundedSender<ImageCompletion>,
    url: String,
    parsed: Url,
) {
    let result = fetch_and_decode(transport.as_ref(), &parsed).await;

    let (image, waiters) = {
        let Ok(mut state) = state.lock() else {
            return;
        };

        // Zero waiters means the fetch was cancelled while the last await
        // was already past the abort point; the decoded image is still
        // cached, but nobody is notified.
        let waiters = state
            .in_flight
            .remove(&url)
            .map(|fetch| fetch.waiters)
            .unwrap_or(0);

        match result {
            Ok(image) => {
                let image = Arc::new(image);
                state.cache.insert(url.clone(), Arc::clone(&image));
                debug!(url = %url, size = image.byte_size(), "Image loaded and cached");
                (Some(image), waiters)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Image load failed");
                (None, waiters)
            }
        }
    };

    for _ in 0..waiters {
        let _ = completions.send(ImageCompletion {
            url: url.clone(),
            image: image.clone(),
        });
    }
}

async fn fetch_and_decode(transport: &dyn Transport, url: &Url) -> Result<DecodedImage> {
    let bytes = transport.fetch(url).await?;

    if bytes.is_empty() {
        return Err(LoadError::EmptyBody);
    }

    decode_image(bytes).await
}
