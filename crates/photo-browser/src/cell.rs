//! Photo list cells and the gallery that routes completions to them
//!
//! A cell mirrors a reusable list row: it records the URL it currently
//! cares about before asking the loader for it, discards completions for
//! any other URL, and cancels its outstanding load when it is reused.

use image_loader::{DecodedImage, ImageCompletion, ImageLoader};
use jsonplaceholder_api::Photo;
use std::sync::Arc;
use tracing::debug;

/// One reusable list row
#[derive(Default)]
pub struct PhotoCell {
    title: String,
    current_url: Option<String>,
    image: Option<Arc<DecodedImage>>,
    resolved: bool,
}

impl PhotoCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the cell for a photo and request its thumbnail.
    ///
    /// Any previous load is cancelled and displayed state cleared first;
    /// the URL token must be recorded before `load` is issued so the
    /// completion can be matched against it.
    pub fn configure(&mut self, photo: &Photo, loader: &ImageLoader) {
        self.reset(loader);

        self.title = photo.title.clone();
        let url = picsum_urls::thumbnail_url(photo.id);
        debug!(url = %url, "Configuring cell");
        self.current_url = Some(url.clone());
        loader.load(&url);
    }

    /// Apply a completion if it is for the URL this cell currently shows.
    ///
    /// Returns whether it was applied; completions for any other URL are
    /// stale and leave the cell untouched.
    pub fn apply(&mut self, completion: &ImageCompletion) -> bool {
        match self.current_url.as_deref() {
            Some(url) if url == completion.url => {}
            Some(_) => {
                debug!(url = %completion.url, "Ignoring completion for other URL");
                return false;
            }
            None => return false,
        }

        self.image = completion.image.clone();
        self.resolved = true;
        true
    }

    /// Cancel any outstanding load and clear displayed state
    pub fn reset(&mut self, loader: &ImageLoader) {
        if let Some(url) = self.current_url.take() {
            loader.cancel(&url);
        }
        self.image = None;
        self.resolved = false;
        self.title.clear();
    }

    /// Whether the cell is configured but has not yet received its result
    pub fn is_pending(&self) -> bool {
        self.current_url.is_some() && !self.resolved
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> Option<&Arc<DecodedImage>> {
        self.image.as_ref()
    }

    pub fn current_url(&self) -> Option<&str> {
        self.current_url.as_deref()
    }
}

/// A fixed pool of cells standing in for the visible rows of a list view
pub struct Gallery {
    cells: Vec<PhotoCell>,
}

impl Gallery {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            cells: (0..visible_rows).map(|_| PhotoCell::new()).collect(),
        }
    }

    /// Bind a page of photos onto the cell pool, reusing cells in place.
    /// Cells beyond the page length are reset.
    pub fn show_page(&mut self, photos: &[Photo], loader: &ImageLoader) {
        for (cell, photo) in self.cells.iter_mut().zip(photos) {
            cell.configure(photo, loader);
        }
        for cell in self.cells.iter_mut().skip(photos.len()) {
            cell.reset(loader);
        }
    }

    /// Route a completion to every cell currently showing its URL.
    /// Returns how many cells applied it.
    pub fn apply(&mut self, completion: &ImageCompletion) -> usize {
        self.cells
            .iter_mut()
            .map(|cell| cell.apply(completion))
            .filter(|&applied| applied)
            .count()
    }

    /// Number of cells still waiting on a result
    pub fn pending(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_pending()).count()
    }

    pub fn cells(&self) -> &[PhotoCell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use image_loader::{LoadError, LoaderConfig, Transport};
    use std::time::Duration;
    use tokio::sync::mpsc::{self, UnboundedReceiver};
    use url::Url;

    /// Transport that answers every fetch with a 404 after a short delay,
    /// keeping fetches in flight long enough to cancel them
    struct StubTransport;

    #[async_trait]
    impl Transport for StubTransport {
        async fn fetch(&self, _url: &Url) -> image_loader::Result<Vec<u8>> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Err(LoadError::Status(404))
        }
    }

    fn test_loader() -> (ImageLoader, UnboundedReceiver<ImageCompletion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let loader = ImageLoader::new(Arc::new(StubTransport), LoaderConfig::default(), tx);
        (loader, rx)
    }

    fn photo(id: u64, title: &str) -> Photo {
        Photo {
            id,
            album_id: 1,
            title: title.to_string(),
            url: format!("https://example.com/{}", id),
            thumbnail_url: format!("https://example.com/t{}", id),
        }
    }

    fn completion_for(url: &str) -> ImageCompletion {
        ImageCompletion {
            url: url.to_string(),
            image: Some(Arc::new(DecodedImage::new(1, 1, vec![0u8; 4]))),
        }
    }

    #[tokio::test]
    async fn test_configure_records_thumbnail_token() {
        let (loader, _rx) = test_loader();
        let mut cell = PhotoCell::new();

        cell.configure(&photo(7, "seven"), &loader);

        assert_eq!(
            cell.current_url(),
            Some("https://picsum.photos/150/150?random=7")
        );
        assert_eq!(cell.title(), "seven");
        assert!(cell.is_pending());
    }

    #[tokio::test]
    async fn test_matching_completion_applies() {
        let (loader, _rx) = test_loader();
        let mut cell = PhotoCell::new();
        cell.configure(&photo(7, "seven"), &loader);

        let applied = cell.apply(&completion_for("https://picsum.photos/150/150?random=7"));

        assert!(applied);
        assert!(cell.image().is_some());
        assert!(!cell.is_pending());
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let (loader, _rx) = test_loader();
        let mut cell = PhotoCell::new();

        cell.configure(&photo(1, "first"), &loader);
        cell.configure(&photo(2, "second"), &loader);

        let applied = cell.apply(&completion_for("https://picsum.photos/150/150?random=1"));

        assert!(!applied);
        assert!(cell.image().is_none());
        assert_eq!(
            cell.current_url(),
            Some("https://picsum.photos/150/150?random=2")
        );
    }

    #[tokio::test]
    async fn test_failed_completion_clears_image() {
        let (loader, _rx) = test_loader();
        let mut cell = PhotoCell::new();
        cell.configure(&photo(3, "third"), &loader);
        cell.apply(&completion_for("https://picsum.photos/150/150?random=3"));
        assert!(cell.image().is_some());

        let applied = cell.apply(&ImageCompletion {
            url: "https://picsum.photos/150/150?random=3".to_string(),
            image: None,
        });

        assert!(applied);
        assert!(cell.image().is_none());
    }

    #[tokio::test]
    async fn test_reuse_cancels_outstanding_load() {
        let (loader, _rx) = test_loader();
        let mut cell = PhotoCell::new();

        cell.configure(&photo(1, "first"), &loader);
        assert_eq!(loader.stats().in_flight, 1);

        cell.reset(&loader);

        assert_eq!(loader.stats().in_flight, 0);
        assert!(cell.current_url().is_none());
        assert!(cell.image().is_none());
        assert!(!cell.is_pending());
    }

    #[tokio::test]
    async fn test_gallery_routes_completion_to_matching_cell() {
        let (loader, _rx) = test_loader();
        let mut gallery = Gallery::new(3);
        let photos = vec![photo(1, "a"), photo(2, "b")];

        gallery.show_page(&photos, &loader);
        assert_eq!(gallery.pending(), 2);

        let applied = gallery.apply(&completion_for("https://picsum.photos/150/150?random=2"));

        assert_eq!(applied, 1);
        assert_eq!(gallery.pending(), 1);
        assert!(gallery.cells()[1].image().is_some());
        assert!(gallery.cells()[0].image().is_none());
    }

    #[tokio::test]
    async fn test_gallery_resets_cells_beyond_page() {
        let (loader, _rx) = test_loader();
        let mut gallery = Gallery::new(3);

        gallery.show_page(&[photo(1, "a"), photo(2, "b"), photo(3, "c")], &loader);
        gallery.show_page(&[photo(4, "d")], &loader);

        assert_eq!(gallery.pending(), 1);
        assert!(gallery.cells()[1].current_url().is_none());
        assert!(gallery.cells()[2].current_url().is_none());
    }
}
