//! Image acquisition and caching
//!
//! The loader owns a bounded in-memory cache of decoded images and a
//! registry of in-flight fetches. Loads for a cached URL complete from
//! memory, concurrent loads for the same URL share one network fetch, and
//! every completion is delivered through a single mpsc channel so one
//! consumer (the UI loop) observes all results in order.

mod decode;
pub mod error;
pub mod loader;
pub mod transport;
pub mod types;

pub use error::{LoadError, Result};
pub use loader::ImageLoader;
pub use memory_image_cache::DecodedImage;
pub use transport::{HttpTransport, Transport};
pub use types::{ImageCompletion, LoaderConfig, LoaderStats};
