//! Rust client for the JSONPlaceholder photos API
//!
//! Fetches photo metadata records (id, album, title, image URLs) from
//! <https://jsonplaceholder.typicode.com>.
//!
//! # Example
//!
//! ```no_run
//! use jsonplaceholder_api::PhotoApiClient;
//!
//! # async fn example() -> Result<(), jsonplaceholder_api::PhotoApiError> {
//! let client = PhotoApiClient::new();
//!
//! let photos = client.fetch_photos(50).await?;
//! for photo in photos {
//!     println!("{}: {}", photo.id, photo.title);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::PhotoApiClient;
pub use error::{PhotoApiError, Result};
pub use types::Photo;
