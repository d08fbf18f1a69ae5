//! Clients for the YouTube services the content fetcher relies on.

pub mod captions;
pub mod data_api;
pub mod player;

pub use captions::WatchPageTranscripts;
pub use data_api::YouTubeDataApi;
