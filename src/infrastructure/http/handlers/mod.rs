//! HTTP Handlers

pub mod audio;
pub mod pages;
pub mod ping;
pub mod upload;

pub use audio::serve_audio;
pub use pages::index;
pub use ping::ping;
pub use upload::upload_document;
