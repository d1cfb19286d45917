pub mod download;
pub mod http;
pub mod sample_feed;
pub mod services;

pub use download::BrowserDownload;
pub use http::HttpTransactionFeed;
pub use sample_feed::SampleFeed;
