pub mod csv_export;
pub mod dashboard;
pub mod feed;
pub mod theme_store;

pub use csv_export::*;
pub use dashboard::*;
pub use feed::*;
pub use theme_store::*;
