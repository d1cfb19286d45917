pub mod chart;
pub mod errors;
pub mod logging;
pub mod sales;
pub mod theme;
