pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod conf;
pub mod delivery;
pub mod error;
pub mod filter;
pub mod logging;
pub mod parse;
pub mod period;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod store;

pub use error::MetricsError;
