pub mod config;
pub mod error;
pub mod finder;
pub mod metrics;

pub use config::{Config, FinderConfig};
pub use error::{CommonMinError, Result};
pub use finder::{find_smallest_common, validate_inputs, Comparison, Finder, Strategy, NOT_FOUND};
pub use metrics::{init_logging, init_metrics};
