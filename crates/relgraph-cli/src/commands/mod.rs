//! Command implementations.

pub mod clean;
pub mod extract;
pub mod query;
pub mod stats;

pub use self::clean::execute_clean;
pub use self::extract::execute_extract;
pub use self::query::execute_query;
pub use self::stats::execute_stats;
