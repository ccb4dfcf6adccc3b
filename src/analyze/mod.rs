//! Pure views over an immutable project collection. Nothing here holds state
//! between calls; every function recomputes from its inputs.

pub mod dates;
pub mod display;
pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::filter_projects;
pub use sort::sort_projects;
pub use stats::{
    CategoryStats, average_quality, category_stats, high_quality, portfolio_score, success_rate,
};
