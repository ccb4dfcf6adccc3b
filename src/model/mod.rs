pub mod bands;
pub mod categories;
pub mod project;
pub mod query;

pub use bands::{QualityBand, quality_band};
pub use project::{DatasetStatistics, Project, ProjectsData, ScanInfo};
pub use query::{FilterSpec, QualityFilter, SortKey, StatusFilter};
