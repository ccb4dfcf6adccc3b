pub mod analyze;
pub mod input;
pub mod logging;
pub mod model;
pub mod report;
