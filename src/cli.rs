use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use portfolio_lens::logging::LogFormat;
use portfolio_lens::model::{FilterSpec, QualityFilter, SortKey, StatusFilter};

pub const DEFAULT_DATA_PATH: &str = "projects_scan_result.json";

#[derive(Debug, Parser)]
#[command(
    name = "portfolio-lens",
    version,
    about = "Browse, filter and summarize a pre-scanned contest portfolio dataset"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dataset produced by the project scanner (`.json` or `.json.gz`).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATA_PATH, global = true)]
    pub data: PathBuf,

    /// Output format for the rendered view.
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Featured projects plus the filtered, sorted project list.
    List(ListArgs),
    /// Aggregate statistics over the whole portfolio.
    Stats,
    /// Full detail for one project.
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Exact category name, or `all`.
    #[arg(long, default_value = "all")]
    pub category: String,

    #[arg(long, value_enum, default_value = "all")]
    pub status: StatusArg,

    #[arg(long, value_enum, default_value = "all")]
    pub quality: QualityArg,

    /// Case-insensitive text matched against title, description, name and category.
    #[arg(long, default_value = "")]
    pub search: String,

    /// quality | name | date | category. Other keys keep dataset order.
    #[arg(long, default_value = "quality")]
    pub sort: String,

    /// Number of featured (live, high quality) projects to show.
    #[arg(long, default_value_t = 3)]
    pub featured: usize,
}

impl ListArgs {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            category: self.category.clone(),
            status: self.status.into(),
            quality: self.quality.into(),
            search: self.search.clone(),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.sort)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    All,
    Live,
    Error,
}

impl From<StatusArg> for StatusFilter {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::All => StatusFilter::All,
            StatusArg::Live => StatusFilter::Live,
            StatusArg::Error => StatusFilter::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QualityArg {
    All,
    High,
    Medium,
    Low,
}

impl From<QualityArg> for QualityFilter {
    fn from(value: QualityArg) -> Self {
        match value {
            QualityArg::All => QualityFilter::All,
            QualityArg::High => QualityFilter::High,
            QualityArg::Medium => QualityFilter::Medium,
            QualityArg::Low => QualityFilter::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
        }
    }
}
