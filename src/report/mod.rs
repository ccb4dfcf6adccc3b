pub mod json;
pub mod text;

use serde::Serialize;

use crate::analyze::dates::format_scan_date;
use crate::analyze::display::{
    DEFAULT_DESCRIPTION_LEN, contest_type, project_slug, shorten_description,
};
use crate::analyze::stats::{
    BandCount, CategoryStats, DEFAULT_FEATURED_LIMIT, Overview, category_names, category_stats,
    high_quality, overview, quality_distribution, recent_projects, trending_categories,
};
use crate::analyze::{filter_projects, sort_projects};
use crate::model::bands::{quality_band, quality_color, tier_color};
use crate::model::categories::category_color;
use crate::model::{DatasetStatistics, FilterSpec, Project, ProjectsData, ScanInfo, SortKey};

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_color: &'static str,
    pub contest_type: &'static str,
    pub quality_score: i32,
    pub quality_band: &'static str,
    pub quality_color: &'static str,
    pub is_live: bool,
    pub response_code: i32,
    pub scan_date: String,
    pub github_url: String,
    pub award_status: Option<String>,
    pub features: Vec<&'static str>,
}

impl ProjectCard {
    pub fn new(project: &Project, description_len: Option<usize>) -> Self {
        let band = quality_band(project.quality_score);
        let description = match description_len {
            Some(max_len) => shorten_description(&project.description, max_len),
            None => project.description.clone(),
        };
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            slug: project_slug(project),
            title: project.title.clone(),
            description,
            category: project.category.clone(),
            category_color: category_color(&project.category),
            contest_type: contest_type(project),
            quality_score: project.quality_score,
            quality_band: band.label,
            quality_color: quality_color(project.quality_score),
            is_live: project.is_live,
            response_code: project.response_code,
            scan_date: format_scan_date(&project.scan_date),
            github_url: project.github_url.clone(),
            award_status: project.has_award().then(|| project.award_status.clone()),
            features: project.features(),
        }
    }
}

fn cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects
        .iter()
        .map(|p| ProjectCard::new(p, Some(DEFAULT_DESCRIPTION_LEN)))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub total: usize,
    pub shown: usize,
    pub filters: FilterSpec,
    pub active_filters: Vec<String>,
    pub sort: SortKey,
    pub categories: Vec<String>,
    pub featured: Vec<ProjectCard>,
    pub projects: Vec<ProjectCard>,
}

pub fn build_list_view(
    data: &ProjectsData,
    filters: FilterSpec,
    sort: SortKey,
    featured_limit: usize,
) -> ListView {
    let filtered = filter_projects(&data.projects, &filters);
    let sorted = sort_projects(&filtered, sort);
    tracing::debug!(
        total = data.projects.len(),
        shown = sorted.len(),
        sort = ?sort,
        "recomputed project list"
    );

    ListView {
        total: data.projects.len(),
        shown: sorted.len(),
        active_filters: filters.active_labels(),
        filters,
        sort,
        categories: category_names(&data.projects),
        featured: cards(&high_quality(&data.projects, featured_limit)),
        projects: cards(&sorted),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    #[serde(flatten)]
    pub stats: CategoryStats,
    pub success_rate: i32,
    pub success_color: &'static str,
    pub quality_color: &'static str,
}

impl From<CategoryStats> for CategoryRow {
    fn from(stats: CategoryStats) -> Self {
        let success_rate = stats.success_rate();
        Self {
            success_color: tier_color(success_rate),
            quality_color: tier_color(stats.avg_quality),
            success_rate,
            stats,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsView {
    pub scan_info: ScanInfo,
    pub overview: Overview,
    pub categories: Vec<CategoryRow>,
    pub quality_distribution: Vec<BandCount>,
    pub trending: Vec<CategoryRow>,
    pub recent: Vec<ProjectCard>,
    pub precomputed: DatasetStatistics,
}

pub fn build_stats_view(data: &ProjectsData) -> StatsView {
    let projects = &data.projects;
    StatsView {
        scan_info: data.scan_info.clone(),
        overview: overview(projects),
        categories: category_stats(projects).into_iter().map(Into::into).collect(),
        quality_distribution: quality_distribution(projects),
        trending: trending_categories(projects)
            .into_iter()
            .map(Into::into)
            .collect(),
        recent: cards(&recent_projects(projects, DEFAULT_FEATURED_LIMIT)),
        precomputed: data.statistics.clone(),
    }
}

pub fn find_project<'a>(data: &'a ProjectsData, id: &str) -> Option<&'a Project> {
    data.projects.iter().find(|p| p.id == id)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
