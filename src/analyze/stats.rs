use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::analyze::sort::{sort_by_date, sort_by_quality};
use crate::model::bands::{HIGH, LOW, MEDIUM, QualityBand, quality_bands};
use crate::model::categories::category_color;
use crate::model::Project;

pub const HIGH_QUALITY_MIN: i32 = 70;
pub const DEFAULT_FEATURED_LIMIT: usize = 6;
pub const TRENDING_LIMIT: usize = 5;

const PROJECT_COUNT_CAP: f64 = 50.0;
const CATEGORY_COUNT_CAP: f64 = 8.0;
const WEIGHT_PROJECT_COUNT: f64 = 0.2;
const WEIGHT_LIVE_RATE: f64 = 0.3;
const WEIGHT_AVG_QUALITY: f64 = 0.3;
const WEIGHT_DIVERSITY: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub name: String,
    pub count: usize,
    pub live_count: usize,
    pub avg_quality: i32,
    pub color: &'static str,
}

impl CategoryStats {
    pub fn success_rate(&self) -> i32 {
        percent(self.live_count, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandCount {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub color: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_projects: usize,
    pub live_projects: usize,
    pub awarded_projects: usize,
    pub success_rate: i32,
    pub average_quality: i32,
    pub category_count: usize,
    pub portfolio_score: i32,
}

/// `Math.round` semantics: halves go towards positive infinity.
pub fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    if value - floor == 0.5 {
        (floor + 1.0) as i32
    } else {
        value.round() as i32
    }
}

fn percent(part: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    round_half_up((part as f64 / total as f64) * 100.0)
}

fn mean_quality<'a>(projects: impl Iterator<Item = &'a Project>) -> i32 {
    let mut sum = 0i64;
    let mut n = 0usize;
    for p in projects {
        sum += i64::from(p.quality_score);
        n += 1;
    }
    if n == 0 {
        return 0;
    }
    round_half_up(sum as f64 / n as f64)
}

/// Groups by category, largest group first. Equal-sized groups keep the order
/// in which their category first appears.
pub fn category_stats(projects: &[Project]) -> Vec<CategoryStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, (usize, usize, i64)> = HashMap::new();

    for p in projects {
        let entry = groups.entry(p.category.as_str()).or_insert_with(|| {
            order.push(p.category.as_str());
            (0, 0, 0)
        });
        entry.0 += 1;
        if p.is_live {
            entry.1 += 1;
        }
        entry.2 += i64::from(p.quality_score);
    }

    let mut stats = Vec::with_capacity(order.len());
    for name in order {
        let (count, live_count, quality_sum) = groups[name];
        stats.push(CategoryStats {
            name: name.to_string(),
            count,
            live_count,
            avg_quality: round_half_up(quality_sum as f64 / count as f64),
            color: category_color(name),
        });
    }
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

pub fn success_rate(projects: &[Project]) -> i32 {
    let live = projects.iter().filter(|p| p.is_live).count();
    percent(live, projects.len())
}

pub fn average_quality(projects: &[Project]) -> i32 {
    mean_quality(projects.iter())
}

pub fn high_quality(projects: &[Project], limit: usize) -> Vec<Project> {
    let mut out: Vec<Project> = projects
        .iter()
        .filter(|p| p.is_live && p.quality_score >= HIGH_QUALITY_MIN)
        .cloned()
        .collect();
    sort_by_quality(&mut out);
    out.truncate(limit);
    out
}

pub fn portfolio_score(projects: &[Project]) -> i32 {
    let volume = (projects.len() as f64 / PROJECT_COUNT_CAP).min(1.0) * 100.0;
    let live_rate = f64::from(success_rate(projects));
    let avg_quality = f64::from(average_quality(projects));
    let diversity = (category_stats(projects).len() as f64 / CATEGORY_COUNT_CAP).min(1.0) * 100.0;

    round_half_up(
        volume * WEIGHT_PROJECT_COUNT
            + live_rate * WEIGHT_LIVE_RATE
            + avg_quality * WEIGHT_AVG_QUALITY
            + diversity * WEIGHT_DIVERSITY,
    )
}

/// Categories with at least one live project, best live ratio first.
pub fn trending_categories(projects: &[Project]) -> Vec<CategoryStats> {
    let mut stats: Vec<CategoryStats> = category_stats(projects)
        .into_iter()
        .filter(|s| s.live_count > 0)
        .collect();
    stats.sort_by(|a, b| {
        let ra = a.live_count as f64 / a.count as f64;
        let rb = b.live_count as f64 / b.count as f64;
        rb.total_cmp(&ra)
    });
    stats.truncate(TRENDING_LIMIT);
    stats
}

pub fn recent_projects(projects: &[Project], limit: usize) -> Vec<Project> {
    let mut out: Vec<Project> = projects.iter().filter(|p| p.is_live).cloned().collect();
    sort_by_date(&mut out);
    out.truncate(limit);
    out
}

/// Threshold bucketing for the distribution chart. Unlike `quality_band`,
/// scores above 100 count as High.
fn distribution_band(score: i32) -> &'static QualityBand {
    if score >= HIGH.min {
        &HIGH
    } else if score >= MEDIUM.min {
        &MEDIUM
    } else {
        &LOW
    }
}

pub fn quality_distribution(projects: &[Project]) -> Vec<BandCount> {
    quality_bands()
        .iter()
        .map(|band| BandCount {
            label: band.label,
            min: band.min,
            max: band.max,
            color: band.color,
            count: projects
                .iter()
                .filter(|p| distribution_band(p.quality_score).label == band.label)
                .count(),
        })
        .collect()
}

/// Distinct categories in code-point order, for the category selector.
pub fn category_names(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn awarded_count(projects: &[Project]) -> usize {
    projects.iter().filter(|p| p.has_award()).count()
}

pub fn overview(projects: &[Project]) -> Overview {
    Overview {
        total_projects: projects.len(),
        live_projects: projects.iter().filter(|p| p.is_live).count(),
        awarded_projects: awarded_count(projects),
        success_rate: success_rate(projects),
        average_quality: average_quality(projects),
        category_count: category_stats(projects).len(),
        portfolio_score: portfolio_score(projects),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/analyze/stats.rs"]
mod tests;
