use crate::model::bands::quality_band;
use crate::model::query::{ALL, FilterSpec, QualityFilter, StatusFilter};
use crate::model::Project;

pub fn filter_projects(projects: &[Project], spec: &FilterSpec) -> Vec<Project> {
    let needle = spec.search.to_lowercase();
    projects
        .iter()
        .filter(|project| matches(project, spec, &needle))
        .cloned()
        .collect()
}

fn matches(project: &Project, spec: &FilterSpec, needle: &str) -> bool {
    if spec.category != ALL && project.category != spec.category {
        return false;
    }

    match spec.status {
        StatusFilter::All => {}
        StatusFilter::Live if !project.is_live => return false,
        StatusFilter::Error if project.is_live => return false,
        _ => {}
    }

    if spec.quality != QualityFilter::All {
        let band = quality_band(project.quality_score);
        if band.label.to_lowercase() != spec.quality.as_str() {
            return false;
        }
    }

    if !needle.is_empty() && !search_haystack(project).contains(needle) {
        return false;
    }

    true
}

fn search_haystack(project: &Project) -> String {
    [
        project.title.as_str(),
        project.description.as_str(),
        project.name.as_str(),
        project.category.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

#[cfg(test)]
#[path = "../../tests/src_inline/analyze/filter.rs"]
mod tests;
