use std::cmp::Ordering;

use chrono::NaiveDateTime;
use icu_collator::Collator;
use icu_collator::options::CollatorOptions;
use icu_locale_core::locale;

use crate::analyze::dates::parse_scan_date;
use crate::model::{Project, SortKey};

pub fn sort_projects(projects: &[Project], key: SortKey) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    match key {
        SortKey::Quality => sort_by_quality(&mut sorted),
        SortKey::Name => sort_collated(&mut sorted, project_name),
        SortKey::Date => sort_by_date(&mut sorted),
        SortKey::Category => sort_collated(&mut sorted, project_category),
        SortKey::Unsorted => {}
    }
    sorted
}

pub(crate) fn sort_by_quality(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.quality_score.cmp(&a.quality_score));
}

/// Newest first. Records whose timestamp does not parse go last, in input order.
pub(crate) fn sort_by_date(projects: &mut Vec<Project>) {
    let mut keyed: Vec<(Option<NaiveDateTime>, Project)> = projects
        .drain(..)
        .map(|p| (parse_scan_date(&p.scan_date), p))
        .collect();

    let unparsed = keyed.iter().filter(|(ts, _)| ts.is_none()).count();
    if unparsed > 0 {
        tracing::debug!(unparsed, "scan dates could not be parsed; ordering them last");
    }

    keyed.sort_by(|(a, _), (b, _)| newest_first(a.as_ref(), b.as_ref()));
    projects.extend(keyed.into_iter().map(|(_, p)| p));
}

fn newest_first(a: Option<&NaiveDateTime>, b: Option<&NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn project_name(project: &Project) -> &str {
    &project.name
}

fn project_category(project: &Project) -> &str {
    &project.category
}

/// Sorts by the ICU root collation: punctuation before digits before letters,
/// accented Latin next to its base letter, Hangul after Latin.
pub(crate) fn sort_collated(projects: &mut [Project], key: fn(&Project) -> &str) {
    match Collator::try_new(locale!("und").into(), CollatorOptions::default()) {
        Ok(collator) => projects.sort_by(|a, b| collator.compare(key(a), key(b))),
        Err(err) => {
            tracing::warn!(%err, "collation data unavailable; ordering by code point");
            projects.sort_by(|a, b| key(a).cmp(key(b)));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/analyze/sort.rs"]
mod tests;
